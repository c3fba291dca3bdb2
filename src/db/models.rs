use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One row of the flattened inventory listing: a model joined with its make.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct CarListing {
    #[serde(rename = "CarModel")]
    pub model: String,
    #[serde(rename = "CarMake")]
    pub make: String,
}
