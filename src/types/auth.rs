use serde::{Deserialize, Serialize};

pub const STATUS_AUTHENTICATED: &str = "Authenticated";
pub const STATUS_FAILED: &str = "Failed";
pub const ERROR_ALREADY_REGISTERED: &str = "Already Registered";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Reply for login and registration. Exactly one of `status`/`error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthReply {
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthReply {
    pub fn authenticated(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            status: Some(STATUS_AUTHENTICATED.to_string()),
            error: None,
        }
    }

    pub fn failed(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            status: Some(STATUS_FAILED.to_string()),
            error: None,
        }
    }

    pub fn already_registered(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            status: None,
            error: Some(ERROR_ALREADY_REGISTERED.to_string()),
        }
    }
}

/// Logout reply. Unlike login/registration, the key is lowercase `username`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogoutReply {
    #[serde(rename = "username")]
    pub user_name: String,
}
