use crate::db::models::{CarListing, DbUser, NewUser};
use crate::db::schema::SQLITE_INIT;
use crate::error::HubError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url` and apply the bundled schema.
///
/// In-memory databases are pinned to a single long-lived connection, otherwise
/// every pooled connection would see its own empty database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, HubError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let mut pool_opts = SqlitePoolOptions::new();
    if database_url.contains(":memory:") {
        pool_opts = pool_opts
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool_opts.connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), HubError> {
    // execute multiple statements one by one (sqlx::query runs a single statement)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, username: &str) -> Result<bool, HubError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0 > 0)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>, HubError> {
        let row = sqlx::query(
            r#"SELECT id, username, password_hash, first_name, last_name, email, created_at
               FROM users WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Insert a user. Returns the row id; a taken username surfaces as a
    /// UNIQUE violation (see [`HubError::is_unique_violation`]).
    pub async fn create(&self, user: NewUser) -> Result<i64, HubError> {
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, first_name, last_name, email, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.username)
        .bind(user.password_hash)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    fn row_to_model(row: SqliteRow) -> Result<DbUser, HubError> {
        let created_at_str: String = row.try_get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(DbUser {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            created_at,
        })
    }
}

#[derive(Clone)]
pub struct InventoryStorage {
    pool: SqlitePool,
}

impl InventoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn count_makes(&self) -> Result<i64, HubError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM car_makes")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Every model joined with its make, ordered by make then model.
    pub async fn list_cars(&self) -> Result<Vec<CarListing>, HubError> {
        let cars = sqlx::query_as::<_, CarListing>(
            r#"
            SELECT m.name AS model, k.name AS make
            FROM car_models m
            JOIN car_makes k ON k.id = m.car_make_id
            ORDER BY k.id, m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cars)
    }
}
