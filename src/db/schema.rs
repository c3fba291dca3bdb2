//! SQL DDL for initializing the user and inventory storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `users.username` UNIQUE, the backstop for concurrent registrations
/// - `users.password_hash` holding an Argon2id PHC string
/// - `car_makes.name` UNIQUE and `car_models(car_make_id, name)` UNIQUE so seeding is idempotent
/// - `created_at` stored as RFC3339 TEXT
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS car_makes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS car_models (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    car_make_id INTEGER NOT NULL REFERENCES car_makes(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    body_type TEXT NOT NULL,
    year INTEGER NOT NULL,
    UNIQUE (car_make_id, name)
);

CREATE INDEX IF NOT EXISTS idx_car_models_make ON car_models(car_make_id);
"#;
