//! Database module: models, schema, storage and reference data.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup plus user and inventory storage
//! - `seed.rs`: the fixed car make/model dataset and its idempotent loader

pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use models::{CarListing, DbUser, NewUser};
pub use schema::SQLITE_INIT;
pub use seed::{SeedReport, seed_inventory};
pub use sqlite::{InventoryStorage, SqlitePool, UserStorage, connect};
