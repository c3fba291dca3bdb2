pub mod auth;
pub mod dealers;
pub mod inventory;
