pub mod accounts;
pub mod inventory;
pub mod reviews;

pub use accounts::{AccountService, RegisterOutcome};
