pub mod auth;
pub mod envelope;
pub mod review;

pub use auth::{AuthReply, LoginRequest, LogoutReply, RegisterRequest};
pub use envelope::Envelope;
pub use review::Review;
