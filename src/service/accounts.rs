use crate::db::models::NewUser;
use crate::db::sqlite::UserStorage;
use crate::error::HubError;
use crate::types::RegisterRequest;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    AlreadyRegistered,
}

/// User registration and credential checks over the user store.
#[derive(Clone)]
pub struct AccountService {
    users: UserStorage,
}

impl AccountService {
    pub fn new(users: UserStorage) -> Self {
        Self { users }
    }

    /// True when `username` exists and `password` matches its stored hash.
    /// Unknown users and wrong passwords are both a plain `false`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, HubError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(username, "login for unknown user");
            return Ok(false);
        };
        Ok(verify_password(password, &user.password_hash))
    }

    /// Create the user unless the username is taken.
    ///
    /// The existence check and the insert are separate statements; a
    /// registration that loses the race hits the UNIQUE constraint and is
    /// reported as `AlreadyRegistered` as well.
    pub async fn register(&self, req: RegisterRequest) -> Result<RegisterOutcome, HubError> {
        if self.users.exists(&req.user_name).await? {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }

        let password_hash = hash_password(&req.password)?;
        let username = req.user_name.clone();
        let new_user = NewUser {
            username: req.user_name,
            password_hash,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        };
        match self.users.create(new_user).await {
            Ok(id) => {
                info!(id, username = %username, "user registered");
                Ok(RegisterOutcome::Created)
            }
            Err(e) if e.is_unique_violation() => Ok(RegisterOutcome::AlreadyRegistered),
            Err(e) => Err(e),
        }
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, HubError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| HubError::PasswordHash)
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
