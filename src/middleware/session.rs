//! Cookie-backed login sessions.
//!
//! A session is the authenticated username stored in an encrypted private
//! cookie. Handlers take the `PrivateCookieJar` as an explicit argument and
//! return the updated jar alongside their body.

use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use time::Duration;
use tracing::warn;

pub const SESSION_COOKIE: &str = "dealer_session";

const SESSION_TTL_HOURS: i64 = 24;

/// Start (or replace) the session for `username`.
pub fn start_session(jar: PrivateCookieJar, username: &str) -> PrivateCookieJar {
    jar.add(build_cookie(username.to_string()))
}

/// End the session. A jar without a session is returned unchanged in effect.
pub fn end_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(clear_cookie())
}

/// Username of the current session, if the cookie is present and decrypts.
pub fn session_user(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_owned())
}

/// Build the cookie encryption key from the configured secret.
///
/// The secret must be at least 64 bytes. Anything else falls back to a
/// random key, which invalidates sessions on every restart.
pub fn cookie_key(secret: Option<&str>) -> Key {
    match secret.map(|s| Key::try_from(s.as_bytes())) {
        Some(Ok(key)) => key,
        Some(Err(_)) => {
            warn!("cookie_secret shorter than 64 bytes; using a random session key");
            Key::generate()
        }
        None => {
            warn!("cookie_secret not set; using a random session key");
            Key::generate()
        }
    }
}

fn build_cookie(value: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(SESSION_TTL_HOURS))
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_the_jar() {
        let jar = PrivateCookieJar::new(Key::generate());
        assert_eq!(session_user(&jar), None);

        let jar = start_session(jar, "carla");
        assert_eq!(session_user(&jar).as_deref(), Some("carla"));

        let jar = end_session(jar);
        assert_eq!(session_user(&jar), None);
    }

    #[test]
    fn long_secret_is_used_as_key() {
        let secret = "k".repeat(64);
        let a = cookie_key(Some(&secret));
        let b = cookie_key(Some(&secret));
        assert_eq!(a.master(), b.master());

        let short = cookie_key(Some("short"));
        assert_ne!(short.master(), a.master());
    }
}
