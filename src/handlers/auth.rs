use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use tracing::info;

use crate::middleware::session::{end_session, session_user, start_session};
use crate::service::RegisterOutcome;
use crate::types::{AuthReply, LoginRequest, LogoutReply, RegisterRequest};
use crate::{HubError, router::HubState};

/// POST /login -> "Authenticated" with a session cookie, or "Failed".
pub async fn login_user(
    State(state): State<HubState>,
    jar: PrivateCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<Response, HubError> {
    if state.accounts.authenticate(&req.user_name, &req.password).await? {
        info!(username = %req.user_name, "login succeeded");
        let jar = start_session(jar, &req.user_name);
        return Ok((jar, Json(AuthReply::authenticated(req.user_name))).into_response());
    }
    info!(username = %req.user_name, "login failed");
    Ok(Json(AuthReply::failed(req.user_name)).into_response())
}

/// GET /logout -> clears the session.
pub async fn logout_request(jar: PrivateCookieJar) -> impl IntoResponse {
    if let Some(username) = session_user(&jar) {
        info!(username = %username, "logout");
    }
    (end_session(jar), Json(LogoutReply::default()))
}

/// POST /register -> creates the user and logs them in, unless the name is taken.
pub async fn registration(
    State(state): State<HubState>,
    jar: PrivateCookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, HubError> {
    let username = req.user_name.clone();
    match state.accounts.register(req).await? {
        RegisterOutcome::AlreadyRegistered => {
            info!(username = %username, "registration rejected: already registered");
            Ok(Json(AuthReply::already_registered(username)).into_response())
        }
        RegisterOutcome::Created => {
            let jar = start_session(jar, &username);
            Ok((jar, Json(AuthReply::authenticated(username))).into_response())
        }
    }
}
