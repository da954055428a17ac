use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{FromRequestParts, rejection::JsonRejection},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};

use crate::{
    info,
    server::ServerState,
    types::{SessionInfo, SignInRequest, SignInResponse},
    utils,
};

use super::ApiError;

/// The caller behind a valid bearer token.
///
/// Extracting it is the session check of every protected route: requests
/// without a live session stop here with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: String,
    pub token: String,
    pub expires_at: u64,
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(state) = parts.extensions.get::<Arc<ServerState>>().cloned() else {
            return Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "server state missing",
            ));
        };

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::unauthorized("missing session token"))?;

        let sessions = state.sessions.lock().await;
        let record = sessions
            .lookup(token)
            .ok_or_else(|| ApiError::unauthorized("session expired or unknown"))?;

        Ok(AuthUser {
            user: record.user.clone(),
            token: token.to_string(),
            expires_at: record.expires_at,
        })
    }
}

pub async fn sign_in(
    Extension(state): Extension<Arc<ServerState>>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<SignInResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let Some(access_key) = state.access_key() else {
        return Err(ApiError::new(StatusCode::FORBIDDEN, "sign-in is disabled"));
    };

    if !utils::secrets_match(&request.key, access_key) {
        return Err(ApiError::unauthorized(format!(
            "invalid access key for {}",
            request.user
        )));
    }

    if !utils::is_valid_user_name(&request.user) {
        return Err(ApiError::bad_request(format!(
            "invalid user name: {}",
            request.user
        )));
    }

    let ttl = state.session_ttl();
    let token = {
        let mut sessions = state.sessions.lock().await;
        let token = sessions.issue(&request.user, ttl);
        sessions.persist().await?;
        token
    };

    info!("Signed in {} for {}s", request.user, ttl);

    Ok(Json(SignInResponse {
        token,
        user: request.user,
        expires_in: ttl,
    }))
}

pub async fn session_info(user: AuthUser) -> Json<SessionInfo> {
    Json(SessionInfo {
        user: user.user,
        expires_at: user.expires_at,
    })
}

pub async fn sign_out(
    Extension(state): Extension<Arc<ServerState>>,
    user: AuthUser,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.lock().await;
    if sessions.revoke(&user.token) {
        sessions.persist().await?;
        info!("Signed out {}", user.user);
    }
    Ok(StatusCode::NO_CONTENT)
}
