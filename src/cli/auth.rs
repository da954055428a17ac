use chrono::{DateTime, Utc};

use crate::{
    client::ApiClient, error, info, management::SessionManager, success, types::Session, utils,
    warning,
};

pub async fn sign_in(client: &ApiClient, user: &str, key: &str) {
    info!("Signing in as {} at {}...", user, client.base_url());

    let response = match client.sign_in(user, key).await {
        Ok(response) => response,
        Err(e) => error!("Sign-in failed. Err: {}", e),
    };

    let session = Session {
        token: response.token,
        user: response.user,
        expires_in: response.expires_in,
        obtained_at: utils::now_timestamp(),
    };

    if let Err(e) = client.sessions().persist(&session).await {
        error!("Failed to save session. Err: {}", e);
    }

    if SessionManager::is_expired(&session) {
        warning!(
            "The server issued a session that is already expired ({}s). Check LIVERADIO_SESSION_TTL on the server.",
            session.expires_in
        );
        return;
    }

    success!(
        "Signed in as {}. Favorites and recent stations now come from the server.",
        session.user
    );
}

pub async fn sign_out(client: &ApiClient) {
    match client.sessions().load().await {
        Ok(Some(session)) if !SessionManager::is_expired(&session) => {
            if let Err(e) = client.sign_out().await {
                warning!("Server did not confirm sign-out: {}", e);
            }
        }
        Ok(_) => {}
        Err(e) => warning!("Cannot read stored session: {}", e),
    }

    if let Err(e) = client.sessions().clear().await {
        error!("Failed to remove session. Err: {}", e);
    }

    success!("Signed out. Favorites and recent stations now come from this device.");
}

pub async fn status(client: &ApiClient) {
    let session = match client.sessions().load().await {
        Ok(Some(session)) => session,
        Ok(None) => {
            info!("Not signed in. Using local storage.");
            return;
        }
        Err(e) => error!("Cannot read stored session. Err: {}", e),
    };

    if SessionManager::is_expired(&session) {
        warning!(
            "Session of {} has expired. Using local storage until you sign in again.",
            session.user
        );
        return;
    }

    let expires_at = DateTime::<Utc>::from_timestamp(
        session.obtained_at.saturating_add(session.expires_in) as i64,
        0,
    )
    .map(|d| d.to_rfc3339())
    .unwrap_or_default();

    match client.session_info().await {
        Ok(info) => success!(
            "Signed in as {} at {} (expires {})",
            info.user,
            client.base_url(),
            expires_at
        ),
        Err(e) if e.is_unauthorized() => warning!(
            "Server no longer knows the session of {}. Run liveradio auth sign-in.",
            session.user
        ),
        Err(e) => warning!(
            "Signed in as {} (expires {}), but the server is unreachable: {}",
            session.user,
            expires_at,
            e
        ),
    }
}
