use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    Res, api,
    error::Result,
    info,
    management::SessionRegistry,
    types::Collection,
};

/// Shared state of the backend service.
pub struct ServerState {
    data_dir: PathBuf,
    access_key: Option<String>,
    session_ttl: u64,
    pub(crate) sessions: Mutex<SessionRegistry>,
    // Serializes read-modify-write cycles on user collection files.
    pub(crate) store: Mutex<()>,
}

impl ServerState {
    pub async fn load(
        data_dir: PathBuf,
        access_key: Option<String>,
        session_ttl: u64,
    ) -> Result<Self> {
        let sessions = SessionRegistry::load(data_dir.join("sessions.json")).await?;
        Ok(Self {
            data_dir,
            access_key,
            session_ttl,
            sessions: Mutex::new(sessions),
            store: Mutex::new(()),
        })
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    pub fn session_ttl(&self) -> u64 {
        self.session_ttl
    }

    /// File holding `collection` for `user`.
    pub fn collection_path(&self, user: &str, collection: Collection) -> PathBuf {
        self.data_dir
            .join("users")
            .join(user)
            .join(collection.file_name())
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/auth/sign-in", post(api::sign_in))
        .route(
            "/api/auth/session",
            get(api::session_info).delete(api::sign_out),
        )
        .route(
            "/api/{collection}",
            get(api::list_stations)
                .post(api::save_station)
                .delete(api::delete_station),
        )
        .fallback(api::not_found)
        .layer(Extension(state))
}

pub async fn start_api_server(state: Arc<ServerState>, addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Live Radio server listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
