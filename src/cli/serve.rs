use std::sync::Arc;

use crate::{
    config, error,
    server::{ServerState, start_api_server},
    warning,
};

pub async fn serve() {
    let data_dir = match config::server_data_dir() {
        Ok(dir) => dir,
        Err(e) => error!("Cannot determine server data directory. Err: {}", e),
    };

    let access_key = config::access_key();
    if access_key.is_none() {
        warning!("LIVERADIO_ACCESS_KEY is not set; sign-in is disabled.");
    }

    let state = match ServerState::load(data_dir, access_key, config::session_ttl()).await {
        Ok(state) => Arc::new(state),
        Err(e) => error!("Failed to load server state. Err: {}", e),
    };

    if let Err(e) = start_api_server(state, &config::server_addr()).await {
        error!("Server stopped. Err: {}", e);
    }
}
