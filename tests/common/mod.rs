#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
};

use liveradio::{
    client::ApiClient,
    management::SessionManager,
    server::{self, ServerState},
    types::{RadioStation, Session},
    utils,
};

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

pub const ACCESS_KEY: &str = "test-access-key";

// Fresh directory per call; removed by the OS temp cleanup.
pub fn temp_dir(name: &str) -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "liveradio_test_{}_{}_{}",
        std::process::id(),
        id,
        name
    ))
}

pub fn station(id: &str) -> RadioStation {
    let mut station = RadioStation::new(
        id,
        format!("Station {}", id),
        format!("https://stream.example.com/{}", id),
    );
    station.country = Some("Germany".to_string());
    station.tags = vec!["jazz".to_string(), "news".to_string()];
    station
}

pub fn ids(stations: &[RadioStation]) -> Vec<&str> {
    stations.iter().map(|s| s.id.as_str()).collect()
}

/// Starts the backend service on an ephemeral port and returns its base URL.
pub async fn spawn_server_in(dir: PathBuf, access_key: Option<&str>) -> String {
    spawn_server_with_ttl(dir, access_key, 3600).await
}

pub async fn spawn_server_with_ttl(dir: PathBuf, access_key: Option<&str>, ttl: u64) -> String {
    let state = ServerState::load(dir, access_key.map(String::from), ttl)
        .await
        .unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, server::router(Arc::new(state)))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

pub async fn spawn_server() -> String {
    spawn_server_in(temp_dir("server"), Some(ACCESS_KEY)).await
}

pub fn client_for(base_url: &str) -> ApiClient {
    let sessions = SessionManager::at(temp_dir("client").join("session.json"));
    ApiClient::new(base_url, sessions).unwrap()
}

/// Signs `user` in and stores the session the way the CLI does.
pub async fn sign_in(client: &ApiClient, user: &str) -> Session {
    let response = client.sign_in(user, ACCESS_KEY).await.unwrap();
    let session = Session {
        token: response.token,
        user: response.user,
        expires_in: response.expires_in,
        obtained_at: utils::now_timestamp(),
    };
    client.sessions().persist(&session).await.unwrap();
    session
}
