//! # Storage Module
//!
//! Favorite and recent stations live either on this device or on the Live
//! Radio backend service. [`AppStorage`] is the single entry point: on every
//! call it asks the [`AuthProbe`] whether a session exists and forwards the
//! call, unmodified, to the remote backend when it does and to the local
//! backend otherwise.
//!
//! ```text
//! caller ──▶ AppStorage ──▶ AuthProbe::is_authenticated()
//!                 │
//!                 ├── true  ──▶ RemoteStorage ──▶ backend service
//!                 └── false ──▶ LocalStorage  ──▶ data dir / LiveRadio
//! ```
//!
//! The facade never merges, caches or reconciles the two backends and never
//! retries. Both backends report [`StorageError`](crate::error::StorageError),
//! which the facade returns as-is.
//!
//! Build one `AppStorage` at start-up and pass it to whatever needs it.

mod local;
mod remote;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    auth::AuthProbe,
    error::Result,
    types::{Collection, RadioStation},
};

pub use local::LOCAL_STORAGE_NAMESPACE;
pub use local::LocalStorage;
pub use remote::RemoteStorage;

/// Operations every station storage backend provides.
#[async_trait]
pub trait StationStorage: Send + Sync {
    async fn get_favorite_stations(&self) -> Result<Vec<RadioStation>>;

    /// Adds a favorite. Re-adding an id replaces the stored record.
    async fn add_favorite_station(&self, station: RadioStation) -> Result<()>;

    /// Removes a favorite. Unknown ids are not an error.
    async fn remove_favorite_station(&self, id: &str) -> Result<()>;

    /// Recent stations, most recent first.
    async fn get_recent_stations(&self) -> Result<Vec<RadioStation>>;

    /// Records a station as most recent. Re-adding an id moves it to the
    /// front instead of duplicating it.
    async fn add_recent_station(&self, station: RadioStation) -> Result<()>;

    async fn remove_recent_station(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Local,
    Remote,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Local => f.write_str("local"),
            Backend::Remote => f.write_str("remote"),
        }
    }
}

/// Maps the authentication state to the backend that serves the call.
pub type BackendSelector = fn(authenticated: bool) -> Backend;

pub fn select_backend(authenticated: bool) -> Backend {
    if authenticated {
        Backend::Remote
    } else {
        Backend::Local
    }
}

pub struct AppStorage {
    local: Arc<dyn StationStorage>,
    remote: Arc<dyn StationStorage>,
    auth: Arc<dyn AuthProbe>,
    selector: BackendSelector,
}

impl AppStorage {
    pub fn new(
        local: Arc<dyn StationStorage>,
        remote: Arc<dyn StationStorage>,
        auth: Arc<dyn AuthProbe>,
    ) -> Self {
        Self {
            local,
            remote,
            auth,
            selector: select_backend,
        }
    }

    pub fn with_selector(mut self, selector: BackendSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Backend the next call would be routed to.
    pub async fn resolve(&self) -> Result<Backend> {
        let authenticated = self.auth.is_authenticated().await?;
        Ok((self.selector)(authenticated))
    }

    fn storage_for(&self, backend: Backend) -> &dyn StationStorage {
        match backend {
            Backend::Local => self.local.as_ref(),
            Backend::Remote => self.remote.as_ref(),
        }
    }

    async fn resolve_storage(&self) -> Result<&dyn StationStorage> {
        Ok(self.storage_for(self.resolve().await?))
    }

    /// Lists `collection` together with the backend that answered, asking
    /// the auth probe once.
    pub async fn stations(&self, collection: Collection) -> Result<(Backend, Vec<RadioStation>)> {
        let backend = self.resolve().await?;
        let storage = self.storage_for(backend);
        let stations = match collection {
            Collection::Favorites => storage.get_favorite_stations().await?,
            Collection::RecentStations => storage.get_recent_stations().await?,
        };
        Ok((backend, stations))
    }

    pub async fn get_favorite_stations(&self) -> Result<Vec<RadioStation>> {
        let storage = self.resolve_storage().await?;
        storage.get_favorite_stations().await
    }

    pub async fn add_favorite_station(&self, station: RadioStation) -> Result<()> {
        let storage = self.resolve_storage().await?;
        storage.add_favorite_station(station).await
    }

    pub async fn remove_favorite_station(&self, id: &str) -> Result<()> {
        let storage = self.resolve_storage().await?;
        storage.remove_favorite_station(id).await
    }

    pub async fn get_recent_stations(&self) -> Result<Vec<RadioStation>> {
        let storage = self.resolve_storage().await?;
        storage.get_recent_stations().await
    }

    pub async fn add_recent_station(&self, station: RadioStation) -> Result<()> {
        let storage = self.resolve_storage().await?;
        storage.add_recent_station(station).await
    }

    pub async fn remove_recent_station(&self, id: &str) -> Result<()> {
        let storage = self.resolve_storage().await?;
        storage.remove_recent_station(id).await
    }
}
