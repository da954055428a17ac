use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    config,
    error::Result,
    management::CollectionManager,
    types::{Collection, RadioStation},
};

use super::StationStorage;

/// Storage partition used on this device.
pub const LOCAL_STORAGE_NAMESPACE: &str = "LiveRadio";

/// Keeps both collections as JSON files under `<root>/<namespace>/`.
///
/// The files are read and rewritten on every call; one process at a time is
/// expected to write them.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    /// Local storage in the application data directory.
    pub fn new(namespace: &str) -> Result<Self> {
        Ok(Self::with_root(config::app_data_dir()?, namespace))
    }

    pub fn with_root(root: impl Into<PathBuf>, namespace: &str) -> Self {
        Self {
            dir: root.into().join(namespace),
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    async fn load(&self, collection: Collection) -> Result<CollectionManager> {
        CollectionManager::load(collection, self.dir.join(collection.file_name())).await
    }

    async fn add(&self, collection: Collection, station: RadioStation) -> Result<()> {
        let mut manager = self.load(collection).await?;
        manager.add(station)?;
        manager.persist().await
    }

    async fn remove(&self, collection: Collection, id: &str) -> Result<()> {
        let mut manager = self.load(collection).await?;
        if manager.remove(id) {
            manager.persist().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl StationStorage for LocalStorage {
    async fn get_favorite_stations(&self) -> Result<Vec<RadioStation>> {
        Ok(self.load(Collection::Favorites).await?.into_stations())
    }

    async fn add_favorite_station(&self, station: RadioStation) -> Result<()> {
        self.add(Collection::Favorites, station).await
    }

    async fn remove_favorite_station(&self, id: &str) -> Result<()> {
        self.remove(Collection::Favorites, id).await
    }

    async fn get_recent_stations(&self) -> Result<Vec<RadioStation>> {
        Ok(self.load(Collection::RecentStations).await?.into_stations())
    }

    async fn add_recent_station(&self, station: RadioStation) -> Result<()> {
        self.add(Collection::RecentStations, station).await
    }

    async fn remove_recent_station(&self, id: &str) -> Result<()> {
        self.remove(Collection::RecentStations, id).await
    }
}
