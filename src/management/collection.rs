use std::{io::ErrorKind, path::PathBuf};

use crate::{
    error::{Result, StorageError},
    types::{Collection, RadioStation},
    utils,
};

/// One station collection backed by a JSON file.
///
/// Used by the local backend for the device's own collections and by the
/// service for each user's collections, so both apply the same policies.
pub struct CollectionManager {
    collection: Collection,
    path: PathBuf,
    stations: Vec<RadioStation>,
}

impl CollectionManager {
    /// Loads the collection stored at `path`. A missing or empty file is an
    /// empty collection; a file that does not parse is an error.
    pub async fn load(collection: Collection, path: PathBuf) -> Result<Self> {
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let stations = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)?
        };

        Ok(Self {
            collection,
            path,
            stations,
        })
    }

    pub async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.stations)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Adds `station` following the collection's policy: favorites replace a
    /// record with the same id in place, recent stations move it to the front.
    ///
    /// Stations without an id, a name or an http(s) stream URL are refused
    /// with [`StorageError::InvalidStation`].
    pub fn add(&mut self, station: RadioStation) -> Result<&mut Self> {
        utils::validate_station(&station).map_err(StorageError::InvalidStation)?;
        match self.collection {
            Collection::Favorites => utils::upsert_favorite(&mut self.stations, station),
            Collection::RecentStations => utils::push_recent(&mut self.stations, station),
        }
        Ok(self)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        utils::remove_station(&mut self.stations, id)
    }

    pub fn into_stations(self) -> Vec<RadioStation> {
        self.stations
    }
}
