use async_trait::async_trait;

use crate::{
    client::ApiClient,
    error::{Result, StorageError},
    types::{Collection, RadioStation, RemoveStationQuery},
    utils,
};

use super::StationStorage;

/// Keeps both collections on the backend service for the signed-in user.
///
/// Every call is a direct request; nothing is queued or cached.
pub struct RemoteStorage {
    client: ApiClient,
}

impl RemoteStorage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(collection: Collection) -> String {
        format!("/api/{}", collection.name())
    }

    async fn get(&self, collection: Collection) -> Result<Vec<RadioStation>> {
        self.client.get_json(&Self::path(collection)).await
    }

    // Refused before sending so both backends fail the same way.
    async fn add(&self, collection: Collection, station: &RadioStation) -> Result<()> {
        utils::validate_station(station).map_err(StorageError::InvalidStation)?;
        self.client.post_json(&Self::path(collection), station).await
    }

    async fn remove(&self, collection: Collection, id: &str) -> Result<()> {
        let query = RemoveStationQuery { id: id.to_string() };
        self.client.delete(&Self::path(collection), &query).await
    }
}

#[async_trait]
impl StationStorage for RemoteStorage {
    async fn get_favorite_stations(&self) -> Result<Vec<RadioStation>> {
        self.get(Collection::Favorites).await
    }

    async fn add_favorite_station(&self, station: RadioStation) -> Result<()> {
        self.add(Collection::Favorites, &station).await
    }

    async fn remove_favorite_station(&self, id: &str) -> Result<()> {
        self.remove(Collection::Favorites, id).await
    }

    async fn get_recent_stations(&self) -> Result<Vec<RadioStation>> {
        self.get(Collection::RecentStations).await
    }

    async fn add_recent_station(&self, station: RadioStation) -> Result<()> {
        self.add(Collection::RecentStations, &station).await
    }

    async fn remove_recent_station(&self, id: &str) -> Result<()> {
        self.remove(Collection::RecentStations, id).await
    }
}
