use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A radio station as stored in favorites and recent stations.
///
/// Only `id` carries meaning for the storage layer; everything else is
/// display metadata that is stored and returned as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioStation {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_resolved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
}

impl RadioStation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            url_resolved: None,
            homepage: None,
            favicon: None,
            tags: Vec::new(),
            country: None,
            country_code: None,
            language: None,
            codec: None,
            bitrate: None,
        }
    }
}

#[derive(Tabled)]
pub struct StationTableRow {
    pub id: String,
    pub name: String,
    pub country: String,
    pub language: String,
    pub tags: String,
}

impl From<RadioStation> for StationTableRow {
    fn from(station: RadioStation) -> Self {
        StationTableRow {
            id: station.id,
            name: station.name,
            country: station.country.unwrap_or_default(),
            language: station.language.unwrap_or_default(),
            tags: station
                .tags
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// A signed-in session as kept on this device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub user: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user: String,
    pub expires_at: u64,
}

/// Body of every non-2xx answer from the backend service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveStationQuery {
    pub id: String,
}

/// The two station collections every backend keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Favorites,
    RecentStations,
}

impl Collection {
    /// Path segment under `/api` and file stem on disk.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Favorites => "favorites",
            Collection::RecentStations => "recent-stations",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "favorites" => Some(Collection::Favorites),
            "recent-stations" => Some(Collection::RecentStations),
            _ => None,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
