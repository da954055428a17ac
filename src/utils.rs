use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::RadioStation;

/// Maximum number of entries kept in a recent-stations list.
pub const RECENT_STATIONS_LIMIT: usize = 50;

pub fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Hash under which the service remembers a session token.
pub fn hash_session_token(token: &str) -> String {
    let hash = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Compares two secrets through their SHA-256 digests so the comparison
/// time does not depend on how many leading bytes match.
pub fn secrets_match(given: &str, expected: &str) -> bool {
    Sha256::digest(given.as_bytes()) == Sha256::digest(expected.as_bytes())
}

pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Inserts a favorite, replacing any record with the same id in place.
pub fn upsert_favorite(favorites: &mut Vec<RadioStation>, station: RadioStation) {
    match favorites.iter_mut().find(|s| s.id == station.id) {
        Some(existing) => *existing = station,
        None => favorites.push(station),
    }
}

/// Moves `station` to the front of the recent list, dropping an older entry
/// with the same id and trimming the list to [`RECENT_STATIONS_LIMIT`].
pub fn push_recent(recent: &mut Vec<RadioStation>, station: RadioStation) {
    recent.retain(|s| s.id != station.id);
    recent.insert(0, station);
    recent.truncate(RECENT_STATIONS_LIMIT);
}

/// Removes every record with `id`. Returns whether anything was removed.
pub fn remove_station(stations: &mut Vec<RadioStation>, id: &str) -> bool {
    let before = stations.len();
    stations.retain(|s| s.id != id);
    stations.len() != before
}

/// Checks the fields the service requires before storing a station.
pub fn validate_station(station: &RadioStation) -> Result<(), String> {
    if station.id.trim().is_empty() {
        return Err("station id is required".to_string());
    }
    if station.name.trim().is_empty() {
        return Err("station name is required".to_string());
    }
    if !(station.url.starts_with("http://") || station.url.starts_with("https://")) {
        return Err(format!("station url must be http(s): {}", station.url));
    }
    Ok(())
}

/// User names double as directory names on the service, so only a safe
/// character set is accepted.
pub fn is_valid_user_name(user: &str) -> bool {
    !user.is_empty()
        && user.len() <= 64
        && !user.starts_with('.')
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
