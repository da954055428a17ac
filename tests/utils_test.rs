use liveradio::types::{Collection, RadioStation, StationTableRow};
use liveradio::utils::*;

// Helper function to create a test station
fn create_test_station(id: &str, name: &str) -> RadioStation {
    RadioStation::new(id, name, format!("https://stream.example.com/{}", id))
}

fn ids(stations: &[RadioStation]) -> Vec<&str> {
    stations.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn test_generate_session_token() {
    let token = generate_session_token();

    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    let token2 = generate_session_token();
    assert_ne!(token, token2);
}

#[test]
fn test_hash_session_token() {
    let hash = hash_session_token("token_123");

    assert!(!hash.is_empty());
    assert_eq!(hash, hash_session_token("token_123"));
    assert_ne!(hash, hash_session_token("token_124"));

    // URL-safe base64 without padding
    assert!(
        hash.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
    assert!(!hash.contains("token_123"));
}

#[test]
fn test_upsert_favorite_appends_new_ids() {
    let mut favorites = vec![create_test_station("a", "A")];

    upsert_favorite(&mut favorites, create_test_station("b", "B"));

    assert_eq!(ids(&favorites), vec!["a", "b"]);
}

#[test]
fn test_upsert_favorite_replaces_in_place() {
    let mut favorites = vec![
        create_test_station("a", "A"),
        create_test_station("b", "B"),
    ];

    upsert_favorite(&mut favorites, create_test_station("a", "A2"));

    assert_eq!(ids(&favorites), vec!["a", "b"]);
    assert_eq!(favorites[0].name, "A2");
}

#[test]
fn test_push_recent_moves_to_front() {
    let mut recent = Vec::new();
    for id in ["a", "b", "c"] {
        push_recent(&mut recent, create_test_station(id, id));
    }
    assert_eq!(ids(&recent), vec!["c", "b", "a"]);

    push_recent(&mut recent, create_test_station("a", "again"));
    assert_eq!(ids(&recent), vec!["a", "c", "b"]);
    assert_eq!(recent[0].name, "again");
}

#[test]
fn test_push_recent_truncates_oldest() {
    let mut recent = Vec::new();
    for i in 0..RECENT_STATIONS_LIMIT + 1 {
        push_recent(&mut recent, create_test_station(&i.to_string(), "x"));
    }

    assert_eq!(recent.len(), RECENT_STATIONS_LIMIT);
    assert_eq!(recent.last().unwrap().id, "1");
}

#[test]
fn test_remove_station() {
    let mut stations = vec![
        create_test_station("a", "A"),
        create_test_station("b", "B"),
    ];

    assert!(remove_station(&mut stations, "a"));
    assert!(!remove_station(&mut stations, "a"));
    assert_eq!(ids(&stations), vec!["b"]);
}

#[test]
fn test_secrets_match() {
    assert!(secrets_match("open-sesame", "open-sesame"));
    assert!(!secrets_match("open-sesam", "open-sesame"));
    assert!(!secrets_match("", "open-sesame"));
}

#[test]
fn test_validate_station() {
    assert!(validate_station(&create_test_station("a", "A")).is_ok());

    let mut no_id = create_test_station("", "A");
    no_id.id = "  ".to_string();
    assert!(validate_station(&no_id).is_err());

    assert!(validate_station(&create_test_station("a", "")).is_err());

    let mut bad_url = create_test_station("a", "A");
    bad_url.url = "stream.example.com".to_string();
    let err = validate_station(&bad_url).unwrap_err();
    assert!(err.contains("stream.example.com"));
}

#[test]
fn test_is_valid_user_name() {
    assert!(is_valid_user_name("alice"));
    assert!(is_valid_user_name("alice.smith-2_b"));

    assert!(!is_valid_user_name(""));
    assert!(!is_valid_user_name(".hidden"));
    assert!(!is_valid_user_name("../etc"));
    assert!(!is_valid_user_name("a/b"));
    assert!(!is_valid_user_name(&"a".repeat(65)));
}

#[test]
fn test_collection_names() {
    assert_eq!(Collection::Favorites.name(), "favorites");
    assert_eq!(Collection::RecentStations.file_name(), "recent-stations.json");
    assert_eq!(
        Collection::from_name("recent-stations"),
        Some(Collection::RecentStations)
    );
    assert_eq!(Collection::from_name("playlists"), None);
}

#[test]
fn test_station_json_ignores_unknown_fields() {
    let json = r#"{
        "id": "s1",
        "name": "Radio One",
        "url": "https://radio.one/live",
        "votes": 12,
        "tags": ["pop", "rock"]
    }"#;

    let station: RadioStation = serde_json::from_str(json).unwrap();
    assert_eq!(station.id, "s1");
    assert_eq!(station.tags, vec!["pop", "rock"]);
    assert_eq!(station.country, None);

    let out = serde_json::to_string(&station).unwrap();
    assert!(!out.contains("country"));
}

#[test]
fn test_station_table_row_limits_tags() {
    let mut station = create_test_station("s1", "Radio One");
    station.tags = vec!["a", "b", "c", "d"]
        .into_iter()
        .map(String::from)
        .collect();

    let row = StationTableRow::from(station);
    assert_eq!(row.tags, "a,b,c");
    assert_eq!(row.country, "");
}
