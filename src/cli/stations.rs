use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    error::Result,
    info,
    storage::AppStorage,
    success,
    types::{Collection, RadioStation, StationTableRow},
    warning,
};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn title(collection: Collection) -> &'static str {
    match collection {
        Collection::Favorites => "Favorites",
        Collection::RecentStations => "Recent stations",
    }
}

pub async fn list_stations(storage: &AppStorage, collection: Collection) {
    let pb = spinner(&format!("Loading {}...", collection));

    let result = storage.stations(collection).await;
    pb.finish_and_clear();

    match result {
        Ok((backend, stations)) if stations.is_empty() => {
            info!("No {} stored ({})", collection, backend);
        }
        Ok((backend, stations)) => {
            info!(
                "{} ({}): {} station(s)",
                title(collection),
                backend,
                stations.len()
            );
            let rows: Vec<StationTableRow> = stations.into_iter().map(Into::into).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) if e.is_unauthorized() => {
            warning!("Session was rejected by the server: {}", e);
            warning!("Run liveradio auth sign-in again or sign out to use local storage.");
        }
        Err(e) => error!("Failed to load {}. Err: {}", collection, e),
    }
}

pub async fn add_station(storage: &AppStorage, collection: Collection, station: RadioStation) {
    let name = station.name.clone();
    let result = run(&format!("Saving {}...", name), async {
        match collection {
            Collection::Favorites => storage.add_favorite_station(station).await,
            Collection::RecentStations => storage.add_recent_station(station).await,
        }
    })
    .await;

    match result {
        Ok(()) => success!("Added {} to {}", name, collection),
        Err(e) => error!("Failed to add {} to {}. Err: {}", name, collection, e),
    }
}

pub async fn remove_station(storage: &AppStorage, collection: Collection, id: &str) {
    let result = run(&format!("Removing {}...", id), async {
        match collection {
            Collection::Favorites => storage.remove_favorite_station(id).await,
            Collection::RecentStations => storage.remove_recent_station(id).await,
        }
    })
    .await;

    match result {
        Ok(()) => success!("Removed {} from {}", id, collection),
        Err(e) => error!("Failed to remove {} from {}. Err: {}", id, collection, e),
    }
}

async fn run<F>(message: &str, call: F) -> Result<()>
where
    F: std::future::Future<Output = Result<()>>,
{
    let pb = spinner(message);
    let result = call.await;
    pb.finish_and_clear();
    result
}
