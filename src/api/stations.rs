use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    info,
    management::CollectionManager,
    server::ServerState,
    types::{Collection, RadioStation, RemoveStationQuery},
    utils,
};

use super::{ApiError, AuthUser};

fn check_collection(name: &str) -> Result<Collection, ApiError> {
    Collection::from_name(name)
        .ok_or_else(|| ApiError::not_found(format!("collection not found: {}", name)))
}

async fn load(
    state: &ServerState,
    user: &str,
    collection: Collection,
) -> Result<CollectionManager, ApiError> {
    let path = state.collection_path(user, collection);
    Ok(CollectionManager::load(collection, path).await?)
}

pub async fn list_stations(
    Extension(state): Extension<Arc<ServerState>>,
    user: AuthUser,
    Path(name): Path<String>,
) -> Result<Json<Vec<RadioStation>>, ApiError> {
    let collection = check_collection(&name)?;

    let _guard = state.store.lock().await;
    let stations = load(&state, &user.user, collection).await?.into_stations();

    info!("Listed {} {} of {}", stations.len(), collection, user.user);
    Ok(Json(stations))
}

pub async fn save_station(
    Extension(state): Extension<Arc<ServerState>>,
    user: AuthUser,
    Path(name): Path<String>,
    body: Result<Json<RadioStation>, JsonRejection>,
) -> Result<(StatusCode, Json<RadioStation>), ApiError> {
    let collection = check_collection(&name)?;
    let Json(station) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    utils::validate_station(&station).map_err(ApiError::bad_request)?;

    let _guard = state.store.lock().await;
    let mut manager = load(&state, &user.user, collection).await?;
    manager.add(station.clone())?;
    manager.persist().await?;

    info!("Saved {} to {} of {}", station.id, collection, user.user);
    Ok((StatusCode::CREATED, Json(station)))
}

pub async fn delete_station(
    Extension(state): Extension<Arc<ServerState>>,
    user: AuthUser,
    Path(name): Path<String>,
    query: Result<Query<RemoveStationQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let collection = check_collection(&name)?;
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let _guard = state.store.lock().await;
    let mut manager = load(&state, &user.user, collection).await?;
    if manager.remove(&query.id) {
        manager.persist().await?;
        info!("Removed {} from {} of {}", query.id, collection, user.user);
    } else {
        info!("Nothing to remove for {} in {} of {}", query.id, collection, user.user);
    }

    Ok(StatusCode::NO_CONTENT)
}
