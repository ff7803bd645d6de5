// Generic CRUD handlers, instantiated per entity in the router
//
// Handlers are thin: deserialize, delegate to the repository, classify.
// Per-entity differences live entirely in the entity adapters.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::db::{Entity, Repository};

use crate::handlers::{respond, respond_message};
use crate::state::AppState;

fn repository<E: Entity>(state: &AppState) -> Repository<E> {
    Repository::new(state.db_pool.clone())
}

/// List every record of the entity.
pub async fn list<E>(State(state): State<AppState>) -> Response
where
    E: Entity + Serialize,
{
    respond(repository::<E>(&state).list().await)
}

/// Fetch one record by identifier.
pub async fn get_by_id<E>(State(state): State<AppState>, Path(id): Path<i32>) -> Response
where
    E: Entity + Serialize,
{
    respond(repository::<E>(&state).get_by_id(id).await)
}

/// Fetch the most recent record (single-call or two-step strategies).
pub async fn latest<E>(State(state): State<AppState>) -> Response
where
    E: Entity + Serialize,
{
    respond(repository::<E>(&state).latest(None).await)
}

/// Fetch the most recent record filtered by a foreign key.
pub async fn latest_by<E>(State(state): State<AppState>, Path(key): Path<i32>) -> Response
where
    E: Entity + Serialize,
{
    respond(repository::<E>(&state).latest(Some(key)).await)
}

/// Fetch only the most recent identifier.
pub async fn latest_id<E>(State(state): State<AppState>) -> Response
where
    E: Entity,
{
    respond(repository::<E>(&state).latest_id().await)
}

/// Insert one record.
pub async fn insert<E>(State(state): State<AppState>, Json(payload): Json<E>) -> Response
where
    E: Entity + DeserializeOwned,
{
    respond_message(
        repository::<E>(&state).insert(&payload).await,
        format!("{} created successfully.", E::TITLE),
    )
}

/// Update one record keyed on the path identifier.
pub async fn update<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<E>,
) -> Response
where
    E: Entity + DeserializeOwned,
{
    respond_message(
        repository::<E>(&state).update(id, &payload).await,
        format!("{} updated successfully.", E::TITLE),
    )
}

/// Delete one record by identifier.
pub async fn delete<E>(State(state): State<AppState>, Path(id): Path<i32>) -> Response
where
    E: Entity,
{
    respond_message(
        repository::<E>(&state).delete(id).await,
        format!("{} deleted successfully.", E::TITLE),
    )
}
