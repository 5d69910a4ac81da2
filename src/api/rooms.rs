//! Room endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        room::{Room, RoomRequest},
        ListQuery, MessageResponse, Page, RoomPage,
    },
    AppState,
};

use super::{IdPath, ValidatedJson, ValidatedQuery};

#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    request_body = RoomRequest,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Invalid input or unknown hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RoomRequest>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let created = state.services.rooms.create(req.into_room()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = Room),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_room(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Room>> {
    Ok(Json(state.services.rooms.get(id).await?))
}

/// List rooms, searching type, sleeps and status
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of rooms", body = RoomPage),
        (status = 400, description = "Invalid pagination", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Page<Room>>> {
    Ok(Json(state.services.rooms.list(&query).await?))
}

#[utoipa::path(
    put,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i64, Path, description = "Room ID")),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<RoomRequest>,
) -> AppResult<Json<Room>> {
    Ok(Json(state.services.rooms.update(id, req.into_room()).await?))
}

#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageResponse),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.rooms.delete(id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
