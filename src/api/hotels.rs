//! Hotel endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        hotel::{Hotel, HotelRequest},
        HotelPage, ListQuery, MessageResponse, Page,
    },
    AppState,
};

use super::{IdPath, ValidatedJson, ValidatedQuery};

/// Create a hotel
#[utoipa::path(
    post,
    path = "/hotels",
    tag = "hotels",
    request_body = HotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = Hotel),
        (status = 400, description = "Invalid input or unknown owner", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<HotelRequest>,
) -> AppResult<(StatusCode, Json<Hotel>)> {
    let created = state.services.hotels.create(req.into_hotel()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get hotel by ID
#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = i64, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "Hotel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Hotel>> {
    Ok(Json(state.services.hotels.get(id).await?))
}

/// List hotels, searching name, rating and location
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of hotels", body = HotelPage),
        (status = 400, description = "Invalid pagination", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Page<Hotel>>> {
    Ok(Json(state.services.hotels.list(&query).await?))
}

/// Replace a hotel
#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = i64, Path, description = "Hotel ID")),
    request_body = HotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = Hotel),
        (status = 404, description = "Hotel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<HotelRequest>,
) -> AppResult<Json<Hotel>> {
    Ok(Json(state.services.hotels.update(id, req.into_hotel()).await?))
}

/// Delete a hotel and, through the store, its rooms
#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = "hotels",
    params(("id" = i64, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted", body = MessageResponse),
        (status = 404, description = "Hotel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.hotels.delete(id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
