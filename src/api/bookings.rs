//! Booking endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        booking::{Booking, BookingRequest},
        BookingPage, ListQuery, MessageResponse, Page,
    },
    AppState,
};

use super::{IdPath, ValidatedJson, ValidatedQuery};

/// Book a room
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid input or unknown room, user or hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let created = state.services.bookings.create(req.into_booking()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_booking(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Booking>> {
    Ok(Json(state.services.bookings.get(id).await?))
}

/// List bookings, searching the stay description
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of bookings", body = BookingPage),
        (status = 400, description = "Invalid pagination", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Page<Booking>>> {
    Ok(Json(state.services.bookings.list(&query).await?))
}

#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<BookingRequest>,
) -> AppResult<Json<Booking>> {
    Ok(Json(state.services.bookings.update(id, req.into_booking()).await?))
}

/// Cancel a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookings.delete(id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
