//! Hotel owner endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        owner::{Owner, OwnerRequest},
        ListQuery, MessageResponse, OwnerPage, Page,
    },
    services::auth::hash_password,
    AppState,
};

use super::{IdPath, ValidatedJson, ValidatedQuery};

#[utoipa::path(
    post,
    path = "/owners",
    tag = "owners",
    request_body = OwnerRequest,
    responses(
        (status = 201, description = "Owner created", body = Owner),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_owner(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OwnerRequest>,
) -> AppResult<(StatusCode, Json<Owner>)> {
    let hash = hash_password(&req.password).await?;
    let created = state.services.owners.create(req.into_owner(hash)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/owners/{id}",
    tag = "owners",
    params(("id" = i64, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner details", body = Owner),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_owner(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Owner>> {
    Ok(Json(state.services.owners.get(id).await?))
}

#[utoipa::path(
    get,
    path = "/owners",
    tag = "owners",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of owners", body = OwnerPage),
        (status = 400, description = "Invalid pagination", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_owners(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Page<Owner>>> {
    Ok(Json(state.services.owners.list(&query).await?))
}

#[utoipa::path(
    put,
    path = "/owners/{id}",
    tag = "owners",
    params(("id" = i64, Path, description = "Owner ID")),
    request_body = OwnerRequest,
    responses(
        (status = 200, description = "Owner updated", body = Owner),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_owner(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<OwnerRequest>,
) -> AppResult<Json<Owner>> {
    let hash = hash_password(&req.password).await?;
    let updated = state.services.owners.update(id, req.into_owner(hash)).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/owners/{id}",
    tag = "owners",
    params(("id" = i64, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner deleted", body = MessageResponse),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.owners.delete(id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}
