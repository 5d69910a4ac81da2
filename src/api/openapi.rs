//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, health, hotels, owners, rooms, upload, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Booking API",
        version = "1.0.0",
        description = "Users, hotel owners, hotels, rooms and bookings"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::verify,
        auth::login,
        auth::forgot_password,
        auth::verify_forgot_password,
        auth::update_password,
        // Users
        users::create_user,
        users::get_user,
        users::list_users,
        users::update_user,
        users::delete_user,
        // Owners
        owners::create_owner,
        owners::get_owner,
        owners::list_owners,
        owners::update_owner,
        owners::delete_owner,
        // Hotels
        hotels::create_hotel,
        hotels::get_hotel,
        hotels::list_hotels,
        hotels::update_hotel,
        hotels::delete_hotel,
        // Rooms
        rooms::create_room,
        rooms::get_room,
        rooms::list_rooms,
        rooms::update_room,
        rooms::delete_room,
        // Bookings
        bookings::create_booking,
        bookings::get_booking,
        bookings::list_bookings,
        bookings::update_booking,
        bookings::delete_booking,
        // Media
        upload::upload_file,
    ),
    components(
        schemas(
            // Auth
            crate::models::auth::LoginRequest,
            crate::models::auth::VerifyRequest,
            crate::models::auth::ForgotPasswordRequest,
            crate::models::auth::UpdatePasswordRequest,
            crate::models::auth::AuthResponse,
            // Entities
            crate::models::user::User,
            crate::models::user::UserType,
            crate::models::user::UserRequest,
            crate::models::owner::Owner,
            crate::models::owner::OwnerRequest,
            crate::models::hotel::Hotel,
            crate::models::hotel::HotelRequest,
            crate::models::room::Room,
            crate::models::room::RoomRequest,
            crate::models::booking::Booking,
            crate::models::booking::BookingRequest,
            // Pages
            crate::models::UserPage,
            crate::models::OwnerPage,
            crate::models::HotelPage,
            crate::models::RoomPage,
            crate::models::BookingPage,
            crate::models::MessageResponse,
            // Media
            upload::UploadForm,
            upload::UploadResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and password recovery"),
        (name = "users", description = "Guest accounts"),
        (name = "owners", description = "Hotel owners"),
        (name = "hotels", description = "Hotels"),
        (name = "rooms", description = "Hotel rooms"),
        (name = "bookings", description = "Room bookings"),
        (name = "media", description = "Image uploads")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_entity() {
        let doc = ApiDoc::openapi();
        for path in ["/users", "/owners/{id}", "/hotels", "/rooms/{id}", "/bookings", "/file-upload"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.schemas.contains_key("HotelPage"));
    }
}
