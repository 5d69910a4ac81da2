//! Hotel model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Hotel row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hotel {
    pub id: i64,
    pub owner_id: i64,
    pub hotel_name: String,
    /// Free-form rating, e.g. "5 stars"
    pub hotel_rating: String,
    pub hotel_location: String,
    pub hotel_image_url: Option<String>,
    pub number_of_rooms: i32,
    pub created_at: DateTime<Utc>,
}

/// Create or replace a hotel
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HotelRequest {
    #[validate(range(min = 1, message = "owner_id is required"))]
    pub owner_id: i64,
    #[validate(length(min = 1, max = 100, message = "hotel_name is required"))]
    pub hotel_name: String,
    #[validate(length(min = 1, max = 50, message = "hotel_rating is required"))]
    pub hotel_rating: String,
    #[validate(length(min = 1, max = 200, message = "hotel_location is required"))]
    pub hotel_location: String,
    #[validate(url(message = "hotel_image_url must be a URL"))]
    pub hotel_image_url: Option<String>,
    #[validate(range(min = 0, message = "number_of_rooms cannot be negative"))]
    pub number_of_rooms: i32,
}

impl HotelRequest {
    pub fn into_hotel(self) -> Hotel {
        Hotel {
            id: 0,
            owner_id: self.owner_id,
            hotel_name: self.hotel_name,
            hotel_rating: self.hotel_rating,
            hotel_location: self.hotel_location,
            hotel_image_url: self.hotel_image_url,
            number_of_rooms: self.number_of_rooms,
            created_at: DateTime::<Utc>::default(),
        }
    }
}
