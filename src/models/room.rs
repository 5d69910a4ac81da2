//! Room model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Room row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i64,
    /// Room category, e.g. "double" or "suite"
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub room_type: String,
    pub number_of_room: i32,
    /// Capacity descriptor, e.g. "2 adults"
    pub sleeps: Option<String>,
    pub room_image_url: Option<String>,
    /// Nightly price
    pub price: Option<Decimal>,
    pub status: String,
    pub hotel_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Create or replace a room
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoomRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type is required"))]
    pub room_type: String,
    #[validate(range(min = 0, message = "number_of_room cannot be negative"))]
    pub number_of_room: i32,
    #[validate(length(max = 50))]
    pub sleeps: Option<String>,
    #[validate(url(message = "room_image_url must be a URL"))]
    pub room_image_url: Option<String>,
    pub price: Option<Decimal>,
    #[validate(length(min = 1, max = 30, message = "status is required"))]
    pub status: String,
    #[validate(range(min = 1, message = "hotel_id is required"))]
    pub hotel_id: i64,
}

impl RoomRequest {
    pub fn into_room(self) -> Room {
        Room {
            id: 0,
            room_type: self.room_type,
            number_of_room: self.number_of_room,
            sleeps: self.sleeps,
            room_image_url: self.room_image_url,
            price: self.price,
            status: self.status,
            hotel_id: self.hotel_id,
            created_at: DateTime::<Utc>::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_format() {
        let json = r#"{"type":"suite","number_of_room":12,"sleeps":"4","price":"249.90",
            "status":"available","hotel_id":3}"#;
        let req: RoomRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());

        let room = req.into_room();
        assert_eq!(room.room_type, "suite");
        assert_eq!(room.price, Some(Decimal::new(24990, 2)));
        assert_eq!(room.room_image_url, None);
    }

    #[test]
    fn test_hotel_reference_required() {
        let json = r#"{"type":"suite","number_of_room":1,"status":"available","hotel_id":0}"#;
        let req: RoomRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }
}
