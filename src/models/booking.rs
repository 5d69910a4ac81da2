//! Booking model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Booking row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub hotel_id: Option<i64>,
    /// Free-text description of the stay
    pub stay: String,
    pub number_of_users: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Create or replace a booking
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_stay_period"))]
pub struct BookingRequest {
    #[validate(range(min = 1, message = "room_id is required"))]
    pub room_id: i64,
    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i64,
    pub hotel_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub stay: String,
    #[validate(range(min = 1, message = "number_of_users must be at least 1"))]
    pub number_of_users: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub price: Option<Decimal>,
}

fn validate_stay_period(req: &BookingRequest) -> Result<(), ValidationError> {
    if req.to_date < req.from_date {
        let mut err = ValidationError::new("stay_period");
        err.message = Some("to_date must not be before from_date".into());
        return Err(err);
    }
    Ok(())
}

impl BookingRequest {
    pub fn into_booking(self) -> Booking {
        Booking {
            id: 0,
            room_id: self.room_id,
            user_id: self.user_id,
            hotel_id: self.hotel_id,
            stay: self.stay,
            number_of_users: self.number_of_users,
            from_date: self.from_date,
            to_date: self.to_date,
            price: self.price,
            created_at: DateTime::<Utc>::default(),
        }
    }
}
