//! Data models for the booking server

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod owner;
pub mod room;
pub mod user;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub use booking::Booking;
pub use hotel::Hotel;
pub use owner::Owner;
pub use room::Room;
pub use user::{User, UserType};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;
/// Keeps `(page - 1) * limit` well inside `i64`
pub const MAX_PAGE: i64 = 10_000_000;

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Pagination and search parameters shared by every list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 10_000_000, message = "page must be between 1 and 10000000"))]
    pub page: i64,
    /// Rows per page
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
    /// Case-insensitive substring filter
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Row offset of the first entry on this page
    pub fn offset(&self) -> i64 {
        (self.page - 1).max(0).saturating_mul(self.limit.max(0))
    }

    /// Trimmed search term, `None` when blank
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// One page of rows plus the total number of rows matching the filter
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    UserPage = Page<User>,
    OwnerPage = Page<Owner>,
    HotelPage = Page<Hotel>,
    RoomPage = Page<Room>,
    BookingPage = Page<Booking>
)]
pub struct Page<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub items: Vec<T>,
    /// Rows matching the search filter, across all pages
    pub count: i64,
    pub page: i64,
    pub limit: i64,
}

impl<T> Page<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(items: Vec<T>, count: i64, query: &ListQuery) -> Self {
        Self {
            items,
            count,
            page: query.page,
            limit: query.limit,
        }
    }
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
