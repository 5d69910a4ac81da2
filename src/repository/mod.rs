//! Repository layer for database operations

pub mod entity;
pub mod table;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Booking, Hotel, Owner, Room, User},
};

pub use entity::Entity;
pub use table::TableRepository;

pub type UsersRepository = TableRepository<User>;
pub type OwnersRepository = TableRepository<Owner>;
pub type HotelsRepository = TableRepository<Hotel>;
pub type RoomsRepository = TableRepository<Room>;
pub type BookingsRepository = TableRepository<Booking>;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pool: Pool<Postgres>,
    users: UsersRepository,
    owners: OwnersRepository,
    hotels: HotelsRepository,
    rooms: RoomsRepository,
    bookings: BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: TableRepository::new(pool.clone()),
            owners: TableRepository::new(pool.clone()),
            hotels: TableRepository::new(pool.clone()),
            rooms: TableRepository::new(pool.clone()),
            bookings: TableRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn users(&self) -> &UsersRepository {
        &self.users
    }

    pub fn owners(&self) -> &OwnersRepository {
        &self.owners
    }

    pub fn hotels(&self) -> &HotelsRepository {
        &self.hotels
    }

    pub fn rooms(&self) -> &RoomsRepository {
        &self.rooms
    }

    pub fn bookings(&self) -> &BookingsRepository {
        &self.bookings
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    /// Round trip to the database, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
