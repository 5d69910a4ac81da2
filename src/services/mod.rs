//! Business logic services

pub mod auth;
pub mod codes;
pub mod email;
pub mod files;
pub mod records;

use crate::{
    config::AppConfig,
    models::{Booking, Hotel, Owner, Room, User},
    repository::Repository,
};

pub use records::RecordService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub users: RecordService<User>,
    pub owners: RecordService<Owner>,
    pub hotels: RecordService<Hotel>,
    pub rooms: RecordService<Room>,
    pub bookings: RecordService<Booking>,
    pub auth: auth::AuthService,
    pub files: files::FileStorage,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig, codes: codes::CodeStore) -> Self {
        let email = email::EmailService::new(config.email.clone());
        Self {
            users: RecordService::new(repository.users().clone()),
            owners: RecordService::new(repository.owners().clone()),
            hotels: RecordService::new(repository.hotels().clone()),
            rooms: RecordService::new(repository.rooms().clone()),
            bookings: RecordService::new(repository.bookings().clone()),
            auth: auth::AuthService::new(repository.clone(), config.auth.clone(), codes, email),
            files: files::FileStorage::new(&config.upload),
            repository,
        }
    }
}
