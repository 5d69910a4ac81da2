//! Table mappings for the generic repository.
//!
//! Every stored entity shares the same shape: a `BIGSERIAL id`, a set of
//! mutable columns and a store-assigned `created_at`. An [`Entity`] impl names
//! the table, lists the mutable columns in bind order and the text columns the
//! list search runs over. The SQL builders below turn that mapping into the
//! statements [`TableRepository`](super::table::TableRepository) executes.

use chrono::{DateTime, Utc};
use sqlx::{
    postgres::{PgArguments, PgRow},
    Arguments, FromRow,
};

use crate::models::{Booking, Hotel, Owner, Room, User};

pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    /// Singular name used in error messages
    const NAME: &'static str;
    /// Mutable columns, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];
    /// Text columns matched by the list search
    const SEARCH_COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Store-assigned identity and creation time
    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>);

    fn bind_columns(&self, args: &mut PgArguments);
}

/// `id, <columns>, created_at`
pub fn select_list<E: Entity>() -> String {
    let mut cols = Vec::with_capacity(E::COLUMNS.len() + 2);
    cols.push("id");
    cols.extend_from_slice(E::COLUMNS);
    cols.push("created_at");
    cols.join(", ")
}

pub fn insert_sql<E: Entity>() -> String {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id, created_at",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

pub fn select_by_id_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", select_list::<E>(), E::TABLE)
}

/// Full replace of every mutable column; the id is the last parameter
pub fn update_sql<E: Entity>() -> String {
    let sets = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING created_at",
        E::TABLE,
        sets,
        E::COLUMNS.len() + 1
    )
}

pub fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM {} WHERE id = $1", E::TABLE)
}

/// OR-ed ILIKE over the search columns, all bound to `$1`
pub fn search_filter<E: Entity>() -> String {
    let conditions = E::SEARCH_COLUMNS
        .iter()
        .map(|col| format!("{} ILIKE $1", col))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("WHERE ({})", conditions)
}

/// Page query. With a search the pattern is `$1` and limit/offset shift by one.
pub fn list_sql<E: Entity>(with_search: bool) -> String {
    let (filter, limit_idx) = if with_search {
        (search_filter::<E>(), 2)
    } else {
        (String::new(), 1)
    };
    format!(
        "SELECT {} FROM {} {} ORDER BY created_at DESC, id DESC LIMIT ${} OFFSET ${}",
        select_list::<E>(),
        E::TABLE,
        filter,
        limit_idx,
        limit_idx + 1
    )
}

pub fn count_sql<E: Entity>(with_search: bool) -> String {
    let filter = if with_search {
        search_filter::<E>()
    } else {
        String::new()
    };
    format!("SELECT COUNT(*) FROM {} {}", E::TABLE, filter)
}

/// Wraps a search term for a literal "contains" ILIKE match
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const NAME: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone_number",
        "username",
        "password",
        "type",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "email", "username", "phone_number"];

    fn id(&self) -> i64 {
        self.id
    }

    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }

    fn bind_columns(&self, args: &mut PgArguments) {
        args.add(self.first_name.clone());
        args.add(self.last_name.clone());
        args.add(self.email.clone());
        args.add(self.phone_number.clone());
        args.add(self.username.clone());
        args.add(self.password.clone());
        args.add(self.user_type);
    }
}

impl Entity for Owner {
    const TABLE: &'static str = "owners";
    const NAME: &'static str = "Owner";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone_number",
        "username",
        "password",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "email", "username", "phone_number"];

    fn id(&self) -> i64 {
        self.id
    }

    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }

    fn bind_columns(&self, args: &mut PgArguments) {
        args.add(self.first_name.clone());
        args.add(self.last_name.clone());
        args.add(self.email.clone());
        args.add(self.phone_number.clone());
        args.add(self.username.clone());
        args.add(self.password.clone());
    }
}

impl Entity for Hotel {
    const TABLE: &'static str = "hotels";
    const NAME: &'static str = "Hotel";
    const COLUMNS: &'static [&'static str] = &[
        "owner_id",
        "hotel_name",
        "hotel_rating",
        "hotel_location",
        "hotel_image_url",
        "number_of_rooms",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] =
        &["hotel_name", "hotel_rating", "hotel_location"];

    fn id(&self) -> i64 {
        self.id
    }

    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }

    fn bind_columns(&self, args: &mut PgArguments) {
        args.add(self.owner_id);
        args.add(self.hotel_name.clone());
        args.add(self.hotel_rating.clone());
        args.add(self.hotel_location.clone());
        args.add(self.hotel_image_url.clone());
        args.add(self.number_of_rooms);
    }
}

impl Entity for Room {
    const TABLE: &'static str = "rooms";
    const NAME: &'static str = "Room";
    const COLUMNS: &'static [&'static str] = &[
        "type",
        "number_of_room",
        "sleeps",
        "room_image_url",
        "price",
        "status",
        "hotel_id",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["type", "sleeps", "status"];

    fn id(&self) -> i64 {
        self.id
    }

    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }

    fn bind_columns(&self, args: &mut PgArguments) {
        args.add(self.room_type.clone());
        args.add(self.number_of_room);
        args.add(self.sleeps.clone());
        args.add(self.room_image_url.clone());
        args.add(self.price);
        args.add(self.status.clone());
        args.add(self.hotel_id);
    }
}

impl Entity for Booking {
    const TABLE: &'static str = "bookings";
    const NAME: &'static str = "Booking";
    const COLUMNS: &'static [&'static str] = &[
        "room_id",
        "user_id",
        "hotel_id",
        "stay",
        "number_of_users",
        "from_date",
        "to_date",
        "price",
    ];
    const SEARCH_COLUMNS: &'static [&'static str] = &["stay"];

    fn id(&self) -> i64 {
        self.id
    }

    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>) {
        self.id = id;
        self.created_at = created_at;
    }

    fn bind_columns(&self, args: &mut PgArguments) {
        args.add(self.room_id);
        args.add(self.user_id);
        args.add(self.hotel_id);
        args.add(self.stay.clone());
        args.add(self.number_of_users);
        args.add(self.from_date);
        args.add(self.to_date);
        args.add(self.price);
    }
}
