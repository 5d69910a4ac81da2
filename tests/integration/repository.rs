//! Repository behaviour against a real PostgreSQL database

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use booking_server::{
    models::{user::UpdatePassword, Booking, Hotel, ListQuery, Owner, Room, User, UserType},
    repository::Repository,
    AppError,
};

use crate::common::{repository, unique_token};

fn owner(token: &str) -> Owner {
    Owner {
        first_name: "Olga".into(),
        last_name: format!("Owner{}", token),
        email: format!("owner-{}@example.com", token),
        phone_number: Some("+998901234567".into()),
        username: Some(format!("owner_{}", token)),
        password: "$argon2id$hash".into(),
        ..Default::default()
    }
}

fn user(token: &str) -> User {
    User {
        first_name: "Ulug".into(),
        last_name: "Guest".into(),
        email: format!("guest-{}@example.com", token),
        phone_number: None,
        username: Some(format!("guest_{}", token)),
        password: "$argon2id$hash".into(),
        user_type: UserType::User,
        ..Default::default()
    }
}

async fn hotel_for(repo: &Repository, token: &str) -> Hotel {
    let owner = repo.owners().create(owner(token)).await.unwrap();
    repo.hotels()
        .create(Hotel {
            owner_id: owner.id,
            hotel_name: format!("Hotel {}", token),
            hotel_rating: "4 stars".into(),
            hotel_location: "Tashkent".into(),
            hotel_image_url: Some("http://localhost:8000/media/front.jpg".into()),
            number_of_rooms: 5,
            ..Default::default()
        })
        .await
        .unwrap()
}

fn room(hotel_id: i64, room_type: &str, status: &str) -> Room {
    Room {
        room_type: room_type.into(),
        number_of_room: 1,
        sleeps: Some("2".into()),
        room_image_url: None,
        price: Some(Decimal::new(12000, 2)),
        status: status.into(),
        hotel_id,
        ..Default::default()
    }
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn test_create_assigns_identity_and_timestamp() {
    let repo = repository().await;
    let token = unique_token();
    let before = Utc::now() - chrono::Duration::minutes(1);

    let created = repo.owners().create(owner(&token)).await.unwrap();
    assert!(created.id > 0);
    assert!(created.created_at > before);

    let fetched = repo.owners().get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_is_not_found() {
    let repo = repository().await;
    let err = repo.hotels().get(i64::MAX).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore]
async fn test_update_is_full_replace() {
    let repo = repository().await;
    let token = unique_token();
    let hotel = hotel_for(&repo, &token).await;
    assert!(hotel.hotel_image_url.is_some());

    let replacement = Hotel {
        id: hotel.id,
        hotel_name: "Renamed".into(),
        hotel_image_url: None,
        ..hotel.clone()
    };
    let updated = repo.hotels().update(replacement).await.unwrap();
    assert_eq!(updated.created_at, hotel.created_at);

    let fetched = repo.hotels().get(hotel.id).await.unwrap();
    assert_eq!(fetched.hotel_name, "Renamed");
    assert_eq!(fetched.hotel_image_url, None);
    assert_eq!(fetched, updated);
}

#[tokio::test]
#[ignore]
async fn test_update_missing_is_not_found() {
    let repo = repository().await;
    let ghost = Owner {
        id: i64::MAX,
        ..owner(&unique_token())
    };
    let err = repo.owners().update(ghost).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_delete_twice() {
    let repo = repository().await;
    let created = repo.users().create(user(&unique_token())).await.unwrap();

    repo.users().delete(created.id).await.unwrap();
    assert!(repo.users().get(created.id).await.unwrap_err().is_not_found());
    assert!(repo.users().delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_rooms_pagination_scenario() {
    let repo = repository().await;
    let token = unique_token();
    let hotel = hotel_for(&repo, &token).await;
    let status = format!("free-{}", token);

    let mut created = Vec::new();
    for room_type in ["single", "double", "twin", "suite", "family"] {
        created.push(repo.rooms().create(room(hotel.id, room_type, &status)).await.unwrap());
    }

    let first = ListQuery::new(1, 3).with_search(token.clone());
    let (rows, count) = repo.rooms().get_all(&first).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(count, 5);
    // Newest first
    assert_eq!(rows[0].id, created[4].id);

    let second = ListQuery::new(2, 3).with_search(token.clone());
    let (rows, count) = repo.rooms().get_all(&second).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(count, 5);
    assert_eq!(rows[1].id, created[0].id);

    let third = ListQuery::new(3, 3).with_search(token);
    let (rows, count) = repo.rooms().get_all(&third).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(count, 5);
}

async fn room_total(repo: &Repository) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
        .fetch_one(repo.pool())
        .await
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn test_list_without_search_counts_every_row() {
    let repo = repository().await;
    let token = unique_token();
    let hotel = hotel_for(&repo, &token).await;

    let before = room_total(&repo).await;
    for room_type in ["single", "double", "twin"] {
        repo.rooms().create(room(hotel.id, room_type, "available")).await.unwrap();
    }
    assert!(room_total(&repo).await >= before + 3);

    let query = ListQuery::new(1, 2);
    // Other tests touch the table concurrently, so compare against a stable snapshot
    for _ in 0..10 {
        let low = room_total(&repo).await;
        let (rows, count) = repo.rooms().get_all(&query).await.unwrap();
        let high = room_total(&repo).await;
        if low != high {
            continue;
        }
        assert_eq!(count, low);
        assert_eq!(rows.len() as i64, count.min(query.limit));
        return;
    }
    panic!("rooms table never settled");
}

#[tokio::test]
#[ignore]
async fn test_search_is_case_insensitive_subset() {
    let repo = repository().await;
    let token = unique_token();
    let hotel = hotel_for(&repo, &token).await;

    repo.rooms()
        .create(room(hotel.id, &format!("Deluxe-{}", token), "available"))
        .await
        .unwrap();
    repo.rooms()
        .create(room(hotel.id, "standard", &format!("busy-{}", token)))
        .await
        .unwrap();

    let query = ListQuery::new(1, 10).with_search(format!("DELUXE-{}", token.to_uppercase()));
    let (rows, count) = repo.rooms().get_all(&query).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].room_type.starts_with("Deluxe-"));
}

#[tokio::test]
#[ignore]
async fn test_search_wildcards_are_literal() {
    let repo = repository().await;
    let token = unique_token();
    let hotel = hotel_for(&repo, &token).await;
    repo.rooms()
        .create(room(hotel.id, "suite", &format!("x{}", token)))
        .await
        .unwrap();

    // `_` would match any single character if left unescaped
    let query = ListQuery::new(1, 10).with_search(format!("_{}", token));
    let (_, count) = repo.rooms().get_all(&query).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore]
async fn test_get_by_email() {
    let repo = repository().await;
    let created = repo.users().create(user(&unique_token())).await.unwrap();

    let found = repo.users().get_by_email(&created.email).await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.user_type, UserType::User);

    let missing = format!("nobody-{}@example.com", unique_token());
    assert!(repo.users().get_by_email(&missing).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_update_password() {
    let repo = repository().await;
    let created = repo.users().create(user(&unique_token())).await.unwrap();

    repo.users()
        .update_password(&UpdatePassword {
            user_id: created.id,
            password_hash: "$argon2id$new".into(),
        })
        .await
        .unwrap();
    assert_eq!(repo.users().get(created.id).await.unwrap().password, "$argon2id$new");

    // Unknown ids are not an error
    repo.users()
        .update_password(&UpdatePassword {
            user_id: i64::MAX,
            password_hash: "x".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn test_foreign_key_violation_is_constraint_error() {
    let repo = repository().await;
    let err = repo.rooms().create(room(i64::MAX, "suite", "available")).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
}

#[tokio::test]
#[ignore]
async fn test_booking_round_trip() {
    let repo = repository().await;
    let token = unique_token();
    let hotel = hotel_for(&repo, &token).await;
    let room = repo.rooms().create(room(hotel.id, "double", "available")).await.unwrap();
    let guest = repo.users().create(user(&token)).await.unwrap();

    let booking = repo
        .bookings()
        .create(Booking {
            room_id: room.id,
            user_id: guest.id,
            hotel_id: Some(hotel.id),
            stay: format!("anniversary {}", token),
            number_of_users: 2,
            from_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            price: None,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(repo.bookings().get(booking.id).await.unwrap(), booking);

    let (rows, count) = repo
        .bookings()
        .get_all(&ListQuery::default().with_search(token))
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(rows[0].price, None);

    // Deleting the hotel cascades to its rooms and their bookings
    repo.hotels().delete(hotel.id).await.unwrap();
    assert!(repo.rooms().get(room.id).await.unwrap_err().is_not_found());
    assert!(repo.bookings().get(booking.id).await.unwrap_err().is_not_found());
}
