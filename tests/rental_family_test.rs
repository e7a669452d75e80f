// ABOUTME: Integration tests for the rental record family against an in-memory database
// ABOUTME: Covers email uniqueness, referential integrity, and CRUD lifecycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

#![allow(missing_docs, clippy::unwrap_used)]

use chrono::{Duration, Utc};
use reelfit::database::Database;
use reelfit::errors::ErrorCode;
use reelfit::models::{MovieUpdate, NewMovie, NewRating, NewRental, NewUser, UserUpdate};

async fn test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

async fn seed_movie(db: &Database) -> reelfit::models::Movie {
    let new = NewMovie::new(
        "Parasite",
        "Thriller",
        2019,
        "https://img.example.com/parasite.png",
        Utc::now(),
    )
    .unwrap();
    db.create_movie(&new).await.unwrap()
}

#[tokio::test]
async fn created_user_has_normalized_email() {
    let db = test_db().await;
    let user = db
        .create_user(&NewUser::new("Jo Lee", "JO@X.COM").unwrap())
        .await
        .unwrap();
    assert_eq!(user.email, "jo@x.com");
    assert!(user.id > 0);
}

#[tokio::test]
async fn duplicate_email_is_a_constraint_violation() {
    let db = test_db().await;
    db.create_user(&NewUser::new("Jo Lee", "JO@X.COM").unwrap())
        .await
        .unwrap();

    // Same address after normalization, different casing on the way in
    let err = db
        .create_user(&NewUser::new("Other Jo", "jo@x.com").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConstraintViolation);

    assert_eq!(db.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_cannot_steal_another_users_email() {
    let db = test_db().await;
    db.create_user(&NewUser::new("Jo Lee", "jo@x.com").unwrap())
        .await
        .unwrap();
    let second = db
        .create_user(&NewUser::new("Ann Roy", "ann@x.com").unwrap())
        .await
        .unwrap();

    let update = UserUpdate::new(None, Some("jo@x.com")).unwrap();
    let err = db.update_user(second.id, &update).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConstraintViolation);

    // Re-using your own email is fine
    let update = UserUpdate::new(Some("Ann R."), Some("ann@x.com")).unwrap();
    let updated = db.update_user(second.id, &update).await.unwrap();
    assert_eq!(updated.name, "Ann R.");
}

#[tokio::test]
async fn rental_with_unknown_movie_persists_nothing() {
    let db = test_db().await;
    let user = db
        .create_user(&NewUser::new("Jo Lee", "jo@x.com").unwrap())
        .await
        .unwrap();

    let new = NewRental::new(user.id, 999, None, Utc::now()).unwrap();
    let err = db.create_rental(&new).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);

    assert!(db.list_rentals().await.unwrap().is_empty());
}

#[tokio::test]
async fn rental_with_unknown_user_is_rejected() {
    let db = test_db().await;
    let movie = seed_movie(&db).await;

    let new = NewRental::new(42, movie.id, None, Utc::now()).unwrap();
    let err = db.create_rental(&new).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);
}

#[tokio::test]
async fn rental_round_trip_keeps_the_due_date() {
    let db = test_db().await;
    let user = db
        .create_user(&NewUser::new("Jo Lee", "jo@x.com").unwrap())
        .await
        .unwrap();
    let movie = seed_movie(&db).await;

    let now = Utc::now();
    let due = now + Duration::days(14);
    let rental = db
        .create_rental(&NewRental::new(user.id, movie.id, Some(due), now).unwrap())
        .await
        .unwrap();

    let fetched = db.get_rental(rental.id).await.unwrap().unwrap();
    assert_eq!(fetched.user_id, user.id);
    assert_eq!(fetched.movie_id, movie.id);
    // Stored as RFC 3339 text; second precision survives the round trip
    assert_eq!(
        fetched.due_date.unwrap().timestamp(),
        due.timestamp()
    );

    let for_user = db.list_rentals_for_user(user.id).await.unwrap();
    assert_eq!(for_user.len(), 1);
}

#[tokio::test]
async fn deleting_a_user_with_rentals_is_blocked_by_the_schema() {
    let db = test_db().await;
    let user = db
        .create_user(&NewUser::new("Jo Lee", "jo@x.com").unwrap())
        .await
        .unwrap();
    let movie = seed_movie(&db).await;
    db.create_rental(&NewRental::new(user.id, movie.id, None, Utc::now()).unwrap())
        .await
        .unwrap();

    let err = db.delete_user(user.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConstraintViolation);
}

#[tokio::test]
async fn rating_lifecycle() {
    let db = test_db().await;
    let user = db
        .create_user(&NewUser::new("Jo Lee", "jo@x.com").unwrap())
        .await
        .unwrap();
    let movie = seed_movie(&db).await;

    let rating = db
        .create_rating(&NewRating::new(user.id, movie.id, 9, Some("Loved it.")).unwrap())
        .await
        .unwrap();
    assert_eq!(rating.rating, 9);

    let for_movie = db.list_ratings_for_movie(movie.id).await.unwrap();
    assert_eq!(for_movie.len(), 1);
    assert_eq!(for_movie[0].review.as_deref(), Some("Loved it."));

    db.delete_rating(rating.id).await.unwrap();
    assert!(db.get_rating(rating.id).await.unwrap().is_none());

    let err = db.delete_rating(rating.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn movie_update_and_missing_lookups() {
    let db = test_db().await;
    let movie = seed_movie(&db).await;

    let update = MovieUpdate::new(None, Some("Drama"), None, None, Utc::now()).unwrap();
    let updated = db.update_movie(movie.id, &update).await.unwrap();
    assert_eq!(updated.genre, "Drama");
    assert_eq!(updated.title, movie.title);

    assert!(db.get_movie(999).await.unwrap().is_none());
    let err = db.update_movie(999, &update).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
