// ABOUTME: Integration tests for the gym record family against an in-memory database
// ABOUTME: Covers join-pair uniqueness, association lifecycle, and owned-entity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

#![allow(missing_docs, clippy::unwrap_used)]

use reelfit::database::Database;
use reelfit::errors::ErrorCode;
use reelfit::models::{Member, MemberUpdate, NewExercise, NewGoal, NewMember, NewWorkout, Workout};

async fn test_db() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

async fn seed_member(db: &Database) -> Member {
    let new = NewMember::new("Sam Reyes", "sam@gym.io", Some(29), Some(74.5), Some(178.0)).unwrap();
    db.create_member(&new).await.unwrap()
}

async fn seed_workout(db: &Database) -> Workout {
    let new = NewWorkout::new("Push Day", Some("Compound lifts first")).unwrap();
    db.create_workout(&new).await.unwrap()
}

#[tokio::test]
async fn attaching_the_same_workout_twice_leaves_one_join_row() {
    let db = test_db().await;
    let member = seed_member(&db).await;
    let workout = seed_workout(&db).await;

    assert!(db
        .add_workout_to_member(member.id, workout.id)
        .await
        .unwrap());
    // Second append is absorbed, not duplicated
    assert!(!db
        .add_workout_to_member(member.id, workout.id)
        .await
        .unwrap());

    let workouts = db.list_workouts_for_member(member.id).await.unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].id, workout.id);
}

#[tokio::test]
async fn dissociating_removes_exactly_the_pair() {
    let db = test_db().await;
    let member = seed_member(&db).await;
    let push = seed_workout(&db).await;
    let pull = db
        .create_workout(&NewWorkout::new("Pull Day", None).unwrap())
        .await
        .unwrap();

    db.add_workout_to_member(member.id, push.id).await.unwrap();
    db.add_workout_to_member(member.id, pull.id).await.unwrap();

    assert!(db
        .remove_workout_from_member(member.id, push.id)
        .await
        .unwrap());
    // Removing an absent pair reports false rather than erroring
    assert!(!db
        .remove_workout_from_member(member.id, push.id)
        .await
        .unwrap());

    let remaining = db.list_workouts_for_member(member.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, pull.id);
}

#[tokio::test]
async fn association_endpoints_require_existing_rows() {
    let db = test_db().await;
    let member = seed_member(&db).await;

    let err = db.add_workout_to_member(member.id, 99).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);

    let err = db.add_workout_to_member(42, 99).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);
}

#[tokio::test]
async fn membership_is_navigable_from_both_sides() {
    let db = test_db().await;
    let sam = seed_member(&db).await;
    let dana = db
        .create_member(&NewMember::new("Dana Kim", "dana@gym.io", None, None, None).unwrap())
        .await
        .unwrap();
    let workout = seed_workout(&db).await;

    db.add_workout_to_member(sam.id, workout.id).await.unwrap();
    db.add_workout_to_member(dana.id, workout.id).await.unwrap();

    let members = db.list_members_for_workout(workout.id).await.unwrap();
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn deleting_a_member_cleans_up_join_rows() {
    let db = test_db().await;
    let member = seed_member(&db).await;
    let workout = seed_workout(&db).await;
    db.add_workout_to_member(member.id, workout.id)
        .await
        .unwrap();

    db.delete_member(member.id).await.unwrap();

    assert!(db
        .list_members_for_workout(workout.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn member_emails_are_unique_and_normalized() {
    let db = test_db().await;
    let member = db
        .create_member(&NewMember::new("Sam Reyes", " SAM@Gym.IO ", None, None, None).unwrap())
        .await
        .unwrap();
    assert_eq!(member.email, "sam@gym.io");

    let err = db
        .create_member(&NewMember::new("Impostor", "sam@gym.io", None, None, None).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConstraintViolation);
}

#[tokio::test]
async fn exercises_belong_to_an_existing_workout() {
    let db = test_db().await;

    let new = NewExercise::new(7, "Bench Press", Some(4), Some(8), Some(80.0), None).unwrap();
    let err = db.create_exercise(&new).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);

    let workout = seed_workout(&db).await;
    let new = NewExercise::new(workout.id, "Bench Press", Some(4), Some(8), Some(80.0), None)
        .unwrap();
    let exercise = db.create_exercise(&new).await.unwrap();

    let listed = db.list_exercises_for_workout(workout.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, exercise.id);
}

#[tokio::test]
async fn goals_belong_to_an_existing_member() {
    let db = test_db().await;

    let new = NewGoal::new(3, "weight", Some(80.0), Some(88.0)).unwrap();
    let err = db.create_goal(&new).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);

    let member = seed_member(&db).await;
    let goal = db
        .create_goal(&NewGoal::new(member.id, "weight", Some(80.0), Some(88.0)).unwrap())
        .await
        .unwrap();

    let listed = db.list_goals_for_member(member.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, goal.id);

    // A member with goals cannot be deleted; the goal rows keep it pinned
    let err = db.delete_member(member.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConstraintViolation);
}

#[tokio::test]
async fn member_update_revalidates_supplied_fields() {
    let db = test_db().await;
    let member = seed_member(&db).await;

    let update = MemberUpdate::new(None, None, Some(30), Some(73.0), None).unwrap();
    let updated = db.update_member(member.id, &update).await.unwrap();
    assert_eq!(updated.age, Some(30));
    assert_eq!(updated.name, member.name);

    assert!(MemberUpdate::new(None, Some("not-an-email"), None, None, None).is_err());
}
