// ABOUTME: Route handlers for the workout REST resource
// ABOUTME: CRUD plus explicit queries for a workout's exercises and attached members
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::Database;
use crate::errors::AppError;
use crate::models::{NewWorkout, WorkoutUpdate};

/// Request body for creating a workout
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutBody {
    pub name: String,
    pub description: Option<String>,
}

/// Request body for updating a workout
#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/workouts/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route(
                "/api/workouts/:id/exercises",
                get(Self::handle_list_exercises),
            )
            .route("/api/workouts/:id/members", get(Self::handle_list_members))
            .with_state(database)
    }

    /// Handle GET /api/workouts
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let workouts = database.list_workouts().await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle POST /api/workouts
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateWorkoutBody>,
    ) -> Result<Response, AppError> {
        let new = NewWorkout::new(&body.name, body.description.as_deref())?;
        let workout = database.create_workout(&new).await?;
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle GET /api/workouts/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let workout = database
            .get_workout(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle PATCH /api/workouts/:id
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateWorkoutBody>,
    ) -> Result<Response, AppError> {
        let update = WorkoutUpdate::new(body.name.as_deref(), body.description.as_deref())?;
        if update.is_empty() {
            return Err(AppError::invalid_input("No fields to update"));
        }
        let workout = database.update_workout(id, &update).await?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle DELETE /api/workouts/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_workout(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/workouts/:id/exercises
    async fn handle_list_exercises(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let exercises = database.list_exercises_for_workout(id).await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle GET /api/workouts/:id/members
    async fn handle_list_members(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let members = database.list_members_for_workout(id).await?;
        Ok((StatusCode::OK, Json(members)).into_response())
    }
}
