// ABOUTME: Route handlers for the exercise REST resource
// ABOUTME: Creation checks that the owning workout exists before writing
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
use crate::models::{ExerciseUpdate, NewExercise};

/// Request body for creating an exercise
#[derive(Debug, Deserialize)]
pub struct CreateExerciseBody {
    pub workout_id: i64,
    pub name: String,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub duration: Option<f64>,
}

/// Request body for updating an exercise
#[derive(Debug, Deserialize)]
pub struct UpdateExerciseBody {
    pub name: Option<String>,
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub duration: Option<f64>,
}

/// Exercise routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/exercises",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/exercises/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(database)
    }

    /// Handle GET /api/exercises
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let exercises = database.list_exercises().await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle POST /api/exercises
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateExerciseBody>,
    ) -> Result<Response, AppError> {
        let new = NewExercise::new(
            body.workout_id,
            &body.name,
            body.sets,
            body.reps,
            body.weight,
            body.duration,
        )?;
        let exercise = database.create_exercise(&new).await?;
        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Handle GET /api/exercises/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let exercise = database
            .get_exercise(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {id}")))?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle PATCH /api/exercises/:id
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateExerciseBody>,
    ) -> Result<Response, AppError> {
        let update = ExerciseUpdate::new(
            body.name.as_deref(),
            body.sets,
            body.reps,
            body.weight,
            body.duration,
        )?;
        if update.is_empty() {
            return Err(AppError::invalid_input("No fields to update"));
        }
        let exercise = database.update_exercise(id, &update).await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle DELETE /api/exercises/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_exercise(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
