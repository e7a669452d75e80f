// ABOUTME: Route handlers for the member REST resource
// ABOUTME: CRUD plus workout association endpoints guarding the unique join pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::errors::AppError;
use crate::models::{MemberUpdate, NewMember, WorkoutMembership};

/// Request body for creating a member
#[derive(Debug, Deserialize)]
pub struct CreateMemberBody {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

/// Request body for updating a member
#[derive(Debug, Deserialize)]
pub struct UpdateMemberBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

/// Response for associating a workout with a member
#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipResponse {
    /// The association pair
    #[serde(flatten)]
    pub membership: WorkoutMembership,
    /// Whether a new join row was created (false when the pair already
    /// existed; the set is unchanged either way)
    pub attached: bool,
}

/// Member routes handler
pub struct MemberRoutes;

impl MemberRoutes {
    /// Create all member routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/members",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/members/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/api/members/:id/workouts", get(Self::handle_list_workouts))
            .route(
                "/api/members/:id/workouts/:workout_id",
                post(Self::handle_add_workout).delete(Self::handle_remove_workout),
            )
            .route("/api/members/:id/goals", get(Self::handle_list_goals))
            .with_state(database)
    }

    /// Handle GET /api/members
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let members = database.list_members().await?;
        Ok((StatusCode::OK, Json(members)).into_response())
    }

    /// Handle POST /api/members
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateMemberBody>,
    ) -> Result<Response, AppError> {
        let new = NewMember::new(&body.name, &body.email, body.age, body.weight, body.height)?;
        let member = database.create_member(&new).await?;
        Ok((StatusCode::CREATED, Json(member)).into_response())
    }

    /// Handle GET /api/members/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let member = database
            .get_member(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Member {id}")))?;
        Ok((StatusCode::OK, Json(member)).into_response())
    }

    /// Handle PATCH /api/members/:id
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateMemberBody>,
    ) -> Result<Response, AppError> {
        let update = MemberUpdate::new(
            body.name.as_deref(),
            body.email.as_deref(),
            body.age,
            body.weight,
            body.height,
        )?;
        if update.is_empty() {
            return Err(AppError::invalid_input("No fields to update"));
        }
        let member = database.update_member(id, &update).await?;
        Ok((StatusCode::OK, Json(member)).into_response())
    }

    /// Handle DELETE /api/members/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_member(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/members/:id/workouts
    async fn handle_list_workouts(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let workouts = database.list_workouts_for_member(id).await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle POST /api/members/:id/workouts/:workout_id
    async fn handle_add_workout(
        State(database): State<Arc<Database>>,
        Path((id, workout_id)): Path<(i64, i64)>,
    ) -> Result<Response, AppError> {
        let attached = database.add_workout_to_member(id, workout_id).await?;
        let status = if attached {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        let response = MembershipResponse {
            membership: WorkoutMembership {
                member_id: id,
                workout_id,
            },
            attached,
        };
        Ok((status, Json(response)).into_response())
    }

    /// Handle DELETE /api/members/:id/workouts/:workout_id
    async fn handle_remove_workout(
        State(database): State<Arc<Database>>,
        Path((id, workout_id)): Path<(i64, i64)>,
    ) -> Result<Response, AppError> {
        let removed = database.remove_workout_from_member(id, workout_id).await?;
        if !removed {
            return Err(AppError::not_found(format!(
                "Workout {workout_id} is not attached to member {id}"
            )));
        }
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/members/:id/goals
    async fn handle_list_goals(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let goals = database.list_goals_for_member(id).await?;
        Ok((StatusCode::OK, Json(goals)).into_response())
    }
}
