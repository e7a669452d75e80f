// ABOUTME: Route handlers for the goal REST resource
// ABOUTME: Creation checks that the owning member exists before writing
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
use crate::models::{GoalUpdate, NewGoal};

/// Request body for creating a goal
#[derive(Debug, Deserialize)]
pub struct CreateGoalBody {
    pub member_id: i64,
    pub goal_type: String,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
}

/// Request body for updating a goal
#[derive(Debug, Deserialize)]
pub struct UpdateGoalBody {
    pub goal_type: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
}

/// Goal routes handler
pub struct GoalRoutes;

impl GoalRoutes {
    /// Create all goal routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/goals",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/goals/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(database)
    }

    /// Handle GET /api/goals
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let goals = database.list_goals().await?;
        Ok((StatusCode::OK, Json(goals)).into_response())
    }

    /// Handle POST /api/goals
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateGoalBody>,
    ) -> Result<Response, AppError> {
        let new = NewGoal::new(
            body.member_id,
            &body.goal_type,
            body.target_value,
            body.current_value,
        )?;
        let goal = database.create_goal(&new).await?;
        Ok((StatusCode::CREATED, Json(goal)).into_response())
    }

    /// Handle GET /api/goals/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let goal = database
            .get_goal(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Goal {id}")))?;
        Ok((StatusCode::OK, Json(goal)).into_response())
    }

    /// Handle PATCH /api/goals/:id
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateGoalBody>,
    ) -> Result<Response, AppError> {
        let update = GoalUpdate::new(
            body.goal_type.as_deref(),
            body.target_value,
            body.current_value,
        )?;
        if update.is_empty() {
            return Err(AppError::invalid_input("No fields to update"));
        }
        let goal = database.update_goal(id, &update).await?;
        Ok((StatusCode::OK, Json(goal)).into_response())
    }

    /// Handle DELETE /api/goals/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_goal(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
