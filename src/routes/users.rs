// ABOUTME: Route handlers for the user REST resource
// ABOUTME: CRUD endpoints plus the explicit user-to-rentals relationship query
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
use crate::models::{NewUser, UserUpdate};

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub name: String,
    pub email: String,
}

/// Request body for updating a user
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User routes handler
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/users",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/users/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/api/users/:id/rentals", get(Self::handle_list_rentals))
            .with_state(database)
    }

    /// Handle GET /api/users
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let users = database.list_users().await?;
        Ok((StatusCode::OK, Json(users)).into_response())
    }

    /// Handle POST /api/users
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateUserBody>,
    ) -> Result<Response, AppError> {
        let new = NewUser::new(&body.name, &body.email)?;
        let user = database.create_user(&new).await?;
        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle GET /api/users/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let user = database
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id}")))?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle PATCH /api/users/:id
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateUserBody>,
    ) -> Result<Response, AppError> {
        let update = UserUpdate::new(body.name.as_deref(), body.email.as_deref())?;
        if update.is_empty() {
            return Err(AppError::invalid_input("No fields to update"));
        }
        let user = database.update_user(id, &update).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle DELETE /api/users/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_user(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/users/:id/rentals
    async fn handle_list_rentals(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let rentals = database.list_rentals_for_user(id).await?;
        Ok((StatusCode::OK, Json(rentals)).into_response())
    }
}
