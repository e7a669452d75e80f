// ABOUTME: Route handlers for the rental REST resource
// ABOUTME: Create accepts the due date as an ISO 8601 string and checks referenced rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::database::Database;
use crate::errors::AppError;
use crate::models::NewRental;

/// Request body for creating a rental
#[derive(Debug, Deserialize)]
pub struct CreateRentalBody {
    pub user_id: i64,
    pub movie_id: i64,
    /// Optional ISO 8601 due date, strictly in the future
    pub due_date: Option<String>,
}

/// Rental routes handler
pub struct RentalRoutes;

impl RentalRoutes {
    /// Create all rental routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/rentals",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/rentals/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(database)
    }

    /// Handle GET /api/rentals
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let rentals = database.list_rentals().await?;
        Ok((StatusCode::OK, Json(rentals)).into_response())
    }

    /// Handle POST /api/rentals
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateRentalBody>,
    ) -> Result<Response, AppError> {
        let new = NewRental::from_raw(
            body.user_id,
            body.movie_id,
            body.due_date.as_deref(),
            Utc::now(),
        )?;
        let rental = database.create_rental(&new).await?;
        Ok((StatusCode::CREATED, Json(rental)).into_response())
    }

    /// Handle GET /api/rentals/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let rental = database
            .get_rental(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rental {id}")))?;
        Ok((StatusCode::OK, Json(rental)).into_response())
    }

    /// Handle DELETE /api/rentals/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_rental(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
