// ABOUTME: Route handlers for the rating REST resource
// ABOUTME: Scores are validated to the 1-10 range before any row is written
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
use crate::models::NewRating;

/// Request body for creating a rating
#[derive(Debug, Deserialize)]
pub struct CreateRatingBody {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: i64,
    pub review: Option<String>,
}

/// Rating routes handler
pub struct RatingRoutes;

impl RatingRoutes {
    /// Create all rating routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/ratings",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/ratings/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(database)
    }

    /// Handle GET /api/ratings
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let ratings = database.list_ratings().await?;
        Ok((StatusCode::OK, Json(ratings)).into_response())
    }

    /// Handle POST /api/ratings
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateRatingBody>,
    ) -> Result<Response, AppError> {
        let new = NewRating::new(
            body.user_id,
            body.movie_id,
            body.rating,
            body.review.as_deref(),
        )?;
        let rating = database.create_rating(&new).await?;
        Ok((StatusCode::CREATED, Json(rating)).into_response())
    }

    /// Handle GET /api/ratings/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let rating = database
            .get_rating(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rating {id}")))?;
        Ok((StatusCode::OK, Json(rating)).into_response())
    }

    /// Handle DELETE /api/ratings/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_rating(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
