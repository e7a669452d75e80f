// ABOUTME: Route handlers for the movie REST resource
// ABOUTME: CRUD endpoints plus the explicit movie-to-ratings relationship query
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
use crate::models::{MovieUpdate, NewMovie};

/// Request body for creating a movie
#[derive(Debug, Deserialize)]
pub struct CreateMovieBody {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub image: String,
}

/// Request body for updating a movie
#[derive(Debug, Deserialize)]
pub struct UpdateMovieBody {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub image: Option<String>,
}

/// Movie routes handler
pub struct MovieRoutes;

impl MovieRoutes {
    /// Create all movie routes
    #[must_use]
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route(
                "/api/movies",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/movies/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/api/movies/:id/ratings", get(Self::handle_list_ratings))
            .with_state(database)
    }

    /// Handle GET /api/movies
    async fn handle_list(State(database): State<Arc<Database>>) -> Result<Response, AppError> {
        let movies = database.list_movies().await?;
        Ok((StatusCode::OK, Json(movies)).into_response())
    }

    /// Handle POST /api/movies
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<CreateMovieBody>,
    ) -> Result<Response, AppError> {
        let new = NewMovie::new(
            &body.title,
            &body.genre,
            body.release_year,
            &body.image,
            Utc::now(),
        )?;
        let movie = database.create_movie(&new).await?;
        Ok((StatusCode::CREATED, Json(movie)).into_response())
    }

    /// Handle GET /api/movies/:id
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let movie = database
            .get_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Movie {id}")))?;
        Ok((StatusCode::OK, Json(movie)).into_response())
    }

    /// Handle PATCH /api/movies/:id
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<UpdateMovieBody>,
    ) -> Result<Response, AppError> {
        let update = MovieUpdate::new(
            body.title.as_deref(),
            body.genre.as_deref(),
            body.release_year,
            body.image.as_deref(),
            Utc::now(),
        )?;
        if update.is_empty() {
            return Err(AppError::invalid_input("No fields to update"));
        }
        let movie = database.update_movie(id, &update).await?;
        Ok((StatusCode::OK, Json(movie)).into_response())
    }

    /// Handle DELETE /api/movies/:id
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        database.delete_movie(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/movies/:id/ratings
    async fn handle_list_ratings(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let ratings = database.list_ratings_for_movie(id).await?;
        Ok((StatusCode::OK, Json(ratings)).into_response())
    }
}
