// ABOUTME: HTTP route composition for the reelfit API
// ABOUTME: Merges per-entity routers and applies tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! HTTP routes
//!
//! One router per entity, each owning its path group, merged into the
//! application router. Handlers translate verbs into gateway calls and
//! return flat JSON records; every failure is an [`crate::errors::AppError`]
//! rendered as the JSON error envelope.

mod exercises;
mod goals;
mod health;
mod members;
mod movies;
mod ratings;
mod rentals;
mod users;
mod workouts;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::database::Database;

pub use exercises::ExerciseRoutes;
pub use goals::GoalRoutes;
pub use health::HealthRoutes;
pub use members::MemberRoutes;
pub use movies::MovieRoutes;
pub use ratings::RatingRoutes;
pub use rentals::RentalRoutes;
pub use users::UserRoutes;
pub use workouts::WorkoutRoutes;

/// Build the full application router
#[must_use]
pub fn router(database: Arc<Database>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(UserRoutes::routes(database.clone()))
        .merge(MovieRoutes::routes(database.clone()))
        .merge(RentalRoutes::routes(database.clone()))
        .merge(RatingRoutes::routes(database.clone()))
        .merge(MemberRoutes::routes(database.clone()))
        .merge(WorkoutRoutes::routes(database.clone()))
        .merge(ExerciseRoutes::routes(database.clone()))
        .merge(GoalRoutes::routes(database))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
