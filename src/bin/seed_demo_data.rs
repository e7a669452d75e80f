// ABOUTME: Demo data seeder for the reelfit backend
// ABOUTME: Populates sample users, movies, rentals, ratings, and the gym record family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

//! Demo data seeder for reelfit.
//!
//! Populates the database with sample data for both record families.
//! Every record goes through the validating constructors, so the seeded
//! rows obey the same rules the API enforces.
//!
//! Usage:
//! ```bash
//! # Seed with default settings
//! cargo run --bin seed-demo-data
//!
//! # Wipe existing rows before seeding
//! cargo run --bin seed-demo-data -- --reset
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use anyhow::Result;
use chrono::{Datelike, Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use reelfit::config::environment::ServerConfig;
use reelfit::database::Database;
use reelfit::logging::LoggingConfig;
use reelfit::models::{NewExercise, NewGoal, NewMember, NewMovie, NewRating, NewRental, NewUser, NewWorkout};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Reelfit Demo Data Seeder",
    long_about = "Populate the database with sample users, movies, rentals, ratings, and gym records"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete existing rows before seeding
    #[arg(long)]
    reset: bool,

    /// Number of rentals to generate
    #[arg(long, default_value = "15")]
    rentals: u32,

    /// Number of ratings to generate
    #[arg(long, default_value = "20")]
    ratings: u32,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Demo user configuration
struct DemoUser {
    name: &'static str,
    email: &'static str,
}

/// Demo movie configuration
struct DemoMovie {
    title: &'static str,
    image: &'static str,
}

/// Demo member configuration
struct DemoMember {
    name: &'static str,
    email: &'static str,
    age: i64,
    weight: f64,
    height: f64,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser { name: "Maya Chen", email: "maya.chen@example.com" },
    DemoUser { name: "Liam Ortiz", email: "liam.ortiz@example.com" },
    DemoUser { name: "Ava Brooks", email: "ava.brooks@example.com" },
    DemoUser { name: "Noah Patel", email: "noah.patel@example.com" },
    DemoUser { name: "Sofia Rossi", email: "sofia.rossi@example.com" },
    DemoUser { name: "Ethan Walsh", email: "ethan.walsh@example.com" },
    DemoUser { name: "Isla McKay", email: "isla.mckay@example.com" },
    DemoUser { name: "Lucas Weber", email: "lucas.weber@example.com" },
    DemoUser { name: "Emma Laurent", email: "emma.laurent@example.com" },
    DemoUser { name: "Omar Haddad", email: "omar.haddad@example.com" },
];

const DEMO_MOVIES: &[DemoMovie] = &[
    DemoMovie {
        title: "The Shawshank Redemption",
        image: "https://upload.wikimedia.org/wikipedia/en/8/81/ShawshankRedemptionMoviePoster.jpg",
    },
    DemoMovie {
        title: "The Godfather",
        image: "https://upload.wikimedia.org/wikipedia/en/1/1c/Godfather_ver1.jpg",
    },
    DemoMovie {
        title: "The Dark Knight",
        image: "https://upload.wikimedia.org/wikipedia/en/8/8a/Dark_Knight.jpg",
    },
    DemoMovie {
        title: "Pulp Fiction",
        image: "https://upload.wikimedia.org/wikipedia/en/8/82/Pulp_Fiction_cover.jpg",
    },
    DemoMovie {
        title: "Forrest Gump",
        image: "https://upload.wikimedia.org/wikipedia/en/6/67/Forrest_Gump_poster.jpg",
    },
    DemoMovie {
        title: "Inception",
        image: "https://upload.wikimedia.org/wikipedia/en/7/7f/Inception_ver3.jpg",
    },
    DemoMovie {
        title: "Interstellar",
        image: "https://upload.wikimedia.org/wikipedia/en/b/bc/Interstellar_film_poster.jpg",
    },
    DemoMovie {
        title: "Parasite",
        image: "https://upload.wikimedia.org/wikipedia/en/5/53/Parasite_%282019_film%29.png",
    },
    DemoMovie {
        title: "Joker",
        image: "https://upload.wikimedia.org/wikipedia/en/e/e1/Joker_%282019_film%29_poster.jpg",
    },
    DemoMovie {
        title: "Avengers: Endgame",
        image: "https://upload.wikimedia.org/wikipedia/en/0/0d/Avengers_Endgame_poster.jpg",
    },
];

const GENRES: &[&str] = &["Drama", "Action", "Thriller", "Comedy", "Sci-Fi"];

const REVIEWS: &[&str] = &[
    "Gripping from the first scene to the last.",
    "A slow start but the payoff is worth it.",
    "Beautifully shot, thinly written.",
    "Watched it twice in one weekend.",
    "The ending divided the whole household.",
    "Great performances all around.",
    "Not as good as everyone says, still solid.",
    "An easy recommendation for a rainy evening.",
];

const DEMO_MEMBERS: &[DemoMember] = &[
    DemoMember { name: "Sam Reyes", email: "sam.reyes@example.com", age: 29, weight: 74.5, height: 178.0 },
    DemoMember { name: "Dana Kim", email: "dana.kim@example.com", age: 35, weight: 62.0, height: 165.0 },
    DemoMember { name: "Jonas Berg", email: "jonas.berg@example.com", age: 42, weight: 88.0, height: 185.0 },
    DemoMember { name: "Priya Nair", email: "priya.nair@example.com", age: 26, weight: 58.5, height: 160.0 },
    DemoMember { name: "Marco Silva", email: "marco.silva@example.com", age: 31, weight: 79.0, height: 176.0 },
    DemoMember { name: "Helen Cho", email: "helen.cho@example.com", age: 48, weight: 66.0, height: 170.0 },
];

/// (name, description) pairs for demo workouts
const DEMO_WORKOUTS: &[(&str, &str)] = &[
    ("Push Day", "Chest, shoulders, and triceps with compound lifts first"),
    ("Pull Day", "Back and biceps, rows before curls"),
    ("Leg Day", "Squat focus with accessory hamstring work"),
    ("Morning Cardio", "Zone 2 treadmill or rowing session"),
    ("Mobility Flow", "Full-body stretching and joint prep"),
];

const GOAL_TYPES: &[&str] = &["weight", "reps", "duration"];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let logging = LoggingConfig {
        level: if args.verbose { "debug".into() } else { "info".into() },
        ..LoggingConfig::default()
    };
    logging.init()?;

    let config = ServerConfig::from_env()?;
    let database_url = args
        .database_url
        .unwrap_or_else(|| config.database.url.to_connection_string());

    info!("Seeding database at {database_url}");
    let database = Database::new(&database_url).await?;

    if args.reset {
        reset(&database).await?;
    }

    // Deterministic output so repeated runs are comparable
    let mut rng = StdRng::seed_from_u64(4242);

    seed_rental_family(&database, &mut rng, args.rentals, args.ratings).await?;
    seed_gym_family(&database, &mut rng).await?;

    info!("Seeding complete");
    Ok(())
}

/// Delete existing rows, children before parents
async fn reset(database: &Database) -> Result<()> {
    info!("Resetting existing data...");
    for table in [
        "rentals",
        "ratings",
        "users",
        "movies",
        "goals",
        "exercises",
        "member_workouts",
        "members",
        "workouts",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(database.pool())
            .await?;
    }
    Ok(())
}

async fn seed_rental_family(
    database: &Database,
    rng: &mut StdRng,
    rental_count: u32,
    rating_count: u32,
) -> Result<()> {
    let now = Utc::now();

    info!("Seeding users...");
    let mut users = Vec::with_capacity(DEMO_USERS.len());
    for demo in DEMO_USERS {
        let new = NewUser::new(demo.name, demo.email)?;
        users.push(database.create_user(&new).await?);
    }

    info!("Seeding movies...");
    let mut movies = Vec::with_capacity(DEMO_MOVIES.len());
    for demo in DEMO_MOVIES {
        let genre = GENRES.choose(&mut *rng).copied().unwrap_or("Drama");
        let release_year = rng.gen_range(1990..=now.year());
        let new = NewMovie::new(demo.title, genre, release_year, demo.image, now)?;
        movies.push(database.create_movie(&new).await?);
    }

    info!("Seeding rentals...");
    for _ in 0..rental_count {
        let user = &users[rng.gen_range(0..users.len())];
        let movie = &movies[rng.gen_range(0..movies.len())];
        // Due between one and three weeks out
        let due_date = now + Duration::days(rng.gen_range(7..=21));
        let new = NewRental::new(user.id, movie.id, Some(due_date), now)?;
        let rental = database.create_rental(&new).await?;
        debug!(
            rental.id = rental.id,
            user.id = user.id,
            movie.id = movie.id,
            "created rental"
        );
    }

    info!("Seeding ratings...");
    for _ in 0..rating_count {
        let user = &users[rng.gen_range(0..users.len())];
        let movie = &movies[rng.gen_range(0..movies.len())];
        let score = rng.gen_range(1..=10);
        let review = if rng.gen_bool(0.7) {
            REVIEWS.choose(&mut *rng).copied()
        } else {
            None
        };
        let new = NewRating::new(user.id, movie.id, score, review)?;
        database.create_rating(&new).await?;
    }

    info!(
        "Rental family seeded: {} users, {} movies, {} rentals, {} ratings",
        users.len(),
        movies.len(),
        rental_count,
        rating_count
    );
    Ok(())
}

async fn seed_gym_family(database: &Database, rng: &mut StdRng) -> Result<()> {
    info!("Seeding members...");
    let mut members = Vec::with_capacity(DEMO_MEMBERS.len());
    for demo in DEMO_MEMBERS {
        let new = NewMember::new(
            demo.name,
            demo.email,
            Some(demo.age),
            Some(demo.weight),
            Some(demo.height),
        )?;
        members.push(database.create_member(&new).await?);
    }

    info!("Seeding workouts...");
    let mut workouts = Vec::with_capacity(DEMO_WORKOUTS.len());
    for (name, description) in DEMO_WORKOUTS {
        let new = NewWorkout::new(name, Some(description))?;
        workouts.push(database.create_workout(&new).await?);
    }

    info!("Attaching workouts to members...");
    let mut attached = 0_u32;
    for member in &members {
        for _ in 0..rng.gen_range(1..=3) {
            let workout = &workouts[rng.gen_range(0..workouts.len())];
            // Duplicate picks are absorbed by the unique join pair
            if database.add_workout_to_member(member.id, workout.id).await? {
                attached += 1;
            }
        }
    }
    debug!(attached, "membership rows created");

    info!("Seeding exercises...");
    let catalog: &[(&str, Option<i64>, Option<i64>, Option<f64>, Option<f64>)] = &[
        ("Bench Press", Some(4), Some(8), Some(80.0), None),
        ("Overhead Press", Some(3), Some(10), Some(45.0), None),
        ("Barbell Row", Some(4), Some(8), Some(70.0), None),
        ("Back Squat", Some(5), Some(5), Some(110.0), None),
        ("Romanian Deadlift", Some(3), Some(10), Some(90.0), None),
        ("Treadmill Intervals", None, None, None, Some(30.0)),
        ("Rowing Machine", None, None, None, Some(20.0)),
        ("Couch Stretch", Some(2), None, None, Some(5.0)),
    ];
    for workout in &workouts {
        for _ in 0..rng.gen_range(2..=3) {
            let (name, sets, reps, weight, duration) = catalog[rng.gen_range(0..catalog.len())];
            let new = NewExercise::new(workout.id, name, sets, reps, weight, duration)?;
            database.create_exercise(&new).await?;
        }
    }

    info!("Seeding goals...");
    for member in &members {
        let goal_type = GOAL_TYPES.choose(&mut *rng).copied().unwrap_or("weight");
        let target = f64::from(rng.gen_range(10..=100));
        let current = target * rng.gen_range(0.2..=0.8);
        let new = NewGoal::new(member.id, goal_type, Some(target), Some(current))?;
        database.create_goal(&new).await?;
    }

    info!(
        "Gym family seeded: {} members, {} workouts",
        members.len(),
        workouts.len()
    );
    Ok(())
}
