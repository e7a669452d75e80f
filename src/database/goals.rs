// ABOUTME: Goal CRUD operations and the goals table migration
// ABOUTME: Every goal belongs to exactly one member, checked before insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, GoalUpdate, NewGoal};

impl Database {
    /// Create the goals table
    pub(super) async fn migrate_goals(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                member_id INTEGER NOT NULL REFERENCES members(id),
                goal_type TEXT NOT NULL,
                target_value REAL,
                current_value REAL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_goals_member_id ON goals(member_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a new goal after checking the owning member exists.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` if the member does not exist.
    pub async fn create_goal(&self, new: &NewGoal) -> AppResult<Goal> {
        if !self.member_exists(new.member_id).await? {
            return Err(AppError::reference_not_found("Member", new.member_id));
        }

        let result = sqlx::query(
            "INSERT INTO goals (member_id, goal_type, target_value, current_value) VALUES ($1, $2, $3, $4)",
        )
        .bind(new.member_id)
        .bind(&new.goal_type)
        .bind(new.target_value)
        .bind(new.current_value)
        .execute(&self.pool)
        .await?;

        Ok(Goal {
            id: result.last_insert_rowid(),
            member_id: new.member_id,
            goal_type: new.goal_type.clone(),
            target_value: new.target_value,
            current_value: new.current_value,
        })
    }

    /// Fetch a goal by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_goal(&self, id: i64) -> AppResult<Option<Goal>> {
        let row = sqlx::query(
            "SELECT id, member_id, goal_type, target_value, current_value FROM goals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(row_to_goal))
    }

    /// List all goals.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_goals(&self) -> AppResult<Vec<Goal>> {
        let rows = sqlx::query(
            "SELECT id, member_id, goal_type, target_value, current_value FROM goals ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(row_to_goal).collect())
    }

    /// List the goals belonging to one member.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the member does not exist.
    pub async fn list_goals_for_member(&self, member_id: i64) -> AppResult<Vec<Goal>> {
        if !self.member_exists(member_id).await? {
            return Err(AppError::not_found(format!("Member {member_id}")));
        }
        let rows = sqlx::query(
            "SELECT id, member_id, goal_type, target_value, current_value FROM goals WHERE member_id = $1 ORDER BY id",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(row_to_goal).collect())
    }

    /// Apply a validated partial update to a goal.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the goal does not exist.
    pub async fn update_goal(&self, id: i64, update: &GoalUpdate) -> AppResult<Goal> {
        let mut goal = self
            .get_goal(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Goal {id}")))?;

        if let Some(goal_type) = &update.goal_type {
            goal.goal_type.clone_from(goal_type);
        }
        if let Some(target_value) = update.target_value {
            goal.target_value = Some(target_value);
        }
        if let Some(current_value) = update.current_value {
            goal.current_value = Some(current_value);
        }

        sqlx::query(
            "UPDATE goals SET goal_type = $2, target_value = $3, current_value = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&goal.goal_type)
        .bind(goal.target_value)
        .bind(goal.current_value)
        .execute(&self.pool)
        .await?;

        Ok(goal)
    }

    /// Delete a goal.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the goal does not exist.
    pub async fn delete_goal(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Goal {id}")));
        }
        Ok(())
    }
}

fn row_to_goal(row: &SqliteRow) -> Goal {
    Goal {
        id: row.get("id"),
        member_id: row.get("member_id"),
        goal_type: row.get("goal_type"),
        target_value: row.get("target_value"),
        current_value: row.get("current_value"),
    }
}
