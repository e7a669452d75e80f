// ABOUTME: Member CRUD operations and the members table migration
// ABOUTME: Mirrors the user module's email uniqueness handling for the gym family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Member, MemberUpdate, NewMember};

impl Database {
    /// Create the members table
    pub(super) async fn migrate_members(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS members (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                age INTEGER,
                weight REAL,
                height REAL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a new member.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the email is already in use, or a
    /// database error if the insert fails.
    pub async fn create_member(&self, new: &NewMember) -> AppResult<Member> {
        if self.get_member_by_email(&new.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email {} is already in use",
                new.email
            )));
        }

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO members (name, email, age, weight, height, created_at) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.age)
        .bind(new.weight)
        .bind(new.height)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Member {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            email: new.email.clone(),
            age: new.age,
            weight: new.weight,
            height: new.height,
            created_at: now,
        })
    }

    /// Fetch a member by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_member(&self, id: i64) -> AppResult<Option<Member>> {
        let row = sqlx::query(
            "SELECT id, name, email, age, weight, height, created_at FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_member).transpose()
    }

    /// Fetch a member by normalized email.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn get_member_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let row = sqlx::query(
            "SELECT id, name, email, age, weight, height, created_at FROM members WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_member).transpose()
    }

    /// List all members.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query(
            "SELECT id, name, email, age, weight, height, created_at FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_member).collect()
    }

    /// Apply a validated partial update to a member.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the member does not exist, or
    /// `ConstraintViolation` if a supplied email belongs to another member.
    pub async fn update_member(&self, id: i64, update: &MemberUpdate) -> AppResult<Member> {
        let mut member = self
            .get_member(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Member {id}")))?;

        if let Some(name) = &update.name {
            member.name.clone_from(name);
        }
        if let Some(email) = &update.email {
            if let Some(existing) = self.get_member_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::conflict(format!(
                        "Email {email} is already in use"
                    )));
                }
            }
            member.email.clone_from(email);
        }
        if let Some(age) = update.age {
            member.age = Some(age);
        }
        if let Some(weight) = update.weight {
            member.weight = Some(weight);
        }
        if let Some(height) = update.height {
            member.height = Some(height);
        }

        sqlx::query(
            "UPDATE members SET name = $2, email = $3, age = $4, weight = $5, height = $6 WHERE id = $1",
        )
        .bind(id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.age)
        .bind(member.weight)
        .bind(member.height)
        .execute(&self.pool)
        .await?;

        Ok(member)
    }

    /// Delete a member. Membership join rows cascade; goals do not.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the member does not exist, or
    /// `ConstraintViolation` if goals still reference it.
    pub async fn delete_member(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Member {id}")));
        }
        Ok(())
    }

    /// Check that a member row exists, for referential-integrity checks.
    pub(super) async fn member_exists(&self, id: i64) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

pub(super) fn row_to_member(row: &SqliteRow) -> AppResult<Member> {
    let created_at_str: String = row.get("created_at");
    Ok(Member {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        age: row.get("age"),
        weight: row.get("weight"),
        height: row.get("height"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
