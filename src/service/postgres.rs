use async_trait::async_trait;
use sqlx::PgPool;

use crate::{errors::AppError, models::Friend, types::FriendsDTO};

use super::{FriendsRepository, FriendsService};

pub struct PgFriendsService {
    pool: PgPool,
}

impl PgFriendsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendsService for PgFriendsService {
    async fn save(&self, dto: FriendsDTO) -> Result<FriendsDTO, AppError> {
        let row: Friend = sqlx::query_as(
            r#"
            INSERT INTO friends (name, relationship)
            VALUES ($1, $2)
            RETURNING id, name, relationship
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.relationship)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, dto: FriendsDTO) -> Result<FriendsDTO, AppError> {
        let id = dto.id.ok_or_else(AppError::id_null)?;
        let row: Friend = sqlx::query_as(
            r#"
            UPDATE friends
            SET name = $2, relationship = $3
            WHERE id = $1
            RETURNING id, name, relationship
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.relationship)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn partial_update(&self, dto: FriendsDTO) -> Result<Option<FriendsDTO>, AppError> {
        let id = dto.id.ok_or_else(AppError::id_null)?;
        let existing: Option<Friend> =
            sqlx::query_as("SELECT id, name, relationship FROM friends WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(mut row) = existing else {
            return Ok(None);
        };
        row.merge(&dto);

        let merged: Friend = sqlx::query_as(
            r#"
            UPDATE friends
            SET name = $2, relationship = $3
            WHERE id = $1
            RETURNING id, name, relationship
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.relationship)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(merged.into()))
    }

    async fn find_all(&self) -> Result<Vec<FriendsDTO>, AppError> {
        let rows: Vec<Friend> = sqlx::query_as("SELECT id, name, relationship FROM friends")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self, id: i64) -> Result<Option<FriendsDTO>, AppError> {
        let row: Option<Friend> =
            sqlx::query_as("SELECT id, name, relationship FROM friends WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM friends WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

pub struct PgFriendsRepository {
    pool: PgPool,
}

impl PgFriendsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendsRepository for PgFriendsRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM friends WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
