/*
 * Responsibility
 * - users テーブル向けの account CRUD (AccountRepo trait と Postgres 実装)
 * - handler は trait 越しに使う (テストでは in-memory 実装に差し替え)
 * - not found は Option / bool で返し、DB エラーと区別できるようにする
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

pub const DEFAULT_ROLE: &str = "USER";

#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_blocked: bool,
    pub registration_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone)]
pub struct AccountChanges<'a> {
    pub username: &'a str,
    pub email: &'a str,
    // None: keep the stored password
    pub password: Option<&'a str>,
}

#[async_trait]
pub trait AccountRepo: Send + Sync {
    async fn create(&self, account: NewAccount<'_>) -> Result<i64, RepoError>;

    // TODO: paginate once callers send limit/offset
    async fn list(&self) -> Result<Vec<AccountRow>, RepoError>;

    async fn get(&self, id: i64) -> Result<Option<AccountRow>, RepoError>;

    async fn update(
        &self,
        id: i64,
        changes: AccountChanges<'_>,
    ) -> Result<Option<AccountRow>, RepoError>;

    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}

#[derive(Debug, Clone)]
pub struct PgAccountRepo {
    db: PgPool,
}

impl PgAccountRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepo for PgAccountRepo {
    async fn create(&self, account: NewAccount<'_>) -> Result<i64, RepoError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, password, role, is_blocked, registration_date)
            VALUES ($1, $2, $3, $4, false, $5)
            RETURNING id
            "#,
        )
        .bind(account.username)
        .bind(account.email)
        .bind(account.password)
        .bind(DEFAULT_ROLE)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<AccountRow>, RepoError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, role, is_blocked, registration_date
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<AccountRow>, RepoError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, role, is_blocked, registration_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: AccountChanges<'_>,
    ) -> Result<Option<AccountRow>, RepoError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE users
            SET
                username = $2,
                email = $3,
                password = COALESCE($4, password)
            WHERE id = $1
            RETURNING id, username, email, role, is_blocked, registration_date
            "#,
        )
        .bind(id)
        .bind(changes.username)
        .bind(changes.email)
        .bind(changes.password)
        .fetch_optional(&self.db)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
