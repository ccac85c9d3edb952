/*
 * Responsibility
 * - Accounts の request/response DTO
 * - validation (形式チェック) 用の validate()
 * - response に password は含めない
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::account_repo::AccountRow;

/// Sent by the upstream auth service after a user registers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("username, email and password required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    pub message: &'static str,
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub username: String,
    pub email: String,
    // omitted: keep the current password
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateAccountRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err("username and email required");
        }
        if let Some(password) = &self.password
            && password.is_empty()
        {
            return Err("password cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_blocked: bool,
    pub registration_date: DateTime<Utc>,
}

impl From<AccountRow> for AccountResponse {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            role: row.role,
            is_blocked: row.is_blocked,
            registration_date: row.registration_date,
        }
    }
}
