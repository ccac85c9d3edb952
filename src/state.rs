/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - accounts: AccountRepo, auth: AuthGate
 * - Clone 前提で持つ (内部は Arc)
 * - 起動後は読み取り専用。リクエスト間で可変状態は共有しない
 */
use std::sync::Arc;

use crate::repos::AccountRepo;
use crate::services::auth::AuthGate;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepo>,
    pub auth: Arc<AuthGate>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountRepo>, auth: Arc<AuthGate>) -> Self {
        Self { accounts, auth }
    }
}
