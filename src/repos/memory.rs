//! In-memory `AccountRepo` for handler tests. Counts every call so tests can
//! assert that a rejected request never reached persistence.
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::repos::account_repo::{
    AccountChanges, AccountRepo, AccountRow, DEFAULT_ROLE, NewAccount,
};
use crate::repos::error::RepoError;

#[derive(Debug, Default)]
pub struct MemoryAccountRepo {
    rows: Mutex<BTreeMap<i64, (AccountRow, String)>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
}

impl MemoryAccountRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn password_of(&self, id: i64) -> Option<String> {
        let rows = self.rows.lock().unwrap();
        rows.get(&id).map(|(_, password)| password.clone())
    }

    pub fn snapshot(&self, id: i64) -> Option<AccountRow> {
        let rows = self.rows.lock().unwrap();
        rows.get(&id).map(|(row, _)| row.clone())
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountRepo for MemoryAccountRepo {
    async fn create(&self, account: NewAccount<'_>) -> Result<i64, RepoError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        if rows
            .values()
            .any(|(r, _)| r.username == account.username || r.email == account.email)
        {
            return Err(RepoError::Conflict);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let row = AccountRow {
            id,
            username: account.username.to_string(),
            email: account.email.to_string(),
            role: DEFAULT_ROLE.to_string(),
            is_blocked: false,
            registration_date: Utc::now(),
        };
        rows.insert(id, (row, account.password.to_string()));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<AccountRow>, RepoError> {
        self.touch();
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().map(|(r, _)| r.clone()).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<AccountRow>, RepoError> {
        self.touch();
        Ok(self.snapshot(id))
    }

    async fn update(
        &self,
        id: i64,
        changes: AccountChanges<'_>,
    ) -> Result<Option<AccountRow>, RepoError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let Some((row, password)) = rows.get_mut(&id) else {
            return Ok(None);
        };
        row.username = changes.username.to_string();
        row.email = changes.email.to_string();
        if let Some(p) = changes.password {
            *password = p.to_string();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.remove(&id).is_some())
    }
}
