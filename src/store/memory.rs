//! In-memory `AccountStore` used by handler tests.
//!
//! Counts every call so tests can assert that a request never reached storage.

use super::AccountStore;
use crate::{error::AppError, models::account::Account};
use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicI32, AtomicUsize, Ordering},
};

#[derive(Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
    last_id: AtomicI32,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(&self, account: &Account) -> Result<Account, AppError> {
        self.touch();
        let mut created = account.clone();
        // Ids are never reused, like a SERIAL column
        created.id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.accounts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        self.touch();
        self.accounts.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        self.touch();
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        self.touch();
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        self.touch();
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.touch();
        Ok(self.accounts.lock().unwrap().clone())
    }
}
