//! Shared application state handed to every handler.

use crate::{services::auth_service::TokenKeys, store::AccountStore};
use std::sync::Arc;

/// Constructed once in `main` and cloned into each request via `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenKeys) -> Self {
        Self { store, tokens }
    }
}
