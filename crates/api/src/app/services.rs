use std::sync::Arc;

use tally_infra::{AccountStore, InMemoryAccountStore};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    accounts: Arc<dyn AccountStore>,
}

impl AppServices {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &dyn AccountStore {
        self.accounts.as_ref()
    }
}

/// In-memory wiring. State lives as long as the returned services.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryAccountStore::new()))
}
