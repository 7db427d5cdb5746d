use tally_infra::AccountHandle;

/// Account the current request acts on.
///
/// Inserted by the account-resolution middleware; present for every
/// account-scoped route.
#[derive(Debug, Clone)]
pub struct AccountContext {
    account: AccountHandle,
}

impl AccountContext {
    pub fn new(account: AccountHandle) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &AccountHandle {
        &self.account
    }
}
