//! Admin credential check.
//!
//! Placeholder authentication: plain equality against a configured list, no
//! hashing, no rate limiting. The form only depends on [`AdminVerifier`], so a
//! real credential store can replace [`StaticAdminDirectory`].

use serde::{Deserialize, Serialize};

/// A configured administrator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub name: String,
}

impl AdminAccount {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// The single account shipped by default.
    pub fn default_admin() -> Self {
        Self::new("admin", "admin123", "System Administrator")
    }
}

/// Credential verification capability.
pub trait AdminVerifier: Send + Sync {
    /// Returns the matching account, or `None` on any mismatch.
    fn verify(&self, username: &str, password: &str) -> Option<AdminAccount>;
}

/// In-memory account list.
#[derive(Debug, Clone)]
pub struct StaticAdminDirectory {
    accounts: Vec<AdminAccount>,
}

impl StaticAdminDirectory {
    pub fn new(accounts: Vec<AdminAccount>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[AdminAccount] {
        &self.accounts
    }
}

impl Default for StaticAdminDirectory {
    fn default() -> Self {
        Self::new(vec![AdminAccount::default_admin()])
    }
}

impl AdminVerifier for StaticAdminDirectory {
    fn verify(&self, username: &str, password: &str) -> Option<AdminAccount> {
        self.accounts
            .iter()
            .find(|account| account.username == username && account.password == password)
            .cloned()
    }
}
