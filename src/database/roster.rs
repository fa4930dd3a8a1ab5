use super::store::CredentialStore;
use crate::UserId;
use crate::auth::Account;
use crate::auth::AuthError;
use crate::auth::Fingerprint;
use crate::auth::Token;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

/// In-memory credential store.
///
/// Accounts are keyed by fingerprint, mirroring the production table's
/// unique `hash` column. Clones share the same underlying map, so a test can
/// keep a handle for inspection while the orchestrator owns another.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    accounts: Arc<Mutex<HashMap<Fingerprint, Account>>>,
}

impl Roster {
    /// Register an account. Replaces any record with the same fingerprint.
    pub fn enroll(&self, account: Account) {
        self.accounts
            .lock()
            .expect("roster lock")
            .insert(account.hash().clone(), account);
    }
    /// Currently stored login token for `hash`, if any.
    pub fn token(&self, hash: &Fingerprint) -> Option<Token> {
        self.accounts
            .lock()
            .expect("roster lock")
            .get(hash)
            .and_then(|account| account.token().cloned())
    }
}

impl CredentialStore for Roster {
    async fn exists(&self, hash: &Fingerprint) -> Result<bool, AuthError> {
        Ok(self.accounts.lock().expect("roster lock").contains_key(hash))
    }

    async fn user_id(&self, hash: &Fingerprint) -> Result<Option<UserId>, AuthError> {
        Ok(self
            .accounts
            .lock()
            .expect("roster lock")
            .get(hash)
            .map(Account::id))
    }

    async fn rotate(&self, hash: &Fingerprint, token: &Token) -> Result<u64, AuthError> {
        match self.accounts.lock().expect("roster lock").get_mut(hash) {
            Some(account) => {
                account.rotate(token.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
