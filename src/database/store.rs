use crate::UserId;
use crate::auth::AuthError;
use crate::auth::Fingerprint;
use crate::auth::Token;

/// Persistence gateway for credential records.
/// Abstracts SQL from the login orchestration.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// True iff an account's stored fingerprint equals `hash` exactly.
    async fn exists(&self, hash: &Fingerprint) -> Result<bool, AuthError>;
    /// Account id for `hash`, `None` when no account matches.
    async fn user_id(&self, hash: &Fingerprint) -> Result<Option<UserId>, AuthError>;
    /// Overwrite the stored login token for the account matching `hash`.
    /// Returns the number of accounts updated; zero when none matched.
    async fn rotate(&self, hash: &Fingerprint, token: &Token) -> Result<u64, AuthError>;
}
