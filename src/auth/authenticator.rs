use super::credentials::Fingerprint;
use super::credentials::Token;
use super::digest::Digest;
use super::digest::Md5;
use super::errors::AuthError;
use crate::UserId;
use crate::database::CredentialStore;
use chrono::NaiveDate;

/// Session values handed to the transport layer for cookie issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    user: UserId,
    token: Token,
}

impl Grant {
    pub fn user(&self) -> UserId {
        self.user
    }
    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// Stateless login orchestrator over a credential store.
///
/// Owns no persistent state, so any scoping the transport chooses
/// (per-request, per-connection, pooled) works unchanged. Concurrent logins
/// for one account are not coordinated; simultaneous rotations race with
/// last-write-wins at the store, which must provide atomic single-row writes.
pub struct Authenticator<S, D = Md5> {
    store: S,
    digest: D,
}

impl<S> Authenticator<S>
where
    S: CredentialStore,
{
    /// Orchestrator with the default MD5 strategy, matching legacy accounts.
    pub fn new(store: S) -> Self {
        Self::with(store, Md5)
    }
}

impl<S, D> Authenticator<S, D>
where
    S: CredentialStore,
    D: Digest,
{
    pub fn with(store: S, digest: D) -> Self {
        Self { store, digest }
    }

    /// True iff an account's stored fingerprint exactly matches the one
    /// derived from these credentials. No side effects.
    ///
    /// A single combined fingerprint keys the lookup, so a wrong username and
    /// a wrong password are indistinguishable to the caller.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let hash = Fingerprint::derive(&self.digest, username, password)?;
        self.store.exists(&hash).await
    }

    /// Issue a fresh token for `today` and persist it on the matching
    /// account. Callers must have verified the credentials first; this is a
    /// precondition, not re-checked here.
    ///
    /// Rotation against a fingerprint with no matching account persists
    /// nothing and still returns the token (kept from the source system).
    pub async fn rotate(
        &self,
        username: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<Token, AuthError> {
        let hash = Fingerprint::derive(&self.digest, username, password)?;
        let token = Token::derive(&self.digest, username, password, today)?;
        log::debug!("rotating login token for {}", hash);
        let rows = self.store.rotate(&hash, &token).await?;
        if rows == 0 {
            log::warn!("login token rotation matched no account");
        }
        Ok(token)
    }

    /// Resolve the numeric account id behind these credentials, `None` when
    /// no account matches.
    pub async fn user_id(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserId>, AuthError> {
        let hash = Fingerprint::derive(&self.digest, username, password)?;
        self.store.user_id(&hash).await
    }

    /// The composite login flow: verify, then rotate the token and resolve
    /// the user id. `Ok(None)` is a normal authentication failure with no
    /// state change. The fingerprint is re-derived in each sub-call; it is
    /// pure and cheap, and keeping the sub-operations independent matches
    /// their individual contracts.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<Option<Grant>, AuthError> {
        if !self.verify(username, password).await? {
            return Ok(None);
        }
        let token = self.rotate(username, password, today).await?;
        match self.user_id(username, password).await? {
            Some(user) => Ok(Some(Grant { user, token })),
            None => {
                log::warn!("account disappeared between verification and id resolution");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::DigestError;
    use crate::database::Roster;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("date")
    }

    /// Roster seeded with the alice account, fingerprint of "alicesecret123".
    fn roster() -> Roster {
        let roster = Roster::default();
        let hash = Fingerprint::derive(&Md5, "alice", "secret123").unwrap();
        roster.enroll(crate::auth::Account::new(
            7,
            "alice".to_string(),
            "secret123".to_string(),
            hash,
        ));
        roster
    }

    #[tokio::test]
    async fn verify_accepts_exact_credentials() {
        let auth = Authenticator::new(roster());
        assert!(auth.verify("alice", "secret123").await.unwrap());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_password() {
        let auth = Authenticator::new(roster());
        assert!(!auth.verify("alice", "wrongpass").await.unwrap());
    }

    #[tokio::test]
    async fn verify_is_enumeration_resistant() {
        // unknown user and wrong password produce the same outcome shape
        let auth = Authenticator::new(roster());
        let unknown = auth.verify("nonexistent", "x").await.unwrap();
        let wrongpw = auth.verify("alice", "wrongpass").await.unwrap();
        assert_eq!(unknown, wrongpw);
        assert!(!unknown);
    }

    #[tokio::test]
    async fn failed_verify_mutates_nothing() {
        let roster = self::roster();
        let hash = Fingerprint::derive(&Md5, "alice", "secret123").unwrap();
        let auth = Authenticator::new(roster.clone());
        assert!(!auth.verify("alice", "wrongpass").await.unwrap());
        assert_eq!(roster.token(&hash), None);
    }

    #[tokio::test]
    async fn rotation_persists_and_returns_token() {
        let roster = self::roster();
        let hash = Fingerprint::derive(&Md5, "alice", "secret123").unwrap();
        let auth = Authenticator::new(roster.clone());
        let token = auth
            .rotate("alice", "secret123", date("2024-01-01"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "778efd91b565441aceaaac7e559f58f8");
        assert_eq!(roster.token(&hash), Some(token));
    }

    #[tokio::test]
    async fn rotation_same_day_is_idempotent() {
        let roster = self::roster();
        let auth = Authenticator::new(roster.clone());
        let one = auth
            .rotate("alice", "secret123", date("2024-01-01"))
            .await
            .unwrap();
        let two = auth
            .rotate("alice", "secret123", date("2024-01-01"))
            .await
            .unwrap();
        assert_eq!(one, two);
    }

    #[tokio::test]
    async fn rotation_changes_across_days() {
        let auth = Authenticator::new(roster());
        let jan1 = auth
            .rotate("alice", "secret123", date("2024-01-01"))
            .await
            .unwrap();
        let jan2 = auth
            .rotate("alice", "secret123", date("2024-01-02"))
            .await
            .unwrap();
        assert_ne!(jan1, jan2);
    }

    #[tokio::test]
    async fn rotation_without_account_is_a_noop() {
        let roster = self::roster();
        let auth = Authenticator::new(roster.clone());
        let token = auth
            .rotate("mallory", "guess", date("2024-01-01"))
            .await
            .unwrap();
        let hash = Fingerprint::derive(&Md5, "mallory", "guess").unwrap();
        assert_eq!(roster.token(&hash), None);
        assert!(!token.as_str().is_empty());
    }

    #[tokio::test]
    async fn resolves_user_id() {
        let auth = Authenticator::new(roster());
        assert_eq!(auth.user_id("alice", "secret123").await.unwrap(), Some(7));
        assert_eq!(auth.user_id("alice", "wrongpass").await.unwrap(), None);
    }

    #[tokio::test]
    async fn login_end_to_end() {
        let roster = self::roster();
        let hash = Fingerprint::derive(&Md5, "alice", "secret123").unwrap();
        let auth = Authenticator::new(roster.clone());
        let grant = auth
            .login("alice", "secret123", date("2024-01-01"))
            .await
            .unwrap()
            .expect("grant");
        assert_eq!(grant.user(), 7);
        assert_eq!(grant.token().as_str(), "778efd91b565441aceaaac7e559f58f8");
        assert_eq!(roster.token(&hash), Some(grant.token().clone()));
    }

    #[tokio::test]
    async fn login_rejects_and_mutates_nothing() {
        let roster = self::roster();
        let hash = Fingerprint::derive(&Md5, "alice", "secret123").unwrap();
        let auth = Authenticator::new(roster.clone());
        let grant = auth
            .login("alice", "wrongpass", date("2024-01-01"))
            .await
            .unwrap();
        assert_eq!(grant, None);
        assert_eq!(roster.token(&hash), None);
    }

    /// Digest strategy whose backend is unavailable.
    struct Broken;
    impl Digest for Broken {
        fn digest(&self, _: &[u8]) -> Result<Vec<u8>, DigestError> {
            Err(DigestError::Unavailable("broken"))
        }
    }

    #[tokio::test]
    async fn digest_failure_propagates() {
        // must surface as an error, never as a spuriously-matching empty hash
        let auth = Authenticator::with(roster(), Broken);
        assert!(matches!(
            auth.verify("alice", "secret123").await,
            Err(AuthError::Digest(_))
        ));
        assert!(matches!(
            auth.login("alice", "secret123", date("2024-01-01")).await,
            Err(AuthError::Digest(_))
        ));
    }

    #[tokio::test]
    async fn sha256_strategy_is_substitutable() {
        let roster = Roster::default();
        let hash = Fingerprint::derive(&crate::auth::Sha256, "alice", "secret123").unwrap();
        roster.enroll(crate::auth::Account::new(
            1,
            "alice".to_string(),
            "secret123".to_string(),
            hash,
        ));
        let auth = Authenticator::with(roster, crate::auth::Sha256);
        assert!(auth.verify("alice", "secret123").await.unwrap());
        assert!(!auth.verify("alice", "wrongpass").await.unwrap());
    }
}
