use super::credentials::Fingerprint;
use super::credentials::Token;
use crate::UserId;

/// Stored credential record for one user.
///
/// Created at registration (outside this crate) and mutated only by login
/// token rotation. The fingerprint is the lookup key; the plaintext fields
/// mirror the legacy storage schema and are never consulted by the login
/// flow itself.
#[derive(Debug, Clone)]
pub struct Account {
    id: UserId,
    username: String,
    password: String,
    hash: Fingerprint,
    token: Option<Token>,
}

impl Account {
    pub fn new(id: UserId, username: String, password: String, hash: Fingerprint) -> Self {
        Self {
            id,
            username,
            password,
            hash,
            token: None,
        }
    }
    pub fn id(&self) -> UserId {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn hash(&self) -> &Fingerprint {
        &self.hash
    }
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
    /// Overwrite the stored login token with a freshly issued one.
    pub fn rotate(&mut self, token: Token) {
        self.token = Some(token);
    }
}
