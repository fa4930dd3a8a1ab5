use super::digest::Digest;
use super::errors::DigestError;
use chrono::NaiveDate;

/// Stable account lookup key: digest of `username ++ password`, rendered as
/// lowercase hex with leading-zero padding per byte.
///
/// Inputs are concatenated as exact bytes. No normalization, trimming, or
/// length limiting is applied; accounts are keyed by the byte sequence the
/// user typed at registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn derive<D>(digest: &D, username: &str, password: &str) -> Result<Self, DigestError>
    where
        D: Digest,
    {
        let combined = format!("{}{}", username, password);
        digest.digest(combined.as_bytes()).map(hex::encode).map(Self)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rotating login token: digest of `username ++ password ++ date`.
///
/// The date component has calendar-day resolution (ISO-8601 `YYYY-MM-DD`),
/// so the token changes once per day for a fixed credential and two logins
/// on the same day issue the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn derive<D>(
        digest: &D,
        username: &str,
        password: &str,
        date: NaiveDate,
    ) -> Result<Self, DigestError>
    where
        D: Digest,
    {
        let combined = format!("{}{}{}", username, password, date);
        digest.digest(combined.as_bytes()).map(hex::encode).map(Self)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
