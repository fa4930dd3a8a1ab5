/// Digest backend failure. Fatal configuration-level error: the flow must
/// never continue with an empty or null hash in place of a real one.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("digest backend unavailable: {0}")]
    Unavailable(&'static str),
}

/// Failures of the login flow itself.
///
/// A rejected credential is NOT an error; it is the `false`/`None` arm of the
/// operation's `Ok` value. Both variants here surface to the end user as a
/// generic failure with no internal detail.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("digest computation failed")]
    Digest(#[from] DigestError),
    #[error("credential store failed")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(err))
    }
}
