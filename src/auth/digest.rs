use super::errors::DigestError;

/// One-way digest strategy.
///
/// The login flow only requires a deterministic fixed-length fingerprint of
/// credential material, so the primitive is swappable: a stronger hash can
/// replace [`Md5`] without touching orchestration. Implementations for which
/// the backend can be absent or misconfigured report [`DigestError`] instead
/// of degrading to an empty digest, which could spuriously match an empty
/// stored hash.
pub trait Digest {
    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>, DigestError>;
}

/// MD5 digest, matching the legacy account records.
///
/// Not collision resistant at cryptographic strength. Existing accounts are
/// keyed by MD5 fingerprints, so swapping the strategy invalidates them.
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5;

impl Digest for Md5 {
    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>, DigestError> {
        use md5::Digest as _;
        Ok(md5::Md5::digest(bytes).to_vec())
    }
}

/// SHA-256 digest, the drop-in stronger primitive for fresh deployments.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256;

impl Digest for Sha256 {
    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>, DigestError> {
        use sha2::Digest as _;
        Ok(sha2::Sha256::digest(bytes).to_vec())
    }
}
