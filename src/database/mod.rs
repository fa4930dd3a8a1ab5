//! Credential store contract and its implementations.
//!
//! The login core only ever touches storage through [`CredentialStore`]:
//! existence-by-fingerprint, id-by-fingerprint, and token rotation keyed by
//! fingerprint. All three are atomic single-row operations; no multi-row
//! transaction spanning is required.
//!
//! ## Implementations
//!
//! - [`Roster`] — in-memory store for tests and embedding
//! - `Arc<tokio_postgres::Client>` — production store (feature `database`)
mod roster;
mod store;

pub use roster::*;
pub use store::*;

#[cfg(feature = "database")]
mod pg;
#[cfg(feature = "database")]
pub use pg::*;
