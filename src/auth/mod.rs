//! Credential fingerprinting and login-token rotation.
//!
//! A login is proven against a stored [`Fingerprint`] of the combined
//! username and password, and each successful login on a new calendar day
//! rotates the account's [`Token`].
//!
//! ## Types
//!
//! - [`Digest`] — pluggable one-way digest strategy ([`Md5`], [`Sha256`])
//! - [`Fingerprint`] — stable account lookup key derived from credentials
//! - [`Token`] — date-salted rotating login token
//! - [`Account`] — stored credential record
//! - [`Authenticator`] — stateless orchestrator over a credential store
//! - [`Grant`] — (user id, token) pair handed to the transport for cookies
mod account;
mod authenticator;
mod credentials;
mod digest;
mod errors;

pub use account::*;
pub use authenticator::*;
pub use credentials::*;
pub use digest::*;
pub use errors::*;
