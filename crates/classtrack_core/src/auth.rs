//! Session gate seam for external identity providers.
//!
//! # Responsibility
//! - Define the narrow contract the core needs from an auth provider.
//! - Keep token formats and provider SDKs out of core.
//!
//! # Invariants
//! - Core only ever asks "is a user signed in" and requests sign-in/out.
//! - Provider failures surface as values, never panics.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Provider-side failure, with the provider's message.
    Provider(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(message) => write!(f, "auth provider error: {message}"),
        }
    }
}

impl Error for AuthError {}

/// Minimal session contract consumed by the presentation layer.
///
/// Implementations wrap whatever identity service the host application uses;
/// the core never inspects tokens or account details.
pub trait SessionGate {
    /// Whether a user session is currently active.
    fn is_signed_in(&self) -> bool;
    /// Starts a session through the provider.
    fn sign_in(&mut self) -> Result<(), AuthError>;
    /// Ends the active session. Signing out without a session is a no-op.
    fn sign_out(&mut self) -> Result<(), AuthError>;
}
