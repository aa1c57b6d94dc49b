//! Placeholder authorization.
//!
//! The original front end shipped an always-permissive route guard. Kept
//! here as a typed capability check rather than a boolean so a real policy
//! can slot in without re-plumbing the handlers: deciding code matches on
//! [`AccessDecision`], never on `true`/`false`.

/// Capabilities the API surface can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read access to the lead collection.
    ReadLeads,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The capability is granted.
    Granted { capability: Capability },
    /// The capability is denied, with an operator-facing reason.
    Denied {
        capability: Capability,
        reason: String,
    },
}

/// Checks whether the (currently anonymous) caller holds `capability`.
///
/// The current policy grants everything; there is no real authentication.
pub fn authorize(capability: Capability) -> AccessDecision {
    AccessDecision::Granted { capability }
}
