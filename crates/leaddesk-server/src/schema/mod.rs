//! API schema types for response definitions.
//!
//! Request decoding lives in `leaddesk_core::query::RawLeadQuery` so the
//! degradation policy is testable without HTTP; this module only defines
//! the response shapes.

pub mod health;
pub mod leads;
