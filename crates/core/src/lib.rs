//! Shared domain types and pure business rules for the Plaza admin service.
//!
//! This crate has no I/O: it defines the common id/timestamp types, the
//! domain error taxonomy, and the rules that the data and API layers
//! enforce (submission review transitions, expiry semantics, feedback
//! triage ordering, role names).

pub mod error;
pub mod expiry;
pub mod feedback;
pub mod review;
pub mod roles;
pub mod types;
