//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod dashboard;
pub mod event;
pub mod feedback;
pub mod job;
pub mod newsletter;
pub mod opportunity;
pub mod resource;
pub mod role;
pub mod session;
pub mod submission;
pub mod user;
