//! HTTP handlers, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod jobs;
pub mod maintenance;
pub mod newsletter;
pub mod opportunities;
pub mod resources;
pub mod submissions;
pub mod uploads;
pub mod users;
