//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod event_repo;
pub mod feedback_repo;
pub mod job_repo;
pub mod newsletter_repo;
pub mod opportunity_repo;
pub mod resource_repo;
pub mod role_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use event_repo::EventRepo;
pub use feedback_repo::FeedbackRepo;
pub use job_repo::JobRepo;
pub use newsletter_repo::NewsletterSignupRepo;
pub use opportunity_repo::OpportunityRepo;
pub use resource_repo::ResourceRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
pub use user_repo::UserRepo;
