//! Submission review constants and transition rules.
//!
//! Defines the valid submission statuses and types and the rules for
//! moving a submission through review, used by both the DB and API layers.

/// Submission is awaiting review.
pub const STATUS_PENDING: &str = "pending";

/// Submission was approved and published; the row is removed on approval.
pub const STATUS_APPROVED: &str = "approved";

/// Submission was rejected; the row is retained for the rejected list.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid submission statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Submission describes a community event.
pub const TYPE_EVENT: &str = "event";

/// Submission describes an opportunity (grant, call, program).
pub const TYPE_OPPORTUNITY: &str = "opportunity";

/// All valid submission types.
pub const VALID_TYPES: &[&str] = &[TYPE_EVENT, TYPE_OPPORTUNITY];

/// Validate that a submission status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate that a submission type string is one of the accepted values.
pub fn validate_submission_type(submission_type: &str) -> Result<(), String> {
    if VALID_TYPES.contains(&submission_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid submission type '{submission_type}'. Must be one of: {}",
            VALID_TYPES.join(", ")
        ))
    }
}

/// Whether a submission in `status` can still be reviewed.
///
/// Approved rows are deleted on approval and rejected rows are terminal,
/// so only pending submissions accept a review decision.
pub fn is_reviewable(status: &str) -> bool {
    status == STATUS_PENDING
}
