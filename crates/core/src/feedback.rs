//! Feedback triage statuses and the forward-only transition rule.

/// Feedback has not been looked at yet.
pub const STATUS_PENDING: &str = "pending";

/// Feedback has been read by an admin.
pub const STATUS_REVIEWED: &str = "reviewed";

/// Feedback is filed away and hidden from the active queue.
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid feedback statuses, in triage order.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_REVIEWED, STATUS_ARCHIVED];

/// Position of a status in the triage order, if valid.
fn rank(status: &str) -> Option<usize> {
    VALID_STATUSES.iter().position(|s| *s == status)
}

/// Validate that a feedback status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if rank(status).is_some() {
        Ok(())
    } else {
        Err(format!(
            "Invalid feedback status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Whether feedback may move from `from` to `to`.
///
/// Status only moves forward (pending -> reviewed -> archived); skipping
/// straight to archived is allowed, moving backwards is not.
pub fn can_transition(from: &str, to: &str) -> bool {
    match (rank(from), rank(to)) {
        (Some(a), Some(b)) => b > a,
        _ => false,
    }
}
