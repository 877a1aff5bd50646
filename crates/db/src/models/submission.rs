//! Submission entity model, DTOs, and typed review-queue variants.
//!
//! A submission row stores the union of event and opportunity fields with
//! the inapplicable half left NULL. Typed access goes through
//! [`Submission::details`], which matches exhaustively on the submission
//! type and fails with a validation error when a required field is
//! missing, so the publish step never inserts a half-formed record.

use plaza_core::error::CoreError;
use plaza_core::review::{TYPE_EVENT, TYPE_OPPORTUNITY};
use plaza_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::event::Event;
use crate::models::opportunity::Opportunity;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub submitter_name: String,
    pub submitter_email: String,
    pub title: String,
    pub description: String,
    pub submission_type: String,
    pub date: Option<CalendarDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub is_free: Option<bool>,
    pub deadline: Option<CalendarDate>,
    pub eligibility: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new submission (public submission form).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubmission {
    #[validate(length(min = 1, message = "submitter_name must not be empty"))]
    pub submitter_name: String,
    #[validate(email(message = "submitter_email must be a valid email address"))]
    pub submitter_email: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub submission_type: String,
    pub date: Option<CalendarDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub is_free: Option<bool>,
    pub deadline: Option<CalendarDate>,
    pub eligibility: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub flyer_url: Option<String>,
}

/// The entity-specific half of a submission, selected by exhaustive match
/// on its `submission_type`.
#[derive(Debug, Clone)]
pub enum SubmissionDetails {
    Event {
        date: CalendarDate,
        time: String,
        location: String,
        location_type: String,
        is_free: bool,
    },
    Opportunity {
        deadline: CalendarDate,
        eligibility: String,
        category: String,
        is_free: bool,
    },
}

/// The published record produced by approving a submission.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApprovedRecord {
    Event(Event),
    Opportunity(Opportunity),
}

impl Submission {
    /// Build the typed details for this submission.
    ///
    /// Fails with [`CoreError::Validation`] when the submission type is
    /// unknown or a field the target published table requires is missing.
    pub fn details(&self) -> Result<SubmissionDetails, CoreError> {
        match self.submission_type.as_str() {
            TYPE_EVENT => Ok(SubmissionDetails::Event {
                date: self.require("date", self.date)?,
                time: self.require("time", self.time.clone())?,
                location: self.require("location", self.location.clone())?,
                location_type: self.require("location_type", self.location_type.clone())?,
                is_free: self.is_free.unwrap_or(false),
            }),
            TYPE_OPPORTUNITY => Ok(SubmissionDetails::Opportunity {
                deadline: self.require("deadline", self.deadline)?,
                eligibility: self.require("eligibility", self.eligibility.clone())?,
                category: self.require("category", self.category.clone())?,
                is_free: self.is_free.unwrap_or(false),
            }),
            other => Err(CoreError::Validation(format!(
                "Unknown submission type '{other}'"
            ))),
        }
    }

    fn require<T>(&self, field: &str, value: Option<T>) -> Result<T, CoreError> {
        value.ok_or_else(|| {
            CoreError::Validation(format!(
                "{} submission {} is missing required field '{field}'",
                self.submission_type, self.id
            ))
        })
    }
}
