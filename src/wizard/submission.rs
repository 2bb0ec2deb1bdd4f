//! Submission — the hand-off of a finished application to an external
//! collaborator.
//!
//! The real collaborator is out of scope; [`SimulatedSubmission`] stands in
//! for it with a fixed delay and a canned acknowledgment.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::model::OnboardingRecord;
use crate::error::SubmissionError;

/// Acknowledgment text shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Application submitted successfully! Welcome to the team!";

/// Immutable snapshot of a record taken at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedApplication {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub record: OnboardingRecord,
}

impl SubmittedApplication {
    pub fn new(record: OnboardingRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }

    /// Indented JSON, as printed after a successful submission.
    pub fn to_pretty_json(&self) -> Result<String, SubmissionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// What the external collaborator returns on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub application_id: Uuid,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Receiver of submitted applications.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, application: &SubmittedApplication) -> Result<Acknowledgment, SubmissionError>;
}

/// Waits a fixed delay, then acknowledges. No retry, no cancellation.
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSubmission {
    async fn submit(&self, application: &SubmittedApplication) -> Result<Acknowledgment, SubmissionError> {
        info!(
            application_id = %application.id,
            delay_ms = self.delay.as_millis() as u64,
            "Submitting application"
        );
        tokio::time::sleep(self.delay).await;

        Ok(Acknowledgment {
            application_id: application.id,
            message: SUCCESS_MESSAGE.to_string(),
            received_at: Utc::now(),
        })
    }
}
