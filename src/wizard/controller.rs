//! Wizard — owns the record and the current step for one session, and
//! decides when the applicant may move between steps.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::edit::FieldEdit;
use super::model::OnboardingRecord;
use super::step::{Step, TOTAL_STEPS};
use super::submission::{Acknowledgment, SubmissionSink, SubmittedApplication};
use super::validator::{self, StepValidation};
use crate::directory::Directory;
use crate::error::{EditError, NavigationError, Result};

/// Per-step state for the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: Step,
    /// Behind the current step and valid.
    pub completed: bool,
    pub current: bool,
    /// Reachable with `jump_to`.
    pub clickable: bool,
}

/// A successful submission: the snapshot that was handed off and the
/// collaborator's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub application: SubmittedApplication,
    pub acknowledgment: Acknowledgment,
}

/// One applicant's wizard session.
pub struct Wizard {
    directory: Directory,
    record: OnboardingRecord,
    current: Step,
    unsaved_changes: bool,
    /// Pinned calendar date. `None` means "use the local date".
    today: Option<NaiveDate>,
}

impl Wizard {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            record: OnboardingRecord::default(),
            current: Step::default(),
            unsaved_changes: false,
            today: None,
        }
    }

    /// Judge date rules against a fixed day instead of the local calendar.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn record(&self) -> &OnboardingRecord {
        &self.record
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    /// Whether fields changed since the last successful advance.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Validity of every step, judged against today's date.
    pub fn completion(&self) -> [bool; TOTAL_STEPS as usize] {
        validator::validate_all(&self.record, self.today())
    }

    /// Apply a field edit. Any accepted edit marks the session dirty.
    pub fn edit(&mut self, edit: FieldEdit) -> std::result::Result<(), EditError> {
        let field = edit.field_name();
        match edit.apply(&mut self.record, &self.directory) {
            Ok(()) => {
                self.unsaved_changes = true;
                debug!(field, completion = ?self.completion(), "Field updated");
                Ok(())
            }
            Err(e) => {
                warn!(field, error = %e, "Field edit rejected");
                Err(e)
            }
        }
    }

    pub fn validate(&self, step: Step) -> StepValidation {
        validator::validate_step(step, &self.record, self.today())
    }

    pub fn validate_current(&self) -> StepValidation {
        self.validate(self.current)
    }

    /// Whether the Next/Submit action is currently enabled.
    pub fn can_proceed(&self) -> bool {
        self.validate_current().valid
    }

    /// Move forward one step if the current step validates.
    ///
    /// On the last step a successful advance stays put but still clears the
    /// unsaved-changes flag.
    pub fn advance(&mut self) -> std::result::Result<Step, NavigationError> {
        let validation = self.validate_current();
        if !validation.valid {
            debug!(
                step = %self.current,
                errors = validation.errors.len(),
                "Advance blocked"
            );
            return Err(NavigationError::Blocked {
                step: self.current.number(),
                errors: validation.errors,
            });
        }

        let from = self.current;
        if let Some(next) = from.next() {
            self.current = next;
        }
        self.unsaved_changes = false;
        info!(from = %from, to = %self.current, "Advanced");
        Ok(self.current)
    }

    /// Move back one step without validating. No-op on the first step.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.current.previous() {
            debug!(from = %self.current, to = %previous, "Retreated");
            self.current = previous;
        }
        self.current
    }

    /// Jump to a step at or before the current one.
    pub fn jump_to(&mut self, target: u8) -> std::result::Result<Step, NavigationError> {
        let step = Step::from_number(target)?;
        if step > self.current {
            return Err(NavigationError::Ahead {
                current: self.current.number(),
                target,
            });
        }
        self.current = step;
        Ok(step)
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        let completion = self.completion();
        Step::ALL
            .into_iter()
            .map(|step| StepProgress {
                step,
                completed: step < self.current && completion[step.index()],
                current: step == self.current,
                clickable: step <= self.current,
            })
            .collect()
    }

    /// Submit the application from the review step once every step
    /// validates.
    ///
    /// On success the snapshot is returned and the session's record is
    /// discarded. If the collaborator fails the record is kept.
    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<SubmissionReceipt> {
        if self.current != Step::ReviewSubmit {
            warn!(step = %self.current, "Submit refused outside the review step");
            return Err(NavigationError::NotOnReview {
                current: self.current.number(),
            }
            .into());
        }

        if let Some((step, validation)) = Step::ALL
            .into_iter()
            .map(|step| (step, self.validate(step)))
            .find(|(_, validation)| !validation.valid)
        {
            debug!(step = %step, errors = validation.errors.len(), "Submit blocked");
            return Err(NavigationError::Blocked {
                step: step.number(),
                errors: validation.errors,
            }
            .into());
        }

        let application = SubmittedApplication::new(self.record.clone());
        let acknowledgment = sink.submit(&application).await?;
        info!(application_id = %application.id, "Application submitted");

        self.reset();
        Ok(SubmissionReceipt {
            application,
            acknowledgment,
        })
    }

    /// Discard the record and start over at step 1.
    pub fn reset(&mut self) {
        self.record = OnboardingRecord::default();
        self.current = Step::default();
        self.unsaved_changes = false;
    }
}
