//! Onboarding wizard — a five-step form with gated progression.
//!
//! The applicant fills in one section per step. A step's rules must pass
//! before the wizard moves past it; moving back is always allowed. Once the
//! review step is confirmed the record is handed to a [`SubmissionSink`] and
//! the session starts over.

pub mod controller;
pub mod edit;
pub mod model;
pub mod schema;
pub mod step;
pub mod submission;
pub mod validator;

pub use controller::{StepProgress, SubmissionReceipt, Wizard};
pub use edit::FieldEdit;
pub use model::{
    Department, EmergencyContact, JobDetails, JobType, OnboardingRecord, PersonalInfo,
    ProfilePhoto, SkillsPreferences, WorkingHours,
};
pub use step::{Step, TOTAL_STEPS};
pub use submission::{Acknowledgment, SimulatedSubmission, SubmissionSink, SubmittedApplication};
pub use validator::{StepValidation, validate_all, validate_step};
