//! Error types for the onboarding wizard.
//!
//! Step validation failures are not errors: they are reported as
//! [`StepValidation`](crate::wizard::StepValidation) data. The types here
//! cover what happens when an operation is refused or cannot run.

use std::path::PathBuf;

use uuid::Uuid;

/// Top-level error type for the wizard.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to read directory file {path}: {source}")]
    DirectoryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse directory file {path}: {source}")]
    DirectoryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Department {0} is listed more than once in the directory")]
    DuplicateDepartment(String),
}

/// A profile photo that was refused before touching the record.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachmentError {
    #[error("Only JPG and PNG files are allowed")]
    UnsupportedType { mime_type: String },

    #[error("File size must be under 2MB")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

/// A field edit that was refused. The record is left untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Notes must be under {max} characters")]
    NotesTooLong { max: usize },

    #[error("Select a department first")]
    NoDepartment,

    #[error("Skill '{skill}' is not offered in {department}")]
    UnknownSkill { skill: String, department: String },

    #[error("Skill '{0}' is not selected")]
    SkillNotSelected(String),

    #[error("Manager '{manager_id}' does not belong to {department}")]
    UnknownManager {
        manager_id: String,
        department: String,
    },

    #[error("Unknown relationship '{0}'")]
    UnknownRelationship(String),
}

/// Navigation requests the controller refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Step {step} is not complete: {}", errors.join("; "))]
    Blocked { step: u8, errors: Vec<String> },

    #[error("Cannot jump ahead from step {current} to step {target}")]
    Ahead { current: u8, target: u8 },

    #[error("Invalid step number {0}. Must be between 1 and 5")]
    OutOfRange(u8),

    #[error("Applications are submitted from the review step (currently on step {current})")]
    NotOnReview { current: u8 },
}

/// Errors from the external submission collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission of application {id} was rejected: {reason}")]
    Rejected { id: Uuid, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the wizard.
pub type Result<T> = std::result::Result<T, Error>;
