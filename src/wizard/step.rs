//! Wizard steps — the five sections of the onboarding record.

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

/// The steps of the onboarding wizard.
///
/// Progresses linearly: PersonalInfo → JobDetails → SkillsPreferences →
/// EmergencyContact → ReviewSubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PersonalInfo,
    JobDetails,
    SkillsPreferences,
    EmergencyContact,
    ReviewSubmit,
}

/// Number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 5;

impl Step {
    /// All steps in order.
    pub const ALL: [Step; TOTAL_STEPS as usize] = [
        Self::PersonalInfo,
        Self::JobDetails,
        Self::SkillsPreferences,
        Self::EmergencyContact,
        Self::ReviewSubmit,
    ];

    /// Convert a 1-based step number.
    pub fn from_number(n: u8) -> Result<Self, NavigationError> {
        match n {
            1 => Ok(Self::PersonalInfo),
            2 => Ok(Self::JobDetails),
            3 => Ok(Self::SkillsPreferences),
            4 => Ok(Self::EmergencyContact),
            5 => Ok(Self::ReviewSubmit),
            _ => Err(NavigationError::OutOfRange(n)),
        }
    }

    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::JobDetails => 2,
            Self::SkillsPreferences => 3,
            Self::EmergencyContact => 4,
            Self::ReviewSubmit => 5,
        }
    }

    /// Zero-based position, for indexing per-step arrays.
    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Heading shown in the progress indicator.
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::JobDetails => "Job Details",
            Self::SkillsPreferences => "Skills & Preferences",
            Self::EmergencyContact => "Emergency Contact",
            Self::ReviewSubmit => "Review & Submit",
        }
    }

    pub fn next(self) -> Option<Step> {
        use Step::*;
        match self {
            PersonalInfo => Some(JobDetails),
            JobDetails => Some(SkillsPreferences),
            SkillsPreferences => Some(EmergencyContact),
            EmergencyContact => Some(ReviewSubmit),
            ReviewSubmit => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        use Step::*;
        match self {
            PersonalInfo => None,
            JobDetails => Some(PersonalInfo),
            SkillsPreferences => Some(JobDetails),
            EmergencyContact => Some(SkillsPreferences),
            ReviewSubmit => Some(EmergencyContact),
        }
    }

    /// Whether this is the review step, where the wizard submits instead of advancing.
    pub fn is_last(self) -> bool {
        matches!(self, Self::ReviewSubmit)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::PersonalInfo
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PersonalInfo => "personal_info",
            Self::JobDetails => "job_details",
            Self::SkillsPreferences => "skills_preferences",
            Self::EmergencyContact => "emergency_contact",
            Self::ReviewSubmit => "review_submit",
        };
        write!(f, "{s}")
    }
}
