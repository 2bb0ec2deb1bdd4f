//! Onboarding record and its field types.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::schema;

/// Departments an applicant can join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 6] = [
        Self::Engineering,
        Self::Marketing,
        Self::Sales,
        Self::Hr,
        Self::Finance,
        Self::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown department: {}", s))
    }
}

/// Employment terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl Default for JobType {
    fn default() -> Self {
        Self::FullTime
    }
}

impl JobType {
    pub const ALL: [JobType; 3] = [Self::FullTime, Self::PartTime, Self::Contract];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }

    /// Contract salaries are hourly rates; everything else is annual.
    pub fn is_hourly(&self) -> bool {
        matches!(self, Self::Contract)
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown job type: {}", s))
    }
}

/// Metadata for an accepted profile photo. The bytes themselves are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePhoto {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Step 1 fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ProfilePhoto>,
}

/// Step 2 fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub department: Option<Department>,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub job_type: Option<JobType>,
    pub salary: Option<Decimal>,
    pub manager_id: Option<String>,
}

impl Default for JobDetails {
    fn default() -> Self {
        Self {
            department: None,
            title: String::new(),
            start_date: None,
            job_type: Some(JobType::default()),
            salary: Some(Decimal::new(50_000, 0)),
            manager_id: None,
        }
    }
}

/// Preferred daily working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0),
            end: NaiveTime::from_hms_opt(17, 0, 0),
        }
    }
}

impl WorkingHours {
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Step 3 fields.
///
/// `experience` only ever holds keys that are also in `skills`; the edit
/// layer maintains this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsPreferences {
    pub skills: Vec<String>,
    pub experience: BTreeMap<String, u8>,
    pub working_hours: WorkingHours,
    pub remote_percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SkillsPreferences {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Step 4 fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub contact_name: String,
    pub relationship: String,
    pub contact_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
}

/// The onboarding application collected across all five steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    pub personal: PersonalInfo,
    pub job: JobDetails,
    pub skills: SkillsPreferences,
    pub emergency: EmergencyContact,
    pub confirm_correct: bool,
}

impl OnboardingRecord {
    /// Age in whole years on `today`, if a birth date has been entered.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.personal
            .birth_date
            .map(|birth| schema::calculate_age(birth, today))
    }

    /// Whether the guardian fields apply to this applicant.
    pub fn requires_guardian(&self, today: NaiveDate) -> bool {
        self.age_on(today)
            .is_some_and(|age| age < schema::GUARDIAN_AGE)
    }
}
