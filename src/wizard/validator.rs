//! Step validator — per-step business rules over the onboarding record.
//!
//! Every rule of a step runs, and failures accumulate in rule order. The
//! functions here are pure: the date the rules are judged against is passed
//! in rather than read from the clock.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::OnboardingRecord;
use super::schema;
use super::step::{Step, TOTAL_STEPS};

/// Outcome of validating one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl StepValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a single step of the record.
pub fn validate_step(step: Step, record: &OnboardingRecord, today: NaiveDate) -> StepValidation {
    let mut errors = Vec::new();
    match step {
        Step::PersonalInfo => personal_info(record, today, &mut errors),
        Step::JobDetails => job_details(record, today, &mut errors),
        Step::SkillsPreferences => skills_preferences(record, &mut errors),
        Step::EmergencyContact => emergency_contact(record, today, &mut errors),
        Step::ReviewSubmit => review_submit(record, &mut errors),
    }
    StepValidation::from_errors(errors)
}

/// Validity of every step, indexed by `Step::index`.
pub fn validate_all(record: &OnboardingRecord, today: NaiveDate) -> [bool; TOTAL_STEPS as usize] {
    Step::ALL.map(|step| validate_step(step, record, today).valid)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_blank_opt(value: Option<&String>) -> bool {
    value.is_none_or(|v| is_blank(v))
}

fn personal_info(record: &OnboardingRecord, today: NaiveDate, errors: &mut Vec<String>) {
    let personal = &record.personal;

    if !schema::has_two_name_tokens(&personal.full_name) {
        errors.push("Full name must have at least 2 words".into());
    }
    if !schema::is_valid_email(&personal.email) {
        errors.push("Please enter a valid email address".into());
    }
    if !schema::is_valid_phone(&personal.phone) {
        errors.push("Phone number must be in format +1-123-456-7890".into());
    }
    match personal.birth_date {
        None => errors.push("Date of birth is required".into()),
        Some(birth) if schema::calculate_age(birth, today) < schema::MIN_AGE => {
            errors.push("Must be at least 18 years old".into());
        }
        Some(_) => {}
    }
}

fn job_details(record: &OnboardingRecord, today: NaiveDate, errors: &mut Vec<String>) {
    let job = &record.job;

    if job.department.is_none() {
        errors.push("Please select a department".into());
    }
    if job.title.chars().count() < schema::MIN_TITLE_LEN {
        errors.push("Position title must be at least 3 characters".into());
    }
    match job.start_date {
        None => errors.push("Start date is required".into()),
        Some(start) => {
            if !schema::is_start_date_in_window(start, today) {
                errors.push("Start date must be within 90 days from today".into());
            }
            let restricted = job
                .department
                .is_some_and(schema::restricts_weekend_start);
            if restricted && schema::is_restricted_weekday(start) {
                errors.push("HR and Finance departments cannot start on weekends".into());
            }
        }
    }
    if job.job_type.is_none() {
        errors.push("Please select a job type".into());
    }
    if job.salary.is_none_or(|s| s <= Decimal::ZERO) {
        errors.push("Salary expectation is required".into());
    }
    if is_blank_opt(job.manager_id.as_ref()) {
        errors.push("Please select a manager".into());
    }
}

fn skills_preferences(record: &OnboardingRecord, errors: &mut Vec<String>) {
    let skills = &record.skills;

    if skills.skills.len() < schema::MIN_SKILLS {
        errors.push("Please select at least 3 skills".into());
    }
    if !skills.working_hours.is_complete() {
        errors.push("Working hours are required".into());
    }
    if skills.remote_percentage > schema::REMOTE_APPROVAL_THRESHOLD
        && skills.manager_approved != Some(true)
    {
        errors.push("Manager approval required for remote work > 50%".into());
    }
}

fn emergency_contact(record: &OnboardingRecord, today: NaiveDate, errors: &mut Vec<String>) {
    let contact = &record.emergency;

    if is_blank(&contact.contact_name) {
        errors.push("Contact name is required".into());
    }
    if is_blank(&contact.relationship) {
        errors.push("Please select a relationship".into());
    }
    if !schema::is_valid_phone(&contact.contact_phone) {
        errors.push("Contact phone number must be in format +1-123-456-7890".into());
    }
    if record.requires_guardian(today)
        && (is_blank_opt(contact.guardian_name.as_ref())
            || is_blank_opt(contact.guardian_phone.as_ref()))
    {
        errors.push("Guardian contact is required for employees under 21".into());
    }
}

fn review_submit(record: &OnboardingRecord, errors: &mut Vec<String>) {
    if !record.confirm_correct {
        errors.push("You must confirm the information is correct".into());
    }
}
