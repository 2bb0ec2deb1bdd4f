//! Field edits — the only way the record changes.
//!
//! Each edit either applies completely or is rejected with an [`EditError`]
//! and leaves the record untouched. Rejections here are field-level input
//! checks; step completeness is the validator's job.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::{Department, JobType, OnboardingRecord, ProfilePhoto};
use super::schema;
use super::step::Step;
use crate::directory::Directory;
use crate::error::EditError;

/// A single change to one field of the onboarding record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldEdit {
    FullName(String),
    Email(String),
    Phone(String),
    BirthDate(Option<NaiveDate>),
    AttachPhoto(ProfilePhoto),
    RemovePhoto,

    Department(Option<Department>),
    Title(String),
    StartDate(Option<NaiveDate>),
    JobType(Option<JobType>),
    Salary(Option<Decimal>),
    Manager(Option<String>),

    /// Select the skill if it is not selected, deselect it otherwise.
    ToggleSkill(String),
    Experience { skill: String, years: u8 },
    WorkingHours {
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    },
    RemotePercentage(u8),
    ManagerApproved(Option<bool>),
    Notes(Option<String>),

    ContactName(String),
    Relationship(String),
    ContactPhone(String),
    GuardianName(Option<String>),
    GuardianPhone(Option<String>),

    ConfirmCorrect(bool),
}

impl FieldEdit {
    /// The step whose section holds this field.
    pub fn step(&self) -> Step {
        match self {
            Self::FullName(_)
            | Self::Email(_)
            | Self::Phone(_)
            | Self::BirthDate(_)
            | Self::AttachPhoto(_)
            | Self::RemovePhoto => Step::PersonalInfo,
            Self::Department(_)
            | Self::Title(_)
            | Self::StartDate(_)
            | Self::JobType(_)
            | Self::Salary(_)
            | Self::Manager(_) => Step::JobDetails,
            Self::ToggleSkill(_)
            | Self::Experience { .. }
            | Self::WorkingHours { .. }
            | Self::RemotePercentage(_)
            | Self::ManagerApproved(_)
            | Self::Notes(_) => Step::SkillsPreferences,
            Self::ContactName(_)
            | Self::Relationship(_)
            | Self::ContactPhone(_)
            | Self::GuardianName(_)
            | Self::GuardianPhone(_) => Step::EmergencyContact,
            Self::ConfirmCorrect(_) => Step::ReviewSubmit,
        }
    }

    /// Short field name for logs.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::FullName(_) => "full_name",
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
            Self::BirthDate(_) => "birth_date",
            Self::AttachPhoto(_) | Self::RemovePhoto => "photo",
            Self::Department(_) => "department",
            Self::Title(_) => "title",
            Self::StartDate(_) => "start_date",
            Self::JobType(_) => "job_type",
            Self::Salary(_) => "salary",
            Self::Manager(_) => "manager",
            Self::ToggleSkill(_) => "skills",
            Self::Experience { .. } => "experience",
            Self::WorkingHours { .. } => "working_hours",
            Self::RemotePercentage(_) => "remote_percentage",
            Self::ManagerApproved(_) => "manager_approved",
            Self::Notes(_) => "notes",
            Self::ContactName(_) => "contact_name",
            Self::Relationship(_) => "relationship",
            Self::ContactPhone(_) => "contact_phone",
            Self::GuardianName(_) => "guardian_name",
            Self::GuardianPhone(_) => "guardian_phone",
            Self::ConfirmCorrect(_) => "confirm_correct",
        }
    }

    /// Apply the edit to `record`, checking it against `directory` where
    /// the field draws from the reference table.
    pub fn apply(self, record: &mut OnboardingRecord, directory: &Directory) -> Result<(), EditError> {
        match self {
            Self::FullName(v) => record.personal.full_name = v,
            Self::Email(v) => record.personal.email = v,
            Self::Phone(v) => record.personal.phone = v,
            Self::BirthDate(v) => record.personal.birth_date = v,
            Self::AttachPhoto(photo) => {
                schema::check_photo(&photo.mime_type, photo.size_bytes)?;
                record.personal.photo = Some(photo);
            }
            Self::RemovePhoto => record.personal.photo = None,

            Self::Department(department) => set_department(record, directory, department),
            Self::Title(v) => record.job.title = v,
            Self::StartDate(v) => record.job.start_date = v,
            Self::JobType(v) => record.job.job_type = v,
            Self::Salary(v) => record.job.salary = v,
            Self::Manager(None) => record.job.manager_id = None,
            Self::Manager(Some(id)) => {
                let department = record.job.department.ok_or(EditError::NoDepartment)?;
                if !directory.managers_for(department).iter().any(|m| m.id == id) {
                    return Err(EditError::UnknownManager {
                        manager_id: id,
                        department: department.to_string(),
                    });
                }
                record.job.manager_id = Some(id);
            }

            Self::ToggleSkill(skill) => toggle_skill(record, directory, skill)?,
            Self::Experience { skill, years } => {
                if years > schema::MAX_SKILL_YEARS {
                    return Err(EditError::OutOfRange {
                        field: "Years of experience",
                        min: 0,
                        max: u32::from(schema::MAX_SKILL_YEARS),
                    });
                }
                if !record.skills.has_skill(&skill) {
                    return Err(EditError::SkillNotSelected(skill));
                }
                record.skills.experience.insert(skill, years);
            }
            Self::WorkingHours { start, end } => {
                record.skills.working_hours.start = start;
                record.skills.working_hours.end = end;
            }
            Self::RemotePercentage(pct) => {
                if pct > schema::MAX_REMOTE_PERCENTAGE {
                    return Err(EditError::OutOfRange {
                        field: "Remote work percentage",
                        min: 0,
                        max: u32::from(schema::MAX_REMOTE_PERCENTAGE),
                    });
                }
                record.skills.remote_percentage = pct;
            }
            Self::ManagerApproved(v) => record.skills.manager_approved = v,
            Self::Notes(notes) => {
                let notes = notes.filter(|n| !n.trim().is_empty());
                if notes
                    .as_ref()
                    .is_some_and(|n| n.chars().count() > schema::MAX_NOTES_LEN)
                {
                    return Err(EditError::NotesTooLong {
                        max: schema::MAX_NOTES_LEN,
                    });
                }
                record.skills.notes = notes;
            }

            Self::ContactName(v) => record.emergency.contact_name = v,
            Self::Relationship(v) => {
                if !v.trim().is_empty() && !directory.has_relationship(&v) {
                    return Err(EditError::UnknownRelationship(v));
                }
                record.emergency.relationship = v;
            }
            Self::ContactPhone(v) => record.emergency.contact_phone = v,
            Self::GuardianName(v) => record.emergency.guardian_name = v,
            Self::GuardianPhone(v) => record.emergency.guardian_phone = v,

            Self::ConfirmCorrect(v) => record.confirm_correct = v,
        }
        Ok(())
    }
}

/// Switch department, dropping the manager and skills that the new
/// department does not offer.
fn set_department(record: &mut OnboardingRecord, directory: &Directory, department: Option<Department>) {
    record.job.department = department;

    let (managers, catalogue) = match department {
        Some(d) => (directory.managers_for(d), directory.skills_for(d)),
        None => (&[][..], &[][..]),
    };

    let keeps_manager = record
        .job
        .manager_id
        .as_ref()
        .is_some_and(|id| managers.iter().any(|m| &m.id == id));
    if !keeps_manager {
        record.job.manager_id = None;
    }

    let skills = &mut record.skills;
    skills.skills.retain(|s| catalogue.contains(s));
    let selected = &skills.skills;
    skills.experience.retain(|k, _| selected.contains(k));
}

fn toggle_skill(record: &mut OnboardingRecord, directory: &Directory, skill: String) -> Result<(), EditError> {
    let skills = &mut record.skills;

    if let Some(pos) = skills.skills.iter().position(|s| *s == skill) {
        skills.skills.remove(pos);
        skills.experience.remove(&skill);
        return Ok(());
    }

    let department = record.job.department.ok_or(EditError::NoDepartment)?;
    if !directory.skills_for(department).contains(&skill) {
        return Err(EditError::UnknownSkill {
            skill,
            department: department.to_string(),
        });
    }
    skills
        .experience
        .insert(skill.clone(), schema::DEFAULT_SKILL_YEARS);
    skills.skills.push(skill);
    Ok(())
}
