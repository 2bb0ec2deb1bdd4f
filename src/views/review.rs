//! Step 5 — read-only summary of every section and the confirmation box.

use chrono::NaiveDate;

use super::{optional_text, time};
use crate::wizard::{OnboardingRecord, Wizard, schema};

fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn line(label: &str, value: &str) -> String {
    format!("  {label}: {value}")
}

fn personal_section(record: &OnboardingRecord, today: NaiveDate) -> Vec<String> {
    let personal = &record.personal;
    let mut parts = vec![
        "Personal Information".to_string(),
        line("Name", &personal.full_name),
        line("Email", &personal.email),
        line("Phone", &personal.phone),
        line("Date of Birth", &date(personal.birth_date)),
    ];
    if let Some(age) = record.age_on(today) {
        parts.push(line("Age", &age.to_string()));
    }
    if let Some(ref photo) = personal.photo {
        parts.push(line("Profile Picture", &photo.file_name));
    }
    parts
}

fn job_section(wizard: &Wizard) -> Vec<String> {
    let job = &wizard.record().job;
    let job_type = job.job_type.unwrap_or_default();
    let manager = job
        .manager_id
        .as_deref()
        .and_then(|id| wizard.directory().manager(id))
        .map(|m| m.name.as_str())
        .unwrap_or_default();

    vec![
        "Job Details".to_string(),
        line(
            "Department",
            &job.department.map(|d| d.to_string()).unwrap_or_default(),
        ),
        line("Title", &job.title),
        line("Start Date", &date(job.start_date)),
        line("Job Type", job_type.as_str()),
        line(
            "Salary",
            &job.salary
                .map(|s| schema::format_salary(s, job_type))
                .unwrap_or_default(),
        ),
        line("Manager", manager),
    ]
}

fn skills_section(record: &OnboardingRecord) -> Vec<String> {
    let skills = &record.skills;
    let listed: Vec<String> = skills
        .skills
        .iter()
        .map(|s| {
            let years = skills
                .experience
                .get(s)
                .copied()
                .unwrap_or(schema::DEFAULT_SKILL_YEARS);
            format!("{s} ({years}yr)")
        })
        .collect();

    let mut parts = vec![
        "Skills & Preferences".to_string(),
        line("Skills", &listed.join(", ")),
        line(
            "Working Hours",
            &format!(
                "{} - {}",
                time(skills.working_hours.start),
                time(skills.working_hours.end)
            ),
        ),
        line("Remote Work", &format!("{}%", skills.remote_percentage)),
    ];
    if skills.remote_percentage > schema::REMOTE_APPROVAL_THRESHOLD
        && skills.manager_approved == Some(true)
    {
        parts.push("  ✓ Manager Approved Remote Work".to_string());
    }
    if let Some(ref notes) = skills.notes {
        parts.push(line("Notes", notes));
    }
    parts
}

fn emergency_section(record: &OnboardingRecord, today: NaiveDate) -> Vec<String> {
    let emergency = &record.emergency;
    let mut parts = vec![
        "Emergency Contact".to_string(),
        line("Name", &emergency.contact_name),
        line("Relationship", &emergency.relationship),
        line("Phone", &emergency.contact_phone),
    ];
    if record.requires_guardian(today) {
        parts.push(line(
            "Guardian Name",
            optional_text(emergency.guardian_name.as_deref()),
        ));
        parts.push(line(
            "Guardian Phone",
            optional_text(emergency.guardian_phone.as_deref()),
        ));
    }
    parts
}

pub fn render(wizard: &Wizard) -> String {
    let record = wizard.record();
    let today = wizard.today();

    let confirm = if record.confirm_correct { "[x]" } else { "[ ]" };

    let sections = [
        personal_section(record, today),
        job_section(wizard),
        skills_section(record),
        emergency_section(record, today),
        vec![format!("{confirm} I confirm all information is correct *")],
    ];
    sections
        .iter()
        .map(|s| s.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
