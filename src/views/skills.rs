//! Step 3 — skills and preferences.

use super::{field, time};
use crate::wizard::schema::{DEFAULT_SKILL_YEARS, MAX_NOTES_LEN, MIN_SKILLS, REMOTE_APPROVAL_THRESHOLD};
use crate::wizard::Wizard;

pub fn render(wizard: &Wizard) -> String {
    let skills = &wizard.record().skills;
    let mut parts = vec![format!("  Skills * (select at least {MIN_SKILLS}):")];

    match wizard.record().job.department {
        Some(department) => {
            for skill in wizard.directory().skills_for(department) {
                if skills.has_skill(skill) {
                    let years = skills
                        .experience
                        .get(skill)
                        .copied()
                        .unwrap_or(DEFAULT_SKILL_YEARS);
                    parts.push(format!("    [x] {skill} ({years} yr)"));
                } else {
                    parts.push(format!("    [ ] {skill}"));
                }
            }
        }
        None => parts.push("    Select a department first".to_string()),
    }

    let hours = &skills.working_hours;
    parts.push(format!(
        "  Preferred Working Hours *: {} - {}",
        time(hours.start),
        time(hours.end)
    ));
    parts.push(format!("  Remote Work: {}%", skills.remote_percentage));

    if skills.remote_percentage > REMOTE_APPROVAL_THRESHOLD {
        let approved = match skills.manager_approved {
            Some(true) => "yes",
            Some(false) => "no",
            None => "",
        };
        parts.push(field("Manager Approved", true, approved));
    }

    let notes = skills.notes.as_deref().unwrap_or_default();
    parts.push(format!(
        "{} ({}/{MAX_NOTES_LEN})",
        field("Notes", false, notes),
        notes.chars().count()
    ));

    parts.join("\n")
}
