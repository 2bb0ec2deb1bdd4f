//! Text views for the wizard, one per step plus the progress indicator.
//!
//! Views only read the session: they take the [`Wizard`] by reference and
//! render its record, the directory options, and the step's validation
//! result. Nothing here mutates state.

pub mod emergency;
pub mod job;
pub mod personal;
pub mod progress;
pub mod review;
pub mod skills;

use chrono::NaiveTime;

use crate::wizard::{Step, StepValidation, TOTAL_STEPS, Wizard};

pub use progress::render_progress;

const NOT_SET: &str = "(not set)";

/// Render the full screen for the current step: progress, fields, errors,
/// and navigation.
pub fn render_current(wizard: &Wizard) -> String {
    let step = wizard.current_step();
    let validation = wizard.validate_current();

    let mut parts = vec![
        render_progress(wizard),
        String::new(),
        format!("== {} ==", step.title()),
        render_step(step, wizard),
    ];
    if !validation.errors.is_empty() {
        parts.push(String::new());
        parts.push(render_errors(&validation));
    }
    parts.push(String::new());
    parts.push(render_navigation(wizard, &validation));
    parts.join("\n")
}

/// Render the fields of one step.
pub fn render_step(step: Step, wizard: &Wizard) -> String {
    match step {
        Step::PersonalInfo => personal::render(wizard),
        Step::JobDetails => job::render(wizard),
        Step::SkillsPreferences => skills::render(wizard),
        Step::EmergencyContact => emergency::render(wizard),
        Step::ReviewSubmit => review::render(wizard),
    }
}

pub fn render_errors(validation: &StepValidation) -> String {
    let mut parts = vec!["Please fix the following:".to_string()];
    parts.extend(validation.errors.iter().map(|e| format!("  ! {e}")));
    parts.join("\n")
}

/// Previous / step counter / Next-or-Submit bar.
pub fn render_navigation(wizard: &Wizard, validation: &StepValidation) -> String {
    let step = wizard.current_step();

    let previous = if step.previous().is_some() {
        "< Previous"
    } else {
        "          "
    };
    let action = if step.is_last() {
        "Submit Application"
    } else {
        "Next >"
    };
    let action = if validation.valid {
        action.to_string()
    } else {
        format!("{action} (disabled)")
    };

    format!(
        "{previous}    Step {} of {TOTAL_STEPS}    {action}",
        step.number()
    )
}

fn field(label: &str, required: bool, value: &str) -> String {
    let marker = if required { " *" } else { "" };
    let value = if value.trim().is_empty() { NOT_SET } else { value };
    format!("  {label}{marker}: {value}")
}

fn optional_text(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

fn time(value: Option<NaiveTime>) -> String {
    value
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::directory::Directory;
    use crate::wizard::FieldEdit;

    fn wizard() -> Wizard {
        Wizard::new(Directory::builtin()).with_today(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn first_screen_shows_errors_and_disabled_next() {
        let w = wizard();
        let screen = render_current(&w);
        assert!(screen.contains("== Personal Info =="));
        assert!(screen.contains("Full Name *: (not set)"));
        assert!(screen.contains("! Date of birth is required"));
        assert!(screen.contains("Step 1 of 5"));
        assert!(screen.contains("Next > (disabled)"));
        assert!(!screen.contains("< Previous"));
    }

    #[test]
    fn valid_step_enables_next() {
        let mut w = wizard();
        w.edit(FieldEdit::FullName("Jane Doe".into())).unwrap();
        w.edit(FieldEdit::Email("jane@co.com".into())).unwrap();
        w.edit(FieldEdit::Phone("+1-123-456-7890".into())).unwrap();
        w.edit(FieldEdit::BirthDate(NaiveDate::from_ymd_opt(1990, 1, 1)))
            .unwrap();
        let screen = render_current(&w);
        assert!(!screen.contains("Please fix the following"));
        assert!(screen.contains("Next >"));
        assert!(!screen.contains("(disabled)"));
    }

    #[test]
    fn navigation_reflects_validity() {
        let validation = StepValidation {
            valid: false,
            errors: vec!["x".into()],
        };
        let mut w = wizard();
        w.edit(FieldEdit::FullName("Jane Doe".into())).unwrap();
        let bar = render_navigation(&w, &validation);
        assert!(bar.contains("Next > (disabled)"));

        let valid = StepValidation {
            valid: true,
            errors: vec![],
        };
        assert!(render_navigation(&w, &valid).ends_with("Next >"));
    }

    #[test]
    fn field_helper_marks_required_and_blank() {
        assert_eq!(field("Email", true, ""), "  Email *: (not set)");
        assert_eq!(field("Notes", false, "hi"), "  Notes: hi");
        assert_eq!(time(None), "--:--");
        assert_eq!(time(NaiveTime::from_hms_opt(9, 5, 0)), "09:05");
    }
}
