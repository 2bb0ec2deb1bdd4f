//! Step 2 — job details.

use super::field;
use crate::wizard::schema::{self, START_DATE_WINDOW_DAYS};
use crate::wizard::{JobType, Wizard};

const WEEKEND_NOTICE: &str = "HR and Finance departments cannot start on weekends";

pub fn render(wizard: &Wizard) -> String {
    let job = &wizard.record().job;
    let directory = wizard.directory();
    let today = wizard.today();

    let department = job.department.map(|d| d.to_string()).unwrap_or_default();
    let options: Vec<String> = directory.departments().map(|d| d.to_string()).collect();

    let mut parts = vec![
        field("Department", true, &department),
        format!("    options: {}", options.join(", ")),
        field("Job Title", true, &job.title),
    ];

    let start = job
        .start_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let (earliest, latest) = schema::start_date_window(today);
    parts.push(field("Start Date", true, &start));
    parts.push(format!(
        "    between {} and {} (within {START_DATE_WINDOW_DAYS} days)",
        earliest.format("%Y-%m-%d"),
        latest.format("%Y-%m-%d")
    ));
    if job.department.is_some_and(schema::restricts_weekend_start) {
        parts.push(format!("    note: {WEEKEND_NOTICE}"));
    }

    parts.push("  Job Type *:".to_string());
    for job_type in JobType::ALL {
        let mark = if job.job_type == Some(job_type) { "(o)" } else { "( )" };
        parts.push(format!("    {mark} {job_type}"));
    }

    let job_type = job.job_type.unwrap_or_default();
    let salary = job
        .salary
        .map(|s| schema::format_salary(s, job_type))
        .unwrap_or_default();
    parts.push(field(&format!("Salary {}", range_label(job_type)), true, &salary));
    if job.salary.is_some_and(|s| !schema::salary_in_range(job_type, s)) {
        parts.push("    warning: salary is outside the expected range".to_string());
    }

    match job.department {
        Some(department) => {
            let manager = job
                .manager_id
                .as_deref()
                .and_then(|id| directory.manager(id))
                .map(|m| m.name.as_str())
                .unwrap_or_default();
            parts.push(field("Manager", true, manager));
            let managers: Vec<String> = directory
                .managers_for(department)
                .iter()
                .map(|m| format!("{} ({})", m.name, m.id))
                .collect();
            parts.push(format!("    options: {}", managers.join(", ")));
        }
        None => parts.push("  Manager *: Select department first".to_string()),
    }

    parts.join("\n")
}

/// `($50-$150/hour)` or `($30,000-$200,000/year)`.
fn range_label(job_type: JobType) -> String {
    let range = schema::salary_range(job_type);
    let unit = if job_type.is_hourly() { "hour" } else { "year" };
    let bound = |amount: rust_decimal::Decimal| {
        let text = schema::format_salary(amount, job_type);
        match text.split_once('/') {
            Some((value, _)) => value.to_string(),
            None => text,
        }
    };
    format!("({}-{}/{unit})", bound(*range.start()), bound(*range.end()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::directory::Directory;
    use crate::wizard::{Department, FieldEdit};

    fn wizard() -> Wizard {
        Wizard::new(Directory::builtin()).with_today(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn manager_waits_for_department() {
        let view = render(&wizard());
        assert!(view.contains("Manager *: Select department first"));
        assert!(view.contains("between 2026-10-17 and 2027-01-15"));
        assert!(view.contains("(o) Full-time"));
        assert!(view.contains("Salary ($30,000-$200,000/year) *: $50,000/year"));
        assert!(!view.contains(WEEKEND_NOTICE));
    }

    #[test]
    fn department_filters_managers_and_shows_weekend_notice() {
        let mut w = wizard();
        w.edit(FieldEdit::Department(Some(Department::Hr))).unwrap();
        w.edit(FieldEdit::Manager(Some("hr-1".into()))).unwrap();

        let view = render(&w);
        assert!(view.contains("Manager *: Linda Martinez"));
        assert!(view.contains("Linda Martinez (hr-1)"));
        assert!(!view.contains("eng-1"));
        assert!(view.contains(WEEKEND_NOTICE));
    }

    #[test]
    fn contract_salary_is_hourly_and_warns_out_of_range() {
        let mut w = wizard();
        w.edit(FieldEdit::JobType(Some(JobType::Contract))).unwrap();
        w.edit(FieldEdit::Salary(Some(dec!(200)))).unwrap();

        let view = render(&w);
        assert!(view.contains("Salary ($50-$150/hour) *: $200/hour"));
        assert!(view.contains("warning: salary is outside the expected range"));
    }
}
