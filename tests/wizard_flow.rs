//! End-to-end tests for the wizard: a full walk from an empty record to a
//! submitted snapshot, plus the gating rules that hold across steps.
//!
//! Every wizard is pinned to 2026-10-17 (a Saturday) so date rules do not
//! depend on the wall clock.

use std::time::Duration;

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use rust_decimal_macros::dec;
use tokio::time::timeout;

use onboarding_wizard::cli::{CommandParser, Reply, Session};
use onboarding_wizard::directory::Directory;
use onboarding_wizard::error::{Error, NavigationError};
use onboarding_wizard::views;
use onboarding_wizard::wizard::{
    Department, FieldEdit, JobType, OnboardingRecord, SimulatedSubmission, Step, Wizard,
    validate_step,
};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn wizard() -> Wizard {
    Wizard::new(Directory::builtin()).with_today(today())
}

fn years_ago(years: u32) -> NaiveDate {
    today().with_year(today().year() - years as i32).unwrap()
}

fn fill_personal(w: &mut Wizard, birth: NaiveDate) {
    w.edit(FieldEdit::FullName("Jane Doe".into())).unwrap();
    w.edit(FieldEdit::Email("jane@co.com".into())).unwrap();
    w.edit(FieldEdit::Phone("+1-123-456-7890".into())).unwrap();
    w.edit(FieldEdit::BirthDate(Some(birth))).unwrap();
}

fn fill_job(w: &mut Wizard, department: Department, start: NaiveDate) {
    let manager = w.directory().managers_for(department)[0].id.clone();
    w.edit(FieldEdit::Department(Some(department))).unwrap();
    w.edit(FieldEdit::Title("Analyst".into())).unwrap();
    w.edit(FieldEdit::StartDate(Some(start))).unwrap();
    w.edit(FieldEdit::Manager(Some(manager))).unwrap();
}

fn pick_skills(w: &mut Wizard, count: usize) {
    let department = w.record().job.department.unwrap();
    let catalogue = w.directory().skills_for(department).to_vec();
    for skill in catalogue.into_iter().take(count) {
        w.edit(FieldEdit::ToggleSkill(skill)).unwrap();
    }
}

fn fill_contact(w: &mut Wizard) {
    w.edit(FieldEdit::ContactName("John Doe".into())).unwrap();
    w.edit(FieldEdit::Relationship("Parent".into())).unwrap();
    w.edit(FieldEdit::ContactPhone("+1-555-010-2000".into()))
        .unwrap();
}

#[test]
fn default_record_fails_step_one_until_example_data_is_entered() {
    let record = OnboardingRecord::default();
    assert!(!validate_step(Step::PersonalInfo, &record, today()).valid);

    let mut w = wizard();
    fill_personal(&mut w, years_ago(30));
    let result = w.validate(Step::PersonalInfo);
    assert!(result.valid, "{:?}", result.errors);
}

#[test]
fn underage_applicants_never_pass_step_one() {
    for birth in [years_ago(17), years_ago(18) + Days::new(1), today()] {
        let mut w = wizard();
        fill_personal(&mut w, birth);
        let result = w.validate(Step::PersonalInfo);
        assert!(!result.valid, "born {birth}");
        assert!(result.errors.contains(&"Must be at least 18 years old".to_string()));
    }

    let mut w = wizard();
    fill_personal(&mut w, years_ago(18));
    assert!(w.validate(Step::PersonalInfo).valid);
}

#[test]
fn weekend_rule_applies_only_to_hr_and_finance() {
    let next_week: Vec<NaiveDate> = (1..=7).map(|d| today() + Days::new(d)).collect();

    for department in Department::ALL {
        for &start in &next_week {
            let mut w = wizard();
            fill_job(&mut w, department, start);
            let restricted = matches!(department, Department::Hr | Department::Finance)
                && matches!(start.weekday(), Weekday::Fri | Weekday::Sat);
            assert_eq!(
                w.validate(Step::JobDetails).valid,
                !restricted,
                "{department} starting {} ({start})",
                start.weekday()
            );
        }
    }
}

#[test]
fn start_date_window_is_inclusive() {
    let mut w = wizard();
    fill_job(&mut w, Department::Engineering, today());
    assert!(w.validate(Step::JobDetails).valid);

    w.edit(FieldEdit::StartDate(Some(today() + Days::new(90))))
        .unwrap();
    assert!(w.validate(Step::JobDetails).valid);

    w.edit(FieldEdit::StartDate(Some(today() + Days::new(91))))
        .unwrap();
    assert_eq!(
        w.validate(Step::JobDetails).errors,
        vec!["Start date must be within 90 days from today"]
    );
}

#[test]
fn skills_step_needs_three_skills_hours_and_approval() {
    let mut w = wizard();
    fill_job(&mut w, Department::Sales, today() + Days::new(10));

    pick_skills(&mut w, 2);
    assert!(!w.validate(Step::SkillsPreferences).valid);

    pick_skills(&mut w, 3);
    // Toggling the first two again deselects them; pick a fresh set.
    let selected = w.record().skills.skills.clone();
    assert_eq!(selected.len(), 1);
    let catalogue = w.directory().skills_for(Department::Sales).to_vec();
    for skill in catalogue.iter().filter(|s| !selected.contains(*s)).take(2) {
        w.edit(FieldEdit::ToggleSkill(skill.clone())).unwrap();
    }
    assert_eq!(w.record().skills.skills.len(), 3);
    assert!(w.validate(Step::SkillsPreferences).valid);

    w.edit(FieldEdit::RemotePercentage(50)).unwrap();
    assert!(w.validate(Step::SkillsPreferences).valid);
    w.edit(FieldEdit::RemotePercentage(51)).unwrap();
    assert!(!w.validate(Step::SkillsPreferences).valid);
    w.edit(FieldEdit::ManagerApproved(Some(true))).unwrap();
    assert!(w.validate(Step::SkillsPreferences).valid);

    w.edit(FieldEdit::WorkingHours {
        start: NaiveTime::from_hms_opt(8, 0, 0),
        end: None,
    })
    .unwrap();
    assert_eq!(
        w.validate(Step::SkillsPreferences).errors,
        vec!["Working hours are required"]
    );
}

#[test]
fn jump_to_never_moves_ahead() {
    let mut w = wizard();
    fill_personal(&mut w, years_ago(30));
    w.advance().unwrap();

    for target in 3..=5 {
        assert!(matches!(
            w.jump_to(target),
            Err(NavigationError::Ahead { current: 2, .. })
        ));
        assert_eq!(w.current_step(), Step::JobDetails);
    }
    assert_eq!(w.jump_to(1).unwrap(), Step::PersonalInfo);
}

#[test]
fn guardian_required_for_applicants_under_twenty_one() {
    let mut w = wizard();
    fill_personal(&mut w, years_ago(20));
    fill_contact(&mut w);
    assert_eq!(
        w.validate(Step::EmergencyContact).errors,
        vec!["Guardian contact is required for employees under 21"]
    );

    w.edit(FieldEdit::GuardianName(Some("Mary Doe".into())))
        .unwrap();
    w.edit(FieldEdit::GuardianPhone(Some("+1-555-010-3000".into())))
        .unwrap();
    assert!(w.validate(Step::EmergencyContact).valid);

    // Turning 21 today lifts the requirement.
    let mut adult = wizard();
    fill_personal(&mut adult, years_ago(21));
    fill_contact(&mut adult);
    assert!(adult.validate(Step::EmergencyContact).valid);
}

#[tokio::test]
async fn full_walk_submits_snapshot_and_resets() {
    let mut w = wizard();

    fill_personal(&mut w, years_ago(30));
    assert_eq!(w.advance().unwrap(), Step::JobDetails);

    // A Friday start is fine outside HR and Finance.
    let friday = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
    fill_job(&mut w, Department::Engineering, friday);
    w.edit(FieldEdit::JobType(Some(JobType::Contract))).unwrap();
    w.edit(FieldEdit::Salary(Some(dec!(85)))).unwrap();
    assert_eq!(w.advance().unwrap(), Step::SkillsPreferences);

    pick_skills(&mut w, 3);
    w.edit(FieldEdit::RemotePercentage(80)).unwrap();
    assert!(matches!(
        w.advance(),
        Err(NavigationError::Blocked { step: 3, .. })
    ));
    w.edit(FieldEdit::ManagerApproved(Some(true))).unwrap();
    assert_eq!(w.advance().unwrap(), Step::EmergencyContact);

    fill_contact(&mut w);
    assert_eq!(w.advance().unwrap(), Step::ReviewSubmit);
    assert_eq!(w.completion(), [true, true, true, true, false]);

    let review = views::render_current(&w);
    assert!(review.contains("Salary: $85/hour"));
    assert!(review.contains("Submit Application (disabled)"));

    let sink = SimulatedSubmission::new(Duration::ZERO);
    let blocked = timeout(TEST_TIMEOUT, w.submit(&sink))
        .await
        .expect("submit timed out");
    assert!(matches!(
        blocked,
        Err(Error::Navigation(NavigationError::Blocked { step: 5, .. }))
    ));

    w.edit(FieldEdit::ConfirmCorrect(true)).unwrap();
    let expected = w.record().clone();
    let receipt = timeout(TEST_TIMEOUT, w.submit(&sink))
        .await
        .expect("submit timed out")
        .unwrap();

    assert_eq!(receipt.application.record, expected);
    assert_eq!(receipt.acknowledgment.application_id, receipt.application.id);
    assert_eq!(
        receipt.acknowledgment.message,
        "Application submitted successfully! Welcome to the team!"
    );

    assert_eq!(w.current_step(), Step::PersonalInfo);
    assert_eq!(w.record(), &OnboardingRecord::default());
    assert!(!w.has_unsaved_changes());
}

#[tokio::test]
async fn terminal_session_walks_first_step() {
    let mut session = Session::new(
        wizard(),
        Box::new(SimulatedSubmission::new(Duration::ZERO)),
    );

    let birth = years_ago(30).format("%Y-%m-%d").to_string();
    let script = [
        "set name Jane Doe".to_string(),
        "set email jane@co.com".to_string(),
        "set phone +1-123-456-7890".to_string(),
        format!("set birth-date {birth}"),
        "next".to_string(),
    ];

    let mut last = None;
    for line in &script {
        let reply = timeout(TEST_TIMEOUT, session.handle(CommandParser::parse(line)))
            .await
            .expect("command timed out");
        last = Some(reply);
    }

    assert_eq!(session.wizard().current_step(), Step::JobDetails);
    let Some(Reply::Print(screen)) = last else {
        panic!("expected a screen");
    };
    assert!(screen.contains("== Job Details =="));
    assert!(screen.contains("[✓] 1 Personal Info"));
}

#[tokio::test]
async fn submit_needs_review_step_and_every_step_valid() {
    let sink = SimulatedSubmission::new(Duration::ZERO);

    let mut early = wizard();
    early.edit(FieldEdit::ConfirmCorrect(true)).unwrap();
    let refused = timeout(TEST_TIMEOUT, early.submit(&sink))
        .await
        .expect("submit timed out");
    assert!(matches!(
        refused,
        Err(Error::Navigation(NavigationError::NotOnReview { current: 1 }))
    ));

    let mut w = wizard();
    fill_personal(&mut w, years_ago(30));
    w.advance().unwrap();
    fill_job(&mut w, Department::Engineering, today() + Days::new(3));
    w.advance().unwrap();
    pick_skills(&mut w, 3);
    w.advance().unwrap();
    fill_contact(&mut w);
    w.advance().unwrap();
    w.edit(FieldEdit::ConfirmCorrect(true)).unwrap();
    w.edit(FieldEdit::Email("not-an-email".into())).unwrap();

    let refused = timeout(TEST_TIMEOUT, w.submit(&sink))
        .await
        .expect("submit timed out");
    assert!(matches!(
        refused,
        Err(Error::Navigation(NavigationError::Blocked { step: 1, .. }))
    ));
    assert_eq!(w.current_step(), Step::ReviewSubmit);
    assert_eq!(w.record().personal.email, "not-an-email");
}
