//! Field schema: patterns, bounds, and the small date/money helpers the
//! validator and views share.

use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;
use rust_decimal::Decimal;

use super::model::{Department, JobType};
use crate::error::AttachmentError;

/// `+<country>-<3>-<3>-<4>`, e.g. `+1-123-456-7890`.
pub const PHONE_PATTERN: &str = r"^\+\d{1,3}-\d{3}-\d{3}-\d{4}$";

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const MIN_AGE: i32 = 18;
pub const GUARDIAN_AGE: i32 = 21;
pub const START_DATE_WINDOW_DAYS: u64 = 90;
pub const MIN_NAME_TOKENS: usize = 2;
pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_SKILLS: usize = 3;
pub const REMOTE_APPROVAL_THRESHOLD: u8 = 50;
pub const MAX_REMOTE_PERCENTAGE: u8 = 100;
pub const MAX_SKILL_YEARS: u8 = 20;
pub const DEFAULT_SKILL_YEARS: u8 = 1;
pub const MAX_NOTES_LEN: usize = 500;

pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;
pub const ALLOWED_PHOTO_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Departments that may not start on a Friday or Saturday.
pub const WEEKEND_RESTRICTED_DEPARTMENTS: [Department; 2] = [Department::Hr, Department::Finance];

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn has_two_name_tokens(name: &str) -> bool {
    name.split_whitespace().count() >= MIN_NAME_TOKENS
}

/// Whole years between `birth` and `today`.
///
/// One year is subtracted while this year's birthday has not been reached.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Friday and Saturday count as the weekend for start-date purposes.
pub fn is_restricted_weekday(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

pub fn restricts_weekend_start(department: Department) -> bool {
    WEEKEND_RESTRICTED_DEPARTMENTS.contains(&department)
}

/// Inclusive bounds for an acceptable start date.
pub fn start_date_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Days::new(START_DATE_WINDOW_DAYS))
}

pub fn is_start_date_in_window(start: NaiveDate, today: NaiveDate) -> bool {
    let (earliest, latest) = start_date_window(today);
    (earliest..=latest).contains(&start)
}

/// Hourly range for contracts, annual range otherwise.
pub fn salary_range(job_type: JobType) -> RangeInclusive<Decimal> {
    if job_type.is_hourly() {
        Decimal::new(50, 0)..=Decimal::new(150, 0)
    } else {
        Decimal::new(30_000, 0)..=Decimal::new(200_000, 0)
    }
}

pub fn salary_in_range(job_type: JobType, salary: Decimal) -> bool {
    salary_range(job_type).contains(&salary)
}

/// `$75/hour` for contracts, `$65,000/year` for everything else.
pub fn format_salary(amount: Decimal, job_type: JobType) -> String {
    if job_type.is_hourly() {
        format!("${}/hour", amount.normalize())
    } else {
        format!("${}/year", group_thousands(amount))
    }
}

fn group_thousands(amount: Decimal) -> String {
    let text = amount.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Check a photo's declared MIME type and size. Type is checked first.
pub fn check_photo(mime_type: &str, size_bytes: u64) -> Result<(), AttachmentError> {
    if !ALLOWED_PHOTO_TYPES.contains(&mime_type) {
        return Err(AttachmentError::UnsupportedType {
            mime_type: mime_type.to_string(),
        });
    }
    if size_bytes > MAX_PHOTO_BYTES {
        return Err(AttachmentError::TooLarge {
            size_bytes,
            max_bytes: MAX_PHOTO_BYTES,
        });
    }
    Ok(())
}

/// MIME type implied by a file extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
