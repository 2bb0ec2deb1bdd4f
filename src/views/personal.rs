//! Step 1 — personal information.

use super::field;
use crate::wizard::Wizard;

pub fn render(wizard: &Wizard) -> String {
    let personal = &wizard.record().personal;

    let birth_date = personal
        .birth_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let photo = match personal.photo {
        Some(ref p) => format!("{} ({}, {} KB)", p.file_name, p.mime_type, p.size_bytes / 1024),
        None => "(none)".to_string(),
    };

    [
        field("Full Name", true, &personal.full_name),
        field("Email Address", true, &personal.email),
        field("Phone Number", true, &personal.phone),
        "    format: +1-123-456-7890".to_string(),
        field("Date of Birth", true, &birth_date),
        format!("  Profile Picture (Optional): {photo}"),
        "    JPG or PNG, up to 2MB".to_string(),
    ]
    .join("\n")
}
