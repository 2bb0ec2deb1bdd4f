//! Step 4 — emergency contact, plus the guardian block for applicants
//! under 21.

use super::{field, optional_text};
use crate::wizard::Wizard;

pub fn render(wizard: &Wizard) -> String {
    let record = wizard.record();
    let emergency = &record.emergency;

    let mut parts = vec![
        field("Contact Name", true, &emergency.contact_name),
        field("Relationship", true, &emergency.relationship),
        format!("    options: {}", wizard.directory().relationships.join(", ")),
        field("Contact Phone", true, &emergency.contact_phone),
    ];

    if record.requires_guardian(wizard.today()) {
        parts.push(String::new());
        parts.push("  Guardian Contact Required (Under 21)".to_string());
        parts.push(field(
            "Guardian Name",
            true,
            optional_text(emergency.guardian_name.as_deref()),
        ));
        parts.push(field(
            "Guardian Phone",
            true,
            optional_text(emergency.guardian_phone.as_deref()),
        ));
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::directory::Directory;
    use crate::wizard::FieldEdit;

    fn wizard_born(birth: NaiveDate) -> Wizard {
        let mut w = Wizard::new(Directory::builtin())
            .with_today(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        w.edit(FieldEdit::BirthDate(Some(birth))).unwrap();
        w
    }

    #[test]
    fn guardian_block_only_under_twenty_one() {
        let young = wizard_born(NaiveDate::from_ymd_opt(2006, 1, 1).unwrap());
        let view = render(&young);
        assert!(view.contains("Guardian Contact Required (Under 21)"));
        assert!(view.contains("Guardian Name *: (not set)"));

        let adult = wizard_born(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert!(!render(&adult).contains("Guardian"));
    }

    #[test]
    fn lists_relationship_options() {
        let mut w = wizard_born(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        w.edit(FieldEdit::Relationship("Sibling".into())).unwrap();
        let view = render(&w);
        assert!(view.contains("Relationship *: Sibling"));
        assert!(view.contains("options: Spouse, Parent, Sibling"));
    }
}
