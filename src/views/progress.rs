//! Five-step progress indicator.

use crate::wizard::{StepProgress, Wizard};

fn marker(progress: &StepProgress) -> &'static str {
    if progress.completed {
        "[✓]"
    } else if progress.current {
        "[>]"
    } else if progress.clickable {
        "[ ]"
    } else {
        "[·]"
    }
}

/// One line per step: marker, number, and title.
pub fn render_progress(wizard: &Wizard) -> String {
    wizard
        .progress()
        .iter()
        .map(|p| format!("{} {} {}", marker(p), p.step.number(), p.step.title()))
        .collect::<Vec<_>>()
        .join("  ")
}
