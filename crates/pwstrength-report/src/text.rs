//! Terminal rendering.

use pwstrength_core::model::{Assessment, Rule};
use pwstrength_core::session::Rejection;

/// Meter width used when the caller has no preference.
pub const DEFAULT_METER_WIDTH: usize = 20;

/// The criteria list shown before any password is checked.
pub fn render_criteria() -> String {
    let mut out = String::from("Strong Password Criteria:\n");
    for rule in Rule::ALL {
        out.push_str(&format!("  - {}\n", rule.criterion()));
    }
    out
}

/// Fixed-width meter, e.g. `[###############.....]  75%`.
pub fn render_meter(assessment: &Assessment, width: usize) -> String {
    let percent = usize::from(assessment.percent());
    let filled = width * percent / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        percent
    )
}

/// Meter, verdict, and any improvement hints.
pub fn render_assessment(assessment: &Assessment, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_meter(assessment, width));
    out.push('\n');
    out.push_str(&format!(
        "{} (score {}/4)\n",
        assessment.tier().verdict(),
        assessment.score
    ));

    let deficiencies = assessment.deficiencies();
    if !deficiencies.is_empty() {
        out.push_str("Improve your password:\n");
        for msg in deficiencies {
            out.push_str(&format!("  - {msg}\n"));
        }
    }
    out
}

pub fn render_rejection(rejection: &Rejection) -> String {
    format!("Warning: {rejection}")
}
