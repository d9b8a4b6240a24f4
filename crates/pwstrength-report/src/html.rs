//! HTML session report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use pwstrength_core::model::{MeterBand, Rule, Tier, MAX_SCORE};
use pwstrength_core::report::{EntryOutcome, RejectReason, SessionReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Password Strength Analyzer</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Password Strength Analyzer</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Session <code>{}</code> | {} checks | {} to {}</p>\n",
        report.id,
        report.entries.len(),
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.finished_at.format("%H:%M:%S UTC"),
    ));
    html.push_str("</header>\n");

    // Criteria
    html.push_str("<section class=\"criteria\">\n<h2>Strong Password Criteria</h2>\n<ul>\n");
    for rule in Rule::ALL {
        html.push_str(&format!("<li>{}</li>\n", html_escape(rule.criterion())));
    }
    html.push_str("</ul>\n</section>\n");

    // Summary
    let summary = report.summary();
    html.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n");
    html.push_str("<table>\n<thead><tr><th>Strong</th><th>Moderate</th><th>Weak</th><th>Recently used</th><th>Empty</th><th>Mean score</th></tr></thead>\n");
    html.push_str(&format!(
        "<tbody><tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr></tbody>\n",
        summary.strong,
        summary.moderate,
        summary.weak,
        summary.rejected_duplicate,
        summary.rejected_empty,
        summary.mean_score,
    ));
    html.push_str("</table>\n</section>\n");

    // Per-check results
    html.push_str("<section class=\"results\">\n<h2>Checks</h2>\n");
    for (i, entry) in report.entries.iter().enumerate() {
        html.push_str("<div class=\"check\">\n");
        html.push_str(&format!(
            "<p class=\"meta\">#{} | {} | {} characters</p>\n",
            i + 1,
            entry.submitted_at.format("%H:%M:%S"),
            entry.length,
        ));

        match &entry.outcome {
            EntryOutcome::Assessed { score, failed, .. } => {
                let score = (*score).min(MAX_SCORE);
                let tier = Tier::from_score(score);
                let band = MeterBand::from_score(score);
                let width = u32::from(score) * 100 / u32::from(MAX_SCORE);
                html.push_str(&format!(
                    "<div class=\"progress\"><div class=\"bar\" style=\"width: {width}%; background-color: {};\"></div></div>\n",
                    band.hex()
                ));
                html.push_str(&format!(
                    "<div class=\"result {tier}\">{} ({score}/4)</div>\n",
                    html_escape(tier.verdict())
                ));
                if !failed.is_empty() {
                    html.push_str("<ul class=\"feedback\">\n");
                    for rule in failed {
                        html.push_str(&format!("<li>{}</li>\n", html_escape(rule.deficiency())));
                    }
                    html.push_str("</ul>\n");
                }
            }
            EntryOutcome::Rejected { reason } => {
                let text = match reason {
                    RejectReason::Empty => "Please enter a password",
                    RejectReason::Duplicate => "This password has been used recently.",
                };
                html.push_str(&format!("<div class=\"warning\">{}</div>\n", html_escape(text)));
            }
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem; background: #2c3e50; color: #fff; }
h1 { text-align: center; font-weight: 700; }
.meta { color: #bdc3c7; font-size: 0.9rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #34495e; padding: 0.5rem 1rem; text-align: center; }
.check { margin: 1rem 0; padding: 1rem; border-radius: 5px; background: #34495e; }
.progress { width: 100%; height: 10px; border-radius: 5px; background: #2c3e50; margin: 0.5rem 0; }
.bar { height: 10px; border-radius: 5px; }
.result { padding: 0.75rem; border-radius: 5px; text-align: center; font-weight: 600; }
.result.strong { background: rgba(46, 204, 113, 0.2); color: #2ecc71; }
.result.moderate { background: rgba(243, 156, 18, 0.2); color: #f39c12; }
.result.weak { background: rgba(231, 76, 60, 0.2); color: #e74c3c; }
.warning { color: #f39c12; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pwstrength_core::session::Session;

    fn make_test_report() -> SessionReport {
        let mut session = Session::new();
        let _ = session.submit("password");
        let _ = session.submit("Password1");
        let _ = session.submit("P@ssw0rd");
        let _ = session.submit("P@ssw0rd");
        session.finish()
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report();
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Minimum 8 characters"));
        assert!(html.contains("Your password is strong!"));
        assert!(html.contains("Your password is moderate"));
        assert!(html.contains("used recently"));
        assert!(html.contains(&report.id.to_string()));
    }

    #[test]
    fn html_uses_meter_colours() {
        let html = generate_html(&make_test_report());
        // Score 1 is red, score 3 and 4 are green.
        assert!(html.contains("width: 25%; background-color: #e74c3c"));
        assert!(html.contains("width: 75%; background-color: #2ecc71"));
        assert!(html.contains("width: 100%; background-color: #2ecc71"));
    }

    #[test]
    fn html_rederives_tier_and_caps_meter() {
        use pwstrength_core::report::EntryOutcome;

        let mut report = make_test_report();
        report.entries[0].outcome = EntryOutcome::Assessed {
            score: 7,
            tier: Tier::Weak,
            failed: vec![],
        };
        let html = generate_html(&report);
        assert!(html.contains("<div class=\"result strong\">Your password is strong! (4/4)</div>"));
        assert!(!html.contains("width: 175%"));
    }

    #[test]
    fn html_escapes_messages() {
        let html = generate_html(&make_test_report());
        assert!(html.contains("(!@#$%^&amp;*)"));
        assert!(!html.contains("P@ssw0rd"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
