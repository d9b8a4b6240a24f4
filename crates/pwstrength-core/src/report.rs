//! Session report types with JSON persistence.
//!
//! A report never contains candidate text, only each candidate's length and
//! what happened to it.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Assessment, Rule, Tier, MAX_SCORE};
use crate::session::Rejection;

/// Everything that happened in one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier.
    pub id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// When the session was closed.
    pub finished_at: DateTime<Utc>,
    /// One entry per submission, in order.
    pub entries: Vec<CheckEntry>,
}

/// A single submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEntry {
    pub submitted_at: DateTime<Utc>,
    /// Candidate length in characters.
    pub length: usize,
    pub outcome: EntryOutcome,
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    Assessed {
        score: u8,
        tier: Tier,
        failed: Vec<Rule>,
    },
    Rejected {
        reason: RejectReason,
    },
}

/// Serializable form of [`Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    Empty,
    Duplicate,
}

impl From<Rejection> for RejectReason {
    fn from(r: Rejection) -> Self {
        match r {
            Rejection::Empty => RejectReason::Empty,
            Rejection::RecentlyUsed => RejectReason::Duplicate,
        }
    }
}

impl CheckEntry {
    pub fn new(length: usize, outcome: &Result<Assessment, Rejection>) -> Self {
        let outcome = match outcome {
            Ok(a) => EntryOutcome::Assessed {
                score: a.score,
                tier: a.tier(),
                failed: a.failed.clone(),
            },
            Err(r) => EntryOutcome::Rejected {
                reason: (*r).into(),
            },
        };
        Self {
            submitted_at: Utc::now(),
            length,
            outcome,
        }
    }

    /// The assessment, if this submission was evaluated.
    pub fn assessment(&self) -> Option<Assessment> {
        match &self.outcome {
            EntryOutcome::Assessed { score, failed, .. } => Some(Assessment {
                score: *score,
                failed: failed.clone(),
            }),
            EntryOutcome::Rejected { .. } => None,
        }
    }
}

/// Aggregate counts over a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total: usize,
    pub weak: usize,
    pub moderate: usize,
    pub strong: usize,
    pub rejected_empty: usize,
    pub rejected_duplicate: usize,
    /// Mean score of assessed submissions (0.0 when none were assessed).
    pub mean_score: f64,
}

impl SessionSummary {
    pub fn assessed(&self) -> usize {
        self.weak + self.moderate + self.strong
    }
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary {
            total: self.entries.len(),
            ..Default::default()
        };
        let mut score_sum = 0u64;

        for entry in &self.entries {
            match &entry.outcome {
                EntryOutcome::Assessed { score, .. } => {
                    // Loaded reports may be hand-edited; derive the tier again.
                    let score = (*score).min(MAX_SCORE);
                    score_sum += u64::from(score);
                    match Tier::from_score(score) {
                        Tier::Weak => summary.weak += 1,
                        Tier::Moderate => summary.moderate += 1,
                        Tier::Strong => summary.strong += 1,
                    }
                }
                EntryOutcome::Rejected {
                    reason: RejectReason::Empty,
                } => summary.rejected_empty += 1,
                EntryOutcome::Rejected {
                    reason: RejectReason::Duplicate,
                } => summary.rejected_duplicate += 1,
            }
        }

        let assessed = summary.assessed();
        if assessed > 0 {
            summary.mean_score = score_sum as f64 / assessed as f64;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn sample_report() -> SessionReport {
        let mut s = Session::new();
        let _ = s.submit("password"); // weak, 1
        let _ = s.submit("Password1"); // moderate, 3
        let _ = s.submit("P@ssw0rd"); // strong, 4
        let _ = s.submit("P@ssw0rd"); // duplicate
        let _ = s.submit(""); // empty
        s.finish()
    }

    #[test]
    fn summary_counts() {
        let summary = sample_report().summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.weak, 1);
        assert_eq!(summary.moderate, 1);
        assert_eq!(summary.strong, 1);
        assert_eq!(summary.rejected_duplicate, 1);
        assert_eq!(summary.rejected_empty, 1);
        assert!((summary.mean_score - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_report_summary() {
        let report = Session::new().finish();
        let summary = report.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean_score, 0.0);
    }

    #[test]
    fn report_never_contains_candidates() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(!json.contains("P@ssw0rd"));
        assert!(!json.contains("Password1"));
        assert!(json.contains("\"status\":\"rejected\""));
        assert!(json.contains("\"reason\":\"duplicate\""));
    }

    #[test]
    fn entry_records_length_in_chars() {
        let mut s = Session::new();
        let _ = s.submit("pässwörd");
        assert_eq!(s.entries()[0].length, 8);
        assert_eq!(s.entries()[0].assessment().map(|a| a.score), Some(1));
    }

    #[test]
    fn summary_rederives_tier_from_score() {
        let mut report = Session::new().finish();
        let mut entry = CheckEntry::new(8, &Ok(crate::evaluate("password")));
        entry.outcome = EntryOutcome::Assessed {
            score: 9,
            tier: Tier::Weak,
            failed: vec![],
        };
        report.entries.push(entry);

        let summary = report.summary();
        assert_eq!(summary.strong, 1);
        assert_eq!(summary.weak, 0);
        assert_eq!(summary.mean_score, 4.0);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = sample_report();
        report.save_json(&path).unwrap();

        let loaded = SessionReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.summary(), report.summary());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = SessionReport::load_json(Path::new("/nonexistent/report.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
