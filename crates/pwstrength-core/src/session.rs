//! Submission handling and per-user session state.
//!
//! A submission is rejected when it is empty or matches the recent history.
//! Otherwise it is evaluated and then recorded. Rejected submissions are never
//! recorded, so a repeated candidate does not refresh its place in history.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::evaluator::evaluate;
use crate::history::RecentHistory;
use crate::model::Assessment;
use crate::report::{CheckEntry, SessionReport};

/// Why a submission was not evaluated.
///
/// These are warnings shown to the user, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Nothing was entered.
    #[error("Please enter a password")]
    Empty,

    /// The candidate matches one of the recently accepted submissions.
    #[error("This password has been used recently. Please choose a different password.")]
    RecentlyUsed,
}

impl Rejection {
    /// Returns `true` if the submission matched history.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Rejection::RecentlyUsed)
    }
}

/// Handle one submission against an explicitly owned history.
///
/// Order: empty check, replay guard, evaluate, record.
pub fn submit(history: &mut RecentHistory, candidate: &str) -> Result<Assessment, Rejection> {
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }
    if history.contains(candidate) {
        return Err(Rejection::RecentlyUsed);
    }

    let assessment = evaluate(candidate);
    history.record(candidate);
    Ok(assessment)
}

/// One user's session: its history plus a log of what was checked.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    history: RecentHistory,
    entries: Vec<CheckEntry>,
}

impl Session {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "session started");
        Self {
            id,
            started_at: Utc::now(),
            history: RecentHistory::new(),
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    /// Log of every submission so far, in order.
    pub fn entries(&self) -> &[CheckEntry] {
        &self.entries
    }

    /// Run one submission through the guard and evaluator.
    pub fn submit(&mut self, candidate: &str) -> Result<Assessment, Rejection> {
        let outcome = submit(&mut self.history, candidate);

        match &outcome {
            Ok(a) => debug!(
                session = %self.id,
                score = a.score,
                tier = %a.tier(),
                "submission assessed"
            ),
            Err(r) => info!(session = %self.id, duplicate = r.is_duplicate(), "submission rejected"),
        }

        self.entries
            .push(CheckEntry::new(candidate.chars().count(), &outcome));
        outcome
    }

    /// Close the session and produce its report.
    pub fn finish(self) -> SessionReport {
        info!(
            session = %self.id,
            checks = self.entries.len(),
            "session finished"
        );
        SessionReport {
            id: self.id,
            started_at: self.started_at,
            finished_at: Utc::now(),
            entries: self.entries,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAPACITY;
    use crate::model::Tier;

    #[test]
    fn empty_is_rejected_without_recording() {
        let mut h = RecentHistory::new();
        assert_eq!(submit(&mut h, ""), Err(Rejection::Empty));
        assert!(h.is_empty());
    }

    #[test]
    fn whitespace_is_not_empty() {
        let mut h = RecentHistory::new();
        let a = submit(&mut h, "   ").unwrap();
        assert_eq!(a.score, 0);
        assert!(h.contains("   "));
    }

    #[test]
    fn accepted_submission_is_recorded() {
        let mut h = RecentHistory::new();
        let a = submit(&mut h, "Password1").unwrap();
        assert_eq!(a.tier(), Tier::Moderate);
        assert!(h.contains("Password1"));
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut h = RecentHistory::new();
        submit(&mut h, "P@ssw0rd").unwrap();
        let err = submit(&mut h, "P@ssw0rd").unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn duplicate_does_not_refresh_position() {
        let mut h = RecentHistory::new();
        submit(&mut h, "original").unwrap();
        for i in 0..HISTORY_CAPACITY - 1 {
            submit(&mut h, &format!("filler-{i}")).unwrap();
            // Repeat attempts are rejected and leave the entry as the oldest.
            assert_eq!(submit(&mut h, "original"), Err(Rejection::RecentlyUsed));
        }
        submit(&mut h, "one-more").unwrap();
        assert!(!h.contains("original"));
        assert!(submit(&mut h, "original").is_ok());
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::Empty.to_string(), "Please enter a password");
        assert!(Rejection::RecentlyUsed
            .to_string()
            .contains("used recently"));
        assert!(!Rejection::Empty.is_duplicate());
    }

    #[test]
    fn session_logs_every_submission() {
        let mut s = Session::new();
        s.submit("password").unwrap();
        s.submit("password").unwrap_err();
        s.submit("").unwrap_err();
        assert_eq!(s.entries().len(), 3);
        assert_eq!(s.history().len(), 1);

        let id = s.id();
        let report = s.finish();
        assert_eq!(report.id, id);
        assert_eq!(report.entries.len(), 3);
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::new();
        let mut b = Session::new();
        a.submit("Shared#1x").unwrap();
        assert!(b.submit("Shared#1x").is_ok());
        assert_ne!(a.id(), b.id());
    }
}
