//! pwstrength-core — Password strength rules and the recent-submission guard.
//!
//! This crate defines the four character-class rules, the scoring function,
//! the bounded submission history, and the session report that the rest of
//! pwstrength builds on.

pub mod evaluator;
pub mod history;
pub mod model;
pub mod report;
pub mod session;

pub use evaluator::evaluate;
pub use history::{RecentHistory, HISTORY_CAPACITY};
pub use model::{Assessment, MeterBand, Rule, Tier};
pub use session::{submit, Rejection, Session};
