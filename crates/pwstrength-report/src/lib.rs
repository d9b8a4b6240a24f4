//! pwstrength-report — Rendering for assessments and session reports.
//!
//! Terminal text, single-line JSON for scripts, and a self-contained HTML
//! page for a saved session.

pub mod html;
pub mod json;
pub mod text;
