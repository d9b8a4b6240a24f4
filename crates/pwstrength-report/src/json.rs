//! Machine-readable output for a single submission.

use serde::{Deserialize, Serialize};

use pwstrength_core::model::{Assessment, MeterBand, Tier};
use pwstrength_core::session::Rejection;

/// What the presentation layer needs to show one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutput {
    /// The submission matched recent history.
    pub duplicate: bool,
    /// Warning text when the submission was not evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<MeterBand>,
    #[serde(default)]
    pub deficiencies: Vec<String>,
}

impl CheckOutput {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            duplicate: false,
            warning: None,
            score: Some(assessment.score),
            tier: Some(assessment.tier()),
            percent: Some(assessment.percent()),
            meter: Some(assessment.meter_band()),
            deficiencies: assessment
                .deficiencies()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn from_rejection(rejection: &Rejection) -> Self {
        Self {
            duplicate: rejection.is_duplicate(),
            warning: Some(rejection.to_string()),
            score: None,
            tier: None,
            percent: None,
            meter: None,
            deficiencies: Vec::new(),
        }
    }

    pub fn from_outcome(outcome: &Result<Assessment, Rejection>) -> Self {
        match outcome {
            Ok(a) => Self::from_assessment(a),
            Err(r) => Self::from_rejection(r),
        }
    }
}

/// Single-line JSON for one submission.
pub fn to_json_line(outcome: &Result<Assessment, Rejection>) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&CheckOutput::from_outcome(outcome))?)
}
