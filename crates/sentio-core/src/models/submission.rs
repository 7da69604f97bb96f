use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::preferences::PreferenceSelections;
use super::risk::RiskResult;
use super::severity::SeverityBand;

/// The canonical payload handed to persistence and recommendation
/// collaborators once a session has been submitted.
///
/// The variant tag carries the assessment type. A `Screening` payload
/// has no full-scale score or severity fields at all: a two-item
/// triage must never read like a completed clinical instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "assessment_type", rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionPayload {
    /// Neither screener crossed the expansion threshold; only the
    /// two-item sums are reported.
    Screening {
        session_id: Uuid,
        submitted_at: jiff::Timestamp,
        depression_screener_sum: i32,
        anxiety_screener_sum: i32,
        risk: RiskResult,
        /// Raw value of the crisis item; 0 here, since the item is
        /// only administered inside the depression remainder.
        crisis_item_value: i32,
        preferences: PreferenceSelections,
    },
    /// At least one instrument expanded past its screener. Answer
    /// vectors are in canonical fixed shape, zero-padded where a
    /// remainder was not clinically indicated.
    Full {
        session_id: Uuid,
        submitted_at: jiff::Timestamp,
        depression_answers: [i32; 9],
        anxiety_answers: [i32; 7],
        depression_score: i32,
        anxiety_score: i32,
        depression_severity: SeverityBand,
        anxiety_severity: SeverityBand,
        risk: RiskResult,
        crisis_item_value: i32,
        preferences: PreferenceSelections,
    },
}

impl SubmissionPayload {
    pub fn session_id(&self) -> Uuid {
        match self {
            SubmissionPayload::Screening { session_id, .. }
            | SubmissionPayload::Full { session_id, .. } => *session_id,
        }
    }

    pub fn risk(&self) -> &RiskResult {
        match self {
            SubmissionPayload::Screening { risk, .. }
            | SubmissionPayload::Full { risk, .. } => risk,
        }
    }

    pub fn is_screening(&self) -> bool {
        matches!(self, SubmissionPayload::Screening { .. })
    }
}
