use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named severity range defined by published clinical cut-offs.
///
/// Depression and anxiety share the `Minimal`..`Severe` ladder
/// (depression additionally has `ModeratelySevere`); the well-being
/// index uses `VeryPoor`..`Good` on its transformed 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    VeryPoor,
    Poor,
    Good,
}

impl SeverityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Minimal => "minimal",
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::ModeratelySevere => "moderately_severe",
            SeverityBand::Severe => "severe",
            SeverityBand::VeryPoor => "very_poor",
            SeverityBand::Poor => "poor",
            SeverityBand::Good => "good",
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
