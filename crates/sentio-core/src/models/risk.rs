use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal risk tier combining both clinical instruments and the
/// crisis item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// The presentation tier shown alongside the level.
    pub fn color(self) -> AmpelColor {
        match self {
            RiskLevel::Low => AmpelColor::Green,
            RiskLevel::Medium => AmpelColor::Yellow,
            RiskLevel::High => AmpelColor::Red,
        }
    }
}

/// Three-value traffic-light presentation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AmpelColor {
    Green,
    Yellow,
    Red,
}

/// The combined risk classification for one assessment.
///
/// `requires_emergency` is set by the crisis rule only (item 9 ≥ 1 or a
/// depression total in the severe-emergency range). `has_crisis_signal`
/// is narrower: it marks that the crisis item itself fired, so
/// downstream messaging can distinguish "item 9 answered" from "score
/// alone crossed the threshold".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    pub level: RiskLevel,
    pub color: AmpelColor,
    pub requires_emergency: bool,
    pub has_crisis_signal: bool,
}

impl RiskResult {
    pub fn new(level: RiskLevel) -> Self {
        Self {
            level,
            color: level.color(),
            requires_emergency: false,
            has_crisis_signal: false,
        }
    }

    pub fn emergency(has_crisis_signal: bool) -> Self {
        Self {
            level: RiskLevel::High,
            color: AmpelColor::Red,
            requires_emergency: true,
            has_crisis_signal,
        }
    }
}
