use sentio_core::models::risk::{RiskLevel, RiskResult};
use sentio_core::models::severity::SeverityBand;

use crate::catalog::InstrumentKind;
use crate::error::InstrumentError;
use crate::scoring::classify;

/// A crisis-item answer at or above this value forces an emergency
/// classification on its own.
pub const CRISIS_ANSWER_THRESHOLD: i32 = 1;

/// A depression total at or above this value forces an emergency
/// classification even when the crisis item was answered with zero.
pub const EMERGENCY_SCORE_THRESHOLD: i32 = 20;

/// Combine both instruments and the crisis item into a single risk
/// classification.
///
/// Rules are evaluated in strict priority order and the first match
/// wins. The crisis rule comes first so that a crisis answer at an
/// otherwise minimal score still short-circuits to an emergency; no
/// later rule can downgrade it.
pub fn assess(
    depression_total: i32,
    anxiety_total: i32,
    crisis_item_value: i32,
) -> Result<RiskResult, InstrumentError> {
    let depression = classify(InstrumentKind::Phq9, depression_total)?;
    let anxiety = classify(InstrumentKind::Gad7, anxiety_total)?;

    let crisis_fired = crisis_item_value >= CRISIS_ANSWER_THRESHOLD;
    if crisis_fired || depression_total >= EMERGENCY_SCORE_THRESHOLD {
        return Ok(RiskResult::emergency(crisis_fired));
    }

    let level = if matches!(
        depression,
        SeverityBand::ModeratelySevere | SeverityBand::Severe
    ) || anxiety == SeverityBand::Severe
        || (depression == SeverityBand::Moderate && anxiety == SeverityBand::Moderate)
    {
        RiskLevel::High
    } else if depression == SeverityBand::Moderate
        || anxiety == SeverityBand::Moderate
        || (depression == SeverityBand::Mild && anxiety == SeverityBand::Mild)
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    Ok(RiskResult::new(level))
}
