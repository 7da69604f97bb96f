use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sentio_core::models::severity::SeverityBand;

use crate::catalog::{definition, InstrumentKind};
use crate::error::InstrumentError;

/// A scored instrument: total plus the severity band it falls in.
/// Derived on demand from an answer vector, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument: InstrumentKind,
    pub total: i32,
    pub severity: SeverityBand,
}

/// Sum a complete answer vector for `kind`.
///
/// The vector must cover every item of the instrument; partial
/// vectors are padded by the submission normalizer before scoring
/// ever sees them. Each entry is checked against the response scale.
pub fn score(kind: InstrumentKind, answers: &[i32]) -> Result<i32, InstrumentError> {
    let def = definition(kind);
    if answers.len() != def.item_count() {
        return Err(InstrumentError::IncompleteAnswerVector {
            instrument: def.id.clone(),
            expected: def.item_count(),
            actual: answers.len(),
        });
    }
    for &value in answers {
        def.validate_answer(value)?;
    }
    Ok(answers.iter().sum())
}

/// Map a total onto the instrument's severity band.
///
/// The instrument's score transform is applied first (WHO-5 rescales
/// its raw sum to 0–100); the cut-off table then resolves by range
/// membership. Bands are contiguous over the full range, so every
/// total a valid vector can produce classifies unambiguously.
pub fn classify(kind: InstrumentKind, total: i32) -> Result<SeverityBand, InstrumentError> {
    let def = definition(kind);
    let scored = def.transform.apply(total, def.max_total());
    def.cutoffs
        .iter()
        .find(|row| scored >= row.min && scored <= row.max)
        .map(|row| row.band)
        .ok_or_else(|| InstrumentError::ScoreOutOfRange {
            instrument: def.id.clone(),
            total,
            max: def.max_total(),
        })
}

/// Score and classify in one step.
pub fn evaluate(kind: InstrumentKind, answers: &[i32]) -> Result<ScoreResult, InstrumentError> {
    let total = score(kind, answers)?;
    let severity = classify(kind, total)?;
    Ok(ScoreResult {
        instrument: kind,
        total,
        severity,
    })
}
