use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sentio_instruments::catalog::{self, InstrumentKind};

/// Where a session currently stands in the flow.
///
/// The set is closed and transitions are owned by [`crate::Session`];
/// remainder phases are entered only when the matching screener
/// crossed the expansion threshold. `Submitted` is terminal: making
/// it a phase rather than a flag is what guarantees at most one
/// submission per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    DepressionScreener,
    DepressionRemainder,
    AnxietyScreener,
    AnxietyRemainder,
    Preferences,
    Complete,
    Submitted,
}

impl Phase {
    /// The instrument whose items are administered in this phase, if
    /// any.
    pub fn instrument(self) -> Option<InstrumentKind> {
        match self {
            Phase::DepressionScreener | Phase::DepressionRemainder => Some(InstrumentKind::Phq9),
            Phase::AnxietyScreener | Phase::AnxietyRemainder => Some(InstrumentKind::Gad7),
            Phase::Preferences | Phase::Complete | Phase::Submitted => None,
        }
    }

    /// Number of items administered within this phase.
    pub fn item_count(self) -> usize {
        match self {
            Phase::DepressionScreener => catalog::screener_of(InstrumentKind::Phq9).len(),
            Phase::DepressionRemainder => catalog::remainder_of(InstrumentKind::Phq9).len(),
            Phase::AnxietyScreener => catalog::screener_of(InstrumentKind::Gad7).len(),
            Phase::AnxietyRemainder => catalog::remainder_of(InstrumentKind::Gad7).len(),
            Phase::Preferences | Phase::Complete | Phase::Submitted => 0,
        }
    }

    /// Offset of this phase's first item within its instrument.
    pub fn item_offset(self) -> usize {
        match self {
            Phase::DepressionRemainder => catalog::screener_of(InstrumentKind::Phq9).len(),
            Phase::AnxietyRemainder => catalog::screener_of(InstrumentKind::Gad7).len(),
            _ => 0,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Submitted
    }
}
