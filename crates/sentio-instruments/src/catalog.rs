use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sentio_core::models::severity::SeverityBand;

use crate::error::InstrumentError;
use crate::instruments::{gad7, phq9, who5};

/// The questionnaires the engine knows how to administer and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    /// PHQ-9 depression module, expandable from the PHQ-2 screener.
    Phq9,
    /// GAD-7 anxiety scale, expandable from the GAD-2 screener.
    Gad7,
    /// WHO-5 well-being index, always administered in full.
    Who5,
}

/// Whether an item belongs to the two-item screener prefix or to the
/// conditionally administered remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemRole {
    Screener,
    Remainder,
    /// Item of an instrument that has no screener/remainder split.
    Full,
}

/// One question within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDef {
    pub id: String,
    pub text: String,
    pub help: Option<String>,
    pub rationale: Option<String>,
    /// Zero-based ordinal position within the instrument.
    pub position: usize,
    pub role: ItemRole,
    /// True only for the self-harm item of the depression module. An
    /// answer of 1 or more forces an emergency classification
    /// regardless of totals.
    pub crisis: bool,
}

/// The integer response scale shared by every item of an instrument,
/// with one label per value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseScale {
    pub min: i32,
    pub max: i32,
    pub labels: Vec<String>,
}

impl ResponseScale {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn label_of(&self, value: i32) -> Option<&str> {
        if !self.contains(value) {
            return None;
        }
        self.labels
            .get((value - self.min) as usize)
            .map(String::as_str)
    }
}

/// One row of an instrument's severity cut-off table. Rows are
/// contiguous and non-overlapping over the full scored range, so every
/// valid total resolves to exactly one band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CutoffBand {
    pub band: SeverityBand,
    pub min: i32,
    pub max: i32,
}

/// How a raw answer sum maps onto the score the cut-off table is
/// expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreTransform {
    /// Cut-offs apply to the raw sum directly.
    Raw,
    /// WHO-5 style: the raw sum is rescaled to a rounded 0–100
    /// percentage of the maximum attainable sum.
    PercentOfMax,
}

impl ScoreTransform {
    pub fn apply(&self, raw: i32, raw_max: i32) -> i32 {
        match self {
            ScoreTransform::Raw => raw,
            ScoreTransform::PercentOfMax => (raw * 100 + raw_max / 2) / raw_max,
        }
    }
}

/// A complete instrument definition: items, scale, and scoring rules.
/// Compiled-in and immutable for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentDef {
    pub kind: InstrumentKind,
    pub id: String,
    pub name: String,
    pub items: Vec<ItemDef>,
    pub scale: ResponseScale,
    pub transform: ScoreTransform,
    pub cutoffs: Vec<CutoffBand>,
    /// Number of leading items that form the triage screener; `None`
    /// when the instrument is always administered in full.
    pub screener_len: Option<usize>,
}

impl InstrumentDef {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The screener prefix; empty for instruments without a split.
    pub fn screener(&self) -> &[ItemDef] {
        let len = self.screener_len.unwrap_or(0);
        &self.items[..len]
    }

    /// The items beyond the screener; the whole bank when there is no
    /// split.
    pub fn remainder(&self) -> &[ItemDef] {
        let len = self.screener_len.unwrap_or(0);
        &self.items[len..]
    }

    /// Zero-based position of the crisis item, if this instrument has
    /// one.
    pub fn crisis_item_position(&self) -> Option<usize> {
        self.items.iter().position(|item| item.crisis)
    }

    /// Maximum attainable raw sum.
    pub fn max_total(&self) -> i32 {
        self.scale.max * self.items.len() as i32
    }

    /// Check a single answer against the response scale.
    pub fn validate_answer(&self, value: i32) -> Result<(), InstrumentError> {
        if self.scale.contains(value) {
            Ok(())
        } else {
            Err(InstrumentError::InvalidAnswerValue {
                instrument: self.id.clone(),
                value,
                min: self.scale.min,
                max: self.scale.max,
            })
        }
    }
}

/// Look up the compiled-in definition for an instrument.
pub fn definition(kind: InstrumentKind) -> &'static InstrumentDef {
    match kind {
        InstrumentKind::Phq9 => phq9::definition(),
        InstrumentKind::Gad7 => gad7::definition(),
        InstrumentKind::Who5 => who5::definition(),
    }
}

/// All registered instruments, in administration order.
pub fn all_definitions() -> [&'static InstrumentDef; 3] {
    [
        phq9::definition(),
        gad7::definition(),
        who5::definition(),
    ]
}

/// The two-item screener of an expandable instrument; empty for WHO-5.
pub fn screener_of(kind: InstrumentKind) -> &'static [ItemDef] {
    definition(kind).screener()
}

/// The items administered only after the screener expands.
pub fn remainder_of(kind: InstrumentKind) -> &'static [ItemDef] {
    definition(kind).remainder()
}
