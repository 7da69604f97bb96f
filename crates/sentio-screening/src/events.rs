//! Structured lifecycle events, emitted via `tracing`.
//!
//! The engine never installs a subscriber or talks to a collector;
//! hosts decide where these records go. Events carry field-captured
//! ids and numeric values only: no answer text, no free-form PII.

use tracing::{info, warn};
use uuid::Uuid;

use sentio_core::models::risk::RiskLevel;
use sentio_instruments::catalog::InstrumentKind;

use crate::phase::Phase;

pub(crate) fn session_started(session_id: Uuid) {
    info!(session_id = %session_id, "assessment session started");
}

pub(crate) fn screener_expanded(session_id: Uuid, instrument: InstrumentKind, screener_sum: i32) {
    info!(
        session_id = %session_id,
        instrument = ?instrument,
        screener_sum,
        "screener expanded to full instrument"
    );
}

pub(crate) fn screener_skipped(session_id: Uuid, instrument: InstrumentKind, screener_sum: i32) {
    info!(
        session_id = %session_id,
        instrument = ?instrument,
        screener_sum,
        "screener below expansion threshold, remainder skipped"
    );
}

pub(crate) fn crisis_detected(session_id: Uuid, item_value: i32) {
    warn!(
        session_id = %session_id,
        item_value,
        "crisis item answered above threshold"
    );
}

pub(crate) fn session_abandoned(session_id: Uuid, phase: Phase) {
    info!(
        session_id = %session_id,
        phase = ?phase,
        "assessment abandoned before the end of the flow"
    );
}

pub(crate) fn session_completed(session_id: Uuid, depression_answers: usize, anxiety_answers: usize) {
    info!(
        session_id = %session_id,
        depression_answers,
        anxiety_answers,
        "assessment flow complete"
    );
}

pub(crate) fn session_submitted(session_id: Uuid, assessment_type: &str, risk_level: RiskLevel) {
    info!(
        session_id = %session_id,
        assessment_type,
        risk_level = ?risk_level,
        "submission payload produced"
    );
}
