use jiff::Timestamp;

use sentio_core::models::submission::SubmissionPayload;
use sentio_instruments::catalog::{self, InstrumentKind};
use sentio_instruments::risk::{self, CRISIS_ANSWER_THRESHOLD};
use sentio_instruments::scoring;

use crate::error::SessionError;
use crate::events;
use crate::phase::Phase;
use crate::session::Session;

/// Shape a completed session into the canonical submission payload and
/// mark the session submitted.
///
/// Only valid from `Complete`; a second call fails with
/// `AlreadySubmitted`, so at most one payload ever exists per session.
pub fn submit(session: &mut Session) -> Result<SubmissionPayload, SessionError> {
    match session.phase() {
        Phase::Complete => {}
        Phase::Submitted => {
            return Err(SessionError::AlreadySubmitted { id: session.id() });
        }
        other => {
            return Err(SessionError::InvalidPhaseTransition {
                phase: other,
                reason: "submission requires an explicitly completed session",
            });
        }
    }

    let payload = build_payload(session)?;
    session.mark_submitted();
    events::session_submitted(
        session.id(),
        if payload.is_screening() { "screening" } else { "full" },
        payload.risk().level,
    );
    Ok(payload)
}

fn build_payload(session: &Session) -> Result<SubmissionPayload, SessionError> {
    let depression = session.answers(InstrumentKind::Phq9);
    let anxiety = session.answers(InstrumentKind::Gad7);
    let dep_def = catalog::definition(InstrumentKind::Phq9);
    let anx_def = catalog::definition(InstrumentKind::Gad7);

    let screening_only = depression.len() <= dep_def.screener().len()
        && anxiety.len() <= anx_def.screener().len();

    if screening_only {
        // The crisis item sits in the depression remainder and was
        // never administered; the screener sums are the only scores a
        // screening exposes.
        let depression_sum: i32 = depression.iter().sum();
        let anxiety_sum: i32 = anxiety.iter().sum();
        let risk = risk::assess(depression_sum, anxiety_sum, 0)?;

        return Ok(SubmissionPayload::Screening {
            session_id: session.id(),
            submitted_at: Timestamp::now(),
            depression_screener_sum: depression_sum,
            anxiety_screener_sum: anxiety_sum,
            risk,
            crisis_item_value: 0,
            preferences: session.preferences().clone(),
        });
    }

    // Pad before scoring: an instrument that stayed screener-only is
    // scored on its two real answers, the skipped remainder counting
    // as zero burden.
    let depression_answers = pad::<9>(depression);
    let anxiety_answers = pad::<7>(anxiety);

    let depression_result = scoring::evaluate(InstrumentKind::Phq9, &depression_answers)?;
    let anxiety_result = scoring::evaluate(InstrumentKind::Gad7, &anxiety_answers)?;

    let crisis_item_value = dep_def
        .crisis_item_position()
        .map(|position| depression_answers[position])
        .unwrap_or(0);
    // A crisis answer that was later revised downward still assesses
    // as a crisis; the recorded signal is never downgraded.
    let effective_crisis = if session.has_crisis_signal() {
        crisis_item_value.max(CRISIS_ANSWER_THRESHOLD)
    } else {
        crisis_item_value
    };
    let risk = risk::assess(depression_result.total, anxiety_result.total, effective_crisis)?;

    Ok(SubmissionPayload::Full {
        session_id: session.id(),
        submitted_at: Timestamp::now(),
        depression_answers,
        anxiety_answers,
        depression_score: depression_result.total,
        anxiety_score: anxiety_result.total,
        depression_severity: depression_result.severity,
        anxiety_severity: anxiety_result.severity,
        risk,
        crisis_item_value,
        preferences: session.preferences().clone(),
    })
}

fn pad<const N: usize>(answers: &[i32]) -> [i32; N] {
    let mut padded = [0; N];
    for (slot, value) in padded.iter_mut().zip(answers) {
        *slot = *value;
    }
    padded
}
