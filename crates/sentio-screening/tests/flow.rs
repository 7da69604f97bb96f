use sentio_core::models::preferences::PreferenceSelections;
use sentio_core::models::risk::RiskLevel;
use sentio_core::models::severity::SeverityBand;
use sentio_core::models::submission::SubmissionPayload;
use sentio_instruments::catalog::InstrumentKind;
use sentio_instruments::error::InstrumentError;
use sentio_screening::{submit, Phase, Session, SessionError};

fn answer_all(session: &mut Session, values: &[i32]) {
    for &value in values {
        session.record_answer(value).unwrap();
    }
}

#[test]
fn a_new_session_starts_at_the_first_depression_screener_item() {
    let session = Session::new();
    assert_eq!(session.phase(), Phase::DepressionScreener);
    assert_eq!(session.item_index(), 0);
    assert_eq!(session.current_item().unwrap().id, "interest");
    assert!(!session.has_crisis_signal());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.answered, 0);
    // both screeners planned, no remainder before any branch decision
    assert_eq!(snapshot.planned, 4);
}

#[test]
fn low_screeners_skip_both_remainders() {
    // Scenario A: neither screener crosses the threshold.
    let mut session = Session::new();

    answer_all(&mut session, &[0, 1]);
    assert_eq!(session.phase(), Phase::AnxietyScreener);

    answer_all(&mut session, &[0, 1]);
    assert_eq!(session.phase(), Phase::Preferences);

    session.complete().unwrap();
    let payload = submit(&mut session).unwrap();
    assert_eq!(session.phase(), Phase::Submitted);

    match payload {
        SubmissionPayload::Screening {
            depression_screener_sum,
            anxiety_screener_sum,
            risk,
            crisis_item_value,
            ..
        } => {
            assert_eq!(depression_screener_sum, 1);
            assert_eq!(anxiety_screener_sum, 1);
            assert_eq!(risk.level, RiskLevel::Low);
            assert!(!risk.requires_emergency);
            assert!(!risk.has_crisis_signal);
            assert_eq!(crisis_item_value, 0);
        }
        SubmissionPayload::Full { .. } => panic!("expected a screening payload"),
    }
}

#[test]
fn depression_expands_and_the_skipped_anxiety_remainder_pads_to_zero() {
    // Scenario B: depression expands, anxiety does not.
    let mut session = Session::new();

    answer_all(&mut session, &[2, 2]);
    assert_eq!(session.phase(), Phase::DepressionRemainder);
    assert_eq!(session.snapshot().planned, 11);

    answer_all(&mut session, &[1, 1, 1, 1, 1, 1, 0]);
    assert_eq!(session.phase(), Phase::AnxietyScreener);

    answer_all(&mut session, &[0, 1]);
    assert_eq!(session.phase(), Phase::Preferences);

    session.complete().unwrap();
    match submit(&mut session).unwrap() {
        SubmissionPayload::Full {
            depression_answers,
            anxiety_answers,
            depression_score,
            anxiety_score,
            depression_severity,
            anxiety_severity,
            risk,
            ..
        } => {
            assert_eq!(depression_answers, [2, 2, 1, 1, 1, 1, 1, 1, 0]);
            assert_eq!(anxiety_answers, [0, 1, 0, 0, 0, 0, 0]);
            assert_eq!(depression_score, 10);
            assert_eq!(anxiety_score, 1);
            assert_eq!(depression_severity, SeverityBand::Moderate);
            assert_eq!(anxiety_severity, SeverityBand::Minimal);
            assert_eq!(risk.level, RiskLevel::Medium);
        }
        SubmissionPayload::Screening { .. } => panic!("expected a full payload"),
    }
}

#[test]
fn a_crisis_answer_is_visible_the_moment_it_is_recorded() {
    // Scenario C: item 9 fires mid-flow, long before completion.
    let mut session = Session::new();
    answer_all(&mut session, &[2, 2]);
    answer_all(&mut session, &[1, 1, 1, 1, 1, 1]);
    assert!(!session.has_crisis_signal());

    session.record_answer(1).unwrap();
    assert!(session.has_crisis_signal());
    assert_eq!(session.phase(), Phase::AnxietyScreener);

    answer_all(&mut session, &[0, 0]);
    session.complete().unwrap();
    match submit(&mut session).unwrap() {
        SubmissionPayload::Full {
            risk,
            crisis_item_value,
            ..
        } => {
            assert_eq!(risk.level, RiskLevel::High);
            assert!(risk.requires_emergency);
            assert!(risk.has_crisis_signal);
            assert_eq!(crisis_item_value, 1);
        }
        SubmissionPayload::Screening { .. } => panic!("expected a full payload"),
    }
}

#[test]
fn maximum_answers_everywhere_force_an_emergency() {
    // Scenario D: both instruments at their ceiling.
    let mut session = Session::new();
    answer_all(&mut session, &[3; 9]);
    assert_eq!(session.phase(), Phase::AnxietyScreener);
    answer_all(&mut session, &[3; 7]);
    assert_eq!(session.phase(), Phase::Preferences);

    session.complete().unwrap();
    match submit(&mut session).unwrap() {
        SubmissionPayload::Full {
            depression_score,
            anxiety_score,
            depression_severity,
            anxiety_severity,
            risk,
            ..
        } => {
            assert_eq!(depression_score, 27);
            assert_eq!(anxiety_score, 21);
            assert_eq!(depression_severity, SeverityBand::Severe);
            assert_eq!(anxiety_severity, SeverityBand::Severe);
            assert_eq!(risk.level, RiskLevel::High);
            assert!(risk.requires_emergency);
        }
        SubmissionPayload::Screening { .. } => panic!("expected a full payload"),
    }
}

#[test]
fn an_invalid_answer_leaves_the_session_untouched() {
    let mut session = Session::new();
    session.record_answer(2).unwrap();

    let err = session.record_answer(4).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Instrument(InstrumentError::InvalidAnswerValue { value: 4, .. })
    ));
    assert_eq!(session.phase(), Phase::DepressionScreener);
    assert_eq!(session.item_index(), 1);
    assert_eq!(session.answers(InstrumentKind::Phq9), &[2]);

    // the caller re-prompts and the flow continues
    session.record_answer(0).unwrap();
    assert_eq!(session.phase(), Phase::AnxietyScreener);
}

#[test]
fn answers_are_rejected_outside_item_phases() {
    let mut session = Session::new();
    answer_all(&mut session, &[0, 0, 0, 0]);
    assert_eq!(session.phase(), Phase::Preferences);

    let err = session.record_answer(1).unwrap_err();
    assert!(matches!(err, SessionError::InvalidPhaseTransition { .. }));
    assert_eq!(session.phase(), Phase::Preferences);
}

#[test]
fn completion_is_only_valid_from_the_preferences_phase() {
    let mut session = Session::new();
    assert!(matches!(
        session.complete(),
        Err(SessionError::InvalidPhaseTransition { .. })
    ));
}

#[test]
fn going_back_within_a_phase_allows_overwriting() {
    let mut session = Session::new();
    session.record_answer(1).unwrap();
    assert_eq!(session.item_index(), 1);

    session.go_back().unwrap();
    assert_eq!(session.item_index(), 0);

    session.record_answer(2).unwrap();
    assert_eq!(session.answers(InstrumentKind::Phq9), &[2]);
    assert_eq!(session.item_index(), 1);
}

#[test]
fn going_back_past_the_first_item_is_rejected() {
    let mut session = Session::new();
    assert!(matches!(
        session.go_back(),
        Err(SessionError::InvalidPhaseTransition { .. })
    ));
}

#[test]
fn going_back_retraces_an_expanded_remainder() {
    let mut session = Session::new();
    answer_all(&mut session, &[2, 2]);
    answer_all(&mut session, &[0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(session.phase(), Phase::AnxietyScreener);

    session.go_back().unwrap();
    assert_eq!(session.phase(), Phase::DepressionRemainder);
    assert_eq!(session.item_index(), 6);
    assert_eq!(session.current_item().unwrap().id, "self_harm");
}

#[test]
fn going_back_skips_a_remainder_that_never_happened() {
    let mut session = Session::new();
    answer_all(&mut session, &[0, 1]);
    assert_eq!(session.phase(), Phase::AnxietyScreener);

    session.go_back().unwrap();
    assert_eq!(session.phase(), Phase::DepressionScreener);
    assert_eq!(session.item_index(), 1);
}

#[test]
fn going_back_from_preferences_returns_to_the_last_administered_item() {
    // without anxiety expansion
    let mut session = Session::new();
    answer_all(&mut session, &[0, 0, 0, 0]);
    session.go_back().unwrap();
    assert_eq!(session.phase(), Phase::AnxietyScreener);
    assert_eq!(session.item_index(), 1);

    // with anxiety expansion
    let mut session = Session::new();
    answer_all(&mut session, &[0, 0, 2, 2, 0, 0, 0, 0, 0]);
    assert_eq!(session.phase(), Phase::Preferences);
    session.go_back().unwrap();
    assert_eq!(session.phase(), Phase::AnxietyRemainder);
    assert_eq!(session.item_index(), 4);
}

#[test]
fn revising_a_screener_answer_can_cancel_the_expansion() {
    let mut session = Session::new();
    answer_all(&mut session, &[2, 1]);
    assert_eq!(session.phase(), Phase::DepressionRemainder);
    answer_all(&mut session, &[1, 1]);

    // walk back to the second screener item
    session.go_back().unwrap();
    session.go_back().unwrap();
    session.go_back().unwrap();
    assert_eq!(session.phase(), Phase::DepressionScreener);
    assert_eq!(session.item_index(), 1);

    // lower the answer below the threshold: the remainder is dropped
    session.record_answer(0).unwrap();
    assert_eq!(session.phase(), Phase::AnxietyScreener);
    assert_eq!(session.answers(InstrumentKind::Phq9), &[2, 0]);
    assert_eq!(session.snapshot().planned, 4);
}

#[test]
fn reexpanding_after_a_cancelled_expansion_starts_the_remainder_clean() {
    let mut session = Session::new();
    answer_all(&mut session, &[2, 1, 1, 1]);
    for _ in 0..3 {
        session.go_back().unwrap();
    }
    session.record_answer(0).unwrap();
    assert_eq!(session.phase(), Phase::AnxietyScreener);

    session.go_back().unwrap();
    session.record_answer(3).unwrap();
    assert_eq!(session.phase(), Phase::DepressionRemainder);
    assert_eq!(session.item_index(), 0);
    assert_eq!(session.answers(InstrumentKind::Phq9), &[2, 3]);
}

#[test]
fn the_crisis_flag_survives_revising_the_answer_down() {
    let mut session = Session::new();
    answer_all(&mut session, &[2, 2, 0, 0, 0, 0, 0, 0]);
    session.record_answer(2).unwrap();
    assert!(session.has_crisis_signal());

    session.go_back().unwrap();
    session.record_answer(0).unwrap();
    assert!(session.has_crisis_signal(), "crisis flag is sticky");

    answer_all(&mut session, &[0, 0]);
    session.complete().unwrap();
    match submit(&mut session).unwrap() {
        SubmissionPayload::Full {
            risk,
            crisis_item_value,
            ..
        } => {
            // the revised value is reported, the signal is not downgraded
            assert_eq!(crisis_item_value, 0);
            assert!(risk.requires_emergency);
            assert!(risk.has_crisis_signal);
        }
        SubmissionPayload::Screening { .. } => panic!("expected a full payload"),
    }
}

#[test]
fn preferences_can_be_finalized_and_revised() {
    let mut session = Session::new();
    answer_all(&mut session, &[0, 0, 0, 0]);

    let mut selections = PreferenceSelections::new();
    selections.select("support_format", "one_on_one");
    selections.select("support_format", "self_guided");
    session.finalize_preferences(selections).unwrap();
    assert_eq!(session.preferences().groups["support_format"].len(), 2);

    let mut revised = PreferenceSelections::new();
    revised.select("support_format", "group");
    session.finalize_preferences(revised).unwrap();
    assert_eq!(session.preferences().groups["support_format"], vec!["group"]);

    session.complete().unwrap();
    assert_eq!(session.phase(), Phase::Complete);
}

#[test]
fn preferences_are_rejected_outside_their_phase() {
    let mut session = Session::new();
    assert!(matches!(
        session.finalize_preferences(PreferenceSelections::new()),
        Err(SessionError::InvalidPhaseTransition { .. })
    ));
}
