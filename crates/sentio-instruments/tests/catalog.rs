use sentio_instruments::catalog::{
    all_definitions, definition, remainder_of, screener_of, InstrumentKind, ItemRole,
};

#[test]
fn phq9_has_nine_items_split_two_and_seven() {
    let def = definition(InstrumentKind::Phq9);
    assert_eq!(def.item_count(), 9);
    assert_eq!(screener_of(InstrumentKind::Phq9).len(), 2);
    assert_eq!(remainder_of(InstrumentKind::Phq9).len(), 7);
    assert!(def.screener().iter().all(|i| i.role == ItemRole::Screener));
    assert!(def.remainder().iter().all(|i| i.role == ItemRole::Remainder));
}

#[test]
fn gad7_has_seven_items_split_two_and_five() {
    let def = definition(InstrumentKind::Gad7);
    assert_eq!(def.item_count(), 7);
    assert_eq!(screener_of(InstrumentKind::Gad7).len(), 2);
    assert_eq!(remainder_of(InstrumentKind::Gad7).len(), 5);
}

#[test]
fn who5_has_five_items_and_no_screener_split() {
    let def = definition(InstrumentKind::Who5);
    assert_eq!(def.item_count(), 5);
    assert_eq!(def.screener_len, None);
    assert!(screener_of(InstrumentKind::Who5).is_empty());
    assert_eq!(remainder_of(InstrumentKind::Who5).len(), 5);
    assert!(def.items.iter().all(|i| i.role == ItemRole::Full));
    assert_eq!(def.crisis_item_position(), None);
}

#[test]
fn crisis_item_is_the_ninth_depression_item() {
    let def = definition(InstrumentKind::Phq9);
    assert_eq!(def.crisis_item_position(), Some(8));
    let item = &def.items[8];
    assert_eq!(item.id, "self_harm");
    assert!(item.crisis);
    assert_eq!(item.role, ItemRole::Remainder);

    assert_eq!(definition(InstrumentKind::Gad7).crisis_item_position(), None);
}

#[test]
fn item_positions_are_sequential() {
    for def in all_definitions() {
        for (expected, item) in def.items.iter().enumerate() {
            assert_eq!(item.position, expected, "{}: {}", def.id, item.id);
        }
    }
}

#[test]
fn cutoff_tables_cover_the_scored_range_contiguously() {
    for def in all_definitions() {
        let scored_max = def.transform.apply(def.max_total(), def.max_total());
        let first = def.cutoffs.first().expect("cutoff table must not be empty");
        let last = def.cutoffs.last().expect("cutoff table must not be empty");
        assert_eq!(first.min, 0, "{}", def.id);
        assert_eq!(last.max, scored_max, "{}", def.id);

        for pair in def.cutoffs.windows(2) {
            assert_eq!(
                pair[1].min,
                pair[0].max + 1,
                "{}: bands must be contiguous and non-overlapping",
                def.id
            );
        }
    }
}

#[test]
fn response_scales_carry_one_label_per_value() {
    for def in all_definitions() {
        let expected = (def.scale.max - def.scale.min + 1) as usize;
        assert_eq!(def.scale.labels.len(), expected, "{}", def.id);
        for value in def.scale.min..=def.scale.max {
            assert!(def.scale.label_of(value).is_some(), "{}: {value}", def.id);
        }
        assert_eq!(def.scale.label_of(def.scale.max + 1), None);
        assert_eq!(def.scale.label_of(def.scale.min - 1), None);
    }
}

#[test]
fn validate_answer_matches_the_scale() {
    let def = definition(InstrumentKind::Phq9);
    assert!(def.validate_answer(0).is_ok());
    assert!(def.validate_answer(3).is_ok());
    assert!(def.validate_answer(4).is_err());
    assert!(def.validate_answer(-1).is_err());

    let who5 = definition(InstrumentKind::Who5);
    assert!(who5.validate_answer(5).is_ok());
    assert!(who5.validate_answer(6).is_err());
}
