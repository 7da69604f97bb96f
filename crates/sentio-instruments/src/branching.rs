use crate::catalog::{definition, InstrumentKind};

/// A two-item screener sum at or above this value expands the
/// instrument to its full item set. Fixed by the PHQ-2/GAD-2
/// validation literature; not a tunable.
pub const EXPANSION_THRESHOLD: i32 = 3;

/// Decide whether a screener expands into the full instrument.
///
/// Depression and anxiety are evaluated independently with the same
/// rule; one may expand while the other does not. Only the sum
/// matters, not which item values produced it.
pub fn should_expand(screener_sum: i32) -> bool {
    screener_sum >= EXPANSION_THRESHOLD
}

/// Sum the screener prefix of a possibly partial answer vector.
/// Instruments without a screener split sum to 0.
pub fn screener_sum(kind: InstrumentKind, answers: &[i32]) -> i32 {
    let len = definition(kind)
        .screener_len
        .unwrap_or(0)
        .min(answers.len());
    answers[..len].iter().sum()
}
