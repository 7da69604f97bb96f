use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    /// The answer does not fit the instrument's response scale. Local
    /// to the offending call; the caller re-prompts.
    #[error("{instrument}: answer {value} is outside the response scale [{min}, {max}]")]
    InvalidAnswerValue {
        instrument: String,
        value: i32,
        min: i32,
        max: i32,
    },

    /// Scoring was attempted before the vector covered every item.
    /// Indicates a normalizer-ordering bug, not user input.
    #[error("{instrument}: expected {expected} answers, got {actual}")]
    IncompleteAnswerVector {
        instrument: String,
        expected: usize,
        actual: usize,
    },

    /// A total outside the instrument's scorable range reached
    /// classification. Cannot happen for totals produced by `score`.
    #[error("{instrument}: total {total} is outside the scorable range [0, {max}]")]
    ScoreOutOfRange {
        instrument: String,
        total: i32,
        max: i32,
    },
}
