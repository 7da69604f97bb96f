pub mod gad7;
pub mod phq9;
pub mod who5;

/// Shared 0–3 frequency labels used by the PHQ and GAD item banks
/// ("over the last two weeks, how often have you been bothered by...").
pub(crate) fn frequency_labels() -> Vec<String> {
    [
        "Not at all",
        "Several days",
        "More than half the days",
        "Nearly every day",
    ]
    .iter()
    .map(|label| label.to_string())
    .collect()
}
