use std::sync::LazyLock;

use sentio_core::models::severity::SeverityBand;

use crate::catalog::{
    CutoffBand, InstrumentDef, InstrumentKind, ItemDef, ItemRole, ResponseScale, ScoreTransform,
};

/// WHO-5: Well-Being Index.
/// 5 positively phrased items on a 0–5 scale, raw total 0–25. The raw
/// sum is rescaled to a 0–100 percentage; cut-offs are expressed on
/// the rescaled score. No screener split; always administered in
/// full.
pub fn definition() -> &'static InstrumentDef {
    static DEF: LazyLock<InstrumentDef> = LazyLock::new(|| {
        let items = [
            ("cheerful", "I have felt cheerful and in good spirits"),
            ("calm", "I have felt calm and relaxed"),
            ("active", "I have felt active and vigorous"),
            ("rested", "I woke up feeling fresh and rested"),
            (
                "interest",
                "My daily life has been filled with things that interest me",
            ),
        ];

        let items: Vec<ItemDef> = items
            .iter()
            .enumerate()
            .map(|(position, (id, text))| ItemDef {
                id: id.to_string(),
                text: text.to_string(),
                help: None,
                rationale: None,
                position,
                role: ItemRole::Full,
                crisis: false,
            })
            .collect();

        InstrumentDef {
            kind: InstrumentKind::Who5,
            id: "who5".to_string(),
            name: "WHO-5".to_string(),
            items,
            scale: ResponseScale {
                min: 0,
                max: 5,
                labels: [
                    "At no time",
                    "Some of the time",
                    "Less than half of the time",
                    "More than half of the time",
                    "Most of the time",
                    "All of the time",
                ]
                .iter()
                .map(|label| label.to_string())
                .collect(),
            },
            transform: ScoreTransform::PercentOfMax,
            cutoffs: vec![
                CutoffBand { band: SeverityBand::VeryPoor, min: 0, max: 28 },
                CutoffBand { band: SeverityBand::Poor, min: 29, max: 50 },
                CutoffBand { band: SeverityBand::Moderate, min: 51, max: 75 },
                CutoffBand { band: SeverityBand::Good, min: 76, max: 100 },
            ],
            screener_len: None,
        }
    });
    &DEF
}
