use std::sync::LazyLock;

use sentio_core::models::severity::SeverityBand;

use crate::catalog::{
    CutoffBand, InstrumentDef, InstrumentKind, ItemDef, ItemRole, ResponseScale, ScoreTransform,
};
use crate::instruments::frequency_labels;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items on the 0–3 frequency scale, total 0–21. Items 1–2 double as
/// the GAD-2 screener.
pub fn definition() -> &'static InstrumentDef {
    static DEF: LazyLock<InstrumentDef> = LazyLock::new(|| {
        let items = [
            ("nervousness", "Feeling nervous, anxious, or on edge"),
            (
                "worry_control",
                "Not being able to stop or control worrying",
            ),
            (
                "excessive_worry",
                "Worrying too much about different things",
            ),
            ("trouble_relaxing", "Trouble relaxing"),
            (
                "restlessness",
                "Being so restless that it is hard to sit still",
            ),
            ("irritability", "Becoming easily annoyed or irritable"),
            (
                "foreboding",
                "Feeling afraid, as if something awful might happen",
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
                role: if position < 2 {
                    ItemRole::Screener
                } else {
                    ItemRole::Remainder
                },
                crisis: false,
            })
            .collect();

        InstrumentDef {
            kind: InstrumentKind::Gad7,
            id: "gad7".to_string(),
            name: "GAD-7".to_string(),
            items,
            scale: ResponseScale {
                min: 0,
                max: 3,
                labels: frequency_labels(),
            },
            transform: ScoreTransform::Raw,
            cutoffs: vec![
                CutoffBand { band: SeverityBand::Minimal, min: 0, max: 4 },
                CutoffBand { band: SeverityBand::Mild, min: 5, max: 9 },
                CutoffBand { band: SeverityBand::Moderate, min: 10, max: 14 },
                CutoffBand { band: SeverityBand::Severe, min: 15, max: 21 },
            ],
            screener_len: Some(2),
        }
    });
    &DEF
}
