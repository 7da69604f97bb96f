use std::sync::LazyLock;

use sentio_core::models::severity::SeverityBand;

use crate::catalog::{
    CutoffBand, InstrumentDef, InstrumentKind, ItemDef, ItemRole, ResponseScale, ScoreTransform,
};
use crate::instruments::frequency_labels;

/// PHQ-9: Patient Health Questionnaire depression module.
/// 9 items on the 0–3 frequency scale, total 0–27. Items 1–2 double as
/// the PHQ-2 screener; item 9 asks about self-harm and is the crisis
/// item.
pub fn definition() -> &'static InstrumentDef {
    static DEF: LazyLock<InstrumentDef> = LazyLock::new(|| {
        let mut items = vec![
            item(0, "interest", "Little interest or pleasure in doing things"),
            item(1, "mood", "Feeling down, depressed, or hopeless"),
            item(
                2,
                "sleep",
                "Trouble falling or staying asleep, or sleeping too much",
            ),
            item(3, "energy", "Feeling tired or having little energy"),
            item(4, "appetite", "Poor appetite or overeating"),
            item(
                5,
                "self_worth",
                "Feeling bad about yourself, or that you are a failure or have \
                 let yourself or your family down",
            ),
            item(
                6,
                "concentration",
                "Trouble concentrating on things, such as reading the newspaper \
                 or watching television",
            ),
            item(
                7,
                "psychomotor",
                "Moving or speaking so slowly that other people could have \
                 noticed, or the opposite: being so fidgety or restless that you \
                 have been moving around a lot more than usual",
            ),
            item(
                8,
                "self_harm",
                "Thoughts that you would be better off dead, or of hurting \
                 yourself in some way",
            ),
        ];

        items[2].help = Some("Count both difficulty sleeping and oversleeping.".to_string());
        items[7].help = Some(
            "Either a slowdown or restlessness counts, as long as other people \
             could have noticed it."
                .to_string(),
        );
        items[8].help = Some(
            "This question is asked of everyone. If it applies to you, support \
             options are shown right away."
                .to_string(),
        );
        items[8].rationale = Some(
            "Self-harm ideation is assessed directly; any answer above \
             \"not at all\" routes to immediate support, independent of the \
             total score."
                .to_string(),
        );
        items[8].crisis = true;

        InstrumentDef {
            kind: InstrumentKind::Phq9,
            id: "phq9".to_string(),
            name: "PHQ-9".to_string(),
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
                CutoffBand { band: SeverityBand::ModeratelySevere, min: 15, max: 19 },
                CutoffBand { band: SeverityBand::Severe, min: 20, max: 27 },
            ],
            screener_len: Some(2),
        }
    });
    &DEF
}

fn item(position: usize, id: &str, text: &str) -> ItemDef {
    ItemDef {
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
    }
}
