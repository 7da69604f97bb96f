use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use sentio_core::models::preferences::PreferenceSelections;
use sentio_instruments::branching;
use sentio_instruments::catalog::{self, InstrumentKind, ItemDef};
use sentio_instruments::risk::CRISIS_ANSWER_THRESHOLD;

use crate::error::SessionError;
use crate::events;
use crate::phase::Phase;

/// The mutable root aggregate for one assessment attempt.
///
/// Owned and driven by a single caller, one answer operation at a
/// time. Every operation is synchronous and either succeeds with the
/// state advanced or fails with the state untouched. The crisis flag
/// is set within the same call that records the triggering answer and
/// is sticky for the life of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub(crate) id: Uuid,
    pub(crate) started_at: Timestamp,
    pub(crate) phase: Phase,
    pub(crate) item_index: usize,
    pub(crate) depression: Vec<i32>,
    pub(crate) anxiety: Vec<i32>,
    pub(crate) preferences: PreferenceSelections,
    pub(crate) crisis_flag: bool,
}

/// A host-facing view of a session's position, safe to render.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub phase: Phase,
    pub item_index: usize,
    /// Answers recorded across both instruments so far.
    pub answered: usize,
    /// Items planned in total, given the expansion decisions made so
    /// far. Grows when a screener expands.
    pub planned: usize,
    pub has_crisis_signal: bool,
}

impl Session {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Timestamp::now(),
            phase: Phase::DepressionScreener,
            item_index: 0,
            depression: Vec::new(),
            anxiety: Vec::new(),
            preferences: PreferenceSelections::new(),
            crisis_flag: false,
        };
        events::session_started(session.id);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// Sticky: true from the moment the crisis item is answered at or
    /// above the crisis threshold, for the rest of the session.
    pub fn has_crisis_signal(&self) -> bool {
        self.crisis_flag
    }

    /// Answers recorded so far for an instrument. Empty for WHO-5,
    /// which is not part of the adaptive flow.
    pub fn answers(&self, kind: InstrumentKind) -> &[i32] {
        match kind {
            InstrumentKind::Phq9 => &self.depression,
            InstrumentKind::Gad7 => &self.anxiety,
            InstrumentKind::Who5 => &[],
        }
    }

    pub fn preferences(&self) -> &PreferenceSelections {
        &self.preferences
    }

    /// The catalog item the cursor currently points at, if the phase
    /// administers items.
    pub fn current_item(&self) -> Option<&'static ItemDef> {
        let kind = self.phase.instrument()?;
        let position = self.phase.item_offset() + self.item_index;
        catalog::definition(kind).items.get(position)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            phase: self.phase,
            item_index: self.item_index,
            answered: self.depression.len() + self.anxiety.len(),
            planned: self.planned_items(),
            has_crisis_signal: self.crisis_flag,
        }
    }

    /// Record an answer for the current item and advance the flow.
    ///
    /// Validation happens before anything is stored, so a rejected
    /// value leaves the session exactly as it was. Revisited items
    /// (after backward navigation) are overwritten in place. Returns
    /// the phase now current, which callers use to drive rendering.
    pub fn record_answer(&mut self, value: i32) -> Result<Phase, SessionError> {
        let kind = self
            .phase
            .instrument()
            .ok_or(SessionError::InvalidPhaseTransition {
                phase: self.phase,
                reason: "no item is expected in this phase",
            })?;
        let def = catalog::definition(kind);
        def.validate_answer(value)?;

        let position = self.phase.item_offset() + self.item_index;
        let vector = match kind {
            InstrumentKind::Phq9 => &mut self.depression,
            InstrumentKind::Gad7 => &mut self.anxiety,
            // the adaptive flow never administers WHO-5
            InstrumentKind::Who5 => {
                return Err(SessionError::InvalidPhaseTransition {
                    phase: self.phase,
                    reason: "no item is expected in this phase",
                });
            }
        };
        debug_assert!(position <= vector.len(), "cursor ahead of recorded answers");
        if position < vector.len() {
            vector[position] = value;
        } else {
            vector.push(value);
        }

        // The crisis flag must be observable before this call returns,
        // whatever phase the session moves to next.
        if def.crisis_item_position() == Some(position) && value >= CRISIS_ANSWER_THRESHOLD {
            if !self.crisis_flag {
                events::crisis_detected(self.id, value);
            }
            self.crisis_flag = true;
        }

        self.advance(kind);
        Ok(self.phase)
    }

    /// Step back to the previous item, crossing phase boundaries where
    /// needed. Which remainder phases exist on the way back is read
    /// off the answer vector lengths: expansion that happened going
    /// forward is retraced, expansion that never happened is skipped.
    pub fn go_back(&mut self) -> Result<Phase, SessionError> {
        if self.item_index > 0 {
            self.item_index -= 1;
            return Ok(self.phase);
        }

        let dep_screener = catalog::screener_of(InstrumentKind::Phq9).len();
        let anx_screener = catalog::screener_of(InstrumentKind::Gad7).len();

        let previous = match self.phase {
            Phase::DepressionScreener => {
                return Err(SessionError::InvalidPhaseTransition {
                    phase: self.phase,
                    reason: "already at the first item",
                });
            }
            Phase::DepressionRemainder => Phase::DepressionScreener,
            Phase::AnxietyScreener => {
                if self.depression.len() > dep_screener {
                    Phase::DepressionRemainder
                } else {
                    Phase::DepressionScreener
                }
            }
            Phase::AnxietyRemainder => Phase::AnxietyScreener,
            Phase::Preferences => {
                if self.anxiety.len() > anx_screener {
                    Phase::AnxietyRemainder
                } else {
                    Phase::AnxietyScreener
                }
            }
            Phase::Complete | Phase::Submitted => {
                return Err(SessionError::InvalidPhaseTransition {
                    phase: self.phase,
                    reason: "the flow is already complete",
                });
            }
        };

        self.phase = previous;
        self.item_index = previous.item_count() - 1;
        Ok(self.phase)
    }

    /// Store the preference selections. Only valid while the session
    /// sits in the preferences phase; may be called again to revise.
    pub fn finalize_preferences(
        &mut self,
        selections: PreferenceSelections,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Preferences {
            return Err(SessionError::InvalidPhaseTransition {
                phase: self.phase,
                reason: "preferences are collected only in the preferences phase",
            });
        }
        self.preferences = selections;
        Ok(())
    }

    /// Explicitly finish the flow. The preferences phase has no
    /// last-item auto-advance; the caller signals completion.
    pub fn complete(&mut self) -> Result<Phase, SessionError> {
        if self.phase != Phase::Preferences {
            return Err(SessionError::InvalidPhaseTransition {
                phase: self.phase,
                reason: "completion is only valid from the preferences phase",
            });
        }
        self.phase = Phase::Complete;
        self.item_index = 0;
        events::session_completed(self.id, self.depression.len(), self.anxiety.len());
        Ok(self.phase)
    }

    /// Abandon the flow early. Whatever was answered so far is kept
    /// and the session moves straight to `Complete`, ready to
    /// normalize; un-administered items are padded at submission.
    pub fn abandon(&mut self) -> Result<Phase, SessionError> {
        if self.phase == Phase::Submitted {
            return Err(SessionError::AlreadySubmitted { id: self.id });
        }
        if self.phase != Phase::Complete {
            events::session_abandoned(self.id, self.phase);
            self.phase = Phase::Complete;
            self.item_index = 0;
        }
        Ok(self.phase)
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.phase = Phase::Submitted;
    }

    fn advance(&mut self, kind: InstrumentKind) {
        if self.item_index + 1 < self.phase.item_count() {
            self.item_index += 1;
            return;
        }

        // Last item of the phase answered: pick the next phase.
        match self.phase {
            Phase::DepressionScreener => {
                let sum = branching::screener_sum(kind, &self.depression);
                if branching::should_expand(sum) {
                    events::screener_expanded(self.id, kind, sum);
                    self.enter(Phase::DepressionRemainder);
                } else {
                    // A revised screener answer can flip an earlier
                    // expansion off; vector length encodes the
                    // decision, so stale remainder answers go.
                    self.depression.truncate(self.phase.item_count());
                    events::screener_skipped(self.id, kind, sum);
                    self.enter(Phase::AnxietyScreener);
                }
            }
            Phase::DepressionRemainder => self.enter(Phase::AnxietyScreener),
            Phase::AnxietyScreener => {
                let sum = branching::screener_sum(kind, &self.anxiety);
                if branching::should_expand(sum) {
                    events::screener_expanded(self.id, kind, sum);
                    self.enter(Phase::AnxietyRemainder);
                } else {
                    self.anxiety.truncate(self.phase.item_count());
                    events::screener_skipped(self.id, kind, sum);
                    self.enter(Phase::Preferences);
                }
            }
            Phase::AnxietyRemainder => self.enter(Phase::Preferences),
            Phase::Preferences | Phase::Complete | Phase::Submitted => {}
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.item_index = 0;
    }

    /// Total items this session will administer, given the branch
    /// decisions taken so far. Before a screener's decision the
    /// remainder is not counted.
    fn planned_items(&self) -> usize {
        let dep_def = catalog::definition(InstrumentKind::Phq9);
        let anx_def = catalog::definition(InstrumentKind::Gad7);

        let dep_expanded = self.phase == Phase::DepressionRemainder
            || self.depression.len() > dep_def.screener().len();
        let anx_expanded = self.phase == Phase::AnxietyRemainder
            || self.anxiety.len() > anx_def.screener().len();

        let dep = if dep_expanded {
            dep_def.item_count()
        } else {
            dep_def.screener().len()
        };
        let anx = if anx_expanded {
            anx_def.item_count()
        } else {
            anx_def.screener().len()
        };
        dep + anx
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
