use thiserror::Error;
use uuid::Uuid;

use sentio_instruments::error::InstrumentError;

use crate::phase::Phase;

#[derive(Debug, Error)]
pub enum SessionError {
    /// An answer failed instrument validation, or scoring was handed a
    /// malformed vector. The session is left unchanged.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// The requested operation is not valid in the session's current
    /// phase. Caller error, non-fatal; the session is left unchanged.
    #[error("invalid transition from {phase:?}: {reason}")]
    InvalidPhaseTransition { phase: Phase, reason: &'static str },

    /// The session already produced its submission payload.
    #[error("session {id} was already submitted")]
    AlreadySubmitted { id: Uuid },
}
