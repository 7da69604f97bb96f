//! Session persistence seam.
//!
//! The engine never reads or writes storage itself; hosts implement
//! [`SessionStore`] (browser storage, a database, an in-memory map)
//! and drive save/load around the answer flow. Sessions serialize as
//! JSON at this boundary.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use crate::session::Session;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub trait SessionStore {
    fn save(&mut self, session: &Session) -> Result<(), StoreError>;
    fn load(&self, id: Uuid) -> Result<Option<Session>, StoreError>;
    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// In-memory store keyed by session id, mainly for tests and demo
/// hosts. Round-trips through JSON so it exercises the same shape a
/// real backend would persist.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: HashMap<Uuid, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemoryStore {
    fn save(&mut self, session: &Session) -> Result<(), StoreError> {
        let json = serde_json::to_string(session)?;
        self.sessions.insert(session.id(), json);
        Ok(())
    }

    fn load(&self, id: Uuid) -> Result<Option<Session>, StoreError> {
        self.sessions
            .get(&id)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(StoreError::from)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.sessions.remove(&id);
        Ok(())
    }
}
