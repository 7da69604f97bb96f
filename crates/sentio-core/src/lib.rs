//! sentio-core
//!
//! Pure domain types shared across the Sentio screening engine.
//! No instrument data and no session logic. This is the vocabulary the
//! other crates speak: severity bands, risk classification, the
//! canonical submission payload.

pub mod models;
