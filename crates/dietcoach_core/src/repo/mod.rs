//! Repository layer for persisted tracker state.
//!
//! # Responsibility
//! - Define the use-case oriented contract for the three state blobs.
//! - Isolate SQLite and JSON encoding details from the tracker service.
//!
//! # Invariants
//! - Each blob is stored whole under its own key; writes replace, never patch.
//! - A missing key reads as `None`, distinct from a decoding failure.

pub mod state_repo;
