//! Domain model for daily tracking state and static reference records.
//!
//! # Responsibility
//! - Define the persisted shapes (`DailyLog`, `WeightEntry`, `UserProfile`).
//! - Define the immutable catalog record shapes (meals, exercises, supplements).
//!
//! # Invariants
//! - Every daily log is keyed by a unique calendar date.
//! - Catalog records are never mutated at runtime.

pub mod catalog;
pub mod daily_log;
pub mod macros;
pub mod profile;
pub mod weight;
