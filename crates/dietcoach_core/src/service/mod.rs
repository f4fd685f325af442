//! Tracker use-case services.
//!
//! # Responsibility
//! - Turn catalog, metrics and repository calls into tracker operations.
//! - Keep the CLI decoupled from storage details.

pub mod summary;
pub mod tracker_service;
