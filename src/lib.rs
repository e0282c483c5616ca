//! # CRNAS - Comprehensive Relationship Needs Analysis System
//!
//! Turns self-reported preferences and stable trait measurements into a
//! four-axis relational needs profile (SRME: Safety, Resource, Resonance,
//! Expansion), correcting what a person *says* they want with what their
//! trait substrate implies they structurally *need*.
//!
//! The pipeline is synchronous and side-effect free.  Static question
//! catalogs live in [`catalog`], the scoring components in [`persona`], and
//! [`report`] assembles the final [`UserManual`].  [`Assessment`] wires one
//! session end to end.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod persona;
pub mod report;

// Re-exports
pub use assessment::Assessment;
pub use config::EngineConfig;
pub use error::AssessmentError;
pub use persona::{AdjustedNeeds, NeedsAdjustmentEngine, RawNeeds, TraitProfile};
pub use report::{ProfileAssembler, UserManual};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
