//! Persona pipeline: from raw answers to trait-corrected relational needs.
//!
//! # Architecture
//!
//! ```text
//! RawTraits ──normalize──► TraitProfile ─────────────┐
//!                                                    ├─► NeedsAdjustmentEngine ─► AdjustedNeeds
//! scenario Selections ─► ScenarioAggregator ─► RawNeeds
//!
//! attachment Selections ─► AttachmentClassifier ─► ShadowProfile
//! eros Selections ───────► ErosCalculator ───────► ErosProfile
//! ProfessionalProfile (optional)
//! ```
//!
//! Every stage is a pure function of its inputs.  Accumulators are built
//! fresh per assessment and nothing is shared between sessions.

pub mod adjustment;
pub mod eros;
pub mod needs;
pub mod professional;
pub mod shadow;
pub mod substrate;

// Re-exports
pub use adjustment::{AdjustedNeeds, NeedsAdjustmentEngine};
pub use eros::{ContextDependency, ErosCalculator, ErosProfile};
pub use needs::{norm, NeedAxis, NormalizationStrategy, RawNeeds, ScenarioAggregator};
pub use professional::{HollandCode, ProfessionalProfile};
pub use shadow::{
    AttachmentClassifier, AttachmentStyle, AttachmentTally, ConflictResponse, RegulationMethod,
    ShadowProfile,
};
pub use substrate::{normalize, RawTraits, TraitProfile};
