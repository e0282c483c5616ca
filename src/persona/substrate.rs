//! Trait substrate: Big Five scores and neurodivergence flags.
//!
//! Traits are the relatively fixed baseline the needs adjustment corrects
//! against.  Scores usually come from an external test on a 0–100 T-score
//! scale; values already in 0–1 are accepted as-is.

use serde::{Deserialize, Serialize};

use crate::config::SubstrateConfig;
use crate::error::AssessmentError;

/// Names of the five trait axes, in canonical OCEAN order.
pub const TRAIT_NAMES: [&str; 5] = [
    "openness",
    "conscientiousness",
    "extraversion",
    "agreeableness",
    "neuroticism",
];

/// Normalize one raw trait score with the default 0–100 scale.
///
/// Values above 1.0 are divided by 100; anything else passes through
/// unchanged, including exactly 1.0.
pub fn normalize(raw: f64) -> f64 {
    normalize_with(raw, SubstrateConfig::default().scale_divisor)
}

/// Normalize one raw trait score with an explicit percentage divisor.
pub fn normalize_with(raw: f64, scale_divisor: f64) -> f64 {
    if raw > 1.0 {
        raw / scale_divisor
    } else {
        raw
    }
}

/// Raw trait scores as reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    #[serde(default)]
    pub has_adhd: bool,
    #[serde(default)]
    pub has_asd: bool,
}

impl RawTraits {
    fn scores(&self) -> [f64; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }
}

/// Normalized trait profile.  All five scalars are in `[0, 1]` when built
/// with [`TraitProfile::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    pub has_adhd: bool,
    pub has_asd: bool,
}

impl TraitProfile {
    /// Validate and normalize raw traits with the default scale.
    ///
    /// Rejects NaN and anything outside `[0, 100]`.
    pub fn new(raw: RawTraits) -> Result<Self, AssessmentError> {
        Self::with_config(raw, &SubstrateConfig::default())
    }

    /// Validate and normalize raw traits with an explicit config.
    pub fn with_config(raw: RawTraits, config: &SubstrateConfig) -> Result<Self, AssessmentError> {
        for (&name, value) in TRAIT_NAMES.iter().zip(raw.scores()) {
            let normalized = normalize_with(value, config.scale_divisor);
            if !(0.0..=config.scale_divisor).contains(&value) || !(0.0..=1.0).contains(&normalized)
            {
                return Err(AssessmentError::InvalidTraitRange { name, value });
            }
        }
        Ok(Self::unchecked_with(raw, config))
    }

    /// Normalize without validation.  Out-of-scale values pass straight
    /// through the scale rule, so 150 becomes 1.5.
    pub fn unchecked(raw: RawTraits) -> Self {
        Self::unchecked_with(raw, &SubstrateConfig::default())
    }

    fn unchecked_with(raw: RawTraits, config: &SubstrateConfig) -> Self {
        let n = |v| normalize_with(v, config.scale_divisor);
        let profile = Self {
            openness: n(raw.openness),
            conscientiousness: n(raw.conscientiousness),
            extraversion: n(raw.extraversion),
            agreeableness: n(raw.agreeableness),
            neuroticism: n(raw.neuroticism),
            has_adhd: raw.has_adhd,
            has_asd: raw.has_asd,
        };
        log::debug!("Trait substrate normalized: {:?}", profile);
        profile
    }

    /// The five scalars in OCEAN order.
    pub fn scores(&self) -> [f64; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
