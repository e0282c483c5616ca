//! Engine configuration: every tunable constant of the scoring pipeline.
//!
//! Defaults reproduce the behaviour of the live assessment exactly.  A YAML
//! file only needs to name the values it overrides:
//!
//! ```yaml
//! scenarios:
//!   strategy: { kind: theoretical_max }
//! adjustment:
//!   clamp_expansion: true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::persona::needs::NormalizationStrategy;

// ============================================================================
// Top-level config
// ============================================================================

/// Complete configuration for one scoring pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub substrate: SubstrateConfig,
    pub scenarios: ScenarioConfig,
    pub adjustment: AdjustmentConfig,
    pub eros: ErosConfig,
    pub report: ReportConfig,
}

impl EngineConfig {
    /// Parse an `EngineConfig` from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse an `EngineConfig` from a YAML file on disk.
    pub fn from_yaml_file(path: &str) -> Result<Self, AssessmentError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Trait substrate scale handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstrateConfig {
    /// Raw values above 1.0 are treated as percentages and divided by this.
    pub scale_divisor: f64,
}

impl Default for SubstrateConfig {
    fn default() -> Self {
        Self {
            scale_divisor: 100.0,
        }
    }
}

/// Scenario accumulator normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub strategy: NormalizationStrategy,
}

/// Constants of the trait-driven needs adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentConfig {
    /// Share of adjusted safety taken from neuroticism (the rest from raw safety).
    pub neuroticism_weight: f64,
    /// Implicit safety added for autism spectrum.
    pub asd_safety_boost: f64,
    /// Executive-function penalty added to the resource need for ADHD.
    pub adhd_resource_penalty: f64,
    /// Openness above which the resonance floor applies.
    pub openness_resonance_threshold: f64,
    /// Resonance floor for high openness.
    pub resonance_floor: f64,
    /// Stimulation-seeking bonus added to the expansion driver for ADHD.
    pub adhd_expansion_boost: f64,
    /// Clamp adjusted expansion to 1.0.  Off by default: the live formula
    /// allows values up to 1.075.
    pub clamp_expansion: bool,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            neuroticism_weight: 0.65,
            asd_safety_boost: 0.2,
            adhd_resource_penalty: 0.25,
            openness_resonance_threshold: 0.75,
            resonance_floor: 0.8,
            adhd_expansion_boost: 0.15,
            clamp_expansion: false,
        }
    }
}

/// Dual control model thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErosConfig {
    /// Brake above which context dependency is HIGH.
    pub brake_threshold: f64,
}

impl Default for ErosConfig {
    fn default() -> Self {
        Self {
            brake_threshold: 0.6,
        }
    }
}

/// Report assembly thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Career centrality above which the resource-scarcity warning is emitted.
    pub career_centrality_threshold: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            career_centrality_threshold: 0.75,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
