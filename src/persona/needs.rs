//! SRME needs model and the scenario aggregator.
//!
//! The four axes (Safety, Resource, Resonance, Expansion) are scored by
//! summing the weight vectors of the chosen scenario options, then scaled
//! into the unit interval by a [`NormalizationStrategy`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{accumulate, Catalog, Scenario, Selection, SCENARIO_CATALOG};
use crate::error::AssessmentError;

// ============================================================================
// Axes
// ============================================================================

/// The four SRME need axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedAxis {
    /// Predictability and emotional regulation.
    Safety,
    /// Executive-function support and acts of service.
    Resource,
    /// Cognitive and emotional mirroring, shared meaning.
    Resonance,
    /// Novelty, autonomy, growth.
    Expansion,
}

impl NeedAxis {
    /// All four axes in canonical order (also the report's tie-break order).
    pub const ALL: [NeedAxis; 4] = [
        Self::Safety,
        Self::Resource,
        Self::Resonance,
        Self::Expansion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Safety => "Safety",
            Self::Resource => "Resource",
            Self::Resonance => "Resonance",
            Self::Expansion => "Expansion",
        }
    }
}

impl fmt::Display for NeedAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Raw needs
// ============================================================================

/// Needs derived purely from self-report, before trait correction.
///
/// Straight out of [`ScenarioAggregator::aggregate`] the values are
/// unbounded sums; after [`ScenarioAggregator::normalize`] they lie in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNeeds {
    pub safety: f64,
    pub resource: f64,
    pub resonance: f64,
    pub expansion: f64,
}

impl RawNeeds {
    pub fn new(safety: f64, resource: f64, resonance: f64, expansion: f64) -> Self {
        Self {
            safety,
            resource,
            resonance,
            expansion,
        }
    }

    pub fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.safety, self.resource, self.resonance, self.expansion]
    }

    pub fn get(&self, axis: NeedAxis) -> f64 {
        self.to_array()[axis as usize]
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// How scenario accumulators are scaled into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationStrategy {
    /// `clamp(x / divisor, 0, 1)` with an empirically chosen divisor.
    FixedDivisor { divisor: f64 },
    /// `clamp(x / max_axis, 0, 1)` where `max_axis` is the best score the
    /// catalog allows on that axis.
    TheoreticalMax,
}

impl Default for NormalizationStrategy {
    fn default() -> Self {
        Self::FixedDivisor { divisor: 2.0 }
    }
}

/// Scale one accumulator: divide, then clamp into `[0, 1]`.
///
/// A non-positive scale yields 0.0.
pub fn norm(x: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return 0.0;
    }
    (x / scale).clamp(0.0, 1.0)
}

// ============================================================================
// Scenario aggregator
// ============================================================================

/// Sums scenario selections into raw SRME needs.
#[derive(Debug, Clone)]
pub struct ScenarioAggregator<'a> {
    catalog: &'a Catalog<'a, Scenario>,
    strategy: NormalizationStrategy,
}

impl ScenarioAggregator<'static> {
    /// Aggregator over the built-in scenario catalog.
    pub fn builtin(strategy: NormalizationStrategy) -> Self {
        Self::new(&SCENARIO_CATALOG, strategy)
    }
}

impl Default for ScenarioAggregator<'static> {
    fn default() -> Self {
        Self::builtin(NormalizationStrategy::default())
    }
}

impl<'a> ScenarioAggregator<'a> {
    pub fn new(catalog: &'a Catalog<'a, Scenario>, strategy: NormalizationStrategy) -> Self {
        Self { catalog, strategy }
    }

    pub fn strategy(&self) -> NormalizationStrategy {
        self.strategy
    }

    /// Sum the chosen option weights per axis.  Unbounded.
    pub fn aggregate(&self, selections: &[Selection]) -> Result<RawNeeds, AssessmentError> {
        let weights: Vec<[f64; 4]> = self.catalog.resolve(selections)?;
        let totals = RawNeeds::from_array(accumulate(&weights));
        log::debug!(
            "Scenario accumulators over {} answers: {:?}",
            weights.len(),
            totals
        );
        Ok(totals)
    }

    /// Scale accumulators into `[0, 1]` with the configured strategy.
    pub fn normalize(&self, totals: &RawNeeds) -> RawNeeds {
        let scales: [f64; 4] = match self.strategy {
            NormalizationStrategy::FixedDivisor { divisor } => [divisor; 4],
            NormalizationStrategy::TheoreticalMax => self.catalog.theoretical_max(),
        };
        let t = totals.to_array();
        RawNeeds::from_array([
            norm(t[0], scales[0]),
            norm(t[1], scales[1]),
            norm(t[2], scales[2]),
            norm(t[3], scales[3]),
        ])
    }

    /// Aggregate then normalize.
    pub fn score(&self, selections: &[Selection]) -> Result<RawNeeds, AssessmentError> {
        let totals = self.aggregate(selections)?;
        Ok(self.normalize(&totals))
    }
}

// ============================================================================
// Tests
// ============================================================================
