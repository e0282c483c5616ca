//! Eros component: dual control model of sexual response.
//!
//! Accelerator (ease of arousal) and brake (stress-driven inhibition) are
//! independent.  A sensitive brake means arousal depends on context.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{accumulate, Catalog, QuizQuestion, Selection, EROS_CATALOG};
use crate::config::ErosConfig;
use crate::error::{ensure_unit, AssessmentError};

/// How much arousal depends on circumstances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextDependency {
    High,
    Low,
}

impl ContextDependency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High: needs specific conditions, safety and no stress",
            Self::Low => "Low: arousal is spontaneous, stress does not interfere",
        }
    }

    /// Upper-case variant name, as shown in the erotic summary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
        }
    }
}

/// Accelerator/brake profile plus free-text trigger tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErosProfile {
    pub accelerator: f64,
    pub brake: f64,
    pub context_dependency: ContextDependency,
    /// Stored as selected: neither deduplicated nor checked against the
    /// offered catalog.
    pub erotic_tags: Vec<String>,
}

impl ErosProfile {
    /// Direct selection, bypassing the quiz.  The context variant is taken
    /// as given rather than derived from the brake.
    pub fn manual(
        accelerator: f64,
        brake: f64,
        context_dependency: ContextDependency,
        erotic_tags: Vec<String>,
    ) -> Result<Self, AssessmentError> {
        warn_duplicate_tags(&erotic_tags);
        Ok(Self {
            accelerator: ensure_unit("accelerator", accelerator)?,
            brake: ensure_unit("brake", brake)?,
            context_dependency,
            erotic_tags,
        })
    }

    /// Compact summary: brake percentage (truncated) and context code.
    pub fn summary(&self) -> String {
        format!(
            "Brake: {}% | Context: {}",
            (self.brake * 100.0) as i64,
            self.context_dependency.code()
        )
    }
}

fn warn_duplicate_tags(tags: &[String]) {
    let mut seen = HashSet::new();
    for tag in tags {
        if !seen.insert(tag.as_str()) {
            log::warn!("Erotic tag '{}' selected more than once", tag);
        }
    }
}

/// Sums accelerator/brake quiz answers.
#[derive(Debug, Clone)]
pub struct ErosCalculator<'a> {
    catalog: &'a Catalog<'a, QuizQuestion<2>>,
    config: ErosConfig,
}

impl Default for ErosCalculator<'static> {
    fn default() -> Self {
        Self::new(&EROS_CATALOG, ErosConfig::default())
    }
}

impl<'a> ErosCalculator<'a> {
    pub fn new(catalog: &'a Catalog<'a, QuizQuestion<2>>, config: ErosConfig) -> Self {
        Self { catalog, config }
    }

    /// Context dependency implied by a brake value.
    pub fn context_for(&self, brake: f64) -> ContextDependency {
        if brake > self.config.brake_threshold {
            ContextDependency::High
        } else {
            ContextDependency::Low
        }
    }

    /// Score the quiz.  Each accumulator is capped at 1.0; option weights
    /// are non-negative so no lower bound is needed.
    pub fn calculate(
        &self,
        selections: &[Selection],
        erotic_tags: Vec<String>,
    ) -> Result<ErosProfile, AssessmentError> {
        let weights: Vec<[f64; 2]> = self.catalog.resolve(selections)?;
        let [acc, brk] = accumulate(&weights);
        let accelerator = acc.min(1.0);
        let brake = brk.min(1.0);
        let context_dependency = self.context_for(brake);
        warn_duplicate_tags(&erotic_tags);
        log::debug!(
            "Eros quiz: accelerator={} brake={} context={:?}",
            accelerator,
            brake,
            context_dependency
        );
        Ok(ErosProfile {
            accelerator,
            brake,
            context_dependency,
            erotic_tags,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
