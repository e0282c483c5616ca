//! Profile assembly: the "user manual" report.
//!
//! ```text
//! AdjustedNeeds ──rank──► primary / secondary drivers
//! ShadowProfile ──rules─► shadow warning
//! ErosProfile ──────────► erotic key
//! ProfessionalProfile? ─► key, interaction style, resource warning
//!                           ↓
//!                       UserManual
//! ```

pub mod rules;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::persona::{AdjustedNeeds, ErosProfile, NeedAxis, ProfessionalProfile, ShadowProfile};

pub use rules::{select_warning, ShadowRule, AUTO_REGULATION_NOTE, SHADOW_RULES, STABLE_WARNING};

/// Shown when career centrality exceeds the configured threshold.
pub const RESOURCE_WARNING: &str =
    "⚠️ Warning: high career centrality. Risk of a household resource deficit (Low Resource Availability).";

// ============================================================================
// Report types
// ============================================================================

/// One labelled adjusted need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNeed {
    pub axis: NeedAxis,
    pub label: String,
    pub score: f64,
}

impl RankedNeed {
    fn new(axis: NeedAxis, score: f64) -> Self {
        Self {
            axis,
            label: axis.label().to_string(),
            score,
        }
    }
}

/// Professional section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    /// `"PRIMARY / SECONDARY / TERTIARY"`.
    pub key: String,
    pub interaction_style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_warning: Option<String>,
}

/// The final report of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserManual {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub name: String,
    /// Adjusted needs in canonical axis order.
    pub scores: Vec<RankedNeed>,
    pub primary_driver: RankedNeed,
    pub secondary_driver: RankedNeed,
    pub shadow_warning: String,
    pub erotic_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional: Option<ProfessionalSummary>,
}

// ============================================================================
// Assembler
// ============================================================================

/// Composes component outputs into a [`UserManual`].
#[derive(Debug, Clone)]
pub struct ProfileAssembler<'r> {
    config: ReportConfig,
    rules: &'r [ShadowRule],
}

impl Default for ProfileAssembler<'static> {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ProfileAssembler<'static> {
    /// Assembler with the built-in shadow rules.
    pub fn new(config: ReportConfig) -> Self {
        Self::with_rules(config, &SHADOW_RULES)
    }
}

impl<'r> ProfileAssembler<'r> {
    pub fn with_rules(config: ReportConfig, rules: &'r [ShadowRule]) -> Self {
        Self { config, rules }
    }

    /// Needs sorted by score, highest first.  The sort is stable, so ties
    /// keep canonical axis order.
    pub fn rank(&self, needs: &AdjustedNeeds) -> [RankedNeed; 4] {
        let mut ranked = needs
            .labelled()
            .map(|(axis, score)| RankedNeed::new(axis, score));
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    pub fn shadow_warning(&self, shadow: &ShadowProfile) -> String {
        select_warning(self.rules, shadow)
    }

    pub fn professional_summary(&self, professional: &ProfessionalProfile) -> ProfessionalSummary {
        let resource_warning = (professional.career_centrality
            > self.config.career_centrality_threshold)
            .then(|| RESOURCE_WARNING.to_string());
        ProfessionalSummary {
            key: professional.summary_key(),
            interaction_style: professional.interaction_style().to_string(),
            resource_warning,
        }
    }

    /// Build the full report under a fresh session id.
    pub fn assemble(
        &self,
        name: &str,
        needs: &AdjustedNeeds,
        shadow: &ShadowProfile,
        eros: &ErosProfile,
        professional: Option<&ProfessionalProfile>,
    ) -> UserManual {
        let [primary_driver, secondary_driver, ..] = self.rank(needs);

        let manual = UserManual {
            session_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            name: name.to_string(),
            scores: needs
                .labelled()
                .iter()
                .map(|&(axis, score)| RankedNeed::new(axis, score))
                .collect(),
            primary_driver,
            secondary_driver,
            shadow_warning: self.shadow_warning(shadow),
            erotic_key: eros.summary(),
            professional: professional.map(|p| self.professional_summary(p)),
        };
        log::debug!(
            "Assembled manual {} for '{}': primary={} secondary={}",
            manual.session_id,
            manual.name,
            manual.primary_driver.axis,
            manual.secondary_driver.axis
        );
        manual
    }
}

// ============================================================================
// Tests
// ============================================================================
