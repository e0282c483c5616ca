//! One assessment session: validated inputs in, [`UserManual`] out.
//!
//! The input document is JSON or YAML:
//!
//! ```yaml
//! name: Alex
//! traits: { openness: 80, conscientiousness: 20, extraversion: 70,
//!           agreeableness: 50, neuroticism: 90, has_adhd: true }
//! scenarios:
//!   - { question_id: conf_01, option: 2 }
//! attachment:
//!   mode: quiz
//!   answers:
//!     - { question_id: att_01, option: 0 }
//! eros:
//!   mode: manual
//!   accelerator: 0.4
//!   brake: 0.7
//!   context_dependency: high
//!   tags: [Visual]
//! professional:
//!   primary_type: investigative
//!   secondary_type: artistic
//!   tertiary_type: realistic
//!   career_centrality: 0.8
//! ```
//!
//! Every call to [`Assessment::evaluate`] builds its own accumulators, so
//! independent sessions never share state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Selection, EROS_CATALOG};
use crate::config::EngineConfig;
use crate::error::AssessmentError;
use crate::persona::{
    AttachmentClassifier, AttachmentStyle, ConflictResponse, ContextDependency, ErosCalculator,
    ErosProfile, NeedsAdjustmentEngine, ProfessionalProfile, RawTraits, RegulationMethod,
    ScenarioAggregator, ShadowProfile, TraitProfile,
};
use crate::report::{ProfileAssembler, UserManual};

fn default_name() -> String {
    "User".to_string()
}

/// How the attachment section was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AttachmentInput {
    Quiz {
        #[serde(default)]
        answers: Vec<Selection>,
    },
    Manual {
        attachment_style: AttachmentStyle,
        conflict_response: ConflictResponse,
        regulation_method: RegulationMethod,
    },
}

impl Default for AttachmentInput {
    fn default() -> Self {
        Self::Quiz { answers: vec![] }
    }
}

/// How the eros section was answered.  Tags accompany either mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ErosInput {
    Quiz {
        #[serde(default)]
        answers: Vec<Selection>,
        #[serde(default)]
        tags: Vec<String>,
    },
    Manual {
        accelerator: f64,
        brake: f64,
        context_dependency: ContextDependency,
        #[serde(default)]
        tags: Vec<String>,
    },
}

impl Default for ErosInput {
    fn default() -> Self {
        Self::Quiz {
            answers: vec![],
            tags: vec![],
        }
    }
}

/// Complete input of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default = "default_name")]
    pub name: String,
    pub traits: RawTraits,
    #[serde(default)]
    pub scenarios: Vec<Selection>,
    #[serde(default)]
    pub attachment: AttachmentInput,
    #[serde(default)]
    pub eros: ErosInput,
    /// Deserialized as submitted; range-checked by [`Assessment::evaluate`].
    #[serde(default)]
    pub professional: Option<ProfessionalProfile>,
}

impl Assessment {
    pub fn from_json(json: &str) -> Result<Self, AssessmentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, AssessmentError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from disk.  `.json` files are parsed as JSON, anything else as YAML.
    pub fn from_file(path: &str) -> Result<Self, AssessmentError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Run the whole pipeline.
    pub fn evaluate(&self, config: &EngineConfig) -> Result<UserManual, AssessmentError> {
        let traits = TraitProfile::with_config(self.traits, &config.substrate)?;

        let raw_needs =
            ScenarioAggregator::builtin(config.scenarios.strategy).score(&self.scenarios)?;
        let needs = NeedsAdjustmentEngine::new(config.adjustment.clone()).adjust(&raw_needs, &traits);

        let shadow = match &self.attachment {
            AttachmentInput::Quiz { answers } => AttachmentClassifier::default().classify(answers)?,
            AttachmentInput::Manual {
                attachment_style,
                conflict_response,
                regulation_method,
            } => ShadowProfile::manual(*attachment_style, *conflict_response, *regulation_method),
        };

        let eros = match &self.eros {
            ErosInput::Quiz { answers, tags } => {
                ErosCalculator::new(&EROS_CATALOG, config.eros.clone())
                    .calculate(answers, tags.clone())?
            }
            ErosInput::Manual {
                accelerator,
                brake,
                context_dependency,
                tags,
            } => ErosProfile::manual(*accelerator, *brake, *context_dependency, tags.clone())?,
        };

        let professional = self
            .professional
            .map(ProfessionalProfile::validate)
            .transpose()?;

        let manual = ProfileAssembler::new(config.report.clone()).assemble(
            &self.name,
            &needs,
            &shadow,
            &eros,
            professional.as_ref(),
        );
        log::info!(
            "Assessment '{}' evaluated (session {})",
            manual.name,
            manual.session_id
        );
        Ok(manual)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{NeedAxis, NormalizationStrategy};
    use crate::report::{AUTO_REGULATION_NOTE, RESOURCE_WARNING, SHADOW_RULES, STABLE_WARNING};
    use std::io::Write;

    const YAML: &str = r#"
name: Alex
traits:
  openness: 80
  conscientiousness: 20
  extraversion: 70
  agreeableness: 50
  neuroticism: 90
  has_adhd: true
scenarios:
  - { question_id: conf_01, option: 2 }
  - { question_id: res_01, option: 1 }
attachment:
  mode: quiz
  answers:
    - { question_id: att_01, option: 1 }
    - { question_id: att_02, option: 0 }
    - { question_id: att_03, option: 2 }
eros:
  mode: quiz
  answers:
    - { question_id: eros_01, option: 0 }
  tags: [Visual, Tactile]
professional:
  primary_type: investigative
  secondary_type: artistic
  tertiary_type: realistic
  career_centrality: 0.8
"#;

    #[test]
    fn test_evaluate_full_yaml() {
        let assessment = Assessment::from_yaml(YAML).unwrap();
        let manual = assessment.evaluate(&EngineConfig::default()).unwrap();

        assert_eq!(manual.name, "Alex");
        // avoidant tally (1, 0, 2) with auto-regulation
        assert_eq!(
            manual.shadow_warning,
            format!("{}{}", SHADOW_RULES[0].warning, AUTO_REGULATION_NOTE)
        );
        assert_eq!(manual.erotic_key, "Brake: 100% | Context: HIGH");
        // conscientiousness 0.2 + ADHD floors resource at 1.0
        assert_eq!(manual.primary_driver.axis, NeedAxis::Resource);
        assert_eq!(manual.primary_driver.score, 1.0);

        let prof = manual.professional.unwrap();
        assert_eq!(prof.key, "INVESTIGATIVE / ARTISTIC / REALISTIC");
        assert_eq!(prof.resource_warning.as_deref(), Some(RESOURCE_WARNING));
    }

    #[test]
    fn test_minimal_json_defaults() {
        let json = r#"{
            "traits": {
                "openness": 0.5, "conscientiousness": 0.5, "extraversion": 0.5,
                "agreeableness": 0.5, "neuroticism": 0.5
            }
        }"#;
        let assessment = Assessment::from_json(json).unwrap();
        assert_eq!(assessment.name, "User");
        assert_eq!(assessment.attachment, AttachmentInput::default());

        let manual = assessment.evaluate(&EngineConfig::default()).unwrap();
        // empty quiz resolves to anxious, co-regulation
        assert_eq!(manual.shadow_warning, SHADOW_RULES[1].warning);
        assert_eq!(manual.erotic_key, "Brake: 0% | Context: LOW");
        assert!(manual.professional.is_none());
        // no scenarios: safety = 0.5 * 0.65
        assert!((manual.scores[0].score - 0.325).abs() < 1e-9);
    }

    #[test]
    fn test_manual_modes() {
        let yaml = r#"
traits: { openness: 0.5, conscientiousness: 0.5, extraversion: 0.5, agreeableness: 0.5, neuroticism: 0.5 }
attachment:
  mode: manual
  attachment_style: secure
  conflict_response: freeze
  regulation_method: co_regulation
eros:
  mode: manual
  accelerator: 0.3
  brake: 0.45
  context_dependency: high
"#;
        let manual = Assessment::from_yaml(yaml)
            .unwrap()
            .evaluate(&EngineConfig::default())
            .unwrap();
        assert_eq!(manual.shadow_warning, STABLE_WARNING);
        // manual context is kept even though the brake is below threshold
        assert_eq!(manual.erotic_key, "Brake: 45% | Context: HIGH");
    }

    #[test]
    fn test_invalid_selection_rejected() {
        let mut assessment = Assessment::from_yaml(YAML).unwrap();
        assessment.scenarios.push(Selection::new("conf_01", 0));
        let err = assessment.evaluate(&EngineConfig::default()).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidSelection { .. }));

        let mut assessment = Assessment::from_yaml(YAML).unwrap();
        assessment.scenarios = vec![Selection::new("no_such_scenario", 0)];
        assert!(assessment.evaluate(&EngineConfig::default()).is_err());
    }

    #[test]
    fn test_trait_out_of_range_rejected() {
        let mut assessment = Assessment::from_yaml(YAML).unwrap();
        assessment.traits.neuroticism = 150.0;
        let err = assessment.evaluate(&EngineConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::InvalidTraitRange {
                name: "neuroticism",
                ..
            }
        ));
    }

    #[test]
    fn test_centrality_out_of_range_rejected() {
        let mut assessment = Assessment::from_yaml(YAML).unwrap();
        if let Some(p) = assessment.professional.as_mut() {
            p.career_centrality = 1.2;
        }
        let err = assessment.evaluate(&EngineConfig::default()).unwrap_err();
        assert!(matches!(err, AssessmentError::OutOfRange { .. }));
    }

    #[test]
    fn test_professional_section_checked_on_evaluate() {
        let yaml = YAML.replace("career_centrality: 0.8", "career_centrality: 1.4");
        // parsing accepts the document as submitted
        let assessment = Assessment::from_yaml(&yaml).unwrap();
        assert_eq!(
            assessment.professional.map(|p| p.career_centrality),
            Some(1.4)
        );
        let err = assessment.evaluate(&EngineConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::OutOfRange {
                field: "career_centrality",
                ..
            }
        ));
    }

    #[test]
    fn test_config_changes_output() {
        let assessment = Assessment::from_yaml(YAML).unwrap();
        let mut config = EngineConfig::default();
        config.scenarios.strategy = NormalizationStrategy::TheoreticalMax;
        config.report.career_centrality_threshold = 0.9;
        let manual = assessment.evaluate(&config).unwrap();
        assert!(manual.professional.unwrap().resource_warning.is_none());
    }

    #[test]
    fn test_demo_files_evaluate() {
        let assessment = Assessment::from_yaml(include_str!("../demos/assessment.yaml")).unwrap();
        let config = EngineConfig::from_yaml(include_str!("../demos/engine.yaml")).unwrap();
        assert!(config.adjustment.clamp_expansion);
        let manual = assessment.evaluate(&config).unwrap();
        assert!(manual
            .scores
            .iter()
            .all(|n| (0.0..=1.0).contains(&n.score)));
    }

    #[test]
    fn test_from_file_by_extension() {
        let assessment = Assessment::from_yaml(YAML).unwrap();

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, "{}", serde_json::to_string(&assessment).unwrap()).unwrap();
        let loaded = Assessment::from_file(json.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded, assessment);

        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(yaml, "{}", YAML).unwrap();
        let loaded = Assessment::from_file(yaml.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded, assessment);
    }
}
