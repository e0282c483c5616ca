//! Shadow component: attachment style under relational stress.
//!
//! The quiz path sums one-hot answer vectors into an [`AttachmentTally`]
//! and resolves a dominant style by a fixed, order-sensitive tie-break:
//! ANXIOUS, then AVOIDANT, then SECURE.  `Disorganized` is only reachable
//! through [`ShadowProfile::manual`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{accumulate, Catalog, QuizQuestion, Selection, ATTACHMENT_CATALOG};
use crate::error::AssessmentError;

// ============================================================================
// Variants
// ============================================================================

/// Attachment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
}

impl AttachmentStyle {
    pub const ALL: [AttachmentStyle; 4] = [
        Self::Secure,
        Self::Anxious,
        Self::Avoidant,
        Self::Disorganized,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Secure => "Secure",
            Self::Anxious => "Anxious-Preoccupied",
            Self::Avoidant => "Dismissive-Avoidant",
            Self::Disorganized => "Fearful-Avoidant",
        }
    }
}

/// Autopilot response during conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResponse {
    Fight,
    Flight,
    Freeze,
    Fawn,
}

impl ConflictResponse {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fight => "Fight: criticism, aggression",
            Self::Flight => "Flight: distancing",
            Self::Freeze => "Freeze: shutdown, silence",
            Self::Fawn => "Fawn: appeasement to keep the peace",
        }
    }
}

/// How the person calms down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulationMethod {
    CoRegulation,
    AutoRegulation,
}

impl RegulationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CoRegulation => "Co-regulation: calming through contact with another",
            Self::AutoRegulation => "Auto-regulation: calming alone",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(AttachmentStyle, ConflictResponse, RegulationMethod);

// ============================================================================
// Tally
// ============================================================================

/// Summed quiz scores over `(secure, anxious, avoidant)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentTally {
    pub secure: f64,
    pub anxious: f64,
    pub avoidant: f64,
}

/// Tie-break order for the dominant style.  The first rule whose sum equals
/// the maximum wins; SECURE is the fallback.
const DOMINANCE_ORDER: [(AttachmentStyle, fn(&AttachmentTally) -> f64); 2] = [
    (AttachmentStyle::Anxious, |t| t.anxious),
    (AttachmentStyle::Avoidant, |t| t.avoidant),
];

impl AttachmentTally {
    pub fn new(secure: f64, anxious: f64, avoidant: f64) -> Self {
        Self {
            secure,
            anxious,
            avoidant,
        }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Resolve the dominant style.  Ties go ANXIOUS > AVOIDANT > SECURE.
    pub fn dominant(&self) -> AttachmentStyle {
        let mx = self.secure.max(self.anxious).max(self.avoidant);
        DOMINANCE_ORDER
            .iter()
            .find(|(_, sum)| sum(self) == mx)
            .map(|(style, _)| *style)
            .unwrap_or(AttachmentStyle::Secure)
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Resolved attachment style with its correlated conflict response and
/// regulation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowProfile {
    pub attachment_style: AttachmentStyle,
    pub conflict_response: ConflictResponse,
    pub regulation_method: RegulationMethod,
}

impl ShadowProfile {
    /// Derive the full profile from a quiz tally.
    pub fn from_tally(tally: &AttachmentTally) -> Self {
        let style = tally.dominant();
        let (conflict_response, regulation_method) = match style {
            AttachmentStyle::Anxious => (ConflictResponse::Fight, RegulationMethod::CoRegulation),
            AttachmentStyle::Avoidant => {
                (ConflictResponse::Flight, RegulationMethod::AutoRegulation)
            }
            // The quiz never yields Disorganized; it only shares the fallback arm.
            AttachmentStyle::Secure | AttachmentStyle::Disorganized => {
                (ConflictResponse::Fawn, RegulationMethod::CoRegulation)
            }
        };
        log::debug!("Attachment tally {:?} resolved to {:?}", tally, style);
        Self {
            attachment_style: style,
            conflict_response,
            regulation_method,
        }
    }

    /// Direct selection, bypassing the quiz.  Any combination is accepted.
    pub fn manual(
        attachment_style: AttachmentStyle,
        conflict_response: ConflictResponse,
        regulation_method: RegulationMethod,
    ) -> Self {
        Self {
            attachment_style,
            conflict_response,
            regulation_method,
        }
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Sums attachment quiz answers and classifies them.
#[derive(Debug, Clone)]
pub struct AttachmentClassifier<'a> {
    catalog: &'a Catalog<'a, QuizQuestion<3>>,
}

impl Default for AttachmentClassifier<'static> {
    fn default() -> Self {
        Self::new(&ATTACHMENT_CATALOG)
    }
}

impl<'a> AttachmentClassifier<'a> {
    pub fn new(catalog: &'a Catalog<'a, QuizQuestion<3>>) -> Self {
        Self { catalog }
    }

    /// Sum answers into a tally.
    pub fn tally(&self, selections: &[Selection]) -> Result<AttachmentTally, AssessmentError> {
        let weights: Vec<[f64; 3]> = self.catalog.resolve(selections)?;
        Ok(AttachmentTally::from_array(accumulate(&weights)))
    }

    /// Sum answers and resolve the shadow profile.
    pub fn classify(&self, selections: &[Selection]) -> Result<ShadowProfile, AssessmentError> {
        Ok(ShadowProfile::from_tally(&self.tally(selections)?))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_way_tie_is_anxious() {
        assert_eq!(
            AttachmentTally::new(1.0, 1.0, 1.0).dominant(),
            AttachmentStyle::Anxious
        );
    }

    #[test]
    fn test_avoidant_beats_secure_on_tie() {
        assert_eq!(
            AttachmentTally::new(2.0, 0.0, 2.0).dominant(),
            AttachmentStyle::Avoidant
        );
    }

    #[test]
    fn test_anxious_beats_avoidant_on_tie() {
        assert_eq!(
            AttachmentTally::new(0.0, 1.0, 1.0).dominant(),
            AttachmentStyle::Anxious
        );
    }

    #[test]
    fn test_clear_secure() {
        assert_eq!(
            AttachmentTally::new(2.0, 1.0, 0.0).dominant(),
            AttachmentStyle::Secure
        );
    }

    #[test]
    fn test_empty_tally_is_anxious() {
        // all sums are zero, so the first rule matches
        assert_eq!(AttachmentTally::default().dominant(), AttachmentStyle::Anxious);
    }

    #[test]
    fn test_correlated_responses() {
        let anxious = ShadowProfile::from_tally(&AttachmentTally::new(0.0, 3.0, 0.0));
        assert_eq!(anxious.conflict_response, ConflictResponse::Fight);
        assert_eq!(anxious.regulation_method, RegulationMethod::CoRegulation);

        let avoidant = ShadowProfile::from_tally(&AttachmentTally::new(0.0, 0.0, 3.0));
        assert_eq!(avoidant.conflict_response, ConflictResponse::Flight);
        assert_eq!(avoidant.regulation_method, RegulationMethod::AutoRegulation);

        let secure = ShadowProfile::from_tally(&AttachmentTally::new(3.0, 0.0, 0.0));
        assert_eq!(secure.conflict_response, ConflictResponse::Fawn);
        assert_eq!(secure.regulation_method, RegulationMethod::CoRegulation);
    }

    #[test]
    fn test_quiz_never_yields_disorganized() {
        let classifier = AttachmentClassifier::default();
        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    let sel = vec![
                        Selection::new("att_01", a),
                        Selection::new("att_02", b),
                        Selection::new("att_03", c),
                    ];
                    let p = classifier.classify(&sel).unwrap();
                    assert_ne!(p.attachment_style, AttachmentStyle::Disorganized);
                }
            }
        }
    }

    #[test]
    fn test_classify_from_builtin_quiz() {
        let classifier = AttachmentClassifier::default();
        // att_01: avoidant, att_02: avoidant, att_03: secure
        let sel = vec![
            Selection::new("att_01", 1),
            Selection::new("att_02", 0),
            Selection::new("att_03", 2),
        ];
        let tally = classifier.tally(&sel).unwrap();
        assert_eq!(tally, AttachmentTally::new(1.0, 0.0, 2.0));
        assert_eq!(
            classifier.classify(&sel).unwrap().attachment_style,
            AttachmentStyle::Avoidant
        );
    }

    #[test]
    fn test_manual_allows_disorganized_freeze() {
        let p = ShadowProfile::manual(
            AttachmentStyle::Disorganized,
            ConflictResponse::Freeze,
            RegulationMethod::AutoRegulation,
        );
        assert_eq!(p.attachment_style, AttachmentStyle::Disorganized);
        assert_eq!(p.conflict_response, ConflictResponse::Freeze);
    }

    #[test]
    fn test_style_serde_snake_case() {
        let s: AttachmentStyle = serde_json::from_str("\"disorganized\"").unwrap();
        assert_eq!(s, AttachmentStyle::Disorganized);
        let r: RegulationMethod = serde_json::from_str("\"auto_regulation\"").unwrap();
        assert_eq!(r, RegulationMethod::AutoRegulation);
        assert_eq!(AttachmentStyle::Avoidant.to_string(), "Dismissive-Avoidant");
    }
}
