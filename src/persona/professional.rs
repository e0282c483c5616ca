//! Professional compass: RIASEC vocational types.
//!
//! Work shapes thinking style.  The primary type sets the relational
//! interaction style; career centrality estimates how much resource is left
//! for home and partner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_unit, AssessmentError};

/// Holland's six vocational types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HollandCode {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl HollandCode {
    /// Hexagon order.
    pub const ALL: [HollandCode; 6] = [
        Self::Realistic,
        Self::Investigative,
        Self::Artistic,
        Self::Social,
        Self::Enterprising,
        Self::Conventional,
    ];

    /// Upper-case variant name used in the summary key.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Realistic => "REALISTIC",
            Self::Investigative => "INVESTIGATIVE",
            Self::Artistic => "ARTISTIC",
            Self::Social => "SOCIAL",
            Self::Enterprising => "ENTERPRISING",
            Self::Conventional => "CONVENTIONAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistic (Doer)",
            Self::Investigative => "Investigative (Thinker)",
            Self::Artistic => "Artistic (Creator)",
            Self::Social => "Social (Helper)",
            Self::Enterprising => "Enterprising (Persuader)",
            Self::Conventional => "Conventional (Organizer)",
        }
    }

    /// How this type tends to relate: what it offers and what it needs.
    pub fn interaction_style(&self) -> &'static str {
        INTERACTION_STYLES[*self as usize]
    }
}

impl fmt::Display for HollandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interaction style by primary type.  Index by `HollandCode as usize`.
const INTERACTION_STYLES: [&str; 6] = [
    // Realistic
    "Values shared activities over long talks; low emotional expression. \
     Offers practical resource (fixing things); needs autonomy.",
    // Investigative
    "Values logic and can seem emotionally detached. \
     Offers intellectual resonance; needs mental space and solitude.",
    // Artistic
    "Values expression, with high emotional lability. \
     Offers novelty; needs emotional resonance and tolerance for chaos.",
    // Social
    "Values connection. \
     Offers emotional safety and care; needs communication.",
    // Enterprising
    "Values status and goals, with a workaholic tendency. \
     Offers money and status; needs support for ambitions.",
    // Conventional
    "Values predictability. \
     Offers stability; needs clear rules and plans.",
];

/// Vocational selections and career centrality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub primary_type: HollandCode,
    pub secondary_type: HollandCode,
    pub tertiary_type: HollandCode,
    /// 0.0 = work is only for money, 1.0 = work is a mission.
    pub career_centrality: f64,
}

impl ProfessionalProfile {
    /// Build a profile.  Types are meant to be pairwise distinct but that is
    /// not enforced; duplicates are only logged.
    pub fn new(
        primary_type: HollandCode,
        secondary_type: HollandCode,
        tertiary_type: HollandCode,
        career_centrality: f64,
    ) -> Result<Self, AssessmentError> {
        let profile = Self {
            primary_type,
            secondary_type,
            tertiary_type,
            career_centrality: ensure_unit("career_centrality", career_centrality)?,
        };
        for (a, b, code) in profile.duplicate_types() {
            log::warn!("Vocational {} and {} selections are both {:?}", a, b, code);
        }
        Ok(profile)
    }

    /// Re-run the checks of [`ProfessionalProfile::new`] on a profile built
    /// elsewhere, e.g. deserialized from an assessment document.
    pub fn validate(self) -> Result<Self, AssessmentError> {
        Self::new(
            self.primary_type,
            self.secondary_type,
            self.tertiary_type,
            self.career_centrality,
        )
    }

    /// Pairs of slots holding the same type, with the shared type.
    pub fn duplicate_types(&self) -> Vec<(&'static str, &'static str, HollandCode)> {
        let slots = [
            ("primary", self.primary_type),
            ("secondary", self.secondary_type),
            ("tertiary", self.tertiary_type),
        ];
        let mut dups = Vec::new();
        for (i, &(a, code_a)) in slots.iter().enumerate() {
            for &(b, code_b) in &slots[i + 1..] {
                if code_a == code_b {
                    dups.push((a, b, code_a));
                }
            }
        }
        dups
    }

    /// `"PRIMARY / SECONDARY / TERTIARY"`.
    pub fn summary_key(&self) -> String {
        format!(
            "{} / {} / {}",
            self.primary_type.code(),
            self.secondary_type.code(),
            self.tertiary_type.code()
        )
    }

    pub fn interaction_style(&self) -> &'static str {
        self.primary_type.interaction_style()
    }
}
