//! Needs adjustment: correcting what a person says they want with what
//! their trait substrate implies they need.
//!
//! | Axis      | Trait driver               | Combination            |
//! |-----------|----------------------------|------------------------|
//! | Safety    | neuroticism (+ ASD)        | weighted blend, ≤ 1.0  |
//! | Resource  | 1 − conscientiousness (+ ADHD) | max-floor, ≤ 1.0   |
//! | Resonance | openness above threshold   | max-floor              |
//! | Expansion | (extraversion + openness)/2 (+ ADHD) | mean, unclamped |
//!
//! Floors model an inescapable baseline; blends model a continuous pull.

use serde::{Deserialize, Serialize};

use crate::config::AdjustmentConfig;

use super::needs::{NeedAxis, RawNeeds};
use super::substrate::TraitProfile;

/// Trait-corrected needs.  Recomputed from scratch whenever the raw needs
/// or the trait profile change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedNeeds {
    pub safety: f64,
    pub resource: f64,
    pub resonance: f64,
    /// Not bounded by default: can reach 1.075 with ADHD and maximal inputs.
    pub expansion: f64,
}

impl AdjustedNeeds {
    pub fn to_array(&self) -> [f64; 4] {
        [self.safety, self.resource, self.resonance, self.expansion]
    }

    pub fn get(&self, axis: NeedAxis) -> f64 {
        self.to_array()[axis as usize]
    }

    /// Labelled values in canonical axis order.
    pub fn labelled(&self) -> [(NeedAxis, f64); 4] {
        let v = self.to_array();
        [
            (NeedAxis::Safety, v[0]),
            (NeedAxis::Resource, v[1]),
            (NeedAxis::Resonance, v[2]),
            (NeedAxis::Expansion, v[3]),
        ]
    }
}

/// Applies the four trait-specific formulas.
#[derive(Debug, Clone, Default)]
pub struct NeedsAdjustmentEngine {
    config: AdjustmentConfig,
}

impl NeedsAdjustmentEngine {
    pub fn new(config: AdjustmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdjustmentConfig {
        &self.config
    }

    /// Adjust all four axes.
    pub fn adjust(&self, raw: &RawNeeds, traits: &TraitProfile) -> AdjustedNeeds {
        let adjusted = AdjustedNeeds {
            safety: self.safety(raw.safety, traits),
            resource: self.resource(raw.resource, traits),
            resonance: self.resonance(raw.resonance, traits),
            expansion: self.expansion(raw.expansion, traits),
        };
        log::debug!("Adjusted needs: raw={:?} adjusted={:?}", raw, adjusted);
        adjusted
    }

    /// Neuroticism carries most of the weight; self-report the remainder.
    pub fn safety(&self, raw_safety: f64, traits: &TraitProfile) -> f64 {
        let n_weight = self.config.neuroticism_weight;
        let base = raw_safety * (1.0 - n_weight);
        let mut implicit = traits.neuroticism * n_weight;
        if traits.has_asd {
            implicit += self.config.asd_safety_boost;
        }
        (base + implicit).min(1.0)
    }

    /// Low conscientiousness (and ADHD) impose a floor on needed support.
    pub fn resource(&self, raw_resource: f64, traits: &TraitProfile) -> f64 {
        let mut penalty = 1.0 - traits.conscientiousness;
        if traits.has_adhd {
            penalty += self.config.adhd_resource_penalty;
        }
        raw_resource.max(penalty.min(1.0))
    }

    /// High openness imposes a cognitive floor on resonance.
    pub fn resonance(&self, raw_resonance: f64, traits: &TraitProfile) -> f64 {
        let floor = if traits.openness > self.config.openness_resonance_threshold {
            self.config.resonance_floor
        } else {
            0.0
        };
        raw_resonance.max(floor)
    }

    /// Mean of self-report and the stimulation driver.
    pub fn expansion(&self, raw_expansion: f64, traits: &TraitProfile) -> f64 {
        let mut driver = (traits.extraversion + traits.openness) / 2.0;
        if traits.has_adhd {
            driver += self.config.adhd_expansion_boost;
        }
        let expansion = (raw_expansion + driver) / 2.0;
        if self.config.clamp_expansion {
            expansion.min(1.0)
        } else {
            expansion
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn traits(o: f64, c: f64, e: f64, a: f64, n: f64, adhd: bool, asd: bool) -> TraitProfile {
        TraitProfile {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
            has_adhd: adhd,
            has_asd: asd,
        }
    }

    /// A coarse grid over the unit interval, endpoints included.
    fn grid() -> Vec<f64> {
        (0..=5).map(|i| i as f64 / 5.0).collect()
    }

    #[test]
    fn test_end_to_end_reference_profile() {
        let engine = NeedsAdjustmentEngine::default();
        let t = traits(0.8, 0.2, 0.7, 0.5, 0.9, true, false);
        let raw = RawNeeds::new(0.3, 0.1, 0.2, 0.4);
        let adj = engine.adjust(&raw, &t);

        // 0.3 * 0.35 + 0.9 * 0.65
        assert!(approx(adj.safety, 0.69));
        // max(0.1, min(0.8 + 0.25, 1.0))
        assert!(approx(adj.resource, 1.0));
        // openness 0.8 > 0.75 triggers the floor
        assert!(approx(adj.resonance, 0.8));
        // (0.4 + (0.75 + 0.15)) / 2
        assert!(approx(adj.expansion, 0.65));
    }

    #[test]
    fn test_expansion_is_unclamped_by_default() {
        let engine = NeedsAdjustmentEngine::default();
        let t = traits(1.0, 0.5, 1.0, 0.5, 0.5, true, false);
        let e = engine.expansion(1.0, &t);
        assert!(approx(e, 1.075), "expansion = {e}");
        assert!(e > 1.0);
    }

    #[test]
    fn test_expansion_clamp_opt_in() {
        let engine = NeedsAdjustmentEngine::new(AdjustmentConfig {
            clamp_expansion: true,
            ..AdjustmentConfig::default()
        });
        let t = traits(1.0, 0.5, 1.0, 0.5, 0.5, true, false);
        assert_eq!(engine.expansion(1.0, &t), 1.0);
    }

    #[test]
    fn test_asd_adds_implicit_safety_and_clamps() {
        let engine = NeedsAdjustmentEngine::default();
        let calm = traits(0.5, 0.5, 0.5, 0.5, 0.0, false, true);
        assert!(approx(engine.safety(0.0, &calm), 0.2));
        let anxious = traits(0.5, 0.5, 0.5, 0.5, 1.0, false, true);
        assert_eq!(engine.safety(1.0, &anxious), 1.0);
    }

    #[test]
    fn test_resource_floor_from_low_conscientiousness() {
        let engine = NeedsAdjustmentEngine::default();
        let t = traits(0.5, 0.3, 0.5, 0.5, 0.5, false, false);
        assert!(approx(engine.resource(0.1, &t), 0.7));
        // self-report above the floor wins
        assert!(approx(engine.resource(0.9, &t), 0.9));
    }

    #[test]
    fn test_resonance_threshold_is_strict() {
        let engine = NeedsAdjustmentEngine::default();
        let at = traits(0.75, 0.5, 0.5, 0.5, 0.5, false, false);
        assert_eq!(engine.resonance(0.1, &at), 0.1);
        let above = traits(0.76, 0.5, 0.5, 0.5, 0.5, false, false);
        assert_eq!(engine.resonance(0.1, &above), 0.8);
    }

    #[test]
    fn test_bounded_axes_stay_in_unit_interval() {
        let engine = NeedsAdjustmentEngine::default();
        for &o in &grid() {
            for &c in &grid() {
                for &n in &grid() {
                    for adhd in [false, true] {
                        for asd in [false, true] {
                            let t = traits(o, c, 0.5, 0.5, n, adhd, asd);
                            for &raw in &grid() {
                                let s = engine.safety(raw, &t);
                                let r = engine.resource(raw, &t);
                                let m = engine.resonance(raw, &t);
                                assert!((0.0..=1.0).contains(&s), "safety {s}");
                                assert!((0.0..=1.0).contains(&r), "resource {r}");
                                assert!((0.0..=1.0).contains(&m), "resonance {m}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_raw_needs_collapse_to_trait_terms() {
        let engine = NeedsAdjustmentEngine::default();
        let t = traits(0.6, 0.6, 0.4, 0.5, 0.4, false, false);
        let adj = engine.adjust(&RawNeeds::default(), &t);
        assert!(approx(adj.safety, 0.4 * 0.65));
        assert!(approx(adj.resource, 0.4));
        assert_eq!(adj.resonance, 0.0);
        assert!(approx(adj.expansion, 0.25));
    }

    #[test]
    fn test_labelled_order() {
        let adj = AdjustedNeeds {
            safety: 0.1,
            resource: 0.2,
            resonance: 0.3,
            expansion: 0.4,
        };
        let axes: Vec<NeedAxis> = adj.labelled().iter().map(|(a, _)| *a).collect();
        assert_eq!(axes, NeedAxis::ALL.to_vec());
        assert_eq!(adj.get(NeedAxis::Expansion), 0.4);
    }
}
