//! Static question catalogs and selection resolution.
//!
//! Catalogs are fixed read-only tables.  The presentation layer reports one
//! [`Selection`] per answered entry; [`Catalog::resolve`] turns those into
//! the weight vectors the scorers sum.
//!
//! ```text
//! Selection { question_id, option }
//!   ↓  Catalog::resolve (unknown id / option range / duplicate → error)
//! [f64; N] weight vectors
//!   ↓  accumulate
//! [f64; N] totals
//! ```

pub mod attachment;
pub mod eros;
pub mod models;
pub mod scenarios;

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

pub use attachment::ATTACHMENT_QUIZ;
pub use eros::{EROS_QUIZ, EROS_TAGS};
pub use models::{
    CatalogEntry, QuizQuestion, Scenario, ScenarioOption, WeightedEntry, WeightedOption,
};
pub use scenarios::SCENARIOS;

/// One answered catalog entry: the entry id and the zero-based option index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub question_id: String,
    pub option: usize,
}

impl Selection {
    pub fn new(question_id: impl Into<String>, option: usize) -> Self {
        Self {
            question_id: question_id.into(),
            option,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// A fixed table of entries indexed by id.
#[derive(Debug, Clone)]
pub struct Catalog<'a, E> {
    name: &'static str,
    entries: &'a [E],
    index: HashMap<&'a str, usize>,
}

impl<'a, E: CatalogEntry> Catalog<'a, E> {
    /// Build a catalog over `entries`.  Later duplicates of an id shadow
    /// earlier ones in lookups.
    pub fn new(name: &'static str, entries: &'a [E]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id(), i))
            .collect();
        Self {
            name,
            entries,
            index,
        }
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&'a E> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Catalog name used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &'a [E] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve selections into the weight vectors of the chosen options.
    ///
    /// Each entry may be answered at most once; unanswered entries simply
    /// contribute nothing.
    pub fn resolve<const N: usize>(
        &self,
        selections: &[Selection],
    ) -> Result<Vec<[f64; N]>, AssessmentError>
    where
        E: WeightedEntry<N>,
    {
        let mut seen: HashSet<&str> = HashSet::with_capacity(selections.len());
        let mut weights = Vec::with_capacity(selections.len());

        for sel in selections {
            let entry = self.get(&sel.question_id).ok_or_else(|| {
                AssessmentError::invalid_selection(self.name, &sel.question_id, "unknown entry")
            })?;
            if !seen.insert(sel.question_id.as_str()) {
                return Err(AssessmentError::invalid_selection(
                    self.name,
                    &sel.question_id,
                    "entry answered more than once",
                ));
            }
            let option = entry.options().get(sel.option).ok_or_else(|| {
                AssessmentError::invalid_selection(
                    self.name,
                    &sel.question_id,
                    format!(
                        "option {} out of range ({} options)",
                        sel.option,
                        entry.options().len()
                    ),
                )
            })?;
            weights.push(option.weights);
        }

        Ok(weights)
    }

    /// Per-axis theoretical maximum: for every entry, the best weight any
    /// single option offers on that axis, summed over the catalog.
    pub fn theoretical_max<const N: usize>(&self) -> [f64; N]
    where
        E: WeightedEntry<N>,
    {
        let mut max = [0.0; N];
        for entry in self.entries {
            for (axis, total) in max.iter_mut().enumerate() {
                let best = entry
                    .options()
                    .iter()
                    .map(|o| o.weights[axis])
                    .fold(f64::NEG_INFINITY, f64::max);
                if best.is_finite() {
                    *total += best;
                }
            }
        }
        max
    }
}

/// Component-wise sum of weight vectors.
pub fn accumulate<const N: usize>(weights: &[[f64; N]]) -> [f64; N] {
    let mut totals = [0.0; N];
    for w in weights {
        for (t, v) in totals.iter_mut().zip(w) {
            *t += v;
        }
    }
    totals
}

// ============================================================================
// Built-in catalogs
// ============================================================================

lazy_static! {
    /// The 27 forced-choice relational scenarios.
    pub static ref SCENARIO_CATALOG: Catalog<'static, Scenario> =
        Catalog::new("scenario", SCENARIOS);

    /// Attachment (shadow) quiz.
    pub static ref ATTACHMENT_CATALOG: Catalog<'static, QuizQuestion<3>> =
        Catalog::new("attachment", ATTACHMENT_QUIZ);

    /// Dual control model (eros) quiz.
    pub static ref EROS_CATALOG: Catalog<'static, QuizQuestion<2>> =
        Catalog::new("eros", EROS_QUIZ);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: &[QuizQuestion<2>] = &[
        QuizQuestion {
            id: "q1",
            question: "first",
            options: &[
                WeightedOption { text: "a", weights: [1.0, -0.5] },
                WeightedOption { text: "b", weights: [0.2, 0.4] },
            ],
        },
        QuizQuestion {
            id: "q2",
            question: "second",
            options: &[
                WeightedOption { text: "a", weights: [0.0, 0.3] },
                WeightedOption { text: "b", weights: [0.5, 0.1] },
            ],
        },
    ];

    #[test]
    fn test_resolve_and_accumulate() {
        let cat = Catalog::new("tiny", TINY);
        let w: Vec<[f64; 2]> = cat
            .resolve(&[Selection::new("q1", 0), Selection::new("q2", 1)])
            .unwrap();
        let totals = accumulate(&w);
        assert!((totals[0] - 1.5).abs() < 1e-12);
        assert!((totals[1] - (-0.4)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let cat = Catalog::new("tiny", TINY);
        let w: Vec<[f64; 2]> = cat.resolve(&[]).unwrap();
        assert_eq!(accumulate(&w), [0.0, 0.0]);
    }

    #[test]
    fn test_unknown_entry_rejected() {
        let cat = Catalog::new("tiny", TINY);
        let err = cat
            .resolve::<2>(&[Selection::new("nope", 0)])
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::InvalidSelection { catalog: "tiny", .. }
        ));
    }

    #[test]
    fn test_option_out_of_range_rejected() {
        let cat = Catalog::new("tiny", TINY);
        let err = cat
            .resolve::<2>(&[Selection::new("q1", 2)])
            .unwrap_err();
        assert!(err.to_string().contains("option 2 out of range"));
    }

    #[test]
    fn test_duplicate_answer_rejected() {
        let cat = Catalog::new("tiny", TINY);
        let err = cat
            .resolve::<2>(&[Selection::new("q1", 0), Selection::new("q1", 1)])
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_theoretical_max_takes_best_option_per_entry() {
        let cat = Catalog::new("tiny", TINY);
        let max: [f64; 2] = cat.theoretical_max();
        // q1: max(1.0, 0.2) + q2: max(0.0, 0.5)
        assert!((max[0] - 1.5).abs() < 1e-12);
        // q1: max(-0.5, 0.4) + q2: max(0.3, 0.1)
        assert!((max[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_builtin_catalogs_indexed() {
        assert_eq!(SCENARIO_CATALOG.len(), 27);
        assert_eq!(ATTACHMENT_CATALOG.len(), 3);
        assert_eq!(EROS_CATALOG.len(), 2);
        assert!(SCENARIO_CATALOG.get("nd_04").is_some());
        assert!(ATTACHMENT_CATALOG.get("att_02").is_some());
        assert!(EROS_CATALOG.get("eros_01").is_some());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<&str> = SCENARIOS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SCENARIOS.len());
    }
}
