//! Catalog data types.

/// One answer option carrying an `N`-component weight vector.
///
/// Components may be negative (a trade-off penalty).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedOption<const N: usize> {
    pub text: &'static str,
    pub weights: [f64; N],
}

/// Scenario option weights: `(safety, resource, resonance, expansion)`.
pub type ScenarioOption = WeightedOption<4>;

/// A forced-choice relational scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub id: &'static str,
    pub question: &'static str,
    /// What the scenario probes.
    pub description: &'static str,
    pub options: &'static [ScenarioOption],
}

/// A quiz question whose options score `N` dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizQuestion<const N: usize> {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [WeightedOption<N>],
}

/// An identifiable catalog entry.
pub trait CatalogEntry {
    fn id(&self) -> &str;
}

/// A catalog entry whose options score `N` dimensions.
pub trait WeightedEntry<const N: usize>: CatalogEntry {
    fn options(&self) -> &[WeightedOption<N>];
}

impl CatalogEntry for Scenario {
    fn id(&self) -> &str {
        self.id
    }
}

impl WeightedEntry<4> for Scenario {
    fn options(&self) -> &[ScenarioOption] {
        self.options
    }
}

impl<const N: usize> CatalogEntry for QuizQuestion<N> {
    fn id(&self) -> &str {
        self.id
    }
}

impl<const N: usize> WeightedEntry<N> for QuizQuestion<N> {
    fn options(&self) -> &[WeightedOption<N>] {
        self.options
    }
}
