//! Data models for population allele-frequency retrieval.
//! See ARCHITECTURE.md §2.1 for the upstream payload shape.

use serde::Deserialize;

/// A variant identifier carrying the canonical `rs` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantId(String);

impl VariantId {
    /// Normalise a raw identifier: bare numeric input gets the `rs` prefix,
    /// already-prefixed input is kept as-is.
    pub fn normalise(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("rs") {
            Self(trimmed.to_string())
        } else {
            Self(format!("rs{trimmed}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One denormalised row of upstream population data: one allele observed in
/// one named population, with its frequency. Population names encode cohort
/// and phase, e.g. `1000GENOMES:phase_3:ALL`.
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationAlleleRecord {
    pub population: String,
    pub allele: String,
    pub frequency: f64,
}

/// Aggregate population data fetched for one variant. Created fresh per
/// lookup and discarded once the genotype frequency has been derived.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantPopulationData {
    pub populations: Vec<PopulationAlleleRecord>,
    #[serde(rename = "MAF", default)]
    pub maf: Option<f64>,
}

/// Tagged outcome of a population-data lookup.
///
/// `NotFound` (the service has no record for the variant) and `Unreachable`
/// (retries exhausted) both render downstream as "no data", but stay
/// distinguishable here so calling layers can report connectivity problems
/// separately if they choose to.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Data(VariantPopulationData),
    NotFound,
    Unreachable,
}

impl LookupOutcome {
    /// The population data, if the lookup produced any.
    pub fn data(&self) -> Option<&VariantPopulationData> {
        match self {
            LookupOutcome::Data(data) => Some(data),
            LookupOutcome::NotFound | LookupOutcome::Unreachable => None,
        }
    }
}
