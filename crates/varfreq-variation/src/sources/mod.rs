//! Variation source clients.

pub mod ensembl;

use async_trait::async_trait;
use std::collections::HashMap;

use crate::models::{LookupOutcome, PopulationAlleleRecord, VariantId, VariantPopulationData};

/// Common interface for population allele-frequency sources.
#[async_trait]
pub trait VariationSource: Send + Sync {
    /// Fetch population allele-frequency data for a variant identifier.
    /// Implementations normalise the identifier before querying; missing
    /// data is an outcome, not an error.
    async fn population_data(&self, variant_id: &str) -> anyhow::Result<LookupOutcome>;
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Mock source with canned population rows for unit tests.
pub struct MockVariationSource {
    data: HashMap<String, VariantPopulationData>,
}

impl MockVariationSource {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Add one population/allele/frequency row for a variant.
    pub fn with(mut self, variant_id: &str, population: &str, allele: &str, frequency: f64) -> Self {
        let id = VariantId::normalise(variant_id);
        self.data
            .entry(id.as_str().to_string())
            .or_default()
            .populations
            .push(PopulationAlleleRecord {
                population: population.to_string(),
                allele: allele.to_string(),
                frequency,
            });
        self
    }
}

impl Default for MockVariationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VariationSource for MockVariationSource {
    async fn population_data(&self, variant_id: &str) -> anyhow::Result<LookupOutcome> {
        let id = VariantId::normalise(variant_id);
        Ok(match self.data.get(id.as_str()) {
            Some(data) => LookupOutcome::Data(data.clone()),
            None => LookupOutcome::NotFound,
        })
    }
}
