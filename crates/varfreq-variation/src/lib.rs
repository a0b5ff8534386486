//! varfreq-variation — Population allele-frequency retrieval for variants.
//! See ARCHITECTURE.md §2 (variation source).

pub mod models;
pub mod sources;

// Re-export commonly used types
pub use models::{LookupOutcome, PopulationAlleleRecord, VariantId, VariantPopulationData};
