//! Fetch → compute → render pipeline.
//! This is the caller-facing operation of the engine: a raw variant
//! identifier and a genotype string in, a displayable report out.

use tracing::{debug, warn};

use varfreq_variation::models::LookupOutcome;
use varfreq_variation::sources::VariationSource;

use crate::hardy;
use crate::report;

/// Look up population data for `variant_id` and render the expected
/// Hardy–Weinberg frequency of `genotype` per trusted-cohort population.
///
/// Missing data never escalates: an unknown variant, an unreachable service,
/// and a non-computable genotype all render as the fixed no-data sentence.
pub async fn genotype_frequency_report(
    source: &dyn VariationSource,
    variant_id: &str,
    genotype: &str,
) -> anyhow::Result<String> {
    genotype_frequency_report_in_cohort(
        source,
        variant_id,
        genotype,
        hardy::COHORT_MARKER,
        report::GLOBAL_POPULATION,
    )
    .await
}

/// Same pipeline with explicit cohort marker and global-population key, for
/// config-driven callers.
pub async fn genotype_frequency_report_in_cohort(
    source: &dyn VariationSource,
    variant_id: &str,
    genotype: &str,
    cohort_marker: &str,
    global_population: &str,
) -> anyhow::Result<String> {
    let outcome = source.population_data(variant_id).await?;

    match &outcome {
        LookupOutcome::NotFound => debug!(variant_id, "no variation record upstream"),
        LookupOutcome::Unreachable => {
            warn!(variant_id, "variation service unreachable, reporting no data")
        }
        LookupOutcome::Data(_) => {}
    }

    let frequencies =
        hardy::genotype_frequencies_in_cohort(outcome.data(), genotype, cohort_marker);
    Ok(report::render_report_with_global(
        &frequencies,
        global_population,
    ))
}
