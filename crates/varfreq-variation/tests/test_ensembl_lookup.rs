//! Test variation lookup against the live Ensembl REST service.
//!
//! Run with: cargo test --package varfreq-variation --test test_ensembl_lookup -- --ignored --nocapture

use varfreq_variation::sources::ensembl::EnsemblClient;
use varfreq_variation::sources::VariationSource;

#[tokio::test]
#[ignore] // Requires network access
async fn test_lookup_rs1042522() {
    let client = EnsemblClient::new();

    let outcome = client
        .population_data("rs1042522")
        .await
        .expect("Ensembl lookup failed");

    let data = outcome.data().expect("rs1042522 should have population data");
    println!("Found {} population rows", data.populations.len());

    assert!(!data.populations.is_empty());
    assert!(data
        .populations
        .iter()
        .any(|r| r.population.contains("1000GENOMES")));
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_lookup_unknown_variant_is_not_found() {
    let client = EnsemblClient::new();

    let outcome = client
        .population_data("rs999999999999")
        .await
        .expect("Ensembl lookup failed");

    assert!(outcome.data().is_none());
}
