//! varfreq — genotype-frequency report for a variant.
//! Entry point for the CLI binary.

mod config;

use std::time::Duration;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use varfreq_genotype::pipeline::genotype_frequency_report_in_cohort;
use varfreq_variation::sources::ensembl::EnsemblClient;

/// Expected genotype frequency per population under Hardy–Weinberg
/// equilibrium, from Ensembl population allele-frequency data.
#[derive(Debug, Parser)]
#[command(name = "varfreq", version, about)]
struct Args {
    /// Variant identifier, with or without the "rs" prefix (e.g. rs1042522).
    variant_id: String,

    /// Two-allele genotype, e.g. AG.
    genotype: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = config::Config::load()?;
    debug!(?config, "loaded configuration");

    let client = EnsemblClient::with_settings(
        config.endpoint.base_url.clone(),
        Duration::from_secs(config.endpoint.timeout_secs),
        config.endpoint.max_retries,
        Duration::from_secs(config.endpoint.retry_delay_secs),
    );

    let report = genotype_frequency_report_in_cohort(
        &client,
        &args.variant_id,
        &args.genotype,
        &config.cohort.marker,
        &config.cohort.global_population,
    )
    .await?;

    println!("{report}");

    Ok(())
}
