//! Configuration loading for varfreq.
//! Reads varfreq.toml from the current directory or the path in the
//! VARFREQ_CONFIG env var; a missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub cohort: CohortConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

fn default_base_url()         -> String { "https://rest.ensembl.org".to_string() }
fn default_timeout_secs()     -> u64 { 10 }
fn default_max_retries()      -> u32 { 3 }
fn default_retry_delay_secs() -> u64 { 2 }

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortConfig {
    #[serde(default = "default_cohort_marker")]
    pub marker: String,
    #[serde(default = "default_global_population")]
    pub global_population: String,
}

fn default_cohort_marker()     -> String { "1000GENOMES".to_string() }
fn default_global_population() -> String { "1000GENOMES:phase_3:ALL".to_string() }

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            marker: default_cohort_marker(),
            global_population: default_global_population(),
        }
    }
}

impl Config {
    /// Load configuration from varfreq.toml.
    /// Checks VARFREQ_CONFIG env var first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("VARFREQ_CONFIG")
            .unwrap_or_else(|_| "varfreq.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_settings() {
        let endpoint = EndpointConfig::default();
        assert_eq!(endpoint.base_url, "https://rest.ensembl.org");
        assert_eq!(endpoint.timeout_secs, 10);
        assert_eq!(endpoint.max_retries, 3);
        assert_eq!(endpoint.retry_delay_secs, 2);
    }

    #[test]
    fn test_default_cohort_is_1000_genomes() {
        let cohort = CohortConfig::default();
        assert_eq!(cohort.marker, "1000GENOMES");
        assert!(cohort.global_population.contains(&cohort.marker),
            "Global population key ({}) should belong to the trusted cohort",
            cohort.global_population);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [endpoint]
            base_url = "https://grch37.rest.ensembl.org"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.base_url, "https://grch37.rest.ensembl.org");
        assert_eq!(config.endpoint.max_retries, 3);
        assert_eq!(config.cohort.marker, "1000GENOMES");
    }
}
