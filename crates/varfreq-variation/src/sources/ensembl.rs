//! Ensembl REST variation client.
//! See ARCHITECTURE.md §2.1 (Ensembl REST API)
//!
//! Endpoint: https://rest.ensembl.org/variation/human/{rsid}?pops=1

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use varfreq_common::sandbox::SandboxClient as Client;

use super::VariationSource;
use crate::models::{LookupOutcome, VariantId, VariantPopulationData};

const ENSEMBL_REST_URL: &str = "https://rest.ensembl.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_DELAY: Duration = Duration::from_secs(2);
const MAX_RETRIES: u32 = 3;

pub struct EnsemblClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl EnsemblClient {
    pub fn new() -> Self {
        Self {
            client: Client::new().unwrap(),
            base_url: ENSEMBL_REST_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            max_retries: MAX_RETRIES,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Client with explicit endpoint and retry settings, for config-driven
    /// callers. The endpoint's host is admitted to the sandbox allowlist.
    pub fn with_settings(
        base_url: impl Into<String>,
        request_timeout: Duration,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Self {
        let base_url = base_url.into();
        let mut client = Client::new().unwrap();
        client.allow_url(&base_url);
        Self {
            client,
            base_url,
            request_timeout,
            max_retries,
            retry_delay,
        }
    }
}

impl Default for EnsemblClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VariationSource for EnsemblClient {
    #[instrument(skip(self))]
    async fn population_data(&self, variant_id: &str) -> anyhow::Result<LookupOutcome> {
        let id = VariantId::normalise(variant_id);
        let url = format!("{}/variation/human/{}", self.base_url, id);

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay).await;
            }

            let resp = match self
                .client
                .get(&url)?
                .query(&[("pops", "1"), ("content-type", "application/json")])
                .timeout(self.request_timeout)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    warn!(attempt, error = %e, "variation request failed");
                    continue;
                }
            };

            let status = resp.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                debug!(%id, "no variation record upstream");
                return Ok(LookupOutcome::NotFound);
            }
            if status.is_server_error() {
                warn!(attempt, %status, "variation service error");
                continue;
            }
            if !status.is_success() {
                warn!(%status, %id, "unexpected variation response status");
                return Ok(LookupOutcome::NotFound);
            }

            // A 200 body that does not match the documented shape is a
            // contract violation, not missing data.
            let data = resp.json::<VariantPopulationData>().await?;
            debug!(%id, populations = data.populations.len(), "variation lookup returned data");
            return Ok(LookupOutcome::Data(data));
        }

        warn!(%id, retries = self.max_retries, "variation service unreachable, reporting no data");
        Ok(LookupOutcome::Unreachable)
    }
}
