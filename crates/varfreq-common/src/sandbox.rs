use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::VarfreqError;

/// A sandbox-capped HTTP client that only allows requests to approved domains.
/// Network capability capping for the engine: every outbound call must target
/// one of the known genomic-data hosts.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient with the default allowlist of variation
    /// and annotation services.
    pub fn new() -> Result<Self, VarfreqError> {
        let mut allowlist = HashSet::new();
        // Default varfreq allowlist
        let domains = vec![
            "rest.ensembl.org",        // Ensembl variation (GRCh38)
            "grch37.rest.ensembl.org", // Ensembl variation (GRCh37)
            "eutils.ncbi.nlm.nih.gov", // dbSNP via NCBI E-utilities
            "rest.uniprot.org",        // UniProt
            "localhost",               // local test fixtures
            "127.0.0.1",               // localhost alt
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Appends the host of a full URL to the allowlist.
    /// Invalid or host-less URLs leave the allowlist unchanged.
    pub fn allow_url(&mut self, url: &str) {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                self.allowlist.insert(host.to_string());
            }
        }
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Check exact match or if it's a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, VarfreqError> {
        if !self.is_allowed(url) {
            return Err(VarfreqError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
