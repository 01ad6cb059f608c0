use crate::agents::random_user_agent;
use crate::error::{FetchError, Result};
use crate::node::LinkNode;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Where the crawler service is listening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub address: String,
    pub port: String,
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: "8081".to_string(),
        }
    }
}

impl ServiceEndpoint {
    pub fn new(address: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: port.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.address, self.port, path)
    }
}

/// Whether requests carry a randomized client identity.
///
/// This is explicit per-client configuration, not ambient state: every call
/// made through one client applies the same policy, so a whole tree fetch
/// plus its per-node content fetches behave uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// No User-Agent header is sent at all.
    #[default]
    Fixed,
    /// Each request carries a User-Agent drawn from the pool.
    Randomized,
}

/// Typed client for the crawler service's HTTP API.
///
/// One outbound request per call; no retries, no response caching. Connection
/// reuse is whatever the underlying pool provides.
pub struct TorServiceClient {
    http: Client,
    endpoint: ServiceEndpoint,
    identity: IdentityPolicy,
}

impl TorServiceClient {
    pub fn new(endpoint: ServiceEndpoint, identity: IdentityPolicy) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            endpoint,
            identity,
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Fetch the link tree rooted at `link`, resolved to `depth` levels by
    /// the remote service.
    pub async fn fetch_tree(&self, link: &str, depth: u32) -> Result<LinkNode> {
        if link.is_empty() {
            return Err(FetchError::InvalidUrl(
                "tree root link must not be empty".to_string(),
            ));
        }
        let url = self.endpoint.url_for("/tree");
        let body = self
            .get_text(&url, &[("link", link), ("depth", &depth.to_string())])
            .await?;
        serde_json::from_str(&body).map_err(|e| FetchError::decode(&url, e, &body))
    }

    /// The egress IP the crawler service is currently using, as raw text.
    pub async fn fetch_ip(&self) -> Result<String> {
        let url = self.endpoint.url_for("/ip");
        self.get_text(&url, &[]).await
    }

    /// Email addresses the service found on `link`, in service order.
    pub async fn fetch_emails(&self, link: &str) -> Result<Vec<String>> {
        let url = self.endpoint.url_for("/emails");
        let body = self.get_text(&url, &[("link", link)]).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::decode(&url, e, &body))
    }

    /// Phone numbers the service found on `link`, in service order.
    pub async fn fetch_phones(&self, link: &str) -> Result<Vec<String>> {
        let url = self.endpoint.url_for("/phone");
        let body = self.get_text(&url, &[("link", link)]).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::decode(&url, e, &body))
    }

    /// Raw page content for `link`, used as classifier input.
    pub async fn fetch_page_content(&self, link: &str) -> Result<String> {
        let url = self.endpoint.url_for("/content");
        self.get_text(&url, &[("link", link)]).await
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(url).query(query);
        if self.identity == IdentityPolicy::Randomized {
            request = request.header(reqwest::header::USER_AGENT, random_user_agent());
        }

        let response = request.send().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })
    }
}
