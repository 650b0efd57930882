use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{Error, Result};

/// Header used to correlate upstream logs with ours.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Raw answer from the concepts API. Non-2xx statuses are not errors here;
/// the mapper decides what they mean.
#[derive(Debug, Clone)]
pub struct ConceptResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait ConceptsClient: Send + Sync {
    /// Single attempt at `GET {base}/concepts/{uuid}`.
    async fn get_concept(&self, uuid: &str, transaction_id: &str) -> Result<ConceptResponse>;

    /// Succeeds when the concepts API reports itself good to go.
    async fn check_connectivity(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct HttpConceptsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpConceptsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ConceptsClient for HttpConceptsClient {
    async fn get_concept(&self, uuid: &str, transaction_id: &str) -> Result<ConceptResponse> {
        let url = format!("{}/concepts/{}", self.base_url, uuid);
        debug!(url = %url, transaction_id, "Fetching concept");

        let response = self
            .client
            .get(&url)
            .header(REQUEST_ID_HEADER, transaction_id)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(ConceptResponse { status, body })
    }

    async fn check_connectivity(&self) -> Result<()> {
        let url = format!("{}/__gtg", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "concepts API is not good to go: {}",
                response.status()
            )));
        }

        Ok(())
    }
}
