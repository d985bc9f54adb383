//! HTTP implementation of the blocklist backend contract.

use anyhow::Result;
use async_trait::async_trait;
use extguard_contracts::{
    CreateExtensionRequest, ExtensionsApi, MutationResponse, SnapshotResponse,
};
use extguard_model::{ExtensionName, Snapshot};
use reqwest::Client;

/// REST client for the extension blocklist backend.
///
/// Mutation endpoints answer `{ success, message }` on 4xx as well as 200,
/// so responses are parsed regardless of status code; only transport-level
/// failures become `Err`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::info!("[ApiClient] base URL: {base_url}");

        Self { client, base_url }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn extensions_url(&self) -> String {
        self.build_url("api/extensions")
    }
}

#[async_trait]
impl ExtensionsApi for ApiClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let url = self.extensions_url();
        log::debug!("[ApiClient] GET {url}");

        let response: SnapshotResponse =
            self.client.get(&url).send().await?.json().await?;
        if !response.success {
            anyhow::bail!("backend reported failure while fetching extensions");
        }
        Ok(response.into())
    }

    async fn create(
        &self,
        request: CreateExtensionRequest,
    ) -> Result<MutationResponse> {
        let url = self.extensions_url();
        log::debug!(
            "[ApiClient] POST {url} name={} type={}",
            request.name,
            request.kind.as_str()
        );

        let response =
            self.client.post(&url).json(&request).send().await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, name: &ExtensionName) -> Result<MutationResponse> {
        let url = self.build_url(&format!("api/extensions/{name}"));
        log::debug!("[ApiClient] DELETE {url}");

        let response = self.client.delete(&url).send().await?;
        Ok(response.json().await?)
    }
}
