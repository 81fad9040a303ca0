//! Presigned image upload client.
//!
//! Provides the [`UploadOrchestrator`], which drives one upload through three remote
//! collaborators in strict order: the URL issuer, the direct storage PUT and the metadata
//! writer. HTTP implementations of those collaborators live in [`api`]; the CLI uses
//! [`UploadOrchestrator::from_config`] to wire them.

pub mod api;
pub mod orchestrator;
pub mod reporter;
pub mod session;
pub mod traits;

use anyhow::{Context, Result};
use picdrop_core::constants::API_KEY_HEADER;
use picdrop_core::{ClientConfig, UploadError, UploadStage};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the backend hosting the URL issuer and metadata writer.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = build_http_client(config.request_timeout)?;
        Ok(Self { client, config })
    }

    /// Create client from environment: PICDROP_API_URL (or API_URL), PICDROP_API_KEY, etc.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env().context("Failed to load client configuration")?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header(API_KEY_HEADER, key.as_str()),
            None => request,
        }
    }

    /// POST a JSON body. Non-2xx responses are returned as-is for the caller to classify.
    async fn post_json<B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
        stage: UploadStage,
    ) -> Result<reqwest::Response, UploadError> {
        let request = self.client.post(url).json(body);
        let request = self.apply_auth(request);

        request
            .send()
            .await
            .map_err(|e| UploadError::transport(stage, e.to_string()))
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to create HTTP client")
}

/// Read a failed response body verbatim.
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}

pub use api::StorageClient;
pub use orchestrator::UploadOrchestrator;
pub use reporter::{NoOpStatusReporter, RecordingStatusReporter, StatusReporter};
pub use session::UploadSession;
pub use traits::{MetadataWriter, ObjectUploader, PutObjectOutput, UrlIssuer};
