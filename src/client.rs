use crate::{
    apis::{ImageApi, MetadataApi},
    auth::AuthHeader,
    config::ClientConfig,
    error::{TciaError, TciaResult},
    models::{ImageResult, OutputFormat},
    query,
};
use log::{debug, info};
use reqwest::{Client, Response, StatusCode};
use std::time::{Duration, Instant};
use url::Url;

/// Main TCIA client
///
/// Holds the HTTP client, the resolved resource URL and the static
/// authorization header. Immutable after construction; safe to share and
/// clone across tasks.
#[derive(Clone)]
pub struct TciaClient {
    client: Client,
    resource_url: String,
    auth: AuthHeader,
}

impl TciaClient {
    /// Create a new TCIA client from a loaded configuration.
    ///
    /// No overall request timeout is set, matching the archive's traditional
    /// client behavior; use [`TciaClient::with_timeout`] for bounded calls.
    pub fn new(config: &ClientConfig) -> TciaResult<Self> {
        let client = Self::builder()
            .build()
            .map_err(|e| TciaError::transport(config.resource_url(), e))?;
        Self::with_client(client, config)
    }

    /// Create a client whose requests are bounded by `timeout`, covering the
    /// whole call from connect to the end of the body.
    pub fn with_timeout(config: &ClientConfig, timeout: Duration) -> TciaResult<Self> {
        let client = Self::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TciaError::transport(config.resource_url(), e))?;
        Self::with_client(client, config)
    }

    /// Create a new TCIA client with a custom reqwest client.
    pub fn with_client(client: Client, config: &ClientConfig) -> TciaResult<Self> {
        Ok(Self {
            client,
            resource_url: config.resource_url(),
            auth: AuthHeader::from_config(config)?,
        })
    }

    fn builder() -> reqwest::ClientBuilder {
        Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// The resource URL every operation is addressed under.
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    /// Get the metadata API (textual operations)
    pub fn metadata(&self) -> MetadataApi<'_> {
        MetadataApi::new(self)
    }

    /// Get the image API (binary operations)
    pub fn images(&self) -> ImageApi<'_> {
        ImageApi::new(self)
    }

    /// Issue one GET with the static authorization header.
    async fn get(&self, url: &Url) -> TciaResult<Response> {
        let request = self.auth.apply(self.client.get(url.clone()));
        request
            .send()
            .await
            .map_err(|e| TciaError::transport(url.as_str(), e))
    }

    /// Pipeline for textual operations: build, send, classify, buffer.
    pub(crate) async fn fetch_text(
        &self,
        segment: &str,
        params: &[(&'static str, Option<&str>)],
        format: OutputFormat,
    ) -> TciaResult<String> {
        let url = query::build_url(&self.resource_url, segment, params, Some(format))?;
        debug!("HTTP GET {url}");

        let response = self.get(&url).await?;
        let response = classify(url.as_str(), response)?;

        // an empty body is a valid empty payload, not a failure
        response
            .text()
            .await
            .map_err(|e| TciaError::transport(url.as_str(), e))
    }

    /// Pipeline for binary operations: build, send, classify, hand the live
    /// stream to the caller together with the declared image count.
    pub(crate) async fn fetch_image(
        &self,
        segment: &str,
        params: &[(&'static str, Option<&str>)],
    ) -> TciaResult<ImageResult> {
        let url = query::build_url(&self.resource_url, segment, params, None)?;
        debug!("HTTP GET {url}");

        let started = Instant::now();
        let response = self.get(&url).await?;
        info!(
            "server response received in {} ms",
            started.elapsed().as_millis()
        );

        let response = classify(url.as_str(), response)?;
        ImageResult::from_response(url.as_str(), response)
    }
}

/// Map an HTTP status onto the archive's failure contract. Anything other
/// than 200 is a failure carrying the exact request URL.
fn classify(url: &str, response: Response) -> TciaResult<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED => Err(TciaError::Unauthorized {
            url: url.to_owned(),
        }),
        StatusCode::NOT_FOUND => Err(TciaError::NotFound {
            url: url.to_owned(),
        }),
        status => Err(TciaError::Server {
            url: url.to_owned(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_owned(),
        }),
    }
}
