use std::time::Duration;

use futures_util::StreamExt;
use quotes_core::Quote;
use quotes_logging::quotes_debug;
use reqwest::header::CONTENT_TYPE;

use crate::{FailureKind, FetchError, RemoteRecord};

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    /// Upper bound on records taken from one fetch.
    pub limit: usize,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: 5,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(15),
            max_bytes: 1024 * 1024,
        }
    }
}

/// The remote quote source the syncer reconciles against.
#[async_trait::async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError>;
    async fn post_quote(&self, quote: &Quote) -> Result<(), FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRemote {
    settings: FetchSettings,
}

impl ReqwestRemote {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self) -> Result<reqwest::Url, FetchError> {
        reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl RemoteSource for ReqwestRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError> {
        let mut url = self.endpoint()?;
        url.query_pairs_mut()
            .append_pair("_limit", &self.settings.limit.to_string());
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let records: Vec<RemoteRecord> = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))?;
        let fetched = records.len();
        let quotes: Vec<Quote> = records
            .into_iter()
            .take(self.settings.limit)
            .filter_map(RemoteRecord::into_quote)
            .collect();
        quotes_debug!(
            "Fetched {} remote records, {} usable quotes",
            fetched,
            quotes.len()
        );
        Ok(quotes)
    }

    async fn post_quote(&self, quote: &Quote) -> Result<(), FetchError> {
        let url = self.endpoint()?;
        let body = serde_json::to_vec(quote)
            .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
