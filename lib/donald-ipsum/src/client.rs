use crate::{
    Result,
    config::ApiConfig,
    request::{self, Endpoint},
    response::{self, ApiResponse},
};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client for the production API at [`crate::DEFAULT_BASE_URL`].
    pub fn new() -> ApiClient {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> ApiClient {
        ApiClient {
            config,
            http: Client::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> ApiClient {
        Self::with_config(ApiConfig::default().with_base_url(base_url))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Retrieves `count` paragraphs, or the server default when `count`
    /// is absent, zero or negative.
    pub async fn get_paragraphs(&self, count: impl Into<Option<i64>>) -> Result<ApiResponse> {
        self.make_request(Endpoint::Paragraphs, count.into()).await
    }

    /// Retrieves `count` sentences.
    pub async fn get_sentences(&self, count: impl Into<Option<i64>>) -> Result<ApiResponse> {
        self.make_request(Endpoint::Sentences, count.into()).await
    }

    /// Retrieves `count` words.
    pub async fn get_words(&self, count: impl Into<Option<i64>>) -> Result<ApiResponse> {
        self.make_request(Endpoint::Words, count.into()).await
    }

    pub async fn get(
        &self,
        endpoint: Endpoint,
        count: impl Into<Option<i64>>,
    ) -> Result<ApiResponse> {
        self.make_request(endpoint, count.into()).await
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    async fn make_request(&self, endpoint: Endpoint, count: Option<i64>) -> Result<ApiResponse> {
        let uri = request::construct_uri(&self.config.base_url, endpoint, count)?;
        log::debug!("GET {uri}");

        let res = self.http.get(uri).headers(Self::headers()).send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?;

        match response::classify(status, &body) {
            Ok(res) => {
                log::debug!("{endpoint}: status {status}, {} entries", res.content.len());
                Ok(res)
            }
            Err(e) => {
                log::warn!("{endpoint} request failed: {e}");
                Err(e.into())
            }
        }
    }
}
