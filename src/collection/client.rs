use crate::collection::models::{FilterOption, SearchCriteria, SearchResults};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Resource not found")]
    NotFound,
    #[error("API returned status {0}")]
    Status(u16),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The collection API as seen by the UI. Every call may fail; callers decide
/// how to report it.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    async fn fetch_all_centuries(&self) -> Result<Vec<FilterOption>, CollectionError>;

    async fn fetch_all_classifications(&self) -> Result<Vec<FilterOption>, CollectionError>;

    async fn fetch_query_results(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, CollectionError>;

    async fn fetch_query_results_from_term_and_value(
        &self,
        search_term: &str,
        search_value: &str,
    ) -> Result<SearchResults, CollectionError>;

    /// Follow an absolute `info.next` / `info.prev` link
    async fn fetch_query_results_from_url(&self, url: &str)
        -> Result<SearchResults, CollectionError>;
}

pub type SharedCollectionApi = Arc<dyn CollectionApi>;

/// Listing wrapper used by the century and classification endpoints
#[derive(Debug, Deserialize)]
struct OptionListResponse {
    records: Vec<FilterOption>,
}

const USER_AGENT: &str = "vitrine/0.1";
const FILTER_PAGE_SIZE: &str = "100";

/// The API treats `|` as OR inside a field value. Hyphenated values such as
/// "Ming-Qing" are split into alternatives.
pub fn encode_search_value(value: &str) -> String {
    value.replace('-', "|")
}

#[derive(Clone)]
pub struct HarvardClient {
    client: Client,
    api_key: String,
    base_url: String,
    centuries: Arc<OnceCell<Vec<FilterOption>>>,
    classifications: Arc<OnceCell<Vec<FilterOption>>>,
}

impl HarvardClient {
    pub fn new(config: &Config) -> Result<Self, CollectionError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            centuries: Arc::new(OnceCell::new()),
            classifications: Arc::new(OnceCell::new()),
        })
    }

    fn filter_request(&self, resource: &str, sort: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, resource);
        self.client.get(url).query(&[
            ("apikey", self.api_key.as_str()),
            ("size", FILTER_PAGE_SIZE),
            ("sort", sort),
        ])
    }

    fn criteria_request(&self, criteria: &SearchCriteria) -> RequestBuilder {
        let url = format!("{}/object", self.base_url);
        self.client
            .get(url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(&criteria.query_params())
    }

    fn term_request(&self, search_term: &str, search_value: &str) -> RequestBuilder {
        let url = format!("{}/object", self.base_url);
        let encoded = encode_search_value(search_value);
        self.client.get(url).query(&[
            ("apikey", self.api_key.as_str()),
            (search_term, encoded.as_str()),
        ])
    }

    async fn send<T: DeserializeOwned + Send>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, CollectionError> {
        let response = request.send().await?;
        let response = check_status(response)?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("JSON parsing error: {}", e);
            debug!("Raw response: {}", body);
            CollectionError::Serialization(e)
        })
    }

    async fn fetch_option_list(
        &self,
        resource: &str,
        sort: &str,
    ) -> Result<Vec<FilterOption>, CollectionError> {
        debug!("📡 Collection API: GET /{} sort={}", resource, sort);
        let listing: OptionListResponse = self.send(self.filter_request(resource, sort)).await?;
        info!("✓ Loaded {} {} option(s)", listing.records.len(), resource);
        Ok(listing.records)
    }
}

fn check_status(response: Response) -> Result<Response, CollectionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!("✗ Collection API error: {} ({})", status, response.url().path());
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CollectionError::InvalidApiKey,
        StatusCode::NOT_FOUND => CollectionError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => CollectionError::RateLimit,
        other => CollectionError::Status(other.as_u16()),
    })
}

#[async_trait]
impl CollectionApi for HarvardClient {
    async fn fetch_all_centuries(&self) -> Result<Vec<FilterOption>, CollectionError> {
        self.centuries
            .get_or_try_init(|| self.fetch_option_list("century", "temporalorder"))
            .await
            .cloned()
    }

    async fn fetch_all_classifications(&self) -> Result<Vec<FilterOption>, CollectionError> {
        self.classifications
            .get_or_try_init(|| self.fetch_option_list("classification", "name"))
            .await
            .cloned()
    }

    async fn fetch_query_results(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, CollectionError> {
        info!(
            "🔍 Collection API: object search keyword='{}', century={}, classification={}",
            criteria.query_string, criteria.century, criteria.classification
        );
        let results: SearchResults = self.send(self.criteria_request(criteria)).await?;
        info!(
            "✓ Object search returned {} of {} record(s)",
            results.len(),
            results.info.totalrecords
        );
        Ok(results)
    }

    async fn fetch_query_results_from_term_and_value(
        &self,
        search_term: &str,
        search_value: &str,
    ) -> Result<SearchResults, CollectionError> {
        info!(
            "🔍 Collection API: object search {}='{}'",
            search_term, search_value
        );
        let results: SearchResults = self
            .send(self.term_request(search_term, search_value))
            .await?;
        info!("✓ Term search returned {} record(s)", results.len());
        Ok(results)
    }

    async fn fetch_query_results_from_url(
        &self,
        url: &str,
    ) -> Result<SearchResults, CollectionError> {
        debug!("📡 Collection API: GET {}", url);
        self.send(self.client.get(url)).await
    }
}
