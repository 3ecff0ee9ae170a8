use async_trait::async_trait;
use std::sync::Mutex;
use vitrine::collection::{
    ArtObject, CollectionApi, CollectionError, FilterOption, SearchCriteria, SearchResults,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Centuries,
    Classifications,
    Query(SearchCriteria),
    TermAndValue { term: String, value: String },
    Url(String),
}

/// In-memory `CollectionApi` that records every call
#[derive(Default)]
pub struct MockCollectionApi {
    pub calls: Mutex<Vec<ApiCall>>,
    pub centuries: Vec<FilterOption>,
    pub classifications: Vec<FilterOption>,
    pub results: SearchResults,
    pub fail_centuries: bool,
    pub fail_classifications: bool,
    pub fail_searches: bool,
}

impl MockCollectionApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, titles: &[&str]) -> Self {
        self.results = results_with_titles(titles);
        self
    }

    pub fn failing_searches(mut self) -> Self {
        self.fail_searches = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn search_response(&self) -> Result<SearchResults, CollectionError> {
        if self.fail_searches {
            Err(CollectionError::Status(500))
        } else {
            Ok(self.results.clone())
        }
    }
}

#[async_trait]
impl CollectionApi for MockCollectionApi {
    async fn fetch_all_centuries(&self) -> Result<Vec<FilterOption>, CollectionError> {
        self.record(ApiCall::Centuries);
        if self.fail_centuries {
            return Err(CollectionError::RateLimit);
        }
        Ok(self.centuries.clone())
    }

    async fn fetch_all_classifications(&self) -> Result<Vec<FilterOption>, CollectionError> {
        self.record(ApiCall::Classifications);
        if self.fail_classifications {
            return Err(CollectionError::InvalidApiKey);
        }
        Ok(self.classifications.clone())
    }

    async fn fetch_query_results(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResults, CollectionError> {
        self.record(ApiCall::Query(criteria.clone()));
        self.search_response()
    }

    async fn fetch_query_results_from_term_and_value(
        &self,
        search_term: &str,
        search_value: &str,
    ) -> Result<SearchResults, CollectionError> {
        self.record(ApiCall::TermAndValue {
            term: search_term.to_string(),
            value: search_value.to_string(),
        });
        self.search_response()
    }

    async fn fetch_query_results_from_url(
        &self,
        url: &str,
    ) -> Result<SearchResults, CollectionError> {
        self.record(ApiCall::Url(url.to_string()));
        self.search_response()
    }
}

pub fn results_with_titles(titles: &[&str]) -> SearchResults {
    SearchResults {
        records: titles
            .iter()
            .enumerate()
            .map(|(i, title)| ArtObject {
                id: Some(i as u64 + 1),
                title: Some(title.to_string()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn options(names: &[&str]) -> Vec<FilterOption> {
    names
        .iter()
        .map(|name| FilterOption {
            name: name.to_string(),
            id: None,
            objectcount: None,
        })
        .collect()
}
