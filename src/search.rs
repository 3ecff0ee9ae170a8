//! The flow every search trigger goes through: the form submit, a clicked
//! fact value, and the result pager.
//!
//! Each trigger flips the shared loading flag on, awaits exactly one fetch,
//! replaces the shared results on success and flips the flag back off.
//! Requests are numbered, so a response that arrives after a newer request
//! has started is dropped instead of overwriting fresher results.

use crate::collection::{CollectionApi, CollectionError, FilterOption, SearchResults};
use std::future::Future;
use tracing::{debug, error, info};

/// Shared state a search trigger is allowed to touch
pub trait SearchSink {
    fn set_loading(&mut self, loading: bool);

    fn set_results(&mut self, results: SearchResults);

    /// Start a new request and return its id. Ids increase monotonically.
    fn begin_request(&mut self) -> u64;

    /// Id of the most recently started request
    fn latest_request(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results replaced; carries the number of records received
    Updated(usize),
    /// Fetch rejected; prior results kept
    Failed,
    /// A newer request started before this one resolved
    Superseded,
}

/// Clears the loading flag if a trigger is dropped before its fetch
/// resolves, e.g. when the task that owns it is cancelled.
struct InFlight<S: SearchSink> {
    sink: S,
    request_id: u64,
    settled: bool,
}

impl<S: SearchSink> Drop for InFlight<S> {
    fn drop(&mut self) {
        if !self.settled && self.sink.latest_request() == self.request_id {
            debug!("Search request {} dropped before completion", self.request_id);
            self.sink.set_loading(false);
        }
    }
}

/// Run one search trigger against `sink`. Never panics or returns an error.
/// The loading flag is cleared once the latest request resolves or is
/// dropped.
pub async fn run_search<S, F>(mut sink: S, request: F) -> SearchOutcome
where
    S: SearchSink,
    F: Future<Output = Result<SearchResults, CollectionError>>,
{
    let request_id = sink.begin_request();
    sink.set_loading(true);

    let mut in_flight = InFlight {
        sink,
        request_id,
        settled: false,
    };

    let result = request.await;
    in_flight.settled = true;
    let sink = &mut in_flight.sink;

    if sink.latest_request() != request_id {
        debug!(
            "Discarding response for request {} (latest is {})",
            request_id,
            sink.latest_request()
        );
        return SearchOutcome::Superseded;
    }

    let outcome = match result {
        Ok(results) => {
            let count = results.len();
            info!("✓ Search request {} returned {} record(s)", request_id, count);
            sink.set_results(results);
            SearchOutcome::Updated(count)
        }
        Err(e) => {
            error!("Search request {} failed: {}", request_id, e);
            SearchOutcome::Failed
        }
    };

    sink.set_loading(false);
    outcome
}

/// Dropdown contents for the search form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterLists {
    pub centuries: Vec<FilterOption>,
    pub classifications: Vec<FilterOption>,
}

/// Fetch both filter lists concurrently. Either list failing leaves both
/// empty; the form still works with just the "Any" choices.
pub async fn load_filter_options(api: &dyn CollectionApi) -> FilterLists {
    let lists = futures::try_join!(
        api.fetch_all_centuries(),
        api.fetch_all_classifications()
    );

    match lists {
        Ok((centuries, classifications)) => FilterLists {
            centuries,
            classifications,
        },
        Err(e) => {
            error!("Failed to load filter options: {}", e);
            FilterLists::default()
        }
    }
}
