use crate::collection::{ArtObject, SearchResults};
use crate::search::SearchSink;
use dioxus::prelude::*;

/// Search state shared by the form, the result list and the feature panel
#[derive(Clone, Copy, PartialEq)]
pub struct SearchContext {
    pub is_loading: Signal<bool>,
    pub search_results: Signal<SearchResults>,
    pub featured_result: Signal<Option<ArtObject>>,
    request_seq: Signal<u64>,
}

impl SearchContext {
    pub fn set_featured(&mut self, object: ArtObject) {
        self.featured_result.set(Some(object));
    }
}

impl SearchSink for SearchContext {
    fn set_loading(&mut self, loading: bool) {
        // The provider may already be gone when a cancelled search unwinds
        if let Ok(mut is_loading) = self.is_loading.try_write() {
            *is_loading = loading;
        }
    }

    fn set_results(&mut self, results: SearchResults) {
        self.search_results.set(results);
    }

    fn begin_request(&mut self) -> u64 {
        let next = *self.request_seq.peek() + 1;
        self.request_seq.set(next);
        next
    }

    fn latest_request(&self) -> u64 {
        self.request_seq.try_peek().map(|seq| *seq).unwrap_or_default()
    }
}

/// Provider component to make search state available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    use_provide_search_context(None);

    rsx! {
        {children}
    }
}

/// Create the search state in the current scope and provide it to children
pub fn use_provide_search_context(featured: Option<ArtObject>) -> SearchContext {
    let search_ctx = SearchContext {
        is_loading: use_signal(|| false),
        search_results: use_signal(SearchResults::default),
        featured_result: use_signal(move || featured),
        request_seq: use_signal(|| 0),
    };

    use_context_provider(move || search_ctx)
}

/// Hook to access the shared search state
pub fn use_search_context() -> SearchContext {
    use_context::<SearchContext>()
}
