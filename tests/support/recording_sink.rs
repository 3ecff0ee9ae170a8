use std::cell::RefCell;
use std::rc::Rc;
use vitrine::collection::SearchResults;
use vitrine::search::SearchSink;

#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Loading(bool),
    Results(Vec<String>),
}

#[derive(Default)]
struct SinkState {
    loading: bool,
    results: SearchResults,
    request_seq: u64,
    events: Vec<SinkEvent>,
}

/// `SearchSink` that records every write. Clones share state, so several
/// triggers can run against the same sink at once.
#[derive(Clone, Default)]
pub struct RecordingSink {
    state: Rc<RefCell<SinkState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: SearchResults) -> Self {
        let sink = Self::default();
        sink.state.borrow_mut().results = results;
        sink
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn titles(&self) -> Vec<String> {
        titles_of(&self.state.borrow().results)
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.state.borrow().events.clone()
    }
}

fn titles_of(results: &SearchResults) -> Vec<String> {
    results
        .records
        .iter()
        .map(|r| r.title.clone().unwrap_or_default())
        .collect()
}

impl SearchSink for RecordingSink {
    fn set_loading(&mut self, loading: bool) {
        let mut state = self.state.borrow_mut();
        state.loading = loading;
        state.events.push(SinkEvent::Loading(loading));
    }

    fn set_results(&mut self, results: SearchResults) {
        let mut state = self.state.borrow_mut();
        state.events.push(SinkEvent::Results(titles_of(&results)));
        state.results = results;
    }

    fn begin_request(&mut self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.request_seq += 1;
        state.request_seq
    }

    fn latest_request(&self) -> u64 {
        self.state.borrow().request_seq
    }
}
