#![allow(dead_code)]

pub mod mock_collection_api;
pub mod recording_sink;

pub use mock_collection_api::{options, results_with_titles, ApiCall, MockCollectionApi};
pub use recording_sink::{RecordingSink, SinkEvent};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
