use crate::collection::SharedCollectionApi;
use crate::config;

/// Services handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub api: SharedCollectionApi,
}

/// Hook to access the collection API client
pub fn use_collection_api() -> SharedCollectionApi {
    dioxus::prelude::use_context::<AppContext>().api
}
