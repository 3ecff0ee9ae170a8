use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::config::use_config;
use crate::ui::components::*;
use crate::ui::search_context::{use_search_context, SearchContextProvider};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchContextProvider {
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let config = use_config();
    let search_ctx = use_search_context();

    rsx! {
        div { id: "app",
            h1 { class: "title", "The Art Collector" }
            Search {}
            Preview {}
            Feature {}
            if *search_ctx.is_loading.read() {
                Loading {}
            }
            footer { class: "source", "Data from {config.base_url}" }
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("vitrine")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
