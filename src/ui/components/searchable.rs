use crate::search::run_search;
use crate::ui::app_context::use_collection_api;
use crate::ui::search_context::use_search_context;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// A fact value that re-runs the search with its own term/value pair
#[component]
pub fn Searchable(search_term: String, search_value: String) -> Element {
    let api = use_collection_api();
    let search_ctx = use_search_context();

    let label = search_value.clone();

    rsx! {
        span { class: "content",
            a {
                href: "#",
                onclick: move |event: MouseEvent| {
                    event.prevent_default();

                    let api = api.clone();
                    let search_term = search_term.clone();
                    let search_value = search_value.clone();

                    // Outlives this span, which a new result set may unmount
                    spawn_forever(async move {
                        run_search(
                            search_ctx,
                            api.fetch_query_results_from_term_and_value(&search_term, &search_value),
                        )
                        .await;
                    });
                },
                "{label}"
            }
        }
    }
}
