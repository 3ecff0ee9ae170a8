use crate::collection::ArtObject;
use crate::search::run_search;
use crate::ui::app_context::use_collection_api;
use crate::ui::search_context::use_search_context;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// Current page of results with previous/next navigation. Clicking a
/// result features it.
#[component]
pub fn Preview() -> Element {
    let api = use_collection_api();
    let search_ctx = use_search_context();

    let results = search_ctx.search_results.read().clone();
    let is_loading = *search_ctx.is_loading.read();

    let fetch_page = move |url: Option<String>| {
        let Some(url) = url else {
            return;
        };
        let api = api.clone();
        spawn_forever(async move {
            run_search(search_ctx, api.fetch_query_results_from_url(&url)).await;
        });
    };

    let prev = results.info.prev.clone();
    let next = results.info.next.clone();
    let has_prev = prev.is_some();
    let has_next = next.is_some();

    rsx! {
        aside { id: "preview",
            header { class: "pagination",
                button {
                    disabled: is_loading || !has_prev,
                    class: "previous",
                    onclick: {
                        let fetch_page = fetch_page.clone();
                        move |_| fetch_page(prev.clone())
                    },
                    "Previous"
                }
                button {
                    disabled: is_loading || !has_next,
                    class: "next",
                    onclick: {
                        let fetch_page = fetch_page.clone();
                        move |_| fetch_page(next.clone())
                    },
                    "Next"
                }
            }
            section { class: "results",
                for (key, record) in keyed_records(results.records) {
                    PreviewItem { key: "{key}", record }
                }
            }
        }
    }
}

/// Records keyed by object id, falling back to position for id-less records.
/// The two key spaces are prefixed so a position never matches a real id.
fn keyed_records(records: Vec<ArtObject>) -> Vec<(String, ArtObject)> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let key = match record.id {
                Some(id) => format!("id-{}", id),
                None => format!("idx-{}", index),
            };
            (key, record)
        })
        .collect()
}

#[component]
fn PreviewItem(record: ArtObject) -> Element {
    let mut search_ctx = use_search_context();

    let title = record
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "MISSING INFO".to_string());
    let image = record.primaryimageurl.clone();
    let alt = record
        .description
        .clone()
        .unwrap_or_else(|| title.clone());

    rsx! {
        div {
            class: "object-preview",
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                search_ctx.set_featured(record.clone());
            },
            if let Some(url) = image {
                img { src: "{url}", alt: "{alt}" }
            }
            h3 { "{title}" }
        }
    }
}
