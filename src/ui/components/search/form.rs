use crate::collection::{FilterChoice, FilterOption, SearchCriteria};
use crate::search::{load_filter_options, run_search};
use crate::ui::app_context::use_collection_api;
use crate::ui::search_context::use_search_context;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use tracing::debug;

/// Keyword plus century/classification search form
#[component]
pub fn Search() -> Element {
    let api = use_collection_api();
    let search_ctx = use_search_context();

    let mut century_list = use_signal(Vec::<FilterOption>::new);
    let mut classification_list = use_signal(Vec::<FilterOption>::new);
    let mut query_string = use_signal(String::new);
    let mut century = use_signal(|| FilterChoice::ANY.to_string());
    let mut classification = use_signal(|| FilterChoice::ANY.to_string());

    {
        let api = api.clone();
        use_future(move || {
            let api = api.clone();
            async move {
                let lists = load_filter_options(api.as_ref()).await;
                debug!(
                    "Filter lists ready: {} centuries, {} classifications",
                    lists.centuries.len(),
                    lists.classifications.len()
                );
                century_list.set(lists.centuries);
                classification_list.set(lists.classifications);
            }
        });
    }

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let criteria = SearchCriteria {
            query_string: query_string.read().clone(),
            century: FilterChoice::from_form_value(&century.read()),
            classification: FilterChoice::from_form_value(&classification.read()),
        };
        let api = api.clone();

        spawn_forever(async move {
            run_search(search_ctx, api.fetch_query_results(&criteria)).await;
        });
    };

    let classification_count = classification_list.read().len();
    let century_count = century_list.read().len();

    rsx! {
        form { id: "search", onsubmit: on_submit,
            fieldset {
                label { r#for: "keywords", "Query" }
                input {
                    id: "keywords",
                    r#type: "text",
                    placeholder: "enter keywords...",
                    value: "{query_string}",
                    oninput: move |e| query_string.set(e.value()),
                }
            }
            fieldset {
                label { r#for: "select-classification",
                    "Classification "
                    span { class: "classification-count", "({classification_count})" }
                }
                select {
                    name: "classification",
                    id: "select-classification",
                    value: "{classification}",
                    onchange: move |e| classification.set(e.value()),
                    option { value: FilterChoice::ANY, "Any" }
                    for choice in classification_list.read().iter() {
                        option { key: "{choice.name}", value: "{choice.name}", "{choice.name}" }
                    }
                }
            }
            fieldset {
                label { r#for: "select-century",
                    "Century "
                    span { class: "century-count", "({century_count})" }
                }
                select {
                    name: "century",
                    id: "select-century",
                    value: "{century}",
                    onchange: move |e| century.set(e.value()),
                    option { value: FilterChoice::ANY, "Any" }
                    for choice in century_list.read().iter() {
                        option { key: "{choice.name}", value: "{choice.name}", "{choice.name}" }
                    }
                }
            }
            button { r#type: "submit", "SEARCH" }
        }
    }
}
