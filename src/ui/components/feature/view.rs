use super::facts::{fact_rows, header_lines, photos, FactRow, FactValue};
use crate::ui::components::searchable::Searchable;
use crate::ui::search_context::use_search_context;
use dioxus::prelude::*;

/// Detail panel for the featured result. Empty until a result is selected.
#[component]
pub fn Feature() -> Element {
    let search_ctx = use_search_context();
    let featured = search_ctx.featured_result.read().clone();

    let Some(object) = featured else {
        return rsx! {
            main { id: "feature" }
        };
    };

    let (title, dated) = header_lines(&object);
    let rows = fact_rows(&object);
    let photos = photos(&object);

    rsx! {
        main { id: "feature",
            div { class: "object-feature",
                header {
                    if let Some(title) = title {
                        h3 { "{title}" }
                    }
                    if let Some(dated) = dated {
                        h4 { "{dated}" }
                    }
                }
                section { class: "facts",
                    for row in rows {
                        FactRowView { key: "{row.label}", row: row.clone() }
                    }
                }
                if !photos.is_empty() {
                    section { class: "photos",
                        for photo in photos {
                            img { key: "{photo.url}", src: "{photo.url}", alt: "{photo.alt}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FactRowView(row: FactRow) -> Element {
    rsx! {
        span { class: "title", "{row.label}" }
        {
            match row.value.clone() {
                FactValue::Text(text) => rsx! {
                    span { class: "content", "{text}" }
                },
                FactValue::Link(link) => rsx! {
                    Searchable { search_term: link.term.clone(), search_value: link.value.clone() }
                },
                FactValue::People(people) => rsx! {
                    for person in people {
                        Searchable {
                            key: "{person.key}",
                            search_term: person.link.term.clone(),
                            search_value: person.link.value.clone(),
                        }
                    }
                },
            }
        }
    }
}
