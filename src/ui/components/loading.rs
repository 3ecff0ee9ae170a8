use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { id: "loading",
            h2 { class: "message", "Searching..." }
        }
    }
}
