//! Post tag chips

use dioxus::prelude::*;

#[component]
pub fn TagChip(label: String) -> Element {
    rsx! {
        span { class: "tag", "{label}" }
    }
}

/// Row of tag chips; renders nothing for an empty list
#[component]
pub fn TagList(tags: Vec<String>) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "post-tags",
            for tag in tags {
                TagChip { key: "{tag}", label: tag.clone() }
            }
        }
    }
}
