//! Static content of the section panels.
//!
//! Cards in every panel share one entrance animation; their delay grows
//! with their position so they appear one after another.

use dioxus::prelude::*;
use folio_core::{reveal_delay, Section};

use crate::components::{BlogGrid, ContactFormView};

/// One titled card of static text
#[derive(PartialEq)]
struct Entry {
    title: &'static str,
    meta: &'static str,
    body: &'static str,
}

const RESEARCH: &[Entry] = &[
    Entry {
        title: "Motor Unit Fatigue",
        meta: "Neuromechanics",
        body: "Modeling how motor unit recruitment and firing rates change as muscles fatigue \
               during sustained and repeated work.",
    },
    Entry {
        title: "Fatigue Prediction",
        meta: "Computational modeling",
        body: "Predictive models that estimate localized muscle fatigue from task exposure, \
               aimed at real-world workplace assessment.",
    },
    Entry {
        title: "Occupational Ergonomics",
        meta: "Applied biomechanics",
        body: "Linking laboratory measurements of muscle function to job design and injury \
               prevention guidelines.",
    },
];

const TOOLS: &[Entry] = &[
    Entry {
        title: "Fatigue Calculator",
        meta: "Web application",
        body: "Estimates cumulative fatigue for a sequence of exertions using published \
               endurance relationships.",
    },
    Entry {
        title: "Motor Unit Simulator",
        meta: "Research code",
        body: "Simulates recruitment and rate coding of a motor unit pool under a prescribed \
               force target.",
    },
];

const CV: &[Entry] = &[
    Entry {
        title: "Ph.D., Industrial Engineering",
        meta: "Education",
        body: "Dissertation on motor unit based models of localized muscle fatigue.",
    },
    Entry {
        title: "Postdoctoral Researcher",
        meta: "Experience",
        body: "Neuromechanics and ergonomics laboratory; fatigue modeling and validation studies.",
    },
    Entry {
        title: "Teaching",
        meta: "Experience",
        body: "Work physiology, occupational biomechanics and human factors courses.",
    },
];

/// Heading and body for `section`
#[component]
pub fn PanelContent(section: Section) -> Element {
    match section {
        Section::Home => rsx! {
            div { class: "hero",
                h1 { class: "hero-title", "Academic Portfolio" }
                p { class: "hero-subtitle",
                    "Neuromechanics, ergonomics and fatigue prediction modeling"
                }
            }
        },
        Section::Research => rsx! {
            h2 { class: "panel-title", "Research" }
            EntryGrid { entries: RESEARCH, card_class: "research-card" }
        },
        Section::Tools => rsx! {
            h2 { class: "panel-title", "Tools" }
            EntryGrid { entries: TOOLS, card_class: "tool-card" }
        },
        Section::Blog => rsx! {
            h2 { class: "panel-title", "Blog" }
            BlogGrid {}
        },
        Section::Cv => rsx! {
            h2 { class: "panel-title", "Curriculum Vitae" }
            EntryGrid { entries: CV, card_class: "cv-item" }
        },
        Section::Contact => rsx! {
            h2 { class: "panel-title", "Contact" }
            div { class: "contact-item reveal", style: "{reveal_style(0)}",
                ContactFormView {}
            }
        },
    }
}

fn reveal_style(position: usize) -> String {
    format!("animation-delay: {}ms;", reveal_delay(position).as_millis())
}

#[component]
fn EntryGrid(entries: &'static [Entry], card_class: &'static str) -> Element {
    rsx! {
        div { class: "card-grid",
            for (position, entry) in entries.iter().enumerate() {
                article { key: "{entry.title}", class: "{card_class} reveal", style: "{reveal_style(position)}",
                    div { class: "card-meta", "{entry.meta}" }
                    h3 { class: "card-title", "{entry.title}" }
                    p { class: "card-body", "{entry.body}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_style_staggers_cards() {
        assert_eq!(reveal_style(0), "animation-delay: 300ms;");
        assert_eq!(reveal_style(2), "animation-delay: 500ms;");
    }
}
