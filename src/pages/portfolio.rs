//! The portfolio page: header, the six section panels and the overlays.

use dioxus::prelude::*;
use folio_core::{Depth, PanelState};

use crate::components::{NavHeader, PostModal, StepButtons};
use crate::context::{use_navigation, use_site_config, use_viewport};
use crate::listeners::use_document_listeners;
use crate::pages::panels::PanelContent;

#[component]
pub fn Portfolio() -> Element {
    use_document_listeners();

    let nav = use_navigation();
    let viewport = use_viewport();
    let config = use_site_config();

    let view = nav.read().view();
    let wide = config.navigation.is_wide(viewport.read().width);
    let track_style = view
        .track_transform(wide)
        .map(|transform| format!("transform: {};", transform))
        .unwrap_or_default();
    let mode = config.navigation.mode.as_str();

    rsx! {
        document::Title { "{view.title}" }

        div { class: "portfolio {mode}",
            NavHeader { view: view.clone() }

            main { class: "horizontal-container", style: "{track_style}",
                for panel in view.panels.iter().cloned() {
                    Panel { key: "{panel.section.anchor()}", panel: panel }
                }
            }

            StepButtons { at_start: view.at_start, at_end: view.at_end }
            PostModal {}
        }
    }
}

/// Inline style for a panel's depth effect
fn depth_style(depth: Option<Depth>) -> String {
    match depth {
        Some(Depth { scale, opacity }) => format!("transform: scale({}); opacity: {};", scale, opacity),
        None => String::new(),
    }
}

#[component]
fn Panel(panel: PanelState) -> Element {
    let anchor = panel.section.anchor();
    let class = if panel.active { "panel active" } else { "panel" };
    let style = depth_style(panel.depth);

    rsx! {
        section { id: "{anchor}", class: "{class}", style: "{style}",
            div { class: "panel-content",
                PanelContent { section: panel.section }
            }
        }
    }
}
