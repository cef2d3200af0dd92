//! Mobile Navigation Component
//!
//! Drawer menu for viewports at or below the breakpoint. Closing on an
//! outside click or on widening is handled by the document listeners.

use dioxus::prelude::*;
use folio_core::{InputEvent, Section};
use folio_ui::IconButton;

use crate::context::{use_drawer, use_page_navigator};
use crate::listeners::{MENU_ID, MENU_TOGGLE_ID};

/// Mobile drawer toggle and menu
#[component]
pub fn MobileNav() -> Element {
    let navigator = use_page_navigator();
    let mut drawer = use_drawer();

    let open = drawer.read().is_open();
    let glyph = drawer.read().glyph();

    rsx! {
        IconButton {
            id: MENU_TOGGLE_ID.to_string(),
            class: "mobile-nav-toggle".to_string(),
            aria_label: "Toggle navigation".to_string(),
            onclick: move |_| {
                let open = drawer.write().toggle();
                tracing::debug!(open, "mobile drawer toggled");
            },
            "{glyph}"
        }

        nav {
            id: MENU_ID,
            class: if open { "mobile-nav-menu open" } else { "mobile-nav-menu" },

            for section in Section::ALL {
                a {
                    key: "{section.anchor()}",
                    class: "mobile-nav-item",
                    href: "#{section.anchor()}",
                    onclick: move |e| {
                        e.prevent_default();
                        drawer.write().close();
                        navigator.dispatch(InputEvent::NavClick(section.index()));
                    },
                    "{section.label()}"
                }
            }
        }
    }
}
