//! Navigation Header Component
//!
//! Desktop: brand, one button per section, section number and progress
//! Mobile: brand and the drawer toggle (see [`MobileNav`])

use dioxus::prelude::*;
use folio_core::{InputEvent, NavigationView, Section};
use folio_ui::{Button, ButtonVariant, ProgressBar};

use crate::components::mobile_nav::MobileNav;
use crate::context::use_page_navigator;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Navigation view for the current section
    pub view: NavigationView,
}

/// Navigation Header component
///
/// The active flags, label and progress all come from `view`; a click
/// only reports the section index to the navigator.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let navigator = use_page_navigator();
    let view = &props.view;

    rsx! {
        header { class: "nav-header",
            div { class: "nav-brand", "Academic Portfolio" }

            nav { class: "nav-links",
                for section in Section::ALL {
                    Button {
                        key: "{section.anchor()}",
                        variant: ButtonVariant::Nav,
                        active: view.nav_active[section.index()],
                        onclick: move |_| {
                            navigator.dispatch(InputEvent::NavClick(section.index()));
                        },
                        "{section.label()}"
                    }
                }
            }

            div { class: "nav-status",
                span { class: "section-number", "{view.section_label}" }
                ProgressBar { fraction: view.progress }
            }

            MobileNav {}
        }
    }
}
