//! Previous / next section buttons

use dioxus::prelude::*;
use folio_core::{InputEvent, StepDirection};
use folio_ui::{Button, ButtonVariant};

use crate::context::use_page_navigator;

/// Arrow buttons on either side of the panels, disabled at the bounds
#[component]
pub fn StepButtons(at_start: bool, at_end: bool) -> Element {
    let navigator = use_page_navigator();

    rsx! {
        div { class: "scroll-buttons",
            Button {
                variant: ButtonVariant::Step,
                class: "scroll-left".to_string(),
                disabled: at_start,
                aria_label: "Previous section".to_string(),
                onclick: move |_| {
                    navigator.dispatch(InputEvent::StepClick(StepDirection::Previous));
                },
                {chevron(StepDirection::Previous)}
            }
            Button {
                variant: ButtonVariant::Step,
                class: "scroll-right".to_string(),
                disabled: at_end,
                aria_label: "Next section".to_string(),
                onclick: move |_| {
                    navigator.dispatch(InputEvent::StepClick(StepDirection::Next));
                },
                {chevron(StepDirection::Next)}
            }
        }
    }
}

/// Lucide chevron icon pointing in `direction`
fn chevron(direction: StepDirection) -> Element {
    let path = match direction {
        StepDirection::Previous => "m15 18-6-6 6-6",
        StepDirection::Next => "m9 18 6-6-6-6",
    };

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{path}" }
        }
    }
}
