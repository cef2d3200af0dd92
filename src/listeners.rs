//! Document-level input listeners.
//!
//! Keyboard, wheel and touch input arrive on the document rather than on
//! any rendered element, so they are attached here with gloo and handed to
//! the [`PageNavigator`]. The listeners live as long as the calling component.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Dispatch, InputEvent};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::Event;

use crate::browser;
use crate::context::{
    use_drawer, use_input_router, use_modal, use_page_navigator, use_site_config, use_viewport, PageNavigator,
    Viewport,
};

/// Id of the drawer toggle button
pub const MENU_TOGGLE_ID: &str = "mobileNavToggle";
/// Id of the drawer menu
pub const MENU_ID: &str = "mobileNavMenu";

/// Attach the page's document and window listeners
pub fn use_document_listeners() {
    let navigator = use_page_navigator();
    let modal = use_modal();
    let mut router = use_input_router();
    let mut viewport = use_viewport();
    let mut drawer = use_drawer();
    let config = use_site_config();

    // The post modal owns keyboard, wheel and touch while it is open
    use_effect(move || {
        let open = modal.read().is_open();
        if router.peek().is_paused() != open {
            tracing::debug!(paused = open, "gesture routing");
            router.write().set_paused(open);
        }
    });

    use_hook(move || {
        let (Some(window), Some(document)) = (browser::window(), browser::document()) else {
            tracing::warn!("document unavailable, keyboard, wheel and touch navigation disabled");
            return Rc::new(Vec::<EventListener>::new());
        };

        // Non-passive so handled keys and wheel events can be suppressed
        let options = EventListenerOptions::enable_prevent_default();
        let mut listeners = Vec::new();

        if config.input.keyboard {
            listeners.push(EventListener::new_with_options(&document, "keydown", options, move |event| {
                route(navigator, event, browser::key_input(event));
            }));
        }

        if config.input.wheel {
            listeners.push(EventListener::new_with_options(&document, "wheel", options, move |event| {
                // A tall panel scrolls first; navigation starts at its edge
                if browser::active_panel_absorbs(event) {
                    return;
                }
                route(navigator, event, browser::wheel_input(event));
            }));
        }

        if config.input.swipe {
            listeners.push(EventListener::new(&document, "touchstart", move |event| {
                route(navigator, event, browser::touch_start_input(event));
            }));
            listeners.push(EventListener::new(&document, "touchend", move |event| {
                route(navigator, event, browser::touch_end_input(event));
            }));
        }

        let breakpoint = config.navigation.breakpoint_px;
        listeners.push(EventListener::new(&window, "resize", move |_| {
            let width = browser::viewport_width();
            let was_wide = viewport.peek().width > breakpoint;
            if was_wide != (width > breakpoint) {
                tracing::debug!(width, "viewport crossed breakpoint");
                viewport.set(Viewport { width });
            }
            if drawer.peek().is_open() {
                drawer.write().handle_resize(width, breakpoint);
            }
        }));

        listeners.push(EventListener::new(&document, "click", move |event| {
            if !drawer.peek().is_open() {
                return;
            }
            let on_toggle = browser::target_within(event, &format!("#{}", MENU_TOGGLE_ID));
            let on_menu = browser::target_within(event, &format!("#{}", MENU_ID));
            drawer.write().handle_outside_click(on_toggle, on_menu);
        }));

        tracing::debug!(count = listeners.len(), "document listeners attached");
        Rc::new(listeners)
    });
}

fn route(navigator: PageNavigator, event: &Event, input: Option<InputEvent>) {
    let Some(input) = input else {
        return;
    };
    let Dispatch { prevent_default, .. } = navigator.dispatch(input);
    if prevent_default {
        event.prevent_default();
    }
}
