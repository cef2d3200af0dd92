//! Shared page state for the portfolio.
//!
//! `App` provides one signal per piece of state; components reach them
//! through the hooks below instead of looking anything up globally.
//!
//! ## Usage
//!
//! ```ignore
//! // In a nav button
//! let navigator = use_page_navigator();
//! rsx! { button { onclick: move |_| { navigator.dispatch(InputEvent::NavClick(2)); } } }
//!
//! // Reading derived state
//! let view = use_navigation().read().view();
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{
    BlogFeed, Dispatch, InputEvent, InputRouter, MobileDrawer, ModalController, NavigationController,
    ScrollEffect, SiteConfig, Transition,
};
use gloo::timers::callback::Timeout;

use crate::browser;

/// Viewport width in CSS pixels, refreshed whenever a resize crosses the
/// responsive breakpoint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

pub fn use_navigation() -> Signal<NavigationController> {
    use_context::<Signal<NavigationController>>()
}

pub fn use_input_router() -> Signal<InputRouter> {
    use_context::<Signal<InputRouter>>()
}

pub fn use_viewport() -> Signal<Viewport> {
    use_context::<Signal<Viewport>>()
}

pub fn use_feed() -> Signal<BlogFeed> {
    use_context::<Signal<BlogFeed>>()
}

pub fn use_modal() -> Signal<ModalController> {
    use_context::<Signal<ModalController>>()
}

pub fn use_drawer() -> Signal<MobileDrawer> {
    use_context::<Signal<MobileDrawer>>()
}

/// Get a [`PageNavigator`] bound to the shared navigation state
pub fn use_page_navigator() -> PageNavigator {
    let nav = use_navigation();
    let router = use_input_router();
    let viewport = use_viewport();
    let config = use_site_config();
    let wheel_reset = use_signal(|| None::<Timeout>);

    PageNavigator {
        nav,
        router,
        viewport,
        wheel_reset,
        wheel_idle: config.input.wheel_idle,
    }
}

/// Entry point for every navigation input on the page.
///
/// Routes an [`InputEvent`] through the core router and performs the
/// browser side of the result: guard release timer, wheel idle timer and
/// smooth scrolling. Callers only decide whether to suppress the browser
/// default, from the returned [`Dispatch`].
#[derive(Clone, Copy, PartialEq)]
pub struct PageNavigator {
    nav: Signal<NavigationController>,
    router: Signal<InputRouter>,
    viewport: Signal<Viewport>,
    /// Pending wheel idle reset; replacing it cancels the previous one
    wheel_reset: Signal<Option<Timeout>>,
    wheel_idle: Duration,
}

impl PageNavigator {
    pub fn dispatch(mut self, event: InputEvent) -> Dispatch {
        let width = self.viewport.peek().width;

        // Dispatch against a copy so ignored input does not re-render
        let mut nav = self.nav.peek().clone();
        let dispatch = self.router.write().dispatch(event, width, &mut nav);
        if nav != *self.nav.peek() {
            self.nav.set(nav);
        }

        if dispatch.arm_wheel_reset {
            self.arm_wheel_reset();
        }
        if let Some(transition) = dispatch.transition {
            self.perform(transition);
        }
        dispatch
    }

    fn arm_wheel_reset(mut self) {
        let mut router = self.router;
        let timeout = Timeout::new(millis(self.wheel_idle), move || {
            router.write().reset_wheel();
        });
        self.wheel_reset.set(Some(timeout));
    }

    fn perform(self, transition: Transition) {
        if let Some(guard) = transition.guard {
            let mut nav = self.nav;
            Timeout::new(millis(guard), move || {
                nav.write().release_transition();
            })
            .forget();
        }

        match transition.scroll {
            ScrollEffect::ToTop => {
                browser::reset_panel_scroll(transition.to.anchor());
                browser::scroll_to_top();
            }
            ScrollEffect::IntoView(section) => browser::scroll_into_view(section.anchor()),
            // The track offset is rendered from the navigation view
            ScrollEffect::Track { .. } => {}
        }
    }
}

/// Timer delay in whole milliseconds, as gloo expects
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
