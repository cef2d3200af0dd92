//! Browser glue.
//!
//! Everything that talks to `web-sys` lives here: viewport queries,
//! scrolling, the body scroll lock, decoding raw DOM events into
//! [`InputEvent`]s, and the HTTP transport for posts. Missing browser
//! objects degrade to a logged warning, never a panic.

use anyhow::Context;
use folio_core::modal::body_lock_style;
use folio_core::{absorbs_wheel, FolioError, FolioResult, InputEvent, PostFetcher};
use gloo::net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, TouchEvent, WheelEvent, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// Viewport width in CSS pixels, 0 when unavailable
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Current vertical scroll offset of the page
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Start the panel with id `anchor` at its own top
pub fn reset_panel_scroll(anchor: &str) {
    if let Some(panel) = document().and_then(|d| d.get_element_by_id(anchor)) {
        panel.set_scroll_top(0);
    }
}

/// Smooth-scroll the element with id `anchor` to the top of the viewport
pub fn scroll_into_view(anchor: &str) {
    let Some(target) = document().and_then(|d| d.get_element_by_id(anchor)) else {
        tracing::warn!("{}", FolioError::MissingElement(format!("#{}", anchor)));
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Pin the page at `saved_scroll` while an overlay is open
pub fn lock_body(saved_scroll: f64) {
    match body() {
        Some(body) => body.style().set_css_text(&body_lock_style(saved_scroll)),
        None => tracing::warn!("{}", FolioError::MissingElement("body".into())),
    }
}

/// Undo [`lock_body`] and jump straight back to `saved_scroll`
pub fn unlock_body(saved_scroll: f64) {
    if let Some(body) = body() {
        body.style().set_css_text("");
    }
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, saved_scroll);
    }
}

/// `key` of a keydown event
pub fn key_name(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

/// Elements that take typed text; keys pressed in them are not navigation
const EDITABLE: &str = "input, textarea, select, [contenteditable]";

pub fn key_input(event: &Event) -> Option<InputEvent> {
    let key = key_name(event)?;
    if target_within(event, EDITABLE) {
        Some(InputEvent::FieldKey(key))
    } else {
        Some(InputEvent::Key(key))
    }
}

pub fn wheel_input(event: &Event) -> Option<InputEvent> {
    let wheel = event.dyn_ref::<WheelEvent>()?;
    Some(InputEvent::Wheel {
        delta_x: wheel.delta_x(),
        delta_y: wheel.delta_y(),
    })
}

/// Whether the active panel can still scroll in the wheel's direction,
/// in which case the event is left to the browser
pub fn active_panel_absorbs(event: &Event) -> bool {
    let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
        return false;
    };
    let Some(panel) = document().and_then(|d| d.query_selector(".panel.active").ok().flatten()) else {
        return false;
    };
    absorbs_wheel(
        f64::from(panel.scroll_top()),
        f64::from(panel.scroll_height()),
        f64::from(panel.client_height()),
        wheel.delta_x(),
        wheel.delta_y(),
    )
}

/// Client position of the first changed touch
fn touch_point(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

pub fn touch_start_input(event: &Event) -> Option<InputEvent> {
    touch_point(event).map(|(x, y)| InputEvent::TouchStart { x, y })
}

pub fn touch_end_input(event: &Event) -> Option<InputEvent> {
    touch_point(event).map(|(x, y)| InputEvent::TouchEnd { x, y })
}

/// Whether the event target is inside an element matching `selector`
pub fn target_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Posts transport over the browser's fetch API
pub struct GlooFetcher;

impl PostFetcher for GlooFetcher {
    async fn fetch(&self, url: &str) -> FolioResult<String> {
        let response = Request::get(url)
            .send()
            .await
            .with_context(|| format!("requesting {}", url))
            .map_err(network)?;

        if !response.ok() {
            return Err(FolioError::HttpStatus(response.status()));
        }

        response
            .text()
            .await
            .context("reading posts body")
            .map_err(network)
    }
}

fn network(err: anyhow::Error) -> FolioError {
    FolioError::Network(format!("{:#}", err))
}
