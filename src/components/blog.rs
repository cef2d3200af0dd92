//! Blog Components
//!
//! - BlogGrid: post cards from the shared feed
//! - PostModal: full post overlay with the body scroll lock

use dioxus::prelude::*;
use folio_core::{reveal_delay, CloseReason, ModalController, PostCard};
use folio_ui::{Button, ButtonVariant, CloseButton, TagList};
use gloo::events::EventListener;

use crate::browser;
use crate::context::{use_feed, use_modal};

/// Grid of post cards, or a loading placeholder until the feed arrives
#[component]
pub fn BlogGrid() -> Element {
    let feed = use_feed();
    let cards = feed.read().cards();

    rsx! {
        div { class: "blog-grid",
            if cards.is_empty() {
                p { class: "blog-placeholder", "Loading posts..." }
            }
            for card in cards {
                PostCardView { key: "{card.key}", card: card.clone() }
            }
        }
    }
}

#[component]
fn PostCardView(card: PostCard) -> Element {
    let feed = use_feed();
    let mut modal = use_modal();
    let key = card.key;
    let delay = reveal_delay(key).as_millis();

    let open = move |_| {
        let Some(detail) = feed.read().detail(key) else {
            tracing::warn!(post = key, "no post for card");
            return;
        };
        modal.write().open(detail, browser::scroll_y());
        if let Some(open) = modal.read().current() {
            browser::lock_body(open.saved_scroll);
        }
    };

    rsx! {
        article { class: "blog-post reveal", style: "animation-delay: {delay}ms;",
            div { class: "post-date", "{card.date_label}" }
            TagList { tags: card.tags.clone() }
            h3 { class: "post-title", "{card.title}" }
            p { class: "post-excerpt", "{card.excerpt}" }
            Button {
                variant: ButtonVariant::Secondary,
                class: "read-more".to_string(),
                onclick: open,
                "Read More"
            }
        }
    }
}

/// Close the modal through `reason` and release the body lock
fn close_post(mut modal: Signal<ModalController>, reason: CloseReason) {
    if let Some(saved) = modal.write().close(reason) {
        browser::unlock_body(saved);
    }
}

/// Post detail overlay.
///
/// The Escape listener exists only while a post is open; it is attached
/// and dropped from an effect so it is never removed from inside its own
/// callback.
#[component]
pub fn PostModal() -> Element {
    let mut modal = use_modal();
    let mut escape: Signal<Option<EventListener>> = use_signal(|| None);

    use_effect(move || {
        let open = modal.read().is_open();
        if !open {
            escape.set(None);
            return;
        }
        if escape.peek().is_some() {
            return;
        }
        let Some(document) = browser::document() else {
            tracing::warn!("document unavailable, Escape will not close the post");
            return;
        };
        let listener = EventListener::new(&document, "keydown", move |event| {
            if browser::key_name(event).as_deref() != Some("Escape") {
                return;
            }
            if let Some(saved) = modal.write().handle_key("Escape") {
                browser::unlock_body(saved);
            }
        });
        escape.set(Some(listener));
    });

    let Some(open) = modal.read().current().cloned() else {
        return rsx! {};
    };
    let detail = open.detail;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| close_post(modal, CloseReason::Backdrop),

            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| close_post(modal, CloseReason::Control) }

                h2 { class: "modal-title", "{detail.title}" }
                div { class: "post-date", "{detail.date_label}" }
                TagList { tags: detail.tags.clone() }
                div { class: "post-body", dangerous_inner_html: "{detail.html}" }
            }
        }
    }
}
