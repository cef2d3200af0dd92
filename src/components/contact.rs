//! Contact form component

use dioxus::prelude::*;
use folio_core::{ContactForm, FieldKind, SubmitOutcome};
use folio_ui::{Button, ButtonVariant, Input, TextArea};
use gloo::timers::callback::Timeout;

use crate::context::{millis, use_site_config};

/// Contact form with per-field validity and a self-expiring banner
#[component]
pub fn ContactFormView() -> Element {
    let config = use_site_config();
    let mut form = use_signal(ContactForm::contact);
    let banner_ttl = millis(config.form.banner_ttl);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let (SubmitOutcome::Rejected { banner } | SubmitOutcome::Sent { banner }) = form.write().submit();
        Timeout::new(banner_ttl, move || {
            form.write().expire_banner(banner);
        })
        .forget();
    };

    let fields = form.read().fields().to_vec();
    let banner = form.read().banner().cloned();

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: submit,
            if let Some(banner) = banner {
                div { class: "form-message {banner.kind.class()}", "{banner.message}" }
            }

            for field in fields {
                {match field.spec.kind {
                    FieldKind::Multiline => rsx! {
                        TextArea {
                            key: "{field.spec.name}",
                            name: field.spec.name.to_string(),
                            label: field.spec.label.to_string(),
                            value: field.value.clone(),
                            required: field.spec.required,
                            status: field.status,
                            oninput: move |v: String| form.write().input(field.spec.name, v),
                            onblur: move |_| {
                                form.write().blur(field.spec.name);
                            },
                        }
                    },
                    FieldKind::Text | FieldKind::Email => rsx! {
                        Input {
                            key: "{field.spec.name}",
                            name: field.spec.name.to_string(),
                            label: field.spec.label.to_string(),
                            value: field.value.clone(),
                            input_type: field.spec.kind.input_type().to_string(),
                            required: field.spec.required,
                            status: field.status,
                            oninput: move |v: String| form.write().input(field.spec.name, v),
                            onblur: move |_| {
                                form.write().blur(field.spec.name);
                            },
                        }
                    },
                }}
            }

            Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Send Message" }
        }
    }
}
