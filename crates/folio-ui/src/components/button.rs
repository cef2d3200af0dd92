//! Button Components
//!
//! - Primary: filled call-to-action ("Read More", "Send Message")
//! - Secondary: outlined action
//! - Nav: section navigation button with an active state
//! - Step: previous/next arrow with a disabled state at the bounds

use dioxus::prelude::*;

use super::class_list;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Nav,
    Step,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Nav => "nav-btn",
            ButtonVariant::Step => "scroll-btn",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Adds the `active` class (nav buttons)
    #[props(default = false)]
    pub active: bool,
    /// Adds the `disabled` class and attribute
    #[props(default = false)]
    pub disabled: bool,
    /// `button`, `submit` or `reset`
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Full class string for a button in the given state
pub fn button_class(variant: ButtonVariant, active: bool, disabled: bool, extra: Option<&str>) -> String {
    let mut class = class_list(variant.class(), extra);
    if active {
        class.push_str(" active");
    }
    if disabled {
        class.push_str(" disabled");
    }
    class
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Nav,
///         active: view.nav_active[1],
///         onclick: move |_| on_nav(1),
///         "Research"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.active, props.disabled, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, menu toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            id: props.id.clone(),
            class: "{class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Nav.class(), "nav-btn");
        assert_eq!(ButtonVariant::Step.class(), "scroll-btn");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn button_class_states() {
        assert_eq!(button_class(ButtonVariant::Nav, true, false, None), "nav-btn active");
        assert_eq!(
            button_class(ButtonVariant::Step, false, true, Some("scroll-left")),
            "scroll-btn scroll-left disabled"
        );
    }
}
