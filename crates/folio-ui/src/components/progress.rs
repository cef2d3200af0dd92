//! Section progress indicator

use dioxus::prelude::*;

/// CSS width for a progress value in `0.0..=1.0`, clamped
pub fn progress_width(fraction: f64) -> String {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0).round();
    format!("width: {}%;", percent)
}

/// Thin bar showing how far through the sections the visitor is
#[component]
pub fn ProgressBar(fraction: f64) -> Element {
    let style = progress_width(fraction);

    rsx! {
        div { class: "progress-bar",
            div { class: "progress-fill", style: "{style}" }
        }
    }
}
