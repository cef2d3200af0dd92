//! Reusable UI components

mod button;
mod input;
mod progress;
mod tag;

pub use button::*;
pub use input::*;
pub use progress::*;
pub use tag::*;

/// Join a base class with an optional extra class
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_joins() {
        assert_eq!(class_list("btn", None), "btn");
        assert_eq!(class_list("btn", Some("")), "btn");
        assert_eq!(class_list("btn", Some("wide")), "btn wide");
    }
}
