//! Keyboard channel

use super::NavCommand;

/// Map a `KeyboardEvent.key` value to a command.
///
/// Returns `None` for keys the page leaves to the browser. For every key
/// that maps, the browser default must be suppressed.
pub fn command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowLeft" | "ArrowUp" => Some(NavCommand::Previous),
        "ArrowRight" | "ArrowDown" | " " => Some(NavCommand::Next),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for_key("ArrowLeft"), Some(NavCommand::Previous));
        assert_eq!(command_for_key("ArrowUp"), Some(NavCommand::Previous));
        assert_eq!(command_for_key("ArrowRight"), Some(NavCommand::Next));
        assert_eq!(command_for_key("ArrowDown"), Some(NavCommand::Next));
    }

    #[test]
    fn test_space_home_end() {
        assert_eq!(command_for_key(" "), Some(NavCommand::Next));
        assert_eq!(command_for_key("Home"), Some(NavCommand::First));
        assert_eq!(command_for_key("End"), Some(NavCommand::Last));
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in ["a", "Enter", "Tab", "Escape", "PageDown", "Spacebar"] {
            assert_eq!(command_for_key(key), None, "{key}");
        }
    }
}
