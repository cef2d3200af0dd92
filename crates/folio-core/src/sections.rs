//! Section registry.
//!
//! The six top-level panels of the portfolio, in page order. The anchor
//! identifiers are shared with the page markup and must stay in this order.

use std::fmt;

/// Number of sections on the page.
pub const SECTION_COUNT: usize = 6;

/// Title used when a section index has no entry in [`SECTION_TITLES`].
pub const DEFAULT_TITLE: &str = "Academic Portfolio";

/// Document titles, indexed by section.
pub const SECTION_TITLES: &[&str] = &[
    "Home - Academic Portfolio",
    "Research - Academic Portfolio",
    "Tools - Academic Portfolio",
    "Blog - Academic Portfolio",
    "CV - Academic Portfolio",
    "Contact - Academic Portfolio",
];

/// One of the fixed top-level content panels
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Section {
    #[default]
    Home,
    Research,
    Tools,
    Blog,
    Cv,
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::Home,
        Section::Research,
        Section::Tools,
        Section::Blog,
        Section::Cv,
        Section::Contact,
    ];

    /// Look up a section by its position, `None` if out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up a section by its page anchor (`"home"`, `"research"`, ...)
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Position of this section in page order
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Research => 1,
            Section::Tools => 2,
            Section::Blog => 3,
            Section::Cv => 4,
            Section::Contact => 5,
        }
    }

    /// Anchor id of the panel element
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Research => "research",
            Section::Tools => "tools",
            Section::Blog => "blog",
            Section::Cv => "cv",
            Section::Contact => "contact",
        }
    }

    /// Navigation button label
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Research => "Research",
            Section::Tools => "Tools",
            Section::Blog => "Blog",
            Section::Cv => "CV",
            Section::Contact => "Contact",
        }
    }

    /// Document title shown while this section is current
    pub fn title(self) -> &'static str {
        title_for_index(self.index())
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == SECTION_COUNT - 1
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Title table lookup with the generic fallback
pub fn title_for_index(index: usize) -> &'static str {
    SECTION_TITLES.get(index).copied().unwrap_or(DEFAULT_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(SECTION_COUNT), None);
    }

    #[test]
    fn test_anchor_contract() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "research", "tools", "blog", "cv", "contact"]);
        assert_eq!(Section::from_anchor("#cv"), Some(Section::Cv));
        assert_eq!(Section::from_anchor("assists"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Section::Blog.title(), "Blog - Academic Portfolio");
        assert_eq!(title_for_index(42), DEFAULT_TITLE);
        assert_eq!(SECTION_TITLES.len(), SECTION_COUNT);
    }

    #[test]
    fn test_bounds() {
        assert!(Section::Home.is_first());
        assert!(Section::Contact.is_last());
        assert!(!Section::Tools.is_first());
        assert!(!Section::Tools.is_last());
    }
}
