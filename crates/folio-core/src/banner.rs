//! Single-slot status banner.
//!
//! Showing a banner replaces the previous one. Each banner gets an id so a
//! stale auto-removal timer cannot take down a newer banner.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerSlot {
    current: Option<Banner>,
    next_id: u64,
}

impl BannerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a banner, removing any prior one. Returns the id to pass to
    /// [`BannerSlot::expire`] when its display time is up.
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Banner {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove banner `id` if it is still the one showing
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|b| b.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_banner() {
        let mut slot = BannerSlot::new();
        let first = slot.show(BannerKind::Error, "first");
        let second = slot.show(BannerKind::Success, "second");
        assert_ne!(first, second);
        assert_eq!(slot.current().unwrap().message, "second");
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut slot = BannerSlot::new();
        let first = slot.show(BannerKind::Error, "first");
        let second = slot.show(BannerKind::Success, "second");
        assert!(!slot.expire(first));
        assert!(slot.current().is_some());
        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_kind_class() {
        assert_eq!(BannerKind::Success.class(), "success");
        assert_eq!(BannerKind::Error.class(), "error");
    }
}
