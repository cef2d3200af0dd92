//! Post detail modal lifecycle.
//!
//! Opening captures the page scroll offset so the page can lock the body in
//! place; every close path (control, backdrop, Escape) goes through
//! [`ModalController::close`], which hands the offset back exactly once.

use crate::content::PostDetail;

/// Which control closed the modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Control,
    Backdrop,
    Escape,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenModal {
    pub detail: PostDetail,
    /// Vertical scroll offset of the page when the modal opened
    pub saved_scroll: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalController {
    open: Option<OpenModal>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `detail`. Opening over an open modal swaps the content and
    /// keeps the offset captured by the first open, since the body is
    /// already locked.
    pub fn open(&mut self, detail: PostDetail, scroll_y: f64) {
        let saved_scroll = self
            .open
            .as_ref()
            .map(|m| m.saved_scroll)
            .unwrap_or(scroll_y);
        tracing::debug!(post = detail.key, saved_scroll, "opening post modal");
        self.open = Some(OpenModal {
            detail,
            saved_scroll,
        });
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenModal> {
        self.open.as_ref()
    }

    /// Close the modal and return the scroll offset to restore.
    /// Returns `None` when nothing was open.
    pub fn close(&mut self, reason: CloseReason) -> Option<f64> {
        let closed = self.open.take()?;
        tracing::debug!(post = closed.detail.key, ?reason, "closing post modal");
        Some(closed.saved_scroll)
    }

    /// Escape closes; every other key is ignored
    pub fn handle_key(&mut self, key: &str) -> Option<f64> {
        if key == "Escape" {
            self.close(CloseReason::Escape)
        } else {
            None
        }
    }
}

/// Inline body style that pins the page at `saved_scroll` while locked
pub fn body_lock_style(saved_scroll: f64) -> String {
    format!("position: fixed; top: -{}px; left: 0; right: 0; width: 100%;", saved_scroll)
}
