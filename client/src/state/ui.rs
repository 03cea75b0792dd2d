//! Transient UI chrome state (mobile menu, header scroll, toast).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of catalog state so the header, footer,
//! and toast can evolve independently of the data layer.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A transient confirmation or error notice shown in the corner overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub body: String,
}

/// UI state for the header, mobile navigation, and toast overlay.
///
/// `toast_seq` increments on every `show_toast` so a pending auto-dismiss
/// timer can tell whether its toast is still the one on screen.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub header_scrolled: bool,
    pub toast: Option<ToastMessage>,
    pub toast_seq: u64,
}

impl UiState {
    /// Replace any visible toast with a new one.
    pub fn show_toast(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.toast = Some(ToastMessage {
            title: title.into(),
            body: body.into(),
        });
        self.toast_seq += 1;
    }

    /// Dismiss the visible toast, if any.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Dismiss only if the toast from `seq` is still showing.
    pub fn dismiss_toast_if_current(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }

    /// Close the mobile menu, typically after a navigation.
    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
