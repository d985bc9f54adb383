//! Single-slot transient notifications.
//!
//! Showing a new toast always replaces the one on screen. Expiry is keyed
//! by a monotonically increasing id so a stale expiry timer never dismisses
//! a newer toast.

use std::time::Duration;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// The single toast slot.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    current: Option<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Replace whatever is on screen with a new toast and return its id,
    /// which the caller schedules an expiry for.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Toast { id, message: message.into(), level });
        id
    }

    /// Dismiss unconditionally (the close button).
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if `id` is still the toast on screen.
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
