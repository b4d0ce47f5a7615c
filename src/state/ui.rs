#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the toast notification shown after form submits.
///
/// Held in an `RwSignal` context so any page can raise a toast. Each toast
/// gets a fresh id; dismissal is id-checked so the auto-dismiss timer of a
/// replaced toast cannot clear its successor.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toast: Option<Toast>,
    next_id: u64,
}

impl UiState {
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.next_id += 1;
        self.toast = Some(Toast { id: self.next_id, message: message.into(), kind });
    }

    /// Clear the toast, but only if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}
