//! Confirmation capability for destructive actions.
//!
//! The delete workflow only depends on the [`ConfirmService`] facade, so the
//! blocking native dialog can be swapped for a non-blocking modal without
//! changing the workflow itself.

use std::sync::Arc;

/// Yes/no prompt shown before a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Native `window.confirm` dialog.
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(win) => win.confirm_with_message(message).unwrap_or(false),
            None => false,
        }
    }
}

#[derive(Clone)]
pub struct ConfirmService(Arc<dyn ConfirmPrompt + Send + Sync>);

impl ConfirmService {
    pub fn browser() -> Self {
        Self(Arc::new(BrowserConfirm))
    }

    pub fn new(prompt: Arc<dyn ConfirmPrompt + Send + Sync>) -> Self {
        Self(prompt)
    }

    pub fn confirm(&self, message: &str) -> bool {
        self.0.confirm(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(bool);

    impl ConfirmPrompt for Canned {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn service_delegates_to_prompt() {
        assert!(ConfirmService::new(Arc::new(Canned(true))).confirm("sure?"));
        assert!(!ConfirmService::new(Arc::new(Canned(false))).confirm("sure?"));
    }
}
