//! Native Dialogs
//!
//! Browser `confirm` / `prompt`, behind a trait so actions can be driven
//! without a browser.

pub trait Dialogs {
    /// `true` only if the user accepted
    fn confirm(&self, message: &str) -> bool;

    /// `None` when the prompt was dismissed
    fn prompt(&self, message: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
    }
}
