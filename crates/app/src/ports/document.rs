//! Document port — document-level presentation state.

use std::rc::Rc;

use faqhub_domain::theme::ThemePreference;

/// Applies a theme to the whole rendered document.
pub trait DocumentTheme {
    fn apply(&self, theme: ThemePreference);
}

impl<T: DocumentTheme + ?Sized> DocumentTheme for Rc<T> {
    fn apply(&self, theme: ThemePreference) {
        (**self).apply(theme);
    }
}
