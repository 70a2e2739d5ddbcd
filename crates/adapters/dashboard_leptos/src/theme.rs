//! Theme context shared by every view.

use faqhub_app::services::theme_service::ThemeService;
use faqhub_domain::theme::ThemePreference;
use leptos::prelude::*;

use crate::browser::{BrowserStorage, RootElementTheme};

type BrowserThemeService = ThemeService<BrowserStorage, RootElementTheme>;

/// Reactive handle on the [`ThemeService`] mounted at the app root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    service: StoredValue<BrowserThemeService, LocalStorage>,
    theme: RwSignal<ThemePreference>,
}

impl ThemeContext {
    /// The preference currently in effect (tracked).
    pub fn get(&self) -> ThemePreference {
        self.theme.get()
    }

    /// Flip, apply and persist the preference.
    pub fn toggle(&self) {
        let next = self.service.with_value(BrowserThemeService::toggle);
        self.theme.set(next);
    }
}

/// Mount the theme service and provide it to the component tree.
///
/// Reads `localStorage` once and applies the stored preference immediately.
pub fn provide_theme() {
    let service = ThemeService::mount(BrowserStorage, RootElementTheme);
    let theme = RwSignal::new(service.current());
    provide_context(ThemeContext {
        service: StoredValue::new_local(service),
        theme,
    });
}

/// Access the theme from Leptos context.
///
/// Must be called within a component tree set up by [`provide_theme`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
