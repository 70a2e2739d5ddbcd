//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::theme::use_theme;

/// A button that switches between light and dark themes.
///
/// Shows a sun while dark is active and a moon otherwise. Each click toggles
/// and persists the preference through the shared [`ThemeContext`](crate::theme::ThemeContext).
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let label = move || {
        if theme.get().is_dark() {
            "\u{2600}"
        } else {
            "\u{263E}"
        }
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            title="Alternar tema"
        >
            {label}
        </button>
    }
}
