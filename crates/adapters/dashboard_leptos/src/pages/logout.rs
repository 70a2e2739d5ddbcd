//! Logout page: a short notice, then back to the login page.

use faqhub_app::services::logout_redirect::LogoutRedirect;
use faqhub_domain::route::LOGOUT_REDIRECT_DELAY;
use leptos::prelude::*;

use crate::browser::{BrowserScheduler, RouterNavigator};

/// Schedules the redirect on mount and cancels it when the page is torn
/// down, so leaving early never navigates.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let redirect = LogoutRedirect::schedule(
        &BrowserScheduler,
        RouterNavigator::from_router(),
        LOGOUT_REDIRECT_DELAY,
    );
    let redirect = StoredValue::new_local(Some(redirect));

    on_cleanup(move || {
        redirect.update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
        });
    });

    view! {
        <main class="logout">
            <h1>"Você saiu da página"</h1>
            <p>"Você será redirecionado para a página de login em alguns segundos..."</p>
        </main>
    }
}
