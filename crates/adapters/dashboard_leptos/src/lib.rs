//! # faqhub-adapter-dashboard-leptos
//!
//! Client-side rendered front end built on [Leptos](https://leptos.dev).
//!
//! ## Responsibilities
//! - Render the three views: login (`/`), dashboard (`/dashboard`) and
//!   logout (`/sair`)
//! - Implement the `faqhub-app` ports against browser APIs (see [`browser`])
//! - Provide the theme preference to every view through [`theme::ThemeContext`]
//!
//! ## Dependency rule
//! Depends on `faqhub-app` and `faqhub-domain`. All behavior (validation,
//! menu transitions, redirects) lives there; this crate only wires signals to
//! views.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod browser;
mod components;
mod pages;
pub mod theme;

use pages::{DashboardPage, LoginPage, LogoutPage, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    theme::provide_theme();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LoginPage/>
                <Route path=path!("dashboard") view=DashboardPage/>
                <Route path=path!("sair") view=LogoutPage/>
            </Routes>
        </Router>
    }
}
