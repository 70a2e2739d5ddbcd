//! Dashboard sidebar: brand, search box and menu entries.

use faqhub_domain::menu::{Interest, MenuEntry};
use faqhub_domain::route::Route;
use leptos::prelude::*;
use leptos_router::components::A;

use super::ThemeToggle;

/// The dashboard's left-hand menu.
///
/// Every entry click is reported through `on_select`; the search input is
/// kept in a local signal and does not filter anything.
#[component]
pub fn Sidebar(
    /// Called with the clicked entry.
    on_select: Callback<MenuEntry>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());

    let entry_button = move |entry: MenuEntry| {
        view! {
            <li>
                <button
                    type="button"
                    class="menu-entry"
                    on:click=move |_| on_select.run(entry)
                >
                    {entry.label()}
                </button>
            </li>
        }
    };

    view! {
        <aside class="sidebar">
            <header class="sidebar-header">
                <h1 class="brand">"FAQ - Hub"</h1>
                <ThemeToggle/>
            </header>
            <p class="sidebar-subtitle">"Painel de Controle"</p>
            <input
                type="search"
                class="search"
                placeholder="Pesquisar"
                bind:value=search
            />
            <nav>
                <ul class="menu">
                    {MenuEntry::NAVIGATION.into_iter().map(entry_button).collect_view()}
                </ul>
                <h2 class="menu-group">"Meus Interesses"</h2>
                <ul class="menu">
                    {Interest::ALL
                        .into_iter()
                        .map(|interest| entry_button(MenuEntry::Interest(interest)))
                        .collect_view()}
                </ul>
            </nav>
            <A href=Route::Logout.path() attr:class="logout-link">"Sair"</A>
        </aside>
    }
}
