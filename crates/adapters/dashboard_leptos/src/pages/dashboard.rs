//! Dashboard page: sidebar menu plus the content panel it drives.

use faqhub_domain::menu::{DashboardContent, DashboardState, MenuEntry};
use leptos::prelude::*;

use crate::components::{FaqCard, Sidebar};

/// Main dashboard view.
///
/// Starts empty; `Home` reveals the featured cards and every other entry
/// shows the placeholder message.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let on_select = Callback::new(move |entry: MenuEntry| {
        state.update(|s| s.select(entry));
    });

    let content = move || {
        state.with(|s| match s.content() {
            DashboardContent::Cards(cards) => view! {
                <div class="cards">
                    {cards.iter().map(|card| view! { <FaqCard card=*card/> }).collect_view()}
                </div>
            }
            .into_any(),
            DashboardContent::Message(message) => {
                view! { <p class="placeholder">{message.to_owned()}</p> }.into_any()
            }
            DashboardContent::Empty => ().into_any(),
        })
    };

    view! {
        <div class="dashboard">
            <Sidebar on_select=on_select/>
            <main class="content">
                <header class="content-header">
                    <h2>"Todos os FAQs"</h2>
                    <div class="tabs">
                        <button type="button" class="tab">"HOT"</button>
                        <button type="button" class="tab">"NEW"</button>
                    </div>
                </header>
                <h3 class="content-heading">"Encontre algo do seu interesse"</h3>
                {content}
            </main>
        </div>
    }
}
