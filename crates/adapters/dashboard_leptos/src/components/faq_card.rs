//! FAQ card component for the dashboard's featured content.

use faqhub_domain::card::Card;
use leptos::prelude::*;

/// A card displaying a title and a short body text.
#[component]
pub fn FaqCard(
    /// The static content to render.
    card: Card,
) -> impl IntoView {
    view! {
        <div class="faq-card">
            <h3 class="faq-card-title">{card.title}</h3>
            <p class="faq-card-body">{card.body}</p>
        </div>
    }
}
