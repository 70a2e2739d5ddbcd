use faqhub_domain::route::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Página não encontrada"</h1>
            <p>"A página que você procura não existe."</p>
            <p>
                <A href=Route::Login.path()>"Voltar para o login"</A>
            </p>
        </div>
    }
}
