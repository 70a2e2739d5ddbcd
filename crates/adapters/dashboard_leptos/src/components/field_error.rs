use leptos::prelude::*;

/// Error text rendered beneath a form input; renders nothing when `message`
/// is `None`.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="field-error" role="alert">{text}</p> })
    }
}
