//! Login page: institutional e-mail, password and role.

use faqhub_app::services::login_service::LoginService;
use faqhub_domain::login::{FieldErrors, LoginField, LoginForm, PasswordVisibility, Role};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser::RouterNavigator;
use crate::components::{FieldError, ThemeToggle};

/// Login form.
///
/// Validation runs on submit only. A valid form navigates to the dashboard;
/// an invalid one shows one message beneath each failing field.
#[component]
pub fn LoginPage() -> impl IntoView {
    let service = StoredValue::new_local(LoginService::new(RouterNavigator::from_router()));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);
    let visibility = RwSignal::new(PasswordVisibility::default());
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let outcome = service.with_value(|s| s.submit(&form));
        errors.set(errors_after(outcome));
    };

    let error_for = move |field: LoginField| Signal::derive(move || errors.with(|e| e.message(field)));

    let role_option = move |option: Role| {
        view! {
            <label class="role-option">
                <input
                    type="radio"
                    name="role"
                    value=option.value()
                    prop:checked=move || role.get() == Some(option)
                    on:change=move |_| role.set(Some(option))
                />
                {option.label()}
            </label>
        }
    };

    view! {
        <main class="login">
            <div class="login-toolbar">
                <ThemeToggle/>
            </div>
            <form class="login-form" on:submit=on_submit novalidate=true>
                <h1>"SEJA BEM-VINDO"</h1>

                <div class="role-group">
                    {Role::ALL.into_iter().map(role_option).collect_view()}
                </div>

                <label for="email">"E-mail institucional"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="Digite seu e-mail"
                    bind:value=email
                />
                <FieldError message=error_for(LoginField::Email)/>

                <label for="password">"Senha"</label>
                <div class="password-field">
                    <input
                        id="password"
                        type=move || visibility.get().input_type()
                        placeholder="Digite sua senha"
                        bind:value=password
                    />
                    <button
                        type="button"
                        class="password-toggle"
                        on:click=move |_| visibility.update(|v| *v = v.toggled())
                    >
                        {move || match visibility.get() {
                            PasswordVisibility::Masked => "Mostrar",
                            PasswordVisibility::Plain => "Ocultar",
                        }}
                    </button>
                </div>
                <FieldError message=error_for(LoginField::Password)/>

                <button type="submit" class="submit">"Entrar"</button>
            </form>
        </main>
    }
}

/// Field errors to display once a submission has been handled.
fn errors_after(outcome: Result<(), FieldErrors>) -> FieldErrors {
    outcome.err().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqhub_domain::login::validate;

    #[test]
    fn should_clear_errors_after_successful_submit() {
        assert!(errors_after(Ok(())).is_empty());
    }

    #[test]
    fn should_keep_errors_of_rejected_submit() {
        let rejected = validate(&LoginForm::new("user.test.edu", "abc"));
        let shown = errors_after(Err(rejected.clone()));

        assert_eq!(shown, rejected);
        assert_eq!(shown.len(), 2);
    }
}
