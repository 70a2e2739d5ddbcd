//! Login service — validate the form on submit and navigate on success.

use faqhub_domain::login::{FieldErrors, LoginForm, validate};
use faqhub_domain::route::Route;

use crate::ports::Navigator;

/// Handles login form submissions.
///
/// There is no authentication backend: a form that passes validation is
/// accepted and the user is sent to the dashboard.
pub struct LoginService<N> {
    navigator: N,
}

impl<N: Navigator> LoginService<N> {
    /// Create a new service that navigates through `navigator`.
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Validate `form` and, when every field passes, navigate to
    /// [`Route::Dashboard`].
    ///
    /// # Errors
    ///
    /// Returns the per-field [`FieldErrors`] when validation fails. No
    /// navigation happens in that case.
    #[tracing::instrument(skip_all, fields(role = ?form.role))]
    pub fn submit(&self, form: &LoginForm) -> Result<(), FieldErrors> {
        let errors = validate(form);
        if !errors.is_empty() {
            tracing::debug!(invalid_fields = errors.len(), "login form rejected");
            return Err(errors);
        }
        tracing::info!(route = %Route::Dashboard, "redirecting to dashboard");
        self.navigator.navigate(Route::Dashboard);
        Ok(())
    }
}
