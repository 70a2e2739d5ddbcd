//! Login form — transient credentials record and its validation rules.
//!
//! Validation is a pure function from [`LoginForm`] to [`FieldErrors`]. There
//! is no credential check: a form without field errors is simply accepted.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;

/// Minimum password length, counted in UTF-16 code units like a browser
/// string's `length`.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Values typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Selected role, on the login variant that offers one. Never affects
    /// validation or submission.
    pub role: Option<Role>,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

/// Mutually exclusive roles offered by the role selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Staff,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Student, Self::Staff];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Aluno",
            Self::Staff => "Servidor",
        }
    }

    /// Value of the radio input.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Staff => "staff",
        }
    }
}

/// Whether the password input shows its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Plain,
}

impl PasswordVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    /// The `type` attribute of the password input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }
}

/// Form fields that carry their own error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// Per-field validation result: at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<LoginField, ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: LoginField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Message to display beneath `field`, if it failed validation.
    #[must_use]
    pub fn message(&self, field: LoginField) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (LoginField, ValidationError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    fn insert(&mut self, field: LoginField, err: ValidationError) {
        self.0.insert(field, err);
    }
}

/// Check every field of `form` and collect the failures.
#[must_use]
pub fn validate(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if !is_well_formed_email(&form.email) {
        errors.insert(LoginField::Email, ValidationError::InvalidEmailFormat);
    }
    if form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.insert(LoginField::Password, ValidationError::PasswordTooShort);
    }
    errors
}

/// Whether `email` is a well-formed address.
///
/// Accepts `local@label.label…tld` where the local part uses ASCII
/// alphanumerics and `_ ' + - .`, does not start with a dot, does not end with
/// a dot or apostrophe, and contains no `..`. Domain labels start with an
/// alphanumeric and hold alphanumerics or `-`; the top-level label is at least
/// two ASCII letters.
#[must_use]
pub fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.');

    let Some(last) = local.chars().last() else {
        return false;
    };
    !local.starts_with('.')
        && !local.contains("..")
        && !matches!(last, '.' | '\'')
        && local.chars().all(allowed)
}

fn is_valid_domain(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    labels.split('.').all(|label| {
        let mut chars = label.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
