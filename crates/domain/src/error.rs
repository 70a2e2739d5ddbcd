//! Common error types used across the workspace, one per concern.

/// A field-scoped validation failure on the login form.
///
/// The `Display` output is the message shown beneath the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("E-mail inválido")]
    InvalidEmailFormat,

    #[error("A senha deve ter no mínimo {min} caracteres", min = crate::login::MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// A string could not be converted into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("unknown route `{0}`")]
    UnknownRoute(String),
}

/// The key-value store backing user preferences failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (private browsing, disabled storage, no window).
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The store refused the operation (quota exceeded, security error).
    #[error("preference storage rejected `{key}`")]
    Rejected { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_field_messages_for_display() {
        assert_eq!(
            ValidationError::InvalidEmailFormat.to_string(),
            "E-mail inválido"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "A senha deve ter no mínimo 6 caracteres"
        );
    }

    #[test]
    fn should_name_the_rejected_key() {
        let err = StorageError::Rejected {
            key: "theme".to_string(),
        };
        assert_eq!(err.to_string(), "preference storage rejected `theme`");
    }
}
