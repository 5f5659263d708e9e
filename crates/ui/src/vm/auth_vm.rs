use services::AuthError;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (AuthMode::Login, false) => "Login",
            (AuthMode::Login, true) => "Logging in...",
            (AuthMode::SignUp, false) => "Sign Up",
            (AuthMode::SignUp, true) => "Signing up...",
        }
    }

    /// Prompt and link text for switching to the other mode.
    #[must_use]
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Not a member?", "Please sign up"),
            AuthMode::SignUp => ("Already registered?", "Login here"),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

/// Credential and validation failures are shown as-is; anything else is generic.
#[must_use]
pub fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidCredentials | AuthError::AlreadyRegistered | AuthError::Account(_) => {
            err.to_string()
        }
        _ => ViewError::Unknown.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AccountError;
    use storage::repository::StorageError;

    #[test]
    fn credential_errors_are_verbatim() {
        assert_eq!(
            auth_error_message(&AuthError::InvalidCredentials),
            "Invalid login credentials"
        );
        assert_eq!(
            auth_error_message(&AuthError::Account(AccountError::SecretTooShort { min: 6 })),
            "Password should be at least 6 characters"
        );
    }

    #[test]
    fn infrastructure_errors_are_generic() {
        let err = AuthError::Storage(StorageError::Connection("db locked".to_string()));
        assert_eq!(auth_error_message(&err), ViewError::Unknown.message());
    }

    #[test]
    fn toggling_switches_labels() {
        let mode = AuthMode::default();
        assert_eq!(mode.title(), "Sign In");
        assert_eq!(mode.toggled().submit_label(true), "Signing up...");
        assert_eq!(mode.toggled().switch_prompt().1, "Login here");
    }
}
