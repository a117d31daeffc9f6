//! Login form state.

use crate::common::TextField;

/// Focusable fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form state.
#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    /// Whether a login call is in flight (submission disabled meanwhile).
    pub submitting: bool,
    /// Validation or server error to display.
    pub error: Option<String>,
    /// Informational message (e.g. after successful registration).
    pub notice: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::Email,
            submitting: false,
            error: None,
            notice: None,
        }
    }
}

impl LoginState {
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        // Two fields: previous and next coincide.
        self.focus_next();
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}
