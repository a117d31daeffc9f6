//! Register form state.

use shelf_core::api::types::Role;
use shelf_core::session::RegisterForm;

use crate::common::TextField;

/// Focusable fields of the register form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    FirstName,
    LastName,
    Email,
    Password,
    PasswordConfirm,
    Role,
}

impl RegisterField {
    fn next(self) -> Self {
        match self {
            RegisterField::FirstName => RegisterField::LastName,
            RegisterField::LastName => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::PasswordConfirm,
            RegisterField::PasswordConfirm => RegisterField::Role,
            RegisterField::Role => RegisterField::FirstName,
        }
    }

    fn prev(self) -> Self {
        match self {
            RegisterField::FirstName => RegisterField::Role,
            RegisterField::LastName => RegisterField::FirstName,
            RegisterField::Email => RegisterField::LastName,
            RegisterField::Password => RegisterField::Email,
            RegisterField::PasswordConfirm => RegisterField::Password,
            RegisterField::Role => RegisterField::PasswordConfirm,
        }
    }
}

/// Register form state.
#[derive(Debug, Clone)]
pub struct RegisterState {
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub password_confirm: TextField,
    /// Index into `Role::all()` for the picker.
    pub role_index: usize,
    pub focus: RegisterField,
    /// Whether a register call is in flight.
    pub submitting: bool,
    /// Validation or server error to display.
    pub error: Option<String>,
}

impl RegisterState {
    /// Creates an empty form with the configured role pre-selected.
    pub fn new(default_role: Role) -> Self {
        let role_index = Role::all()
            .iter()
            .position(|role| *role == default_role)
            .unwrap_or(0);
        Self {
            first_name: TextField::new(),
            last_name: TextField::new(),
            email: TextField::new(),
            password: TextField::masked(),
            password_confirm: TextField::masked(),
            role_index,
            focus: RegisterField::FirstName,
            submitting: false,
            error: None,
        }
    }

    pub fn role(&self) -> Role {
        Role::all()[self.role_index]
    }

    pub fn cycle_role(&mut self, forward: bool) {
        let count = Role::all().len();
        self.role_index = if forward {
            (self.role_index + 1) % count
        } else {
            (self.role_index + count - 1) % count
        };
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Returns the focused text field, or None when the role picker has
    /// focus.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            RegisterField::FirstName => Some(&mut self.first_name),
            RegisterField::LastName => Some(&mut self.last_name),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::PasswordConfirm => Some(&mut self.password_confirm),
            RegisterField::Role => None,
        }
    }

    /// Builds the form payload for submission.
    pub fn to_form(&self) -> RegisterForm {
        RegisterForm {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            password_confirm: self.password_confirm.value().to_string(),
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            role: self.role(),
        }
    }
}
