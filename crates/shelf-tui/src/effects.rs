//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. They represent I/O and task spawning only; the reducer stays
//! pure and never performs I/O itself.

use shelf_core::api::types::ProductQuery;
use shelf_core::session::RegisterForm;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Submit the login form to the session store.
    SubmitLogin { email: String, password: String },

    /// Submit the register form to the session store.
    SubmitRegister { form: RegisterForm },

    /// End the session (synchronous local reset).
    Logout,

    /// Fetch the product list.
    LoadProducts { query: ProductQuery },
}
