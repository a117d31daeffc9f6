//! Application state composition.
//!
//! The top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── session: SessionSnapshot   (mirrors the session store; selects the render target)
//! ├── auth_screen: AuthScreen    (which unauthenticated screen is showing)
//! ├── active_tab: MainTab        (which authenticated tab is showing)
//! ├── login: LoginState          (login form)
//! ├── register: RegisterState    (register form)
//! └── products: ProductsState    (product list)
//! ```
//!
//! The session snapshot is owned by the session store; the copy here is
//! updated whenever the store publishes a change, and the render target
//! is always re-derived from it with `select`.

use shelf_core::config::Config;
use shelf_core::session::SessionSnapshot;

use crate::features::login::LoginState;
use crate::features::products::ProductsState;
use crate::features::register::RegisterState;

/// Which screen of the unauthenticated stack is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
}

/// Which tab of the authenticated set is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Home,
    Products,
}

impl MainTab {
    pub fn title(&self) -> &'static str {
        match self {
            MainTab::Home => "Home",
            MainTab::Products => "Products",
        }
    }

    pub fn all() -> &'static [MainTab] {
        &[MainTab::Home, MainTab::Products]
    }
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Latest session snapshot from the store.
    pub session: SessionSnapshot,
    /// Active unauthenticated screen.
    pub auth_screen: AuthScreen,
    /// Active authenticated tab.
    pub active_tab: MainTab,
    /// Login form state.
    pub login: LoginState,
    /// Register form state.
    pub register: RegisterState,
    /// Product list state.
    pub products: ProductsState,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Loaded configuration (pre-selected role, base URL for display).
    pub config: Config,
}

impl AppState {
    /// Creates the initial state: session restoring, forms empty.
    pub fn new(config: Config, session: SessionSnapshot) -> Self {
        let register = RegisterState::new(config.default_role);
        Self {
            should_quit: false,
            session,
            auth_screen: AuthScreen::default(),
            active_tab: MainTab::default(),
            login: LoginState::default(),
            register,
            products: ProductsState::default(),
            spinner_frame: 0,
            config,
        }
    }

    /// Returns true if any async operation is in flight (drives fast polling).
    pub fn is_busy(&self) -> bool {
        self.session.loading()
            || self.login.submitting
            || self.register.submitting
            || self.products.loading
    }

    /// Resets per-session UI state after a logout or rejected session.
    pub fn reset_after_logout(&mut self) {
        self.auth_screen = AuthScreen::Login;
        self.active_tab = MainTab::Home;
        self.login = LoginState::default();
        self.register = RegisterState::new(self.config.default_role);
        self.products = ProductsState::default();
    }
}
