//! UI event types.
//!
//! Events are the only input to the reducer. They arrive from three
//! sources: the terminal (crossterm), the tick timer, and the inbox
//! channel that async effect handlers send their results to.

use shelf_core::api::ApiError;
use shelf_core::api::types::{Product, UserRecord};
use shelf_core::session::{SessionError, SessionSnapshot};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Raw terminal event (keys, resize).
    Terminal(crossterm::event::Event),

    /// Periodic tick; drives the spinner and render cadence.
    Tick,

    /// The session store published a new snapshot.
    Session(SessionSnapshot),

    /// A login call settled.
    LoginResult(Result<UserRecord, SessionError>),

    /// A register call settled.
    RegisterResult(Result<UserRecord, SessionError>),

    /// A product list fetch settled.
    ProductsLoaded(Result<Vec<Product>, ApiError>),
}
