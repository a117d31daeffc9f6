//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Async results arrive through an inbox channel: effect handlers are
//! spawned tasks that send a `UiEvent` when they settle, and the loop
//! drains the inbox each frame. Session state changes arrive through the
//! store's watch channel, so navigation reacts to every published
//! snapshot without polling the store itself.

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use shelf_core::config::Config;
use shelf_core::session::{SessionSnapshot, SessionStore};
use tokio::sync::{mpsc, watch};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while async work is in flight (60fps = ~16ms).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle; longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and
/// on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// Session store; the runtime is its only caller in this process.
    store: Arc<SessionStore>,
    /// Subscription to session snapshots.
    session_rx: watch::Receiver<SessionSnapshot>,
    /// Inbox sender - effect handlers send result events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - the loop drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    pub fn new(config: Config, store: Arc<SessionStore>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;

        let session_rx = store.subscribe();
        let state = AppState::new(config, store.snapshot());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            store,
            session_rx,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        // Kick off the startup restore; the watch channel reports the
        // settled state, so no result event is needed.
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            store.restore().await;
        });

        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at
                // tick cadence; other events batch to the next Tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from all sources (session watch, inbox, terminal).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Session snapshot changes published by the store.
        while self.session_rx.has_changed().unwrap_or(false) {
            let snapshot = self.session_rx.borrow_and_update().clone();
            events.push(UiEvent::Session(snapshot));
        }

        // Drain inbox - all async effect results arrive here.
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let tick_interval = if self.state.is_busy() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Poll terminal events:
        // - If we already have events, do a non-blocking poll.
        // - Otherwise block until the next tick is due.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect handler; its result event lands in the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }

            UiEffect::SubmitLogin { email, password } => {
                let store = Arc::clone(&self.store);
                self.spawn_effect(move || async move {
                    UiEvent::LoginResult(store.login(&email, &password).await)
                });
            }

            UiEffect::SubmitRegister { form } => {
                let store = Arc::clone(&self.store);
                self.spawn_effect(move || async move {
                    UiEvent::RegisterResult(store.register(&form).await)
                });
            }

            // Synchronous by contract: the watch channel delivers the
            // reset snapshot on the next loop pass.
            UiEffect::Logout => {
                self.store.logout();
            }

            UiEffect::LoadProducts { query } => {
                let api = self.store.api().clone();
                self.spawn_effect(move || async move {
                    UiEvent::ProductsLoaded(api.list_products(&query).await)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
