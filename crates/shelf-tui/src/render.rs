//! Pure view functions for the TUI.
//!
//! Functions here take state by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects. The top-level layout
//! is picked from the session snapshot with the navigation selector.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use shelf_core::session::{RenderTarget, select};

use crate::common::render_utils::centered_rect;
use crate::features::{home, login, products, register};
use crate::state::{AppState, AuthScreen, MainTab};

/// Height of status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Height of the tab bar in the authenticated set.
const TAB_BAR_HEIGHT: u16 = 2;

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    match select(&state.session) {
        RenderTarget::Loading => render_loading(state, frame, chunks[0]),
        RenderTarget::AuthStack => match state.auth_screen {
            AuthScreen::Login => login::render::render(state, frame, chunks[0]),
            AuthScreen::Register => register::render::render(state, frame, chunks[0]),
        },
        RenderTarget::MainTabs => render_main_tabs(state, frame, chunks[0]),
    }

    render_status_line(state, frame, chunks[1]);
}

fn spinner(state: &AppState) -> &'static str {
    SPINNER_FRAMES[(state.spinner_frame / 4) % SPINNER_FRAMES.len()]
}

fn render_loading(state: &AppState, frame: &mut Frame, area: Rect) {
    let rect = centered_rect(area, 30, 1);
    let line = Line::from(vec![
        Span::styled(spinner(state), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("Restoring session...", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), rect);
}

fn render_main_tabs(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TAB_BAR_HEIGHT), Constraint::Min(1)])
        .split(area);

    render_tab_bar(state, frame, chunks[0]);

    match state.active_tab {
        MainTab::Home => home::render::render(state, frame, chunks[1]),
        MainTab::Products => products::render::render(state, frame, chunks[1]),
    }
}

fn render_tab_bar(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (index, tab) in MainTab::all().iter().enumerate() {
        let active = *tab == state.active_tab;
        let style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("[{}] {}", index + 1, tab.title()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the status line: in-flight state or contextual shortcuts.
fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let busy_label = if state.login.submitting {
        Some("Signing in...")
    } else if state.register.submitting {
        Some("Registering...")
    } else if state.products.loading {
        Some("Loading products...")
    } else if state.session.loading() {
        Some("Restoring session...")
    } else {
        None
    };

    let spans: Vec<Span> = if let Some(label) = busy_label {
        vec![
            Span::raw(" "),
            Span::styled(spinner(state), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::Yellow)),
        ]
    } else {
        match select(&state.session) {
            RenderTarget::Loading => vec![],
            RenderTarget::AuthStack => vec![
                Span::raw(" "),
                Span::styled("Ctrl+C", Style::default().fg(Color::DarkGray)),
                Span::raw(" quit"),
            ],
            RenderTarget::MainTabs => {
                let mut spans = vec![
                    Span::raw(" "),
                    Span::styled("Tab", Style::default().fg(Color::DarkGray)),
                    Span::raw(" switch  "),
                ];
                if state.active_tab == MainTab::Home {
                    spans.push(Span::styled("l", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::raw(" logout  "));
                } else {
                    spans.push(Span::styled("r", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::raw(" refresh  "));
                }
                spans.push(Span::styled("q", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" quit"));
                spans
            }
        }
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
