//! Login screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::render_utils::{centered_rect, field_line, render_container};
use crate::state::AppState;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 12;
const LABEL_WIDTH: usize = 9;

/// Renders the login form centered in `area`.
pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
    let inner = render_container(frame, popup, "Sign in", Color::Cyan);

    let login = &state.login;
    let mut lines = vec![Line::from("")];

    use crate::features::login::LoginField;
    lines.push(field_line(
        "Email",
        &login.email,
        login.focus == LoginField::Email,
        LABEL_WIDTH,
    ));
    lines.push(Line::from(""));
    lines.push(field_line(
        "Password",
        &login.password,
        login.focus == LoginField::Password,
        LABEL_WIDTH,
    ));
    lines.push(Line::from(""));

    if login.submitting {
        lines.push(Line::from(Span::styled(
            "Logging in...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(notice) = &login.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter sign in · Tab next field · Ctrl+R register",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
