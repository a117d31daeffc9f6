//! Register screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::render_utils::{centered_rect, field_line, render_container};
use crate::features::register::RegisterField;
use crate::state::AppState;

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 18;
const LABEL_WIDTH: usize = 17;

/// Renders the register form centered in `area`.
pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
    let inner = render_container(frame, popup, "Create account", Color::Cyan);

    let register = &state.register;
    let mut lines = vec![Line::from("")];

    let fields = [
        ("First name", &register.first_name, RegisterField::FirstName),
        ("Last name", &register.last_name, RegisterField::LastName),
        ("Email", &register.email, RegisterField::Email),
        ("Password", &register.password, RegisterField::Password),
        (
            "Confirm password",
            &register.password_confirm,
            RegisterField::PasswordConfirm,
        ),
    ];
    for (label, field, id) in fields {
        lines.push(field_line(label, field, register.focus == id, LABEL_WIDTH));
        lines.push(Line::from(""));
    }

    lines.push(role_picker_line(state));
    lines.push(Line::from(""));

    if register.submitting {
        lines.push(Line::from(Span::styled(
            "Registering...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &register.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter register · Tab next field · Esc back to login",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn role_picker_line(state: &AppState) -> Line<'static> {
    let register = &state.register;
    let focused = register.focus == RegisterField::Role;
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value = if focused {
        format!("← {} →", register.role().label())
    } else {
        register.role().label().to_string()
    };
    Line::from(vec![
        Span::styled(
            format!("{:<width$} ", "Role", width = LABEL_WIDTH),
            label_style,
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
