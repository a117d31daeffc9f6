//! Home tab view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

/// Renders the home tab: welcome header and user-information card.
pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(user) = state.session.user() else {
        // Unreachable while MainTabs is selected; render nothing.
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Welcome, {}!", user.first_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            user.email.clone(),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(header, chunks[0].inner(ratatui::layout::Margin::new(1, 0)));

    let card_area = Rect {
        x: chunks[1].x + 1,
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(2).min(50),
        height: 7.min(chunks[1].height),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" User Information ");
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<8}", "Name"), label),
            Span::styled(user.full_name(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<8}", "Email"), label),
            Span::styled(user.email.clone(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<8}", "Role"), label),
            Span::styled(user.role.label(), value),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines),
        inner.inner(ratatui::layout::Margin::new(1, 1)),
    );
}
