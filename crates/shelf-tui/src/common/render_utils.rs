//! Shared rendering helpers for form screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthStr;

use super::TextField;

/// Centers a fixed-size rect inside `area`, clamped to its bounds.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Renders a bordered container with a title and returns the inner area.
pub fn render_container(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Line::from(Span::styled(
            format!(" {title} "),
            Style::default().fg(color),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// Renders a labeled form field as one line.
///
/// The focused field shows a block cursor at the edit position.
pub fn field_line(label: &str, field: &TextField, focused: bool, label_width: usize) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = Style::default().fg(Color::White);

    let padded = format!("{label:<label_width$} ");
    let display = field.display();

    let mut spans = vec![Span::styled(padded, label_style)];
    if focused {
        let cursor = field.cursor();
        let chars: Vec<char> = display.chars().collect();
        let before: String = chars[..cursor.min(chars.len())].iter().collect();
        let at: String = chars
            .get(cursor)
            .map_or_else(|| " ".to_string(), |c| c.to_string());
        let after: String = if cursor + 1 <= chars.len() {
            chars[(cursor + 1).min(chars.len())..].iter().collect()
        } else {
            String::new()
        };
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at,
            Style::default().fg(Color::Black).bg(Color::White),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(display, value_style));
    }
    Line::from(spans)
}

/// Truncates a string to a display width, appending an ellipsis.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
