//! Products tab view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::render_utils::truncate_with_ellipsis;
use crate::state::AppState;

const NAME_WIDTH: usize = 28;
const SKU_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 10;

/// Renders the products tab: column header plus one row per product.
pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let products = &state.products;
    let inner = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };

    if products.loading && products.items.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "Loading products...",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(para, inner);
        return;
    }

    if let Some(error) = &products.error {
        let lines = vec![
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "r to retry",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    if products.items.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No products.",
            Style::default().fg(Color::Gray),
        )));
        frame.render_widget(para, inner);
        return;
    }

    let mut lines = vec![header_line()];

    // Keep the selected row visible in the available height.
    let visible_rows = inner.height.saturating_sub(1) as usize;
    let first = products
        .selected
        .saturating_sub(visible_rows.saturating_sub(1));
    for (index, product) in products
        .items
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_rows)
    {
        let selected = index == products.selected;
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let text = format!(
            "{:<name_w$} {:<sku_w$} {:>price_w$} {:>6}",
            truncate_with_ellipsis(&product.name, NAME_WIDTH),
            truncate_with_ellipsis(&product.sku, SKU_WIDTH),
            product.price,
            product.stock_quantity,
            name_w = NAME_WIDTH,
            sku_w = SKU_WIDTH,
            price_w = PRICE_WIDTH,
        );
        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn header_line() -> Line<'static> {
    let text = format!(
        "{:<name_w$} {:<sku_w$} {:>price_w$} {:>6}",
        "Name",
        "SKU",
        "Price",
        "Stock",
        name_w = NAME_WIDTH,
        sku_w = SKU_WIDTH,
        price_w = PRICE_WIDTH,
    );
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    ))
}
