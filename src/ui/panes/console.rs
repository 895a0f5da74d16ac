//! Console narration pane

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::console::{MessageKind, MessageLog};
use crate::ui::theme::{step_color, DEFAULT_THEME};

use super::pane_block;

pub fn render_console_pane(
    frame: &mut Frame,
    area: Rect,
    log: &MessageLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Console ", is_focused);

    if log.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = log
        .lines()
        .iter()
        .map(|message| {
            let (marker, color) = match message.kind {
                MessageKind::Info => ("•", DEFAULT_THEME.comment),
                MessageKind::Success => ("✓", DEFAULT_THEME.success),
                MessageKind::Error => ("✗", DEFAULT_THEME.error),
                MessageKind::Step(kind) => ("▪", step_color(kind)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(color)),
                Span::styled(
                    message.text.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp the offset; usize::MAX means "stick to the bottom".
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
