//! Algorithm list pane: category header plus the algorithms in it

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::catalog::{AlgorithmInfo, Category};
use crate::ui::theme::DEFAULT_THEME;

use super::pane_block;

pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    category: Category,
    entries: &[&AlgorithmInfo],
    selected: usize,
    is_focused: bool,
) {
    let block = pane_block(" Algorithms ", is_focused);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", category),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(DEFAULT_THEME.cell_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  (c: next category)",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]));
    lines.push(Line::from(""));

    let visible_height = area.height.saturating_sub(4).max(2) as usize;
    let rows_per_entry = 2;
    let visible_entries = (visible_height / rows_per_entry).max(1);

    // Keep the selection in view.
    let first = if selected >= visible_entries {
        selected + 1 - visible_entries
    } else {
        0
    };

    for (offset, entry) in entries.iter().enumerate().skip(first).take(visible_entries) {
        let is_selected = offset == selected;
        let name_style = if is_selected {
            Style::default()
                .fg(DEFAULT_THEME.function)
                .bg(DEFAULT_THEME.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let marker = if is_selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(DEFAULT_THEME.function)),
            Span::styled(entry.name, name_style),
            Span::styled(
                format!("  {}", entry.complexity),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.description),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
