//! Pane rendering for the four main panes and the status bar

mod array;
mod code;
mod console;
mod list;
mod status;

pub use array::render_array_pane;
pub use code::render_code_pane;
pub use console::render_console_pane;
pub use list::render_list_pane;
pub use status::render_status_bar;

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::DEFAULT_THEME;

/// Bordered block with the focus treatment shared by every pane.
pub(crate) fn pane_block(title: &'static str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Greedy word wrap used for descriptions and narration lines.
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(8);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap_text;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("comparing elements at indices 3 and 4", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 20));
    }

    #[test]
    fn empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 40), vec![String::new()]);
    }
}
