//! Reference listing pane with rudimentary Rust highlighting
//!
//! A word-based tokenizer, no real lexer: keywords, known type names,
//! numbers, strings, and line comments get their theme colors. Good enough
//! for the short canonical listings the catalog carries.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

use super::pane_block;

pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Code ", is_focused);

    let all_lines: Vec<&str> = listing.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if all_lines.len() > visible_height {
        let max_scroll = all_lines.len() - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let lines: Vec<Line> = all_lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .enumerate()
        .map(|(row, line)| {
            let number = *scroll_offset + row + 1;
            let mut spans = vec![Span::styled(
                format!("{:>3} ", number),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn highlight_line(line: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            flush_word(&mut spans, &mut word, false);
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(
                rest,
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return spans;
        }

        if c == '"' {
            flush_word(&mut spans, &mut word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            end = (end + 1).min(chars.len());
            let text: String = chars[i..end].iter().collect();
            spans.push(Span::styled(
                text,
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut word, c == '(');
            spans.push(Span::raw(c.to_string()));
            i += 1;
            continue;
        }

        word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut word, false);
    spans
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "fn" | "let" | "mut" | "if" | "else" | "while" | "for" | "in" | "loop" | "match"
        | "return" | "break" | "continue" | "pub" | "use" | "struct" | "enum" | "impl" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "i64" | "u32" | "usize" | "bool" | "Vec" | "Option" | "Some" | "None" | "HashMap"
        | "HashSet" | "VecDeque" => Style::default().fg(DEFAULT_THEME.type_name),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}
