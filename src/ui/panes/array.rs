//! Array visualization pane
//!
//! Maps one [`Step`] to a visual frame: the snapshot laid out as a row of
//! equal boxes with index labels underneath, highlighted positions colored
//! by the step's tag, the search range drawn as a marked span, and the
//! description underneath. Rendering is a pure function of the step, so
//! re-rendering the same step is idempotent.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::step::{Step, StepKind};
use crate::ui::theme::{step_color, CELL_DEFAULT, DEFAULT_THEME};

use super::{pane_block, wrap_text};

pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    label: &str,
    is_focused: bool,
) {
    let block = pane_block(" Visualization ", is_focused);

    let Some(step) = step else {
        let paragraph = Paragraph::new(
            "Select an algorithm and press Enter to start the visualization",
        )
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner_width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            label.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    if step.kind == StepKind::Info || step.snapshot.is_empty() {
        // Message-only frames: truncation notices and empty arrays.
        let text = if step.snapshot.is_empty() && step.kind != StepKind::Info {
            format!("(empty array) {}", step.description)
        } else {
            step.description.clone()
        };
        for wrapped in wrap_text(&text, inner_width) {
            lines.push(
                Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(DEFAULT_THEME.secondary),
                ))
                .alignment(Alignment::Center),
            );
        }
        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let cell_width = step
        .snapshot
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        + 2;
    let highlight = step_color(step.kind);

    let mut value_spans: Vec<Span> = Vec::new();
    let mut index_spans: Vec<Span> = Vec::new();
    let mut range_spans: Vec<Span> = Vec::new();

    for (i, value) in step.snapshot.iter().enumerate() {
        if i > 0 {
            value_spans.push(Span::raw(" "));
            index_spans.push(Span::raw(" "));
            range_spans.push(Span::raw(" "));
        }

        let bg = if step.highlighted.contains(&i) {
            highlight
        } else {
            CELL_DEFAULT
        };
        value_spans.push(Span::styled(
            format!("{:^width$}", value, width = cell_width),
            Style::default()
                .bg(bg)
                .fg(DEFAULT_THEME.cell_fg)
                .add_modifier(Modifier::BOLD),
        ));
        index_spans.push(Span::styled(
            format!("{:^width$}", i, width = cell_width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        let in_range = step
            .range
            .map(|(low, high)| i >= low && i <= high)
            .unwrap_or(false);
        range_spans.push(if in_range {
            Span::styled(
                "▔".repeat(cell_width),
                Style::default().fg(DEFAULT_THEME.range),
            )
        } else {
            Span::raw(" ".repeat(cell_width))
        });
    }

    lines.push(Line::from(value_spans).alignment(Alignment::Center));
    lines.push(Line::from(index_spans).alignment(Alignment::Center));

    if let Some((low, high)) = step.range {
        lines.push(Line::from(range_spans).alignment(Alignment::Center));
        lines.push(
            Line::from(Span::styled(
                format!("Search Range: [{}, {}]", low, high),
                Style::default().fg(DEFAULT_THEME.range),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::from(""));
    for wrapped in wrap_text(&step.description, inner_width) {
        lines.push(
            Line::from(Span::styled(
                wrapped,
                Style::default().fg(DEFAULT_THEME.fg),
            ))
            .alignment(Alignment::Center),
        );
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
