use ratatui::style::Color;

use crate::step::StepKind;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub selected_bg: Color, // Slightly lighter BG for the selected row
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub cell_fg: Color,   // Text inside array boxes
    pub range: Color,     // Search-range marker
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(250, 179, 135),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    selected_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
    type_name: Color::Rgb(148, 226, 213),
    cell_fg: Color::Rgb(17, 17, 27),
    range: Color::Rgb(66, 153, 225),
};

/// Default box color for positions a step does not highlight.
pub const CELL_DEFAULT: Color = Color::Rgb(102, 126, 234);

/// Tag-specific highlight color: one exhaustive mapping, so a new tag is an
/// addition here rather than an edit to the rendering logic.
pub fn step_color(kind: StepKind) -> Color {
    match kind {
        StepKind::Init => Color::Rgb(102, 126, 234),
        StepKind::Compare => Color::Rgb(237, 137, 54),
        StepKind::Swap => Color::Rgb(245, 101, 101),
        StepKind::Select => Color::Rgb(159, 122, 234),
        StepKind::Shift => Color::Rgb(237, 137, 54),
        StepKind::Insert => Color::Rgb(72, 187, 120),
        StepKind::Check => Color::Rgb(66, 153, 225),
        StepKind::Found => Color::Rgb(72, 187, 120),
        StepKind::NotFound => Color::Rgb(160, 174, 192),
        StepKind::Narrow => Color::Rgb(66, 153, 225),
        StepKind::Move => Color::Rgb(56, 178, 172),
        StepKind::MoveLeft => Color::Rgb(66, 153, 225),
        StepKind::MoveRight => Color::Rgb(237, 137, 54),
        StepKind::Copy => Color::Rgb(159, 122, 234),
        StepKind::Skip => Color::Rgb(160, 174, 192),
        StepKind::Calculate => Color::Rgb(246, 173, 85),
        StepKind::Sum => Color::Rgb(104, 211, 145),
        StepKind::Empty => Color::Rgb(160, 174, 192),
        StepKind::Complete => Color::Rgb(72, 187, 120),
        StepKind::ReverseAll => Color::Rgb(245, 101, 101),
        StepKind::ReverseFirst => Color::Rgb(245, 101, 101),
        StepKind::ReverseRemaining => Color::Rgb(245, 101, 101),
        StepKind::Fill => Color::Rgb(237, 137, 54),
        StepKind::Info => Color::Rgb(102, 126, 234),
    }
}
