//! Main TUI application state and logic

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::catalog::{self, Catalog, Category, ParamKind};
use crate::console::MessageLog;
use crate::input::random_array;
use crate::playback::Player;
use crate::runners::{fmt_values, RunnerArgs};
use crate::ui::{panes, predict};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    List,
    Array,
    Console,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: list -> array -> console -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::List => FocusedPane::Array,
            FocusedPane::Array => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::List,
        }
    }
}

/// The main application state: the controller wiring key events to the
/// catalog, the runners, and the playback engine.
pub struct App {
    /// Algorithm registry, built once at startup.
    catalog: Catalog,

    /// Playback engine holding the current step sequence.
    player: Player,

    /// Console narration log.
    log: MessageLog,

    /// Seeded generator for arrays and runner parameters.
    rng: StdRng,

    /// The working input array.
    array: Vec<i64>,

    /// Index into [`Category::ALL`].
    category_index: usize,

    /// Selection within the current category's algorithm list.
    selected: usize,

    /// Algorithm currently loaded in the player, if any.
    current: Option<(Category, &'static str)>,

    /// Parameters used by the last run, for `--shared-predict-params`.
    last_args: Option<RunnerArgs>,

    /// Last playback position narrated to the console.
    narrated: Option<usize>,

    /// When set, predict reuses the run's parameters instead of drawing
    /// fresh ones.
    shared_predict_params: bool,

    pub focused_pane: FocusedPane,
    pub console_scroll: usize,
    pub code_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    pub fn new(
        catalog: Catalog,
        array: Vec<i64>,
        rng: StdRng,
        interval: Duration,
        shared_predict_params: bool,
    ) -> Self {
        App {
            catalog,
            player: Player::with_interval(interval),
            log: MessageLog::new(),
            rng,
            array,
            category_index: 0,
            selected: 0,
            current: None,
            last_args: None,
            narrated: None,
            shared_predict_params,
            focused_pane: FocusedPane::List,
            console_scroll: usize::MAX,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive auto-play from the event loop.
            if self.player.tick() {
                self.narrate_current();
                self.status_message = if self.player.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
            }

            // Poll with a timeout so auto-play keeps ticking.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn category(&self) -> Category {
        Category::ALL[self.category_index]
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: visualization (top) | console (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: algorithm list (top) | code listing (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let label = match self.current {
            Some((_, name)) => name,
            None => "Algorithm Visualizer",
        };
        panes::render_array_pane(
            frame,
            left_rows[0],
            self.player.current(),
            label,
            self.focused_pane == FocusedPane::Array,
        );

        panes::render_console_pane(
            frame,
            left_rows[1],
            &self.log,
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        let category = self.category();
        let entries = self.catalog.in_category(category);
        let selected = self.selected.min(entries.len().saturating_sub(1));
        panes::render_list_pane(
            frame,
            right_rows[0],
            category,
            &entries,
            selected,
            self.focused_pane == FocusedPane::List,
        );

        let listing = entries.get(selected).map(|e| e.listing).unwrap_or("");
        panes::render_code_pane(
            frame,
            right_rows[1],
            listing,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.player.position(),
            self.player.len(),
            self.player.is_playing(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.stop();
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.player.step_forward() {
                        self.narrate_current();
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.player.stop();
                if self.player.step_backward() {
                    self.narrate_current();
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the first step".to_string();
                }
            }
            KeyCode::Right => {
                self.player.stop();
                if self.player.step_forward() {
                    self.narrate_current();
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::List => {
                    if self.selected > 0 {
                        self.selected -= 1;
                        self.code_scroll = 0;
                    }
                }
                FocusedPane::Console => {
                    if self.console_scroll == usize::MAX {
                        self.console_scroll = self.log.len().saturating_sub(1);
                    }
                    self.console_scroll = self.console_scroll.saturating_sub(1);
                }
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_sub(1);
                }
                FocusedPane::Array => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::List => {
                    let len = self.catalog.in_category(self.category()).len();
                    if self.selected + 1 < len {
                        self.selected += 1;
                        self.code_scroll = 0;
                    }
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_add(1);
                }
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_add(1);
                }
                FocusedPane::Array => {}
            },
            KeyCode::Enter => {
                self.run_selected();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (200 ms debounce against key repeat).
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.player.is_playing() {
                        self.player.stop();
                        self.status_message = "Paused".to_string();
                    } else if !self.player.is_loaded() {
                        self.status_message =
                            "Nothing to play; run an algorithm first".to_string();
                    } else {
                        self.player.play();
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Char('c') => {
                self.category_index = (self.category_index + 1) % Category::ALL.len();
                self.selected = 0;
                self.code_scroll = 0;
                self.status_message = format!("Category: {}", self.category());
            }
            KeyCode::Char('g') => {
                self.array = random_array(&mut self.rng);
                self.player.reset();
                self.current = None;
                self.narrated = None;
                self.log.info(format!("New array: {}", fmt_values(&self.array)));
                self.console_scroll = usize::MAX;
                self.status_message = "Generated a new array".to_string();
            }
            KeyCode::Char('p') => {
                self.predict();
            }
            KeyCode::Char('r') => {
                self.player.reset();
                self.log.clear();
                self.current = None;
                self.narrated = None;
                self.status_message = "Reset".to_string();
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.player.stop();
                if self.player.jump_to_start() {
                    self.narrate_current();
                }
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::End => {
                self.player.stop();
                if self.player.jump_to_end() {
                    self.narrate_current();
                }
                self.status_message = "Jumped to end".to_string();
            }
            _ => {}
        }
    }

    /// Log the step at the current playback position, once per position
    /// change, and keep the console pinned to the bottom.
    fn narrate_current(&mut self) {
        let position = self.player.position();
        if self.narrated == Some(position) {
            return;
        }
        if let Some(step) = self.player.current().cloned() {
            self.narrated = Some(position);
            self.log.step(&step);
            self.console_scroll = usize::MAX;
        }
    }

    /// The array an algorithm actually receives: sorted first when the
    /// algorithm requires sorted input.
    fn working_array(&self, requires_sorted: bool) -> Vec<i64> {
        let mut arr = self.array.clone();
        if requires_sorted {
            arr.sort_unstable();
        }
        arr
    }

    /// Draw the extra parameter an algorithm needs from the seeded rng.
    fn generate_args(&mut self, params: ParamKind, working: &[i64]) -> RunnerArgs {
        match params {
            ParamKind::None => RunnerArgs::none(),
            ParamKind::Target => {
                // A target usually present in the array, like the original
                // picked a random element.
                let target = if working.is_empty() {
                    0
                } else {
                    working[self.rng.gen_range(0..working.len())]
                };
                RunnerArgs::with_target(target)
            }
            ParamKind::TargetSum => RunnerArgs::with_target(self.rng.gen_range(10..=60)),
            ParamKind::WindowSize => {
                let k = self.rng.gen_range(2..=5).min(working.len().max(1));
                RunnerArgs::with_k(k)
            }
            ParamKind::RotateCount => {
                RunnerArgs::with_k(self.rng.gen_range(1..=working.len().max(1)))
            }
            ParamKind::DistinctCount => RunnerArgs::with_k(self.rng.gen_range(1..=3)),
            ParamKind::BoardSize => RunnerArgs::with_n(self.rng.gen_range(4..=6)),
            ParamKind::FibIndex => RunnerArgs::with_n(self.rng.gen_range(5..=15)),
            ParamKind::SecondSequence => {
                RunnerArgs::with_second(random_array(&mut self.rng))
            }
        }
    }

    fn describe_args(params: ParamKind, args: &RunnerArgs) -> Option<String> {
        match params {
            ParamKind::None => None,
            ParamKind::Target => args.target.map(|t| format!("Searching for target: {}", t)),
            ParamKind::TargetSum => args
                .target
                .map(|t| format!("Looking for a sum of: {}", t)),
            ParamKind::WindowSize => args.k.map(|k| format!("Window size: {}", k)),
            ParamKind::RotateCount => {
                args.k.map(|k| format!("Rotating array by {} position(s)", k))
            }
            ParamKind::DistinctCount => {
                args.k.map(|k| format!("Distinct-value limit: {}", k))
            }
            ParamKind::BoardSize => args.n.map(|n| format!("Board size: {}", n)),
            ParamKind::FibIndex => args.n.map(|n| format!("Computing Fibonacci number {}", n)),
            ParamKind::SecondSequence => args
                .second
                .as_deref()
                .map(|s| format!("Second sequence: {}", fmt_values(s))),
        }
    }

    /// Run the selected algorithm: generate parameters, invoke the runner,
    /// and load the sequence. The player is only touched on success, so a
    /// failed run never leaves a partial sequence loaded.
    fn run_selected(&mut self) {
        let picked = {
            let entries = self.catalog.in_category(self.category());
            entries.get(self.selected).map(|info| {
                (
                    info.runner,
                    info.params,
                    info.requires_sorted,
                    info.name,
                    info.category,
                )
            })
        };
        let Some((runner, params, requires_sorted, name, category)) = picked else {
            self.log.error("Please select an algorithm first!");
            self.status_message = "No algorithm selected".to_string();
            return;
        };

        if self.array.is_empty() && !matches!(params, ParamKind::BoardSize | ParamKind::FibIndex)
        {
            self.log.error("Please create an array first!");
            self.status_message = "Array is empty".to_string();
            return;
        }

        self.player.stop();
        let working = self.working_array(requires_sorted);
        let args = self.generate_args(params, &working);

        match runner(&working, &args) {
            Ok(steps) => {
                self.log.clear();
                self.log.success(format!("Running {}...", name));
                if requires_sorted && working != self.array {
                    self.log
                        .info(format!("Input sorted first: {}", fmt_values(&working)));
                }
                if let Some(message) = Self::describe_args(params, &args) {
                    self.log.info(message);
                }
                self.player.load(steps);
                self.current = Some((category, name));
                self.last_args = Some(args);
                self.narrated = None;
                self.narrate_current();
                self.status_message = format!("Loaded {} step(s)", self.player.len());
            }
            Err(err) => {
                self.log.error(format!("Error: {}", err));
                self.status_message = "Run failed".to_string();
            }
        }
    }

    /// Compute and narrate the expected output without running the
    /// visualization. By default the parameter is drawn fresh, so predict
    /// and run can disagree on e.g. the rotation count; pass
    /// `--shared-predict-params` to reuse the last run's parameters.
    fn predict(&mut self) {
        let picked = {
            let entries = self.catalog.in_category(self.category());
            entries.get(self.selected).map(|info| {
                (
                    info.params,
                    info.requires_sorted,
                    info.name,
                    info.complexity,
                    info.description,
                )
            })
        };
        let Some((params, requires_sorted, name, complexity, description)) = picked else {
            self.log.error("Please select an algorithm first!");
            return;
        };

        if self.array.is_empty() && !matches!(params, ParamKind::BoardSize | ParamKind::FibIndex)
        {
            self.log.error("Please create an array first!");
            return;
        }

        let working = self.working_array(requires_sorted);
        let reuse = self.shared_predict_params
            && matches!(self.current, Some((_, current)) if current == name);
        let args = if reuse {
            self.last_args.clone().unwrap_or_default()
        } else {
            self.generate_args(params, &working)
        };

        let expected = {
            let entries = self.catalog.in_category(self.category());
            predict::expected_output(entries[self.selected], &working, &args)
        };

        self.log.info(format!("Prediction for {}", name));
        self.log.info(format!("Input: {}", fmt_values(&working)));
        if let Some(message) = Self::describe_args(params, &args) {
            self.log.info(message);
        }
        self.log.info(format!("Expected output: {}", expected));
        self.log.info(format!(
            "Time complexity: {} ({})",
            complexity,
            catalog::complexity_explanation(complexity)
        ));
        self.log.info(format!("Description: {}", description));
        self.log.success("Output prediction generated!");
        self.console_scroll = usize::MAX;
        self.status_message = "Prediction written to console".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_app() -> App {
        App::new(
            Catalog::standard(),
            vec![5, 3, 1],
            StdRng::seed_from_u64(42),
            Duration::from_millis(1000),
            false,
        )
    }

    #[test]
    fn run_loads_a_sequence_and_narrates_the_first_step() {
        let mut app = test_app();
        app.run_selected();
        assert!(app.player.is_loaded());
        assert_eq!(app.player.position(), 0);
        assert!(app.log.len() >= 2);
        assert_eq!(
            app.current,
            Some((Category::Sorting, "Bubble Sort"))
        );
    }

    #[test]
    fn stepping_narrates_each_position_once() {
        let mut app = test_app();
        app.run_selected();
        let before = app.log.len();
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        assert_eq!(app.log.len(), before + 2);

        // Stepping back over a visited position narrates it again.
        app.handle_key_event(KeyEvent::from(KeyCode::Left));
        assert_eq!(app.log.len(), before + 3);
    }

    #[test]
    fn category_cycling_wraps_and_resets_selection() {
        let mut app = test_app();
        for _ in 0..Category::ALL.len() {
            app.handle_key_event(KeyEvent::from(KeyCode::Char('c')));
        }
        assert_eq!(app.category(), Category::Sorting);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn predict_writes_to_the_console_without_loading_steps() {
        let mut app = test_app();
        app.predict();
        assert!(!app.player.is_loaded());
        assert!(app
            .log
            .lines()
            .iter()
            .any(|m| m.text.contains("Expected output: [1, 3, 5]")));
    }

    #[test]
    fn failed_runs_leave_the_player_untouched() {
        let mut app = test_app();
        app.array.clear();
        app.run_selected();
        assert!(!app.player.is_loaded());
        assert!(app
            .log
            .lines()
            .iter()
            .any(|m| m.text.contains("Please create an array first!")));
    }
}
