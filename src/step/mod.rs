// Step recording for algorithm playback

use std::fmt;

/// Maximum number of steps a single run may record.
///
/// Exponential-family algorithms (permutations, subsets, N-Queens) would
/// otherwise block the event loop with an unbounded log; runners stop
/// recording once the cap is reached and the sequence ends with a truncation
/// notice.
pub const MAX_STEPS: usize = 512;

/// Semantic tag for a recorded step.
///
/// The tag set is closed and shared across all algorithms; the renderer maps
/// each tag to a visual treatment and the console uses it to classify
/// narration lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Init,
    Compare,
    Swap,
    Select,
    Shift,
    Insert,
    Check,
    Found,
    NotFound,
    Narrow,
    Move,
    MoveLeft,
    MoveRight,
    Copy,
    Skip,
    Calculate,
    Sum,
    Empty,
    Complete,
    ReverseAll,
    ReverseFirst,
    ReverseRemaining,
    Fill,
    Info,
}

impl StepKind {
    /// Short lowercase label used in the console pane.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Select => "select",
            StepKind::Shift => "shift",
            StepKind::Insert => "insert",
            StepKind::Check => "check",
            StepKind::Found => "found",
            StepKind::NotFound => "not found",
            StepKind::Narrow => "narrow",
            StepKind::Move => "move",
            StepKind::MoveLeft => "move left",
            StepKind::MoveRight => "move right",
            StepKind::Copy => "copy",
            StepKind::Skip => "skip",
            StepKind::Calculate => "calculate",
            StepKind::Sum => "sum",
            StepKind::Empty => "empty",
            StepKind::Complete => "complete",
            StepKind::ReverseAll => "reverse all",
            StepKind::ReverseFirst => "reverse first",
            StepKind::ReverseRemaining => "reverse rest",
            StepKind::Fill => "fill",
            StepKind::Info => "info",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded moment of an algorithm's execution.
///
/// `snapshot` is a full defensive copy of the working array taken at the
/// instant of recording, never a reference to the live buffer, so earlier
/// steps stay replayable after later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub snapshot: Vec<i64>,
    pub highlighted: Vec<usize>,
    pub description: String,
    /// Inclusive [low, high] bound for range-narrowing algorithms.
    pub range: Option<(usize, usize)>,
    /// Whether a search probe matched its target.
    pub found: Option<bool>,
}

impl Step {
    pub fn new(
        kind: StepKind,
        snapshot: &[i64],
        highlighted: Vec<usize>,
        description: String,
    ) -> Self {
        Step {
            kind,
            snapshot: snapshot.to_vec(),
            highlighted,
            description,
            range: None,
            found: None,
        }
    }

    pub fn with_range(mut self, low: usize, high: usize) -> Self {
        self.range = Some((low, high));
        self
    }

    pub fn with_found(mut self, found: bool) -> Self {
        self.found = Some(found);
        self
    }
}

/// Growable step log shared by the runners.
///
/// The recorder takes the snapshot copies, enforces [`MAX_STEPS`], and is
/// threaded `&mut` through recursive runners so ordering needs no global
/// state. Once full, further pushes are dropped and `truncated` is set; the
/// caller appends a single trailing notice via [`finish`](Self::finish).
#[derive(Debug)]
pub struct StepRecorder {
    steps: Vec<Step>,
    limit: usize,
    truncated: bool,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::with_limit(MAX_STEPS)
    }

    pub fn with_limit(limit: usize) -> Self {
        StepRecorder {
            steps: Vec::new(),
            limit,
            truncated: false,
        }
    }

    /// Record a plain step.
    pub fn push(
        &mut self,
        kind: StepKind,
        snapshot: &[i64],
        highlighted: Vec<usize>,
        description: String,
    ) {
        self.push_step(Step::new(kind, snapshot, highlighted, description));
    }

    /// Record a step carrying a search range.
    pub fn push_ranged(
        &mut self,
        kind: StepKind,
        snapshot: &[i64],
        highlighted: Vec<usize>,
        description: String,
        low: usize,
        high: usize,
    ) {
        self.push_step(Step::new(kind, snapshot, highlighted, description).with_range(low, high));
    }

    pub fn push_step(&mut self, step: Step) {
        if self.steps.len() >= self.limit {
            self.truncated = true;
            return;
        }
        self.steps.push(step);
    }

    /// Whether the cap has been reached. Recursive runners poll this to
    /// short-circuit instead of exploring further.
    pub fn is_full(&self) -> bool {
        self.steps.len() >= self.limit
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the recorder, appending a truncation notice if the cap was
    /// hit. The notice replaces the final recorded step so the sequence
    /// never exceeds the limit.
    pub fn finish(mut self, snapshot: &[i64]) -> Vec<Step> {
        if self.truncated {
            let notice = Step::new(
                StepKind::Info,
                snapshot,
                Vec::new(),
                format!("Step limit of {} reached; remaining steps omitted", self.limit),
            );
            if self.steps.len() >= self.limit && !self.steps.is_empty() {
                let last = self.steps.len() - 1;
                self.steps[last] = notice;
            } else {
                self.steps.push(notice);
            }
        }
        self.steps
    }
}

impl Default for StepRecorder {
    fn default() -> Self {
        Self::new()
    }
}
