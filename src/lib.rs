//! # Introduction
//!
//! algotty is a step-through algorithm visualizer for the terminal. Each
//! catalogued algorithm is instrumented to record a [`step::Step`] for every
//! meaningful event of its execution (a comparison, a swap, a narrowed
//! search range), and the resulting step log is replayed forward and
//! backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input array → Instrumented runner → Step log → Playback → Panes
//! ```
//!
//! 1. [`catalog`]: the algorithm registry with metadata, complexity labels,
//!    reference listings, and runner references, built once at startup.
//! 2. [`runners`]: one instrumented implementation per algorithm, plus
//!    the canonical uninstrumented versions in [`runners::canonical`] that
//!    the predict feature checks against.
//! 3. [`step`]: the step data contract and the capped recorder.
//! 4. [`playback`]: the engine owning a step sequence and the viewing
//!    position, with forward/back/auto-play controls.
//! 5. [`console`]: the narration log rendered in the console pane.
//! 6. [`input`]: random array generation and custom array parsing.
//! 7. [`ui`]: ratatui-based TUI, not part of the stable library API.
//!
//! ## Supported algorithm families
//!
//! Sorting, searching, two-pointer, array problems, hash map/set,
//! sliding window, backtracking, tree traversal, dynamic programming.

pub mod catalog;
pub mod console;
pub mod input;
pub mod playback;
pub mod runners;
pub mod step;
pub mod ui;
