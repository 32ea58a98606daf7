//! Terminal navigator for codedump.
//!
//! This crate provides the interactive TUI, built with ratatui.
//!
//! # Overview
//!
//! - **Browsing** - walk the directory tree one listing at a time
//! - **Searching** - type a live, case-insensitive filter over the listing
//! - **Collecting** - dump the current directory's text files into one
//!   artifact, then reveal the directory in the system file manager
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! // Run the TUI on a directory
//! codedump_tui::run(PathBuf::from("/path/to/project")).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k` - Move down/up
//! - `Enter` - Enter directory
//! - `/` or `Ctrl-w` - Search
//! - `Esc` - Clear filter
//! - `r` - Collect & open
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
pub mod opener;
mod theme;
mod ui;

pub use app::filter::filter_entries;
pub use app::navigation::ListCursor;
pub use app::state::{Mode, NavigatorState, StatusKind, StatusMessage};
pub use app::{App, AppResult};
pub use opener::{Reveal, SystemOpener};
pub use theme::{Theme, ThemeVariant};

use app::constants::VIEWPORT_HEIGHT;

/// Configuration for the TUI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Initial color theme.
    pub theme: ThemeVariant,
    /// Number of list rows kept in the scroll window.
    pub viewport_height: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl TuiConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = theme;
        self
    }

    /// Set the scroll window height (clamped to at least one row).
    pub fn with_viewport_height(mut self, height: usize) -> Self {
        self.viewport_height = height.max(1);
        self
    }
}

/// Run the TUI application.
pub fn run(path: std::path::PathBuf) -> AppResult<()> {
    run_with_config(path, TuiConfig::default())
}

/// Run the TUI application with custom configuration.
pub fn run_with_config(path: std::path::PathBuf, config: TuiConfig) -> AppResult<()> {
    // Everything runs on the calling thread; the runtime only drives the
    // terminal event stream.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::with_config(path, config).run(terminal));
    ratatui::restore();

    result
}
