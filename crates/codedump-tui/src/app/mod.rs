//! Main application state and logic.

pub(crate) mod constants;
pub mod filter;
pub mod navigation;
mod render;
pub mod state;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{info, warn};

use codedump_scan::Collector;

use crate::TuiConfig;
use crate::event::{KeyAction, SearchAction};
use crate::opener::{Reveal, SystemOpener};
use crate::theme::Theme;

use self::constants::TICK_INTERVAL_MS;
use self::render::{RenderContext, render_app};
use self::state::{Mode, NavigatorState, StatusMessage};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Navigation, filter and status state.
    state: NavigatorState,
    /// Collection engine.
    collector: Collector,
    /// Reveals the collected directory after a successful run.
    opener: Box<dyn Reveal>,
    /// Color theme.
    theme: Theme,
    /// Help overlay visible.
    show_help: bool,
    /// A collection was requested and runs after the next draw.
    pending_collect: bool,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
}

impl App {
    /// Create a new application with default config.
    pub fn new(path: PathBuf) -> Self {
        Self::with_config(path, TuiConfig::default())
    }

    /// Create a new application with custom config.
    pub fn with_config(path: PathBuf, config: TuiConfig) -> Self {
        Self::with_parts(path, config, Collector::new(), Box::new(SystemOpener))
    }

    /// Create an application from explicit collaborators.
    pub fn with_parts(
        path: PathBuf,
        config: TuiConfig,
        collector: Collector,
        opener: Box<dyn Reveal>,
    ) -> Self {
        Self {
            state: NavigatorState::with_viewport_height(path, config.viewport_height),
            collector,
            opener,
            theme: Theme::from_variant(config.theme),
            show_help: false,
            pending_collect: false,
            needs_redraw: true,
        }
    }

    /// Read-only view of the navigator state.
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// Run the application event loop until the user quits.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.state.mode() != Mode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            // The "collecting" status is on screen now; run the walk inline.
            // Input queues up in the terminal until it finishes.
            if self.pending_collect {
                self.run_pending_collect();
                continue;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    match event {
                        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                            self.handle_key(key_event);
                        }
                        Event::Resize(..) => {}
                        _ => continue,
                    }
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    // Periodic tick keeps the loop responsive to a closed stream
                }
            }
        }

        Ok(())
    }

    /// Dispatch a key event to the handler for the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-c quits from every screen, the help overlay included
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.quit();
            return;
        }

        if self.show_help {
            // Any key closes the overlay
            self.show_help = false;
            return;
        }

        match self.state.mode() {
            Mode::Browsing => self.handle_browsing(KeyAction::from_key_event(key)),
            Mode::Searching => self.handle_searching(SearchAction::from_key_event(key)),
            Mode::Quit => {}
        }
    }

    fn handle_browsing(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.state.quit(),
            KeyAction::MoveUp => self.state.move_up(),
            KeyAction::MoveDown => self.state.move_down(),
            KeyAction::JumpToTop => self.state.jump_to_top(),
            KeyAction::JumpToBottom => self.state.jump_to_bottom(),
            KeyAction::PageUp => self.state.page_up(),
            KeyAction::PageDown => self.state.page_down(),
            KeyAction::Confirm => {
                self.state.enter_selected();
            }
            KeyAction::Search => self.state.enter_search(),
            KeyAction::ClearFilter => self.state.clear_filter(),
            KeyAction::Collect => {
                self.state.set_status(StatusMessage::info(format!(
                    "⏳ Collecting {}…",
                    self.state.current_path().display()
                )));
                self.pending_collect = true;
            }
            KeyAction::ToggleHelp => self.show_help = true,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::None => {}
        }
    }

    fn handle_searching(&mut self, action: SearchAction) {
        match action {
            SearchAction::Insert(c) => self.state.push_query_char(c),
            SearchAction::Backspace => self.state.pop_query_char(),
            SearchAction::Finish => self.state.finish_search(),
            SearchAction::Quit => self.state.quit(),
            SearchAction::None => {}
        }
    }

    /// Run a requested collection, if any, and report it on the status line.
    pub fn run_pending_collect(&mut self) {
        if !std::mem::take(&mut self.pending_collect) {
            return;
        }
        self.needs_redraw = true;

        let root = self.state.current_path().to_path_buf();
        match self.collector.collect(&root) {
            Ok(report) => {
                info!(artifact = %report.artifact_name, files = report.files_written, "collected");
                if let Err(err) = self.opener.reveal(&root) {
                    warn!(path = %root.display(), error = %err, "could not open file manager");
                }
                self.state.set_status(StatusMessage::success(format!(
                    "✅ Created: {}",
                    report.artifact_name
                )));
            }
            Err(err) => {
                warn!(path = %root.display(), error = %err, "collection failed");
                self.state
                    .set_status(StatusMessage::failure(format!("❌ Collection failed: {err}")));
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext {
            state: &self.state,
            theme: &self.theme,
            show_help: self.show_help,
        };
        render_app(&ctx, frame.area(), frame.buffer_mut());
    }
}
