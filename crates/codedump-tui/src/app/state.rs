//! Navigator state: current directory, filtered listing, cursor and mode.

use std::path::{Path, PathBuf};

use strum::Display;
use tracing::debug;

use codedump_core::Entry;

use super::constants::{PAGE_SIZE, VIEWPORT_HEIGHT};
use super::filter::filter_entries;
use super::navigation::ListCursor;

/// Navigator mode. Search is a modal sub-state of the same screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Mode {
    #[default]
    #[strum(to_string = "BROWSE")]
    Browsing,
    #[strum(to_string = "SEARCH")]
    Searching,
    #[strum(to_string = "QUIT")]
    Quit,
}

/// Tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Failure,
}

/// Feedback line shown under the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failure,
            text: text.into(),
        }
    }
}

/// Everything the navigator shows, mutated in place by input events.
///
/// `visible_entries` is always `filter_entries(all_entries, search_query)`;
/// every change to either side goes through [`Self::apply_filter`], which
/// also puts the cursor back on the first row.
#[derive(Debug, Clone)]
pub struct NavigatorState {
    current_path: PathBuf,
    all_entries: Vec<Entry>,
    visible_entries: Vec<Entry>,
    cursor: ListCursor,
    mode: Mode,
    search_query: String,
    status: Option<StatusMessage>,
}

impl NavigatorState {
    /// Open the navigator at `path` with the default window height.
    pub fn new(path: PathBuf) -> Self {
        Self::with_viewport_height(path, VIEWPORT_HEIGHT)
    }

    /// Open the navigator at `path`, reading its listing from disk.
    pub fn with_viewport_height(path: PathBuf, height: usize) -> Self {
        let entries = codedump_scan::list_entries(&path);
        Self::from_entries(path, entries, height)
    }

    /// Build a navigator over an already known listing.
    pub fn from_entries(path: PathBuf, entries: Vec<Entry>, height: usize) -> Self {
        let mut state = Self {
            current_path: path,
            all_entries: entries,
            visible_entries: Vec::new(),
            cursor: ListCursor::new(height),
            mode: Mode::default(),
            search_query: String::new(),
            status: None,
        };
        state.apply_filter();
        state
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn all_entries(&self) -> &[Entry] {
        &self.all_entries
    }

    pub fn visible_entries(&self) -> &[Entry] {
        &self.visible_entries
    }

    pub fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    /// Index of the selected row in `visible_entries`.
    pub fn selected(&self) -> usize {
        self.cursor.selected()
    }

    /// First row of the scroll window.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// The entry under the cursor, if the listing is not empty.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.visible_entries.get(self.cursor.selected())
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up(1, self.visible_entries.len());
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(1, self.visible_entries.len());
    }

    pub fn page_up(&mut self) {
        self.cursor.move_up(PAGE_SIZE, self.visible_entries.len());
    }

    pub fn page_down(&mut self) {
        self.cursor.move_down(PAGE_SIZE, self.visible_entries.len());
    }

    pub fn jump_to_top(&mut self) {
        self.cursor.jump_to_top(self.visible_entries.len());
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor.jump_to_bottom(self.visible_entries.len());
    }

    /// Enter the selected directory.
    ///
    /// Files and an empty listing are no-ops. Returns whether the current
    /// directory changed. The status line is left alone.
    pub fn enter_selected(&mut self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        if !entry.is_dir() {
            return false;
        }

        let target = codedump_scan::resolve(&self.current_path, &entry.name);
        debug!(from = %self.current_path.display(), to = %target.display(), "entering directory");
        let entries = codedump_scan::list_entries(&target);
        self.change_directory(target, entries);
        true
    }

    /// Replace the current directory and its listing.
    ///
    /// Clears the query and resets the cursor.
    pub fn change_directory(&mut self, path: PathBuf, entries: Vec<Entry>) {
        self.current_path = path;
        self.all_entries = entries;
        self.search_query.clear();
        self.apply_filter();
    }

    /// Switch to search mode, keeping any existing query.
    pub fn enter_search(&mut self) {
        self.mode = Mode::Searching;
    }

    /// Leave search mode, keeping the query and the filtered view.
    pub fn finish_search(&mut self) {
        self.mode = Mode::Browsing;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.search_query.push(c);
        self.apply_filter();
    }

    pub fn pop_query_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.apply_filter();
        }
    }

    /// Drop the filter and the status line.
    pub fn clear_filter(&mut self) {
        self.search_query.clear();
        self.status = None;
        self.apply_filter();
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn quit(&mut self) {
        self.mode = Mode::Quit;
    }

    fn apply_filter(&mut self) {
        self.visible_entries = filter_entries(&self.all_entries, &self.search_query);
        self.cursor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn state_with(names: &[&str], height: usize) -> NavigatorState {
        let mut entries = vec![Entry::parent_ref()];
        entries.extend(names.iter().map(|n| Entry::file(*n)));
        NavigatorState::from_entries(PathBuf::from("/project"), entries, height)
    }

    #[test]
    fn test_initial_state() {
        let state = state_with(&["a", "b"], 18);
        assert_eq!(state.mode(), Mode::Browsing);
        assert_eq!(state.selected(), 0);
        assert_eq!(state.visible_entries(), state.all_entries());
        assert!(state.status().is_none());
    }

    #[test]
    fn test_query_resets_cursor() {
        let mut state = state_with(&["alpha", "beta", "gamma", "delta"], 2);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.selected(), 3);
        assert_eq!(state.offset(), 2);

        state.enter_search();
        state.push_query_char('a');
        assert_eq!(state.selected(), 0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_clear_restores_listing() {
        let mut state = state_with(&["alpha", "beta", "gamma"], 18);
        state.push_query_char('e');
        assert_ne!(state.visible_entries(), state.all_entries());

        state.clear_filter();
        assert_eq!(state.visible_entries(), state.all_entries());
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn test_backspace_on_empty_query() {
        let mut state = state_with(&["alpha"], 18);
        state.move_down();
        state.pop_query_char();
        // Nothing to remove, so the view and cursor are untouched
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn test_search_mode_preserves_query() {
        let mut state = state_with(&["alpha", "beta"], 18);
        state.enter_search();
        state.push_query_char('b');
        state.finish_search();
        assert_eq!(state.mode(), Mode::Browsing);
        assert_eq!(state.search_query(), "b");
        assert_eq!(state.visible_entries().len(), 2);

        state.enter_search();
        assert_eq!(state.search_query(), "b");
    }

    #[test]
    fn test_empty_listing_is_inert() {
        let mut state = NavigatorState::from_entries(PathBuf::from("/"), Vec::new(), 18);
        state.move_down();
        state.move_up();
        state.jump_to_bottom();
        state.page_down();
        assert_eq!(state.selected(), 0);
        assert!(!state.enter_selected());
        assert_eq!(state.current_path(), Path::new("/"));
    }

    #[test]
    fn test_enter_file_is_noop() {
        let mut state = state_with(&["notes.md"], 18);
        state.move_down();
        assert!(!state.enter_selected());
        assert_eq!(state.current_path(), Path::new("/project"));
    }

    #[test]
    fn test_enter_directory_and_back() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src").join("lib.rs"), "").unwrap();

        let mut state = NavigatorState::new(temp.path().to_path_buf());
        state.set_status(StatusMessage::success("kept"));
        state.push_query_char('s');
        let src_index = state
            .visible_entries()
            .iter()
            .position(|e| e.name == "src")
            .unwrap();
        for _ in 0..src_index {
            state.move_down();
        }

        assert!(state.enter_selected());
        assert_eq!(state.current_path(), temp.path().join("src"));
        assert_eq!(state.search_query(), "");
        assert_eq!(state.selected(), 0);
        assert!(state.visible_entries().iter().any(|e| e.name == "lib.rs"));
        assert_eq!(state.status(), Some(&StatusMessage::success("kept")));

        // `..` is first and leads back
        assert!(state.visible_entries()[0].is_parent_ref());
        assert!(state.enter_selected());
        assert_eq!(state.current_path(), temp.path());
    }

    #[test]
    fn test_unreadable_directory_keeps_parent_ref() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        let mut state = NavigatorState::from_entries(
            temp.path().to_path_buf(),
            vec![Entry::parent_ref(), Entry::directory("gone")],
            18,
        );
        state.move_down();

        assert!(state.enter_selected());
        assert_eq!(state.current_path(), gone);
        assert_eq!(state.visible_entries(), &[Entry::parent_ref()]);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Browsing.to_string(), "BROWSE");
        assert_eq!(Mode::Searching.to_string(), "SEARCH");
    }
}
