//! Scrolling directory listing widget.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Widget};

use codedump_core::Entry;

use crate::app::navigation::ListCursor;
use crate::theme::Theme;

const POINTER: &str = "> ";
const NO_POINTER: &str = "  ";

/// Renders the rows of a listing that fall inside the cursor's window.
pub struct EntryList<'a> {
    entries: &'a [Entry],
    cursor: &'a ListCursor,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> EntryList<'a> {
    pub fn new(entries: &'a [Entry], cursor: &'a ListCursor, theme: &'a Theme) -> Self {
        Self {
            entries,
            cursor,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn entry_style(&self, entry: &Entry) -> Style {
        if entry.symlink {
            self.theme.symlink
        } else if entry.is_dir() {
            self.theme.directory
        } else {
            self.theme.file
        }
    }

    fn row(&self, entry: &Entry, selected: bool) -> Line<'a> {
        let label = if entry.is_dir() && !entry.is_parent_ref() {
            format!("{}/", entry.name)
        } else {
            entry.name.to_string()
        };

        if selected {
            Line::from(vec![
                Span::styled(POINTER, self.theme.selected),
                Span::styled(label, self.theme.selected),
            ])
        } else {
            Line::from(vec![
                Span::raw(NO_POINTER),
                Span::styled(label, self.entry_style(entry)),
            ])
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.entries.is_empty() {
            let line = Line::styled("  (empty)", Style::default().fg(self.theme.muted));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let range = window(self.cursor, self.entries.len(), inner.height as usize);
        for (row, index) in range.enumerate() {
            let y = inner.y + row as u16;
            let line = self.row(&self.entries[index], index == self.cursor.selected());
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

/// Rows to draw when the area may be shorter than the cursor's window.
///
/// Follows the cursor's offset, shifted down just enough that the selected
/// row stays on screen.
fn window(cursor: &ListCursor, len: usize, rows: usize) -> Range<usize> {
    let range = cursor.visible_range(len);
    let rows = rows.min(cursor.height()).max(1);
    let mut start = range.start;
    if cursor.selected() >= start + rows {
        start = cursor.selected() + 1 - rows;
    }
    start..(start + rows).min(range.end)
}
