//! Cursor and scroll window for the entry list.

use std::ops::Range;

/// Selection and scroll offset over a list viewed through a fixed-height
/// window.
///
/// After every movement `offset <= selected < offset + height`. The window
/// scrolls only as far as needed to keep the selection visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCursor {
    selected: usize,
    offset: usize,
    height: usize,
}

impl ListCursor {
    /// Create a cursor for a window of `height` rows (at least one).
    pub fn new(height: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            height: height.max(1),
        }
    }

    /// Currently selected index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Go back to the first row.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Move selection up by `count` items.
    pub fn move_up(&mut self, count: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(count);
        self.ensure_visible();
    }

    /// Move selection down by `count` items, stopping at the last one.
    pub fn move_down(&mut self, count: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add(count).min(len - 1);
        self.ensure_visible();
    }

    /// Jump to the first item.
    pub fn jump_to_top(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = 0;
        self.ensure_visible();
    }

    /// Jump to the last item.
    pub fn jump_to_bottom(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = len - 1;
        self.ensure_visible();
    }

    /// Indices of the rows inside the window.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + self.height).min(len);
        start..end
    }

    fn ensure_visible(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.height {
            self.offset = self.selected - self.height + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_window(cursor: &ListCursor) {
        assert!(cursor.offset() <= cursor.selected());
        assert!(cursor.selected() <= cursor.offset() + cursor.height() - 1);
    }

    #[test]
    fn test_move_clamps() {
        let mut cursor = ListCursor::new(5);
        cursor.move_up(1, 10);
        assert_eq!(cursor.selected(), 0);

        cursor.move_down(100, 10);
        assert_eq!(cursor.selected(), 9);
        assert_eq!(cursor.offset(), 5);
    }

    #[test]
    fn test_minimal_scroll() {
        let mut cursor = ListCursor::new(3);
        for _ in 0..3 {
            cursor.move_down(1, 10);
        }
        // Selection at 3 pushes the window by exactly one row
        assert_eq!(cursor.selected(), 3);
        assert_eq!(cursor.offset(), 1);

        cursor.move_up(1, 10);
        cursor.move_up(1, 10);
        assert_eq!(cursor.selected(), 1);
        assert_eq!(cursor.offset(), 1);

        cursor.move_up(1, 10);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_window_invariant_for_move_sequences() {
        let len = 37;
        for height in [1, 2, 5, 18, 40] {
            let mut cursor = ListCursor::new(height);
            // Deterministic pseudo-random walk over up/down moves
            let mut seed: u32 = 0x9e37_79b9 ^ height as u32;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 3 == 0 {
                    cursor.move_up(1, len);
                } else {
                    cursor.move_down(1, len);
                }
                assert_window(&cursor);
                assert!(cursor.selected() < len);
            }
        }
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut cursor = ListCursor::new(4);
        cursor.move_down(1, 0);
        cursor.move_up(1, 0);
        cursor.jump_to_bottom(0);
        assert_eq!(cursor.selected(), 0);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.visible_range(0), 0..0);
    }

    #[test]
    fn test_jumps_and_visible_range() {
        let mut cursor = ListCursor::new(4);
        cursor.jump_to_bottom(10);
        assert_eq!(cursor.selected(), 9);
        assert_eq!(cursor.visible_range(10), 6..10);

        cursor.jump_to_top(10);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.visible_range(10), 0..4);
        assert_eq!(cursor.visible_range(2), 0..2);
    }

    #[test]
    fn test_zero_height_is_clamped() {
        let mut cursor = ListCursor::new(0);
        assert_eq!(cursor.height(), 1);
        cursor.move_down(1, 3);
        assert_eq!(cursor.offset(), 1);
    }
}
