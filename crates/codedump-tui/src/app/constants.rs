//! Application constants.

/// Number of list rows in the scroll window.
pub const VIEWPORT_HEIGHT: usize = 18;

/// Number of items to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;
