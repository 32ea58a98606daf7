//! UI components and widgets.

mod entry_list;
mod help;

pub use entry_list::EntryList;
pub use help::HelpOverlay;
