//! Revealing a directory in the platform file manager.

use std::path::Path;

/// Opens a directory in a file manager.
///
/// The navigator calls this after a successful collection. Failures are
/// reported back but never surfaced as errors to the user.
pub trait Reveal {
    /// Reveal `path`. Returns a human-readable reason on failure.
    fn reveal(&self, path: &Path) -> Result<(), String>;
}

/// Reveals paths with the system default handler (`open`, `xdg-open`,
/// `explorer`), without waiting for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Reveal for SystemOpener {
    fn reveal(&self, path: &Path) -> Result<(), String> {
        open::that_detached(path).map_err(|e| format!("Failed to open with system: {e}"))
    }
}
