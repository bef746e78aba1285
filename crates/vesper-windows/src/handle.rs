//! Window identity and handle values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifier of a live window, assigned by the registry.
///
/// Unique per open window; dangles once the window closes. Holders must
/// expect resolution to fail at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of an open window as the registry exposes it.
///
/// The registry owns the window itself; a handle is only held for the
/// duration of a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowHandle {
    pub id: WindowId,
    /// Workspace the window has open, if any
    pub workspace_path: Option<PathBuf>,
    /// Files queued to open once the renderer is ready
    pub files_to_open: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_id_display() {
        assert_eq!(WindowId(42).to_string(), "42");
    }
}
