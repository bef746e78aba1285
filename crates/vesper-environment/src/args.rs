//! Parsed launch arguments

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments the process was launched with, as handed over by the launcher.
///
/// Window-level code treats this as an opaque payload: it is threaded into
/// registry open requests unchanged, so a reopened window inherits the exact
/// launch context of the running process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliArguments {
    /// Workspace or file paths requested on the command line
    pub paths: Vec<PathBuf>,
    /// Force a new window for the requested paths
    pub new_window: bool,
    /// Reuse the most recent window for the requested paths
    pub reuse_window: bool,
    /// Keep the launching terminal attached until the window closes
    pub wait: bool,
    /// Verbose diagnostics requested
    pub verbose: bool,
}
