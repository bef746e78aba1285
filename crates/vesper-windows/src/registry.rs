//! Window registry interface
//!
//! The registry is the process-wide owner of all live windows and their
//! lifecycle. This crate never creates or destroys windows; it consumes the
//! registry through this trait, injected at construction so tests can
//! substitute a fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vesper_environment::CliArguments;

use crate::handle::{WindowHandle, WindowId};
use crate::Result;

/// Which native picker dialog to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerKind {
    /// Combined file-or-folder picker (macOS style)
    FileFolder,
    File,
    Folder,
}

/// An open request against the registry.
///
/// `window_to_use` repurposes an existing window instead of spawning one;
/// `force_empty` opens it with no workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenOptions {
    pub cli: CliArguments,
    pub force_empty: bool,
    pub paths_to_open: Vec<PathBuf>,
    pub force_new_window: bool,
    pub window_to_use: Option<WindowHandle>,
}

/// Recently opened paths scoped to one window's workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPaths {
    pub files: Vec<PathBuf>,
    pub folders: Vec<PathBuf>,
}

/// Operations the window registry exposes to the command service.
///
/// `resolve` is the only way to reach a window: absence is an expected
/// outcome, not an error. The side-effecting operations can fault inside
/// the registry and report that through their `Result`.
#[async_trait]
pub trait WindowRegistry: Send + Sync {
    /// Look up a live window by identifier.
    async fn resolve(&self, window_id: WindowId) -> Option<WindowHandle>;

    /// Reload the window's contents.
    async fn reload(&self, window: &WindowHandle) -> Result<()>;

    async fn toggle_fullscreen(&self, window: &WindowHandle) -> Result<()>;

    /// Bring the window to the foreground and give it input focus.
    async fn focus(&self, window: &WindowHandle) -> Result<()>;

    /// Set the OS-level represented-file marker on the window.
    async fn set_represented_filename(&self, window: &WindowHandle, file_name: &str) -> Result<()>;

    async fn open_devtools(&self, window: &WindowHandle) -> Result<()>;

    async fn toggle_devtools(&self, window: &WindowHandle) -> Result<()>;

    /// Present a native picker dialog, seeded with `seed_path` if given.
    async fn open_picker(
        &self,
        kind: PickerKind,
        force_new_window: bool,
        seed_path: Option<&Path>,
    ) -> Result<()>;

    /// Open paths into windows per `options`.
    async fn open(&self, options: OpenOptions) -> Result<()>;

    /// Create a window with no initial content.
    async fn open_new_window(&self) -> Result<()>;

    /// Recent files and folders scoped to a workspace and its pending files.
    async fn recent_paths(
        &self,
        workspace_path: Option<&Path>,
        pending_files: &[PathBuf],
    ) -> Result<RecentPaths>;
}
