//! Window Command Service
//!
//! Routes identifier-addressed commands from client contexts onto the
//! window registry. Every window-scoped command has the same shape:
//! resolve the identifier once, act only on a hit. A window that closed
//! between the client issuing a command and the lookup executing turns the
//! command into a no-op (or the documented empty payload), never an error.

use std::path::PathBuf;
use std::sync::Arc;

use vesper_environment::EnvironmentService;

use crate::handle::WindowId;
use crate::registry::{OpenOptions, PickerKind, RecentPaths, WindowRegistry};
use crate::Result;

/// Dispatcher for window commands.
///
/// Stateless between calls; which windows exist lives entirely in the
/// registry. Holds no locks and does no I/O of its own — callers suspend
/// only while a delegated registry operation settles.
pub struct WindowCommandService {
    registry: Arc<dyn WindowRegistry>,
    environment: Arc<EnvironmentService>,
}

impl WindowCommandService {
    pub fn new(registry: Arc<dyn WindowRegistry>, environment: Arc<EnvironmentService>) -> Self {
        Self {
            registry,
            environment,
        }
    }

    pub async fn open_file_folder_picker(&self, force_new_window: bool) -> Result<()> {
        self.registry
            .open_picker(PickerKind::FileFolder, force_new_window, None)
            .await
    }

    pub async fn open_file_picker(
        &self,
        force_new_window: bool,
        path: Option<PathBuf>,
    ) -> Result<()> {
        self.registry
            .open_picker(PickerKind::File, force_new_window, path.as_deref())
            .await
    }

    pub async fn open_folder_picker(&self, force_new_window: bool) -> Result<()> {
        self.registry
            .open_picker(PickerKind::Folder, force_new_window, None)
            .await
    }

    pub async fn reload_window(&self, window_id: WindowId) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            self.registry.reload(&window).await?;
        }

        Ok(())
    }

    pub async fn open_devtools(&self, window_id: WindowId) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            self.registry.open_devtools(&window).await?;
        }

        Ok(())
    }

    pub async fn toggle_devtools(&self, window_id: WindowId) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            self.registry.toggle_devtools(&window).await?;
        }

        Ok(())
    }

    /// Reopen the window with an empty workspace, keeping the launch
    /// arguments of the running process.
    pub async fn close_folder(&self, window_id: WindowId) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            tracing::info!(window_id = %window.id, "reopening window with empty workspace");

            self.registry
                .open(OpenOptions {
                    cli: self.environment.args().clone(),
                    force_empty: true,
                    window_to_use: Some(window),
                    ..Default::default()
                })
                .await?;
        }

        Ok(())
    }

    pub async fn toggle_fullscreen(&self, window_id: WindowId) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            self.registry.toggle_fullscreen(&window).await?;
        }

        Ok(())
    }

    pub async fn set_represented_filename(
        &self,
        window_id: WindowId,
        file_name: String,
    ) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            self.registry
                .set_represented_filename(&window, &file_name)
                .await?;
        }

        Ok(())
    }

    /// Recent files and folders scoped to the window's workspace and its
    /// pending files. An unresolvable window yields empty lists.
    pub async fn get_recently_opened(&self, window_id: WindowId) -> Result<RecentPaths> {
        if let Some(window) = self.registry.resolve(window_id).await {
            return self
                .registry
                .recent_paths(window.workspace_path.as_deref(), &window.files_to_open)
                .await;
        }

        Ok(RecentPaths::default())
    }

    pub async fn focus_window(&self, window_id: WindowId) -> Result<()> {
        if let Some(window) = self.registry.resolve(window_id).await {
            self.registry.focus(&window).await?;
        }

        Ok(())
    }

    pub async fn open_paths(&self, paths: Vec<PathBuf>, force_new_window: bool) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        tracing::info!(count = paths.len(), force_new_window, "opening paths");

        self.registry
            .open(OpenOptions {
                cli: self.environment.args().clone(),
                paths_to_open: paths,
                force_new_window,
                ..Default::default()
            })
            .await
    }

    pub async fn open_new_window(&self) -> Result<()> {
        self.registry.open_new_window().await
    }
}
