//! VESPER Core
//!
//! Coordination layer for the VESPER editor: the surface the application
//! shell builds against. The shell supplies the live `WindowRegistry`; the
//! rest of the window command machinery is re-exported from here.

mod error;

pub use error::CoreError;

pub use vesper_environment::{CliArguments, EnvironmentService};
pub use vesper_windows::{
    OpenOptions, PickerKind, RecentPaths, WindowCommandService, WindowHandle, WindowId,
    WindowRegistry, WindowsError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
