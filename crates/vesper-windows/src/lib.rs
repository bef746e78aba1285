//! VESPER Window Service
//!
//! Main-process window command routing. Client contexts address live windows
//! by numeric identifier; the registry owns the windows themselves. This
//! crate defines the registry interface and the command service that routes
//! identifier-addressed commands onto it.

mod error;
mod handle;
mod registry;
mod service;

pub use error::WindowsError;
pub use handle::{WindowHandle, WindowId};
pub use registry::{OpenOptions, PickerKind, RecentPaths, WindowRegistry};
pub use service::WindowCommandService;

pub type Result<T> = std::result::Result<T, WindowsError>;
