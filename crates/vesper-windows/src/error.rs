//! Window service error types

use thiserror::Error;

/// Failures surfaced by the window registry.
///
/// An unresolvable window identifier is not an error anywhere in this crate;
/// these variants cover faults inside delegated registry operations only.
#[derive(Error, Debug)]
pub enum WindowsError {
    #[error("Native window operation failed: {0}")]
    Native(String),

    #[error("Picker dialog failed: {0}")]
    Picker(String),

    #[error("Window open request failed: {0}")]
    Open(String),
}
