//! VESPER Environment
//!
//! Launch context of the running process: the arguments the process was
//! started with and the platform directories derived from them. Parsing the
//! command line is the launcher's job; this crate only carries the result.

mod args;
mod service;

pub use args::CliArguments;
pub use service::EnvironmentService;
