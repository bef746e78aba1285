//! Environment service

use std::path::{Path, PathBuf};

use crate::args::CliArguments;

/// Process-wide launch context, injected into services that need to spawn
/// or repurpose windows with the arguments of the running process.
pub struct EnvironmentService {
    args: CliArguments,
    data_dir: PathBuf,
}

impl EnvironmentService {
    pub fn new(args: CliArguments) -> Self {
        Self {
            args,
            data_dir: Self::default_data_dir(),
        }
    }

    /// Override the data directory, e.g. for portable installs.
    pub fn with_data_dir(args: CliArguments, data_dir: PathBuf) -> Self {
        Self { args, data_dir }
    }

    /// The arguments the process was launched with
    pub fn args(&self) -> &CliArguments {
        &self.args
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("VESPER"))
            .unwrap_or_else(|| PathBuf::from(".vesper"))
    }
}

// Simple dirs implementation for the platform data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_kept_verbatim() {
        let args = CliArguments {
            paths: vec![PathBuf::from("/work/project")],
            reuse_window: true,
            ..Default::default()
        };

        let env = EnvironmentService::new(args.clone());
        assert_eq!(env.args(), &args);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let env = EnvironmentService::with_data_dir(
            CliArguments::default(),
            PathBuf::from("/tmp/vesper-portable"),
        );
        assert_eq!(env.data_dir(), Path::new("/tmp/vesper-portable"));
    }
}
