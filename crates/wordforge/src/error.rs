use std::path::PathBuf;

use thiserror::Error;

/// Exit code for configuration and missing-input failures.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for output write failures.
pub const EXIT_WRITE: u8 = 3;

#[derive(Error, Debug)]
pub enum WordforgeError {
    #[error(
        "No input words and not including common list. Provide --words, --file, or --include-common."
    )]
    NoInput,

    #[error("File not found: {}", path.display())]
    SeedFileNotFound { path: PathBuf },

    #[error("Failed to read seed file {}: {source}", path.display())]
    SeedFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Error writing output {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordforgeError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            WordforgeError::NoInput
            | WordforgeError::SeedFileNotFound { .. }
            | WordforgeError::SeedFileRead { .. }
            | WordforgeError::InvalidConfig { .. } => EXIT_USAGE,
            WordforgeError::Write { .. } => EXIT_WRITE,
        }
    }
}
