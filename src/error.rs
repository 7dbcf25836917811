use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DntxError {
    #[error(".NET SDK is not installed or not found in PATH")]
    ToolchainMissing,

    #[error("Failed to install {package}: {details}")]
    InstallFailed { package: String, details: String },

    #[error("Could not determine the tool command name")]
    ToolNameResolution { output: String },

    #[error("Failed to start '{path}': {source}")]
    ToolSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Tool exited with code {code}")]
    ToolFailed { code: i32 },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DntxError {
    /// Process exit status for this failure. A tool that ran and failed
    /// keeps its own exit code; everything else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DntxError::ToolFailed { code } => *code,
            DntxError::Interrupted => 130,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DntxError>;
