//! .NET SDK preflight.

use crate::constants::DOTNET_PROGRAM;
use crate::error::{DntxError, Result};
use std::process::Command;

/// Whether the `dotnet` binary is reachable through PATH at all.
pub fn is_available() -> bool {
    which::which(DOTNET_PROGRAM).is_ok()
}

/// Probe the SDK by running `dotnet --version`.
///
/// A zero exit is the only success signal; the probe's output is discarded.
/// Failure here is terminal for the whole run, so the caller is expected to
/// print the install hint and exit.
pub fn ensure_installed() -> Result<()> {
    if !is_available() {
        return Err(DntxError::ToolchainMissing);
    }

    let output = Command::new(DOTNET_PROGRAM)
        .arg("--version")
        .output()
        .map_err(|_| DntxError::ToolchainMissing)?;

    if !output.status.success() {
        return Err(DntxError::ToolchainMissing);
    }

    Ok(())
}
