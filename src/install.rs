//! Tool installation and executable-name resolution.
//!
//! `dotnet tool install` does not reliably name the executable it wrote, so
//! the scratch directory's contents are the primary signal and the install
//! output text is the fallback.

use crate::constants::DOTNET_PROGRAM;
use crate::error::{DntxError, Result};
use crate::package::PackageReference;
use crate::platform;
use crate::ui;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

/// Install-output phrase naming the tool command, e.g.
/// "You can invoke the tool using the following command: botsay".
static TOOL_COMMAND_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:You can invoke the tool using the following command:|has the following commands:)\s+(\S+)",
    )
    .expect("Invalid regex pattern")
});

/// Documentation and metadata extensions ignored by the executable heuristic
static DOC_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:md|txt|json|config)$").expect("Invalid regex pattern"));

/// Documentation file names ignored by the executable heuristic
static DOC_BASENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:readme|license|notice)").expect("Invalid regex pattern"));

/// A freshly installed tool, identified by its directory-local command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledTool {
    pub command: String,
}

/// Install `package` into `tool_path` and resolve the executable it produced.
///
/// The install is never retried; a non-zero exit from `dotnet` is terminal
/// for the run. Diagnostic text next to a zero exit is only a warning, the
/// exit code is authoritative.
pub fn install(package: &PackageReference, tool_path: &Path) -> Result<InstalledTool> {
    match &package.version {
        Some(version) => ui::info(&format!(
            "Installing {} (version {})...",
            package.name, version
        )),
        None => ui::info(&format!("Installing {}...", package.name)),
    }

    let mut cmd = Command::new(DOTNET_PROGRAM);
    cmd.arg("tool")
        .arg("install")
        .arg("--tool-path")
        .arg(tool_path)
        .arg(&package.name);
    if let Some(version) = &package.version {
        cmd.arg("--version").arg(version);
    }
    platform::apply_profile_env(&mut cmd);

    ui::verbose(&format!("Running {:?}", cmd));

    let output = cmd.output().map_err(|e| DntxError::InstallFailed {
        package: package.name.clone(),
        details: e.to_string(),
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        let details = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(DntxError::InstallFailed {
            package: package.name.clone(),
            details,
        });
    }

    if !stderr.trim().is_empty() {
        ui::warning(&format!(
            "Warning during tool installation: {}",
            stderr.trim()
        ));
    }

    let command = resolve_tool_command(tool_path, &stdout)?;
    ui::success("Tool installed successfully");

    Ok(InstalledTool { command })
}

/// Work out which directory entry is the runnable tool.
///
/// A single entry wins outright. With several entries, documentation and
/// metadata files are dropped first and a unique survivor wins. Anything
/// else falls back to scanning the install output for the command phrase;
/// a name is never guessed.
fn resolve_tool_command(tool_path: &Path, install_output: &str) -> Result<String> {
    match list_entries(tool_path) {
        Ok(entries) => {
            if entries.len() == 1 {
                return Ok(platform::strip_exe_suffix(&entries[0]));
            }
            if entries.len() > 1 {
                let candidates: Vec<&String> = entries
                    .iter()
                    .filter(|name| !DOC_EXTENSION.is_match(name) && !DOC_BASENAME.is_match(name))
                    .collect();
                if candidates.len() == 1 {
                    return Ok(platform::strip_exe_suffix(candidates[0]));
                }
            }
        }
        Err(e) => {
            ui::warning(&format!(
                "Could not inspect tool directory: {}, falling back to output parsing",
                e
            ));
        }
    }

    TOOL_COMMAND_PHRASE
        .captures(install_output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| DntxError::ToolNameResolution {
            output: install_output.trim().to_string(),
        })
}

fn list_entries(tool_path: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(tool_path)? {
        entries.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(entries)
}
