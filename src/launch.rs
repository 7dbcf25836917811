//! Launches the installed tool with inherited stdio.

use crate::error::{DntxError, Result};
use crate::install::InstalledTool;
use crate::platform;
use crate::ui;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run the tool with `args` forwarded verbatim.
///
/// The child is spawned from an argument vector (no shell), so arguments
/// containing spaces or metacharacters reach it exactly as supplied. All
/// three standard streams are inherited, which keeps interactive tools and
/// streaming output working; the child runs to natural completion with no
/// timeout.
pub fn run(tool: &InstalledTool, tool_path: &Path, args: &[String]) -> Result<()> {
    let exe_path = tool_path.join(platform::with_exe_suffix(&tool.command));

    ui::info(&format!("Running {}...", tool.command));
    ui::verbose(&format!("Executable: {}", exe_path.display()));

    let mut cmd = Command::new(&exe_path);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    platform::apply_profile_env(&mut cmd);

    let status = cmd.status().map_err(|source| DntxError::ToolSpawn {
        path: exe_path.clone(),
        source,
    })?;

    if !status.success() {
        // Termination by signal carries no exit code.
        return Err(DntxError::ToolFailed {
            code: status.code().unwrap_or(1),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "tool", "#!/bin/sh\nexit 0\n");

        let tool = InstalledTool {
            command: "tool".to_string(),
        };
        assert!(run(&tool, dir.path(), &[]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn forwards_the_tool_exit_code() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "tool", "#!/bin/sh\nexit 3\n");

        let tool = InstalledTool {
            command: "tool".to_string(),
        };
        let err = run(&tool, dir.path(), &[]).unwrap_err();
        assert!(matches!(err, DntxError::ToolFailed { code: 3 }));
    }

    #[cfg(unix)]
    #[test]
    fn arguments_reach_the_tool_verbatim() {
        let dir = TempDir::new().unwrap();
        // Fails unless $1 arrives as a single argument, spaces intact.
        write_script(
            dir.path(),
            "tool",
            "#!/bin/sh\n[ \"$1\" = \"hello world; echo\" ] || exit 9\nexit 0\n",
        );

        let tool = InstalledTool {
            command: "tool".to_string(),
        };
        let args = vec!["hello world; echo".to_string()];
        assert!(run(&tool, dir.path(), &args).is_ok());
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let tool = InstalledTool {
            command: "absent".to_string(),
        };
        let err = run(&tool, dir.path(), &[]).unwrap_err();
        assert!(matches!(err, DntxError::ToolSpawn { .. }));
    }
}
