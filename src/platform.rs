//! Platform-specific executable naming and environment handling.

use std::collections::HashMap;
use std::env::consts::EXE_SUFFIX;
use std::process::Command;

/// Append the host platform's executable suffix (".exe" on Windows).
pub fn with_exe_suffix(command: &str) -> String {
    format!("{command}{EXE_SUFFIX}")
}

/// Strip the host platform's executable suffix from a directory entry,
/// yielding the logical command name.
pub fn strip_exe_suffix(file_name: &str) -> String {
    if EXE_SUFFIX.is_empty() {
        return file_name.to_string();
    }
    file_name
        .strip_suffix(EXE_SUFFIX)
        .unwrap_or(file_name)
        .to_string()
}

/// Fill in profile-derived environment variables that stripped-down Windows
/// shells sometimes omit. `USERPROFILE` is rebuilt from `HOMEDRIVE` +
/// `HOMEPATH`, and the AppData pair from `USERPROFILE`.
pub fn fill_missing_profile_vars(env: &mut HashMap<String, String>) {
    if !env.contains_key("USERPROFILE") {
        let drive = env.get("HOMEDRIVE").cloned();
        let home = env.get("HOMEPATH").cloned();
        if let (Some(drive), Some(home)) = (drive, home) {
            env.insert("USERPROFILE".to_string(), format!("{drive}{home}"));
        }
    }

    if let Some(profile) = env.get("USERPROFILE").cloned() {
        env.entry("APPDATA".to_string())
            .or_insert_with(|| format!("{profile}\\AppData\\Roaming"));
        env.entry("LOCALAPPDATA".to_string())
            .or_insert_with(|| format!("{profile}\\AppData\\Local"));
    }
}

/// Hand a child command the repaired environment. No-op off Windows.
pub fn apply_profile_env(cmd: &mut Command) {
    #[cfg(windows)]
    {
        let mut env: HashMap<String, String> = std::env::vars().collect();
        fill_missing_profile_vars(&mut env);
        cmd.envs(env);
    }
    #[cfg(not(windows))]
    {
        let _ = cmd;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exe_suffix_round_trip() {
        let file_name = with_exe_suffix("tool");
        assert_eq!(strip_exe_suffix(&file_name), "tool");
    }

    #[test]
    fn strip_leaves_unsuffixed_names_alone() {
        assert_eq!(strip_exe_suffix("tool"), "tool");
    }

    #[test]
    fn profile_vars_derived_from_home_drive_and_path() {
        let mut env = HashMap::new();
        env.insert("HOMEDRIVE".to_string(), "C:".to_string());
        env.insert("HOMEPATH".to_string(), "\\Users\\dev".to_string());

        fill_missing_profile_vars(&mut env);

        assert_eq!(
            env.get("USERPROFILE").map(String::as_str),
            Some("C:\\Users\\dev")
        );
        assert_eq!(
            env.get("APPDATA").map(String::as_str),
            Some("C:\\Users\\dev\\AppData\\Roaming")
        );
        assert_eq!(
            env.get("LOCALAPPDATA").map(String::as_str),
            Some("C:\\Users\\dev\\AppData\\Local")
        );
    }

    #[test]
    fn existing_profile_vars_are_untouched() {
        let mut env = HashMap::new();
        env.insert("USERPROFILE".to_string(), "D:\\Profiles\\ci".to_string());
        env.insert("APPDATA".to_string(), "D:\\Roaming".to_string());

        fill_missing_profile_vars(&mut env);

        assert_eq!(
            env.get("APPDATA").map(String::as_str),
            Some("D:\\Roaming")
        );
        assert_eq!(
            env.get("LOCALAPPDATA").map(String::as_str),
            Some("D:\\Profiles\\ci\\AppData\\Local")
        );
    }

    #[test]
    fn nothing_derived_without_home_parts() {
        let mut env = HashMap::new();
        env.insert("PATH".to_string(), "C:\\Windows".to_string());

        fill_missing_profile_vars(&mut env);

        assert!(!env.contains_key("USERPROFILE"));
        assert!(!env.contains_key("APPDATA"));
    }
}
