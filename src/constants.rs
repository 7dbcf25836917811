// Common constants used throughout the codebase

/// External toolchain binary every run depends on
pub const DOTNET_PROGRAM: &str = "dotnet";

/// Shown when the preflight probe fails
pub const DOTNET_DOWNLOAD_URL: &str = "https://dotnet.microsoft.com/download";

/// Prefix for the per-run scratch directory
pub const SCRATCH_DIR_PREFIX: &str = "dntx-";
