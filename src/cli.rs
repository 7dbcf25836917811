//! Command-line definitions.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "dntx",
    about = "Temporarily install and run a .NET tool",
    version,
    term_width = 80
)]
pub struct Cli {
    /// NuGet package ID of the tool, optionally with a version (e.g. package-id@1.2.3)
    #[arg(value_name = "package-id")]
    pub package_id: String,

    /// Arguments passed through unchanged to the installed tool
    #[arg(value_name = "args", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub global: GlobalFlags,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
