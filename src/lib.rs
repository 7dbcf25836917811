pub mod cli;
pub mod constants;
pub mod error;
pub mod install;
pub mod launch;
pub mod package;
pub mod platform;
pub mod scratch;
pub mod toolchain;
pub mod ui;

use clap::Parser;
use std::process::exit;

use crate::error::{DntxError, Result};
use crate::scratch::ScratchDir;

/// Run the dntx CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: mark cancellation and let the run unwind, so the
    //    scratch directory is still removed. The tool itself receives the
    //    same signal from the terminal's process group and exits on its own.
    ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & run
    let args = cli::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = execute(&args) {
        report(&e);
        exit(e.exit_code());
    }
}

/// Preflight, install and run, then release the scratch directory no matter
/// how the run went.
fn execute(args: &cli::Cli) -> Result<()> {
    toolchain::ensure_installed()?;

    let package = package::parse(&args.package_id);
    let mut scratch = ScratchDir::new()?;

    let result = install_and_run(&package, &scratch, &args.args);

    ui::info("Cleaning up...");
    if let Err(e) = scratch.remove() {
        ui::warning(&format!("Failed to remove scratch directory: {}", e));
    }

    if ui::is_interrupted() {
        return Err(DntxError::Interrupted);
    }

    result
}

fn install_and_run(
    package: &package::PackageReference,
    scratch: &ScratchDir,
    tool_args: &[String],
) -> Result<()> {
    let tool = install::install(package, scratch.path())?;
    launch::run(&tool, scratch.path(), tool_args)
}

fn report(err: &DntxError) {
    ui::error(&err.to_string());

    match err {
        DntxError::ToolchainMissing => {
            ui::hint(&format!(
                "Install the .NET SDK from {}",
                constants::DOTNET_DOWNLOAD_URL
            ));
        }
        DntxError::ToolNameResolution { output } if !output.is_empty() => {
            ui::hint(&format!("Installation output: {}", output));
        }
        _ => {}
    }
}
