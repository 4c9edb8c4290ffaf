//! idun-sh - command-line front end for the idun shell extension.
//!
//! One invocation dispatches one command: the enclosing shell's
//! functions and its command-not-found hook both funnel through here.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use idun_kernel::{detect_context, Config, Shell};

#[derive(Parser)]
#[command(
    name = "idun-sh",
    version,
    about = "Drive an Idun-cartridge Commodore from a Linux shell",
    arg_required_else_help = true
)]
struct Cli {
    /// Command to dispatch: a built-in (mount, show, run, dir, catalog,
    /// fcd, ff, recache, cache-info, complete) or an unresolved name
    /// from the enclosing shell's not-found hook
    command: String,

    /// Arguments passed through unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let context = detect_context();
    tracing::debug!(?context, command = %cli.command, "dispatching");

    let mut shell = match Shell::new(config, context) {
        Ok(shell) => shell,
        Err(err) => {
            eprintln!("idun-sh: {err}");
            std::process::exit(1);
        }
    };
    std::process::exit(shell.dispatch(&cli.command, &cli.args));
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
