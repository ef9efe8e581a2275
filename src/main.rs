//! Roadie binary entry point.
//!
//! Exit codes: 0 on success, 1 when the test suite fails, the lint exit
//! code after a passing suite, and 2 for configuration or usage errors.

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use commands::{cmd_clean, cmd_test, cmd_version};

fn main() {
    let cli = Cli::parse();
    let code = run(cli);
    std::process::exit(code);
}

fn run(cli: Cli) -> i32 {
    let project = cli.project.as_deref();

    let result = match cli.command {
        Commands::Test {
            no_html,
            no_lint,
            args,
        } => cmd_test(
            project,
            no_html,
            no_lint,
            &args,
            cli.json,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Clean { dry_run, yes } => {
            cmd_clean(project, dry_run, yes, cli.json, cli.verbose, cli.quiet)
        }
        Commands::Version { bump, fresh } => {
            cmd_version(project, bump, fresh, cli.json, cli.verbose, cli.quiet)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({"type": "error", "message": format!("{err:#}")})
                );
            } else {
                eprintln!("error: {err:#}");
            }
            2
        }
    }
}
