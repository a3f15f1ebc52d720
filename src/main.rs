//! baseline-scanner CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use baseline_scanner::cli::{Cli, Commands};
use baseline_scanner::commands::{run_lookup, run_scan, CommandContext, CommandOutput};
use baseline_scanner::ScannerConfig;

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output.text);
            if output.failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> baseline_scanner::Result<CommandOutput> {
    let cli = Cli::parse();
    let config = ScannerConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level);

    let ctx = CommandContext::new(cli.format, config).with_dataset(cli.dataset.clone());

    match &cli.command {
        Commands::Scan(args) => run_scan(args, &ctx),
        Commands::Lookup(args) => run_lookup(args, &ctx),
    }
}

/// Logs go to stderr so stdout stays clean for reports
fn init_logging(level: &str) {
    let directive: Result<Directive, _> = format!("baseline_scanner={}", level)
        .parse()
        .or_else(|_| "baseline_scanner=info".parse());

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
