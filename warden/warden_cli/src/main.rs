use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

use commands::{CheckArgs, ListArgs, ParseArgs, ResolveArgs, ValidateArgs};

/// Warden Command Line Interface
///
/// Inspect permission strings, evaluate checks and validate role catalogs.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a permission string into scope, resource and action
    Parse(ParseArgs),

    /// List every valid permission string
    List(ListArgs),

    /// Check granted permissions against required permissions
    Check(CheckArgs),

    /// Validate a role catalog
    Validate(ValidateArgs),

    /// Print the permissions a principal holds in a tenant or scenario
    Resolve(ResolveArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: failed to install log subscriber: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Parse(args) => commands::execute_parse(args),
        Commands::List(args) => commands::execute_list(args),
        Commands::Check(args) => commands::execute_check(args),
        Commands::Validate(args) => commands::execute_validate(args),
        Commands::Resolve(args) => commands::execute_resolve(args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
