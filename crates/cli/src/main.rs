//! bpname CLI - function breakpoint names for C# members

use bpname_cli::{commands, logging, Cli, Commands};
use clap::Parser;
use colored::Colorize;

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Name {
            ref file,
            line,
            column,
        } => commands::name::run(file, line as usize, column as usize, &cli),
        Commands::List { ref path } => commands::list::run(path.as_deref(), &cli),
        Commands::Init { ref path } => commands::init::run(path.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}
