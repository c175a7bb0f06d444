//! bpname CLI library, exposed for integration tests

pub mod commands;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bpname")]
#[command(about = "Function breakpoint names for C# members", long_about = None)]
#[command(version = bpname_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored status output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the breakpoint name of the member under a caret position
    Name {
        /// C# source file
        file: PathBuf,

        /// 1-based caret line
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        line: u64,

        /// 1-based caret column
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        column: u64,
    },

    /// Print the breakpoint names of every method, constructor and accessor
    List {
        /// File or directory to scan (default: current directory)
        path: Option<PathBuf>,
    },

    /// Initialize .bpname.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Command-line flag first, then the config file value
    pub fn resolve(flag: Option<OutputFormat>, config: &bpname_core::BpnameConfig) -> Self {
        if let Some(format) = flag {
            return format;
        }
        match config.output.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}
