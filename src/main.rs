//! Frameseq CLI application entry point
//!
//! Command-line front end for bulk operations on numbered file sequences.
//!
//! # Usage
//!
//! ```bash
//! # Inspect how a filename is split
//! frameseq parse shot.[0001-0100].exr
//!
//! # List members, taking the range from the template
//! frameseq ls /renders/shot.[0001-0100].exr
//!
//! # Copy frames 1-100 of a placeholder template
//! frameseq cp /renders/shot.####.exr /backup --start 1 --end 100
//!
//! # Re-base a sequence to start at frame 1001
//! frameseq rename /renders/shot.[0001-0100].exr shot.1001.exr
//!
//! # Delete without the confirmation prompt
//! frameseq rm /renders/shot.[0001-0100].exr -y
//!
//! # Quiet mode (only output results)
//! frameseq -q mv /renders/shot.[0001-0100].exr /archive
//! ```
//!
//! # Configuration
//!
//! Settings live in `<config dir>/frameseq/config.toml`; see `frameseq config`.
//! Logging goes to stderr and is controlled by `FRAMESEQ_LOG` (or `RUST_LOG`)
//! and the `-v` flags.

use frameseq::{
    FrameseqError,
    cli::{Cli, Commands},
    commands,
    config::FrameseqConfig,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, FrameseqError>;

/// Initialize stderr logging.
///
/// `-v` flags take precedence; otherwise `FRAMESEQ_LOG`, then `RUST_LOG`,
/// then `warn`.
fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose > 0 {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_env("FRAMESEQ_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

/// Main entry point for the frameseq application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `FrameseqError` if configuration loading fails or the command fails.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    let config = FrameseqConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Parse { name } => commands::parse(name, quiet),
        Commands::Ls { template, range } => commands::ls(template, range, quiet),
        Commands::Mv { template, dest, range } => {
            commands::mv(template, dest, range, &config, quiet)
        }
        Commands::Cp { template, dest, range } => {
            commands::cp(template, dest, range, &config, quiet)
        }
        Commands::Rename { template, new_name, range } => {
            commands::rename(template, new_name, range, quiet)
        }
        Commands::Rm { template, range, yes } => {
            commands::rm(template, range, *yes, &config, quiet)
        }
        Commands::Chmod { template, mode, range } => commands::chmod(template, *mode, range, quiet),
        Commands::Config(command) => commands::config(config, command, quiet),
    }
}
