//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for frameseq using the `clap` crate.
//!
//! # Commands
//!
//! - **parse**: Show how a filename splits into sequence pieces
//! - **ls**: List the member paths of a sequence
//! - **mv** / **cp**: Move or copy every member into a directory
//! - **rename**: Rename every member in place
//! - **rm**: Delete every member
//! - **chmod**: Change permissions of every member
//! - **config**: Inspect and change settings
//!
//! Sequence commands take a template path. The frame range comes from
//! `--start`/`--end` or from the numbers in the template itself
//! (`shot.[0001-0100].exr`); `--single` treats the path as a plain file.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use frameseq::cli::{Cli, Commands};
//!
//! let args = ["frameseq", "cp", "shot.####.exr", "/backup", "-s", "1", "-e", "10"];
//! let cli = Cli::parse_from(args);
//! assert!(matches!(cli.command, Commands::Cp { .. }));
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "frameseq")]
#[command(about = "Bulk file operations on numbered file sequences", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress per-member output (only print errors and results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Frame range selection shared by sequence commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeArgs {
    /// First frame (defaults to the start embedded in the template)
    #[arg(short = 's', long = "start", value_name = "FRAME", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last frame, inclusive (defaults to the end embedded in the template)
    #[arg(short = 'e', long = "end", value_name = "FRAME", allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Treat the path as a single file rather than a sequence
    #[arg(long = "single", conflicts_with_all = ["start", "end"])]
    pub single: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the sequence pieces of a filename
    #[command(visible_alias = "p")]
    Parse {
        /// Filename or path to parse
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List member paths and whether each exists
    Ls {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Move every member into a directory
    #[command(visible_alias = "move")]
    Mv {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        #[arg(value_name = "DEST_DIR")]
        dest: PathBuf,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Copy every member into a directory
    #[command(visible_alias = "copy")]
    Cp {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        #[arg(value_name = "DEST_DIR")]
        dest: PathBuf,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Rename every member in place (e.g. `new.####.exr`, `new.0200.exr`, `new.exr`)
    #[command(visible_alias = "ren")]
    Rename {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        #[arg(value_name = "NEW_NAME")]
        new_name: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Delete every member
    #[command(visible_alias = "delete")]
    Rm {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        #[command(flatten)]
        range: RangeArgs,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Set the permission mode of every member
    Chmod {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Octal mode, e.g. 644 or 0o755
        #[arg(value_name = "MODE", value_parser = parse_mode)]
        mode: u32,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Manage configuration settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., confirm_delete)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter directive implied by `-v` flags
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parse an octal permission mode (`644`, `0644`, `0o644`).
///
/// # Errors
/// Returns a message when the value is not octal or exceeds `0o7777`.
pub fn parse_mode(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0o").unwrap_or(s);
    let mode = u32::from_str_radix(digits, 8).map_err(|_| format!("'{s}' is not an octal mode"))?;
    if mode > 0o7777 {
        return Err(format!("mode '{s}' is out of range (max 7777)"));
    }
    Ok(mode)
}
