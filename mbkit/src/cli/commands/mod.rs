use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::transform::DEFAULT_PREFIX;
use crate::transform::upsert::DEFAULT_RESPAWN_TIME;

pub mod execute;
pub mod rename;
pub mod transform;

/// Where a command runs and how much it prints
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// File or directory to process
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Suppress the progress bar and log warnings only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert leading spaces to tabs, strip trailing whitespace and compact blank lines
    Beautify {
        #[command(flatten)]
        target: TargetArgs,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
        tab_width: u16,

        /// Delete every blank line instead of collapsing runs
        #[arg(long)]
        no_blank_lines: bool,

        /// JSON list of file names to skip (created empty if missing)
        #[arg(long)]
        ignore_file: Option<PathBuf>,

        /// Process every file, not only .mbch and .mbtc
        #[arg(long)]
        all_files: bool,

        /// Do not wait for confirmation after creating the ignore file
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace doubled tabs with single tabs in .mbch files
    CollapseTabs {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Remove one tab of indentation inside { } blocks of .mbch files
    StripIndent {
        #[command(flatten)]
        target: TargetArgs,

        /// Track nested blocks instead of a single inside/outside state
        #[arg(long)]
        nested: bool,
    },

    /// Prefix .mbch and .mbtc file names and fix references to them
    Rename {
        #[command(flatten)]
        target: TargetArgs,

        /// Prefix to add
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
    },

    /// Add the custom build fragment to `ClassInfo` in .mbch files
    InjectBuild {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Delete unset attribute triplets from .mbch files
    RemoveInvalid {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Renumber attribute triplets in .mbch files
    Renumber {
        #[command(flatten)]
        target: TargetArgs,

        /// Settings file (created with defaults if missing)
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Set `respawnCustomTime` inside `ClassInfo` in .mbch files
    RespawnTime {
        #[command(flatten)]
        target: TargetArgs,

        /// Value to set
        #[arg(long, default_value = DEFAULT_RESPAWN_TIME)]
        value: String,
    },

    /// Replace every description value with "" in .mbch files
    ResetDesc {
        #[command(flatten)]
        target: TargetArgs,
    },
}

impl Commands {
    /// Path and verbosity shared by every command
    #[must_use]
    pub fn target(&self) -> &TargetArgs {
        match self {
            Commands::Beautify { target, .. }
            | Commands::CollapseTabs { target }
            | Commands::StripIndent { target, .. }
            | Commands::Rename { target, .. }
            | Commands::InjectBuild { target }
            | Commands::RemoveInvalid { target }
            | Commands::Renumber { target, .. }
            | Commands::RespawnTime { target, .. }
            | Commands::ResetDesc { target } => target,
        }
    }
}
