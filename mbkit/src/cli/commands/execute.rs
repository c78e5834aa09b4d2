//! Command execution implementations

use super::Commands;
use super::{rename, transform};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the target path is missing or the run cannot start.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Beautify {
                target,
                tab_width,
                no_blank_lines,
                ignore_file,
                all_files,
                yes,
            } => transform::beautify(
                target,
                usize::from(*tab_width),
                *no_blank_lines,
                ignore_file.as_deref(),
                *all_files,
                *yes,
            ),
            Commands::CollapseTabs { target } => transform::collapse_tabs(target),
            Commands::StripIndent { target, nested } => transform::strip_indent(target, *nested),
            Commands::Rename { target, prefix } => rename::rename(target, prefix),
            Commands::InjectBuild { target } => transform::inject_build(target),
            Commands::RemoveInvalid { target } => transform::remove_invalid(target),
            Commands::Renumber { target, config } => transform::renumber(target, config),
            Commands::RespawnTime { target, value } => transform::respawn_time(target, value),
            Commands::ResetDesc { target } => transform::reset_desc(target),
        }
    }
}
