//! # mbkit
//!
//! Batch text transforms for `.mbch` character definitions and the `.mbtc`
//! files that reference them.
//!
//! ## Tools
//!
//! - **Beautify** - leading spaces to tabs, trailing whitespace, blank lines
//! - **Collapse tabs** - `\t\t` to `\t`
//! - **Strip indent** - drop one indentation level inside `{ … }` blocks
//! - **Rename** - add a prefix to file names and fix references to them
//! - **Inject build** - add the custom build fragment to `ClassInfo`
//! - **Remove invalid** - delete unset attribute triplets
//! - **Renumber** - renumber attribute triplets in blocks with jumps
//! - **Respawn time** - set `respawnCustomTime` inside `ClassInfo`
//! - **Reset descriptions** - blank out every `description` value
//!
//! ## Quick Start
//!
//! ```no_run
//! use mbkit::prelude::*;
//! use std::path::Path;
//!
//! let files = find_files(Path::new("characters"), &FileFilter::extensions(&["mbch"]))?;
//! let result = run_batch(&files, |_| {}, |_, content| remove_invalid_triplets(content));
//! println!("{} files updated", result.changed_count);
//! # Ok::<(), mbkit::Error>(())
//! ```
//!
//! Every transform is a plain function from content to [`transform::Edit`],
//! so it can be used on strings directly:
//!
//! ```
//! use mbkit::transform::collapse_double_tabs;
//!
//! let edit = collapse_double_tabs("\t\tname\t\t\"Knight\"\n");
//! assert_eq!(edit.content, "\tname\t\"Knight\"\n");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mbkit` command-line binary

pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod transform;
pub mod types;
pub mod walker;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::batch::{BatchResult, read_text, run_batch, write_text};
    pub use crate::config::Settings;
    pub use crate::format::{MBCH_EXTENSION, MBTC_EXTENSION};
    pub use crate::types::{ToolPhase, ToolProgress};
    pub use crate::walker::{FileFilter, IgnoreList, find_files};

    // Transforms
    pub use crate::transform::{
        BlankLines, Edit, IndentMode, RenameSummary, RenumberSettings, WhitespaceOptions,
        collapse_double_tabs, inject_custom_build, normalize_whitespace, remove_invalid_triplets,
        rename_tree, renumber_triplets, reset_descriptions, strip_block_indent,
        upsert_class_property,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
