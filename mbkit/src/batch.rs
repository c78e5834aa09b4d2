//! Batch file processing
//!
//! Files are handled one at a time: read, transform in memory, write back
//! only when the content changed. A failure is recorded against its file and
//! the run moves on to the next one.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::transform::Edit;
use crate::types::{ToolPhase, ToolProgress};

/// Result of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Files whose content was rewritten
    pub changed_count: usize,
    /// Files that needed no change
    pub unchanged_count: usize,
    /// Files that could not be read or written
    pub fail_count: usize,
    /// Number of structural warnings raised by the transform
    pub warning_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

impl BatchResult {
    /// Total number of files looked at
    #[must_use]
    pub fn total(&self) -> usize {
        self.changed_count + self.unchanged_count + self.fail_count
    }
}

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::file_io(path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Overwrite a file with text.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| Error::file_io(path, e))
}

/// Run a content transform over every file in order.
///
/// # Arguments
/// * `files` - Files to process
/// * `progress` - Callback for progress updates
/// * `transform` - Maps a file's path and content to its edit
pub fn run_batch<F, T>(files: &[PathBuf], progress: F, mut transform: T) -> BatchResult
where
    F: Fn(&ToolProgress),
    T: FnMut(&Path, &str) -> Edit,
{
    let mut result = BatchResult::default();
    let total = files.len();

    for (idx, path) in files.iter().enumerate() {
        let display_path = path.display().to_string();
        progress(&ToolProgress::with_file(
            ToolPhase::Transforming,
            idx + 1,
            total,
            display_path.clone(),
        ));

        match process_file(path, &mut transform) {
            Ok(edit) => {
                for warning in &edit.warnings {
                    tracing::warn!("{display_path}: {warning}");
                }
                result.warning_count += edit.warnings.len();

                if edit.changed {
                    result.changed_count += 1;
                    for detail in &edit.details {
                        tracing::debug!("{display_path}: {detail}");
                    }
                    tracing::info!("Updated {display_path}");
                    result.results.push(format!("Updated: {display_path}"));
                } else {
                    result.unchanged_count += 1;
                    tracing::debug!("No changes needed for {display_path}");
                }
            }
            Err(e) => {
                result.fail_count += 1;
                tracing::warn!("Skipping {display_path}: {e}");
                result.results.push(format!("Failed {display_path}: {e}"));
            }
        }
    }

    progress(&ToolProgress::new(ToolPhase::Complete, total, total));
    result
}

struct FileOutcome {
    changed: bool,
    details: Vec<String>,
    warnings: Vec<String>,
}

fn process_file<T>(path: &Path, transform: &mut T) -> Result<FileOutcome>
where
    T: FnMut(&Path, &str) -> Edit,
{
    let original = read_text(path)?;
    let edit = transform(path, &original);
    let changed = edit.changes(&original);
    if changed {
        write_text(path, &edit.content)?;
    }

    Ok(FileOutcome {
        changed,
        details: edit.details,
        warnings: edit.warnings,
    })
}
