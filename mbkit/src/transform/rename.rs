//! Prefix renaming with reference fixing
//!
//! Runs in two phases over a tree:
//! 1. every `.mbch` file is renamed to `<prefix><name>.mbch` and its own name
//!    is rewritten inside its content; the clean → prefixed names are kept
//!    in a [`RenameMap`];
//! 2. every `.mbtc` file is renamed the same way, and references to any
//!    `.mbch` name in the map are rewritten as well.
//!
//! A name already carrying the prefix is left alone, so running the whole
//! operation twice changes nothing the second time.

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::batch::{read_text, write_text};
use crate::error::{Error, Result};
use crate::format::{MBCH_EXTENSION, MBTC_EXTENSION};
use crate::types::{ToolPhase, ToolProgress};
use crate::walker::{FileFilter, find_files, has_extension};

/// Default prefix added to renamed files
pub const DEFAULT_PREFIX: &str = "test_";

/// Clean `.mbch` base name → prefixed base name, in discovery order
pub type RenameMap = IndexMap<String, String>;

/// Counts for one rename phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseCounts {
    /// Files with the phase's extension
    pub found: usize,
    /// Files handled without error
    pub processed: usize,
    /// Files whose name changed
    pub renamed: usize,
    /// Files skipped because of an error
    pub failed: usize,
}

/// Outcome of [`rename_tree`]
#[derive(Debug, Clone, Default)]
pub struct RenameSummary {
    pub mbch: PhaseCounts,
    pub mbtc: PhaseCounts,
    /// Names recorded during the `.mbch` phase
    pub map: RenameMap,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Rewrite whole-word occurrences of `name` to `replacement`, skipping any
/// occurrence already preceded by `prefix`.
///
/// # Returns
/// The new content and the number of occurrences rewritten.
pub fn rewrite_references(
    content: &str,
    name: &str,
    replacement: &str,
    prefix: &str,
) -> Result<(String, usize)> {
    if name.is_empty() || name == replacement {
        return Ok((content.to_string(), 0));
    }

    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(name)))?;
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut count = 0;
    for found in pattern.find_iter(content) {
        if !prefix.is_empty() && content[..found.start()].ends_with(prefix) {
            continue;
        }
        out.push_str(&content[last..found.start()]);
        out.push_str(replacement);
        last = found.end();
        count += 1;
    }
    out.push_str(&content[last..]);

    Ok((out, count))
}

/// Where one file is going
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenamePlan {
    source: PathBuf,
    target: PathBuf,
    clean_name: String,
    prefixed_name: String,
}

impl RenamePlan {
    fn new(source: &Path, prefix: &str) -> Result<Self> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::InvalidPath(source.display().to_string()))?;
        let clean_name = stem.strip_prefix(prefix).unwrap_or(stem);
        if clean_name.is_empty() {
            return Err(Error::InvalidPath(format!(
                "{} has no name besides the prefix",
                source.display()
            )));
        }

        let prefixed_name = format!("{prefix}{clean_name}");
        let mut file_name = prefixed_name.clone();
        if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
            file_name.push('.');
            file_name.push_str(ext);
        }

        Ok(Self {
            target: source.with_file_name(file_name),
            source: source.to_path_buf(),
            clean_name: clean_name.to_string(),
            prefixed_name,
        })
    }

    fn renames(&self) -> bool {
        self.source != self.target
    }
}

/// Rewrite one file's content and move it to its prefixed name.
fn apply_plan(plan: &RenamePlan, prefix: &str, references: Option<&RenameMap>) -> Result<usize> {
    if plan.renames() && plan.target.exists() {
        return Err(Error::RenameTargetExists {
            path: plan.target.clone(),
        });
    }

    let original = read_text(&plan.source)?;
    let (mut content, mut rewritten) =
        rewrite_references(&original, &plan.clean_name, &plan.prefixed_name, prefix)?;
    for (clean, prefixed) in references.into_iter().flatten() {
        let (next, count) = rewrite_references(&content, clean, prefixed, prefix)?;
        content = next;
        rewritten += count;
    }

    if plan.renames() {
        let dir = plan.source.parent().unwrap_or(Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::file_io(dir, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| Error::file_io(temp.path(), e))?;
        temp.persist(&plan.target)
            .map_err(|e| Error::file_io(&plan.target, e.error))?;
        std::fs::remove_file(&plan.source).map_err(|e| Error::file_io(&plan.source, e))?;
    } else if content != original {
        write_text(&plan.source, &content)?;
    }

    Ok(rewritten)
}

fn run_phase<F>(
    root: &Path,
    extension: &str,
    phase: ToolPhase,
    prefix: &str,
    references: Option<&RenameMap>,
    summary: &mut RenameSummary,
    progress: &F,
) -> Result<(PhaseCounts, Vec<RenamePlan>)>
where
    F: Fn(&ToolProgress),
{
    let filter = FileFilter::extensions(&[extension]).excluding_current_exe();
    let files: Vec<_> = find_files(root, &filter)?
        .into_iter()
        .filter(|p| has_extension(p, extension))
        .collect();

    let mut counts = PhaseCounts {
        found: files.len(),
        ..PhaseCounts::default()
    };
    let mut done = Vec::new();

    for (idx, path) in files.iter().enumerate() {
        let display_path = path.display().to_string();
        progress(&ToolProgress::with_file(phase, idx + 1, files.len(), display_path.clone()));

        let outcome = RenamePlan::new(path, prefix)
            .and_then(|plan| apply_plan(&plan, prefix, references).map(|n| (plan, n)));
        match outcome {
            Ok((plan, rewritten)) => {
                counts.processed += 1;
                if plan.renames() {
                    counts.renamed += 1;
                    tracing::info!("Renamed {display_path} to {}", plan.prefixed_name);
                    summary
                        .results
                        .push(format!("Renamed: {display_path} -> {}", plan.target.display()));
                } else if rewritten > 0 {
                    tracing::info!("Name already correct, content updated: {display_path}");
                    summary.results.push(format!("Updated: {display_path}"));
                } else {
                    tracing::debug!("Name and content already correct: {display_path}");
                }
                done.push(plan);
            }
            Err(e) => {
                counts.failed += 1;
                tracing::warn!("Skipping {display_path}: {e}");
                summary.results.push(format!("Failed {display_path}: {e}"));
            }
        }
    }

    Ok((counts, done))
}

/// Rename every `.mbch` and `.mbtc` file below `root` with `prefix` and
/// fix references between them.
///
/// # Arguments
/// * `root` - Directory to process
/// * `prefix` - Prefix to add, e.g. [`DEFAULT_PREFIX`]
/// * `progress` - Callback for progress updates
///
/// # Errors
/// Returns an error only if `root` does not exist. Per-file failures are
/// recorded in the summary.
pub fn rename_tree<F>(root: &Path, prefix: &str, progress: F) -> Result<RenameSummary>
where
    F: Fn(&ToolProgress),
{
    let mut summary = RenameSummary::default();

    let (mbch, plans) = run_phase(
        root,
        MBCH_EXTENSION,
        ToolPhase::RenamingMbch,
        prefix,
        None,
        &mut summary,
        &progress,
    )?;
    summary.mbch = mbch;
    summary.map = plans
        .into_iter()
        .map(|plan| (plan.clean_name, plan.prefixed_name))
        .collect();

    let map = std::mem::take(&mut summary.map);
    let (mbtc, _) = run_phase(
        root,
        MBTC_EXTENSION,
        ToolPhase::RenamingMbtc,
        prefix,
        Some(&map),
        &mut summary,
        &progress,
    )?;
    summary.mbtc = mbtc;
    summary.map = map;

    let total = summary.mbch.found + summary.mbtc.found;
    progress(&ToolProgress::new(ToolPhase::Complete, total, total));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rewrite_references_whole_words_only() {
        let (out, count) =
            rewrite_references("knight knight_2 knight.mbch myknight", "knight", "test_knight", "test_")
                .unwrap();
        assert_eq!(out, "test_knight knight_2 test_knight.mbch myknight");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_rewrite_references_does_not_double_prefix() {
        let (out, count) =
            rewrite_references("test-knight knight", "knight", "test-knight", "test-").unwrap();
        assert_eq!(out, "test-knight test-knight");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_rewrite_references_escapes_name() {
        let (out, _) = rewrite_references("a.b axb", "a.b", "test_a.b", "test_").unwrap();
        assert_eq!(out, "test_a.b axb");
    }

    #[test]
    fn test_plan_strips_existing_prefix() {
        let plan = RenamePlan::new(Path::new("dir/test_knight.mbch"), "test_").unwrap();
        assert_eq!(plan.clean_name, "knight");
        assert_eq!(plan.prefixed_name, "test_knight");
        assert!(!plan.renames());

        let plan = RenamePlan::new(Path::new("dir/knight.mbch"), "test_").unwrap();
        assert_eq!(plan.target, Path::new("dir/test_knight.mbch"));
        assert!(plan.renames());
    }

    #[test]
    fn test_plan_rejects_prefix_only_name() {
        assert!(RenamePlan::new(Path::new("test_.mbch"), "test_").is_err());
    }

    #[test]
    fn test_rename_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("knight.mbch"), "knight").unwrap();
        std::fs::write(dir.path().join("test_knight.mbch"), "other").unwrap();

        let summary = rename_tree(dir.path(), DEFAULT_PREFIX, |_| {}).unwrap();
        assert_eq!(summary.mbch.found, 2);
        assert_eq!(summary.mbch.failed, 1);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("knight.mbch")).unwrap(),
            "knight"
        );
    }
}
