//! File discovery
//!
//! Finds the files a tool should touch below a root path, filtering by
//! extension and skipping the running executable and ignore-listed names.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Which files a walk should yield
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Accepted extensions without the dot; empty accepts every file
    extensions: Vec<String>,
    /// Base names that are never yielded
    ignored_names: BTreeSet<String>,
    /// Exact paths that are never yielded (compared canonicalized)
    excluded_paths: Vec<PathBuf>,
}

impl FileFilter {
    /// Accept files with any of these extensions (ASCII case-insensitive)
    #[must_use]
    pub fn extensions(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.trim_start_matches('.').to_string()).collect(),
            ..Self::default()
        }
    }

    /// Accept every file
    #[must_use]
    pub fn any_extension() -> Self {
        Self::default()
    }

    /// Skip files whose base name is in the ignore list
    #[must_use]
    pub fn with_ignore_list(mut self, ignore: &IgnoreList) -> Self {
        self.ignored_names.extend(ignore.names.iter().cloned());
        self
    }

    /// Skip one exact path
    #[must_use]
    pub fn excluding(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.excluded_paths
            .push(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    /// Skip the running executable
    #[must_use]
    pub fn excluding_current_exe(self) -> Self {
        match std::env::current_exe() {
            Ok(exe) => self.excluding(exe),
            Err(_) => self,
        }
    }

    fn extension_matches(&self, path: &Path) -> bool {
        self.extensions.is_empty()
            || self
                .extensions
                .iter()
                .any(|wanted| has_extension(path, wanted))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && self.ignored_names.contains(name)
        {
            tracing::debug!("Skipping ignored file: {}", path.display());
            return true;
        }

        if self.excluded_paths.is_empty() {
            return false;
        }
        let Ok(canonical) = path.canonicalize() else {
            return false;
        };
        let excluded = self.excluded_paths.iter().any(|p| *p == canonical);
        if excluded {
            tracing::debug!("Skipping own executable: {}", path.display());
        }
        excluded
    }
}

/// Whether `path` has the given extension (ASCII case-insensitive, no dot).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Find the files below `root` accepted by `filter`.
///
/// A `root` that is a file yields just that file, without an extension
/// check. Directory entries that cannot be read are logged and skipped.
///
/// # Returns
/// A sorted list of file paths.
pub fn find_files(root: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::PathNotFound {
            path: root.to_path_buf(),
        });
    }

    if root.is_file() {
        return Ok(if filter.is_excluded(root) {
            Vec::new()
        } else {
            vec![root.to_path_buf()]
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("{}", Error::from(e));
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && filter.extension_matches(path) && !filter.is_excluded(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Names of files to leave alone, read from a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    /// File base names
    pub names: BTreeSet<String>,
    /// Whether the list file did not exist and was just created
    pub created: bool,
}

impl IgnoreList {
    /// Load an ignore list, creating it as `[]` if it does not exist.
    ///
    /// Unparseable content is reported and treated as an empty list.
    ///
    /// # Errors
    /// Returns an error only if a missing list file cannot be created.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        let mut created = false;
        if !path.is_file() {
            tracing::info!("Ignore file {} not found, creating it empty", path.display());
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| Error::file_io(parent, e))?;
            }
            let empty = serde_json::to_string_pretty(&Vec::<String>::new())?;
            std::fs::write(path, empty).map_err(|e| Error::file_io(path, e))?;
            created = true;
        }

        let names = match Self::read_names(path) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(
                    "Could not use ignore file {}: {e}. No files will be ignored from it.",
                    path.display()
                );
                BTreeSet::new()
            }
        };

        Ok(Self { names, created })
    }

    fn read_names(path: &Path) -> Result<BTreeSet<String>> {
        let text = crate::batch::read_text(path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let serde_json::Value::Array(items) = value else {
            return Err(Error::Config(format!(
                "{} does not contain a JSON list",
                path.display()
            )));
        };

        Ok(items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect())
    }

    /// Whether a base name is listed
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
