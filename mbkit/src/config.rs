//! `config.ini` settings
//!
//! ```ini
//! [SETTINGS]
//! block_size_before_jump = 12
//! gap_size = 3
//! ```
//!
//! The file is read with `rust-ini`: `;` and `#` comments, `=` or `:`
//! separators. Section and key names match case-insensitively. Unknown and
//! empty keys are reported as warnings and otherwise ignored.

use std::path::Path;

use ini::{Ini, WriteOption};

use crate::error::{Error, Result};

/// Default config file name, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

const SECTION: &str = "SETTINGS";
const BLOCK_SIZE_KEY: &str = "block_size_before_jump";
const GAP_SIZE_KEY: &str = "gap_size";

const DEFAULT_BLOCK_SIZE: usize = 12;
const DEFAULT_GAP_SIZE: usize = 3;

/// Renumbering defaults used before any `//PBADJUST` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Triplets per block before the index jumps
    pub block_size_before_jump: usize,
    /// Size of the jump after each block
    pub gap_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_size_before_jump: DEFAULT_BLOCK_SIZE,
            gap_size: DEFAULT_GAP_SIZE,
        }
    }
}

impl Settings {
    /// Parse `config.ini` content, logging any warnings.
    pub fn from_ini(text: &str) -> Result<Self> {
        let (settings, warnings) = Self::parse_ini(text)?;
        for warning in &warnings {
            tracing::warn!("config.ini: {warning}");
        }
        Ok(settings)
    }

    /// Parse `config.ini` content and return the warnings alongside.
    ///
    /// Keys missing from the file keep their defaults. A missing
    /// `[SETTINGS]` section yields the defaults and a warning.
    pub fn parse_ini(text: &str) -> Result<(Self, Vec<String>)> {
        let ini = Ini::load_from_str(text).map_err(|e| Error::Config(e.to_string()))?;

        let mut settings = Self::default();
        let mut warnings = Vec::new();
        let mut found_section = false;

        for (section, props) in &ini {
            let Some(section) = section.filter(|name| name.eq_ignore_ascii_case(SECTION)) else {
                continue;
            };
            found_section = true;

            for (key, value) in props.iter() {
                let key = key.trim();
                let value = value.trim();
                let slot = if key.eq_ignore_ascii_case(BLOCK_SIZE_KEY) {
                    &mut settings.block_size_before_jump
                } else if key.eq_ignore_ascii_case(GAP_SIZE_KEY) {
                    &mut settings.gap_size
                } else {
                    warnings.push(format!("unknown key '{key}' in [{section}] ignored"));
                    continue;
                };

                if value.is_empty() {
                    warnings.push(format!("'{key}' is empty, keeping {slot}"));
                    continue;
                }
                *slot = value.parse().map_err(|_| {
                    Error::Config(format!("{key} = {value} is not a non-negative integer"))
                })?;
            }
        }

        if !found_section {
            warnings.push(format!("no [{SECTION}] section, using defaults"));
        }
        if settings.block_size_before_jump == 0 {
            return Err(Error::Config(format!(
                "{BLOCK_SIZE_KEY} must be a positive integer"
            )));
        }
        Ok((settings, warnings))
    }

    /// Render as `config.ini` content.
    pub fn to_ini(&self) -> Result<String> {
        let mut ini = Ini::new();
        ini.with_section(Some(SECTION))
            .set(BLOCK_SIZE_KEY, self.block_size_before_jump.to_string())
            .set(GAP_SIZE_KEY, self.gap_size.to_string());

        let mut out = Vec::new();
        ini.write_to_opt(
            &mut out,
            WriteOption {
                kv_separator: " = ",
                ..WriteOption::default()
            },
        )?;
        String::from_utf8(out).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load settings, creating the file with defaults when it is missing.
    ///
    /// Never fails: unreadable or invalid files are reported and the
    /// defaults are used.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let defaults = Self::default();
            match defaults.to_ini().and_then(|text| {
                std::fs::write(path, text).map_err(|e| Error::file_io(path, e))
            }) {
                Ok(()) => tracing::info!("Created default config at {}", path.display()),
                Err(e) => tracing::warn!("Could not create {}: {e}", path.display()),
            }
            return defaults;
        }

        match crate::batch::read_text(path).and_then(|text| Self::from_ini(&text)) {
            Ok(settings) => {
                tracing::info!(
                    "Configuration loaded: block_size_before_jump = {}, gap_size = {}",
                    settings.block_size_before_jump,
                    settings.gap_size
                );
                settings
            }
            Err(e) => {
                let defaults = Self::default();
                tracing::warn!(
                    "Error reading {}: {e}. Using default block size {}",
                    path.display(),
                    defaults.block_size_before_jump
                );
                defaults
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_ini() {
        let settings = Settings::from_ini("[SETTINGS]\nblock_size_before_jump = 14\n").unwrap();
        assert_eq!(settings.block_size_before_jump, 14);
        assert_eq!(settings.gap_size, 3);
    }

    #[test]
    fn test_from_ini_rejects_zero_and_garbage() {
        assert!(Settings::from_ini("[SETTINGS]\nblock_size_before_jump = 0\n").is_err());
        assert!(Settings::from_ini("[SETTINGS]\nblock_size_before_jump = many\n").is_err());
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let (settings, warnings) = Settings::parse_ini("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_from_ini_semicolon_comments() {
        let text = "; renumber settings\n[SETTINGS]\n; jump after 14\nblock_size_before_jump = 14\n# gap\ngap_size = 2\n";
        let (settings, warnings) = Settings::parse_ini(text).unwrap();
        assert_eq!(settings.block_size_before_jump, 14);
        assert_eq!(settings.gap_size, 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_from_ini_colon_separator() {
        let settings =
            Settings::from_ini("[SETTINGS]\nblock_size_before_jump: 14\ngap_size:1\n").unwrap();
        assert_eq!(settings.block_size_before_jump, 14);
        assert_eq!(settings.gap_size, 1);
    }

    #[test]
    fn test_from_ini_mixed_case_names() {
        let (settings, warnings) =
            Settings::parse_ini("[settings]\nBlock_Size_Before_Jump = 14\nGAP_SIZE = 1\n").unwrap();
        assert_eq!(settings.block_size_before_jump, 14);
        assert_eq!(settings.gap_size, 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_and_empty_keys_warn() {
        let (settings, warnings) =
            Settings::parse_ini("[SETTINGS]\nblock_size = 14\ngap_size =\n").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("block_size"));
        assert!(warnings[1].contains("gap_size"));
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let settings = Settings::load_or_create(&path);
        assert_eq!(settings, Settings::default());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[SETTINGS]"));
        assert!(written.contains("block_size_before_jump = 12"));
        assert_eq!(Settings::from_ini(&written).unwrap(), settings);
    }

    #[test]
    fn test_load_or_create_falls_back_on_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[SETTINGS]\nblock_size_before_jump = -4\n").unwrap();

        assert_eq!(Settings::load_or_create(&path), Settings::default());
    }
}
