//! CLI commands for in-place content transforms

use std::path::Path;
use std::time::Instant;

use console::Term;

use super::TargetArgs;
use crate::batch::{BatchResult, run_batch};
use crate::cli::progress::{
    DOCUMENT, GEAR, LOOKING_GLASS, batch_bar, print_done, print_note, print_step, update_bar,
};
use crate::config::Settings;
use crate::format::{MBCH_EXTENSION, MBTC_EXTENSION};
use crate::transform::{
    BlankLines, Edit, IndentMode, RESPAWN_KEY, RenumberSettings, WhitespaceOptions,
    collapse_double_tabs, inject_custom_build, normalize_whitespace, remove_invalid_triplets,
    renumber_triplets, reset_descriptions, strip_block_indent, upsert_class_property,
};
use crate::walker::{FileFilter, IgnoreList, find_files};

/// Normalize whitespace
pub fn beautify(
    target: &TargetArgs,
    tab_width: usize,
    no_blank_lines: bool,
    ignore_file: Option<&Path>,
    all_files: bool,
    yes: bool,
) -> anyhow::Result<()> {
    let mut filter = if all_files {
        FileFilter::any_extension()
    } else {
        FileFilter::extensions(&[MBCH_EXTENSION, MBTC_EXTENSION])
    };

    if let Some(ignore_path) = ignore_file {
        let ignore = IgnoreList::load_or_create(ignore_path)?;
        if ignore.created && !yes {
            wait_for_enter(ignore_path)?;
        }
        if !ignore.names.is_empty() && !target.quiet {
            let names: Vec<_> = ignore.names.iter().map(String::as_str).collect();
            print_note(DOCUMENT, &format!("Ignoring: {}", names.join(", ")));
        }
        filter = filter.with_ignore_list(&ignore).excluding(ignore_path);
    }

    let options = WhitespaceOptions {
        tab_width,
        blank_lines: if no_blank_lines {
            BlankLines::Remove
        } else {
            BlankLines::Collapse
        },
    };
    run_transform(target, filter, "Beautifying", |_, content| {
        normalize_whitespace(content, options)
    })
}

/// Collapse doubled tabs
pub fn collapse_tabs(target: &TargetArgs) -> anyhow::Result<()> {
    run_transform(target, mbch_filter(), "Collapsing tabs in", |_, content| {
        collapse_double_tabs(content)
    })
}

/// Strip one indentation level inside blocks
pub fn strip_indent(target: &TargetArgs, nested: bool) -> anyhow::Result<()> {
    let mode = if nested {
        IndentMode::Nested
    } else {
        IndentMode::SingleLevel
    };
    run_transform(target, mbch_filter(), "Stripping indentation in", |_, content| {
        strip_block_indent(content, mode)
    })
}

/// Insert the custom build fragment
pub fn inject_build(target: &TargetArgs) -> anyhow::Result<()> {
    run_transform(target, mbch_filter(), "Injecting custom build into", |_, content| {
        inject_custom_build(content)
    })
}

/// Delete unset attribute triplets
pub fn remove_invalid(target: &TargetArgs) -> anyhow::Result<()> {
    run_transform(target, mbch_filter(), "Removing invalid triplets from", |_, content| {
        remove_invalid_triplets(content)
    })
}

/// Renumber attribute triplets
pub fn renumber(target: &TargetArgs, config: &Path) -> anyhow::Result<()> {
    if !target.quiet {
        print_note(DOCUMENT, &format!("Settings from {}", config.display()));
    }
    let settings = RenumberSettings::from(Settings::load_or_create(config));
    run_transform(target, mbch_filter(), "Renumbering", |_, content| {
        renumber_triplets(content, settings)
    })
}

/// Set `respawnCustomTime`
pub fn respawn_time(target: &TargetArgs, value: &str) -> anyhow::Result<()> {
    run_transform(target, mbch_filter(), "Setting respawn time in", |_, content| {
        upsert_class_property(content, RESPAWN_KEY, value)
    })
}

/// Blank out description values
pub fn reset_desc(target: &TargetArgs) -> anyhow::Result<()> {
    run_transform(target, mbch_filter(), "Resetting descriptions in", |_, content| {
        reset_descriptions(content)
    })
}

fn mbch_filter() -> FileFilter {
    FileFilter::extensions(&[MBCH_EXTENSION])
}

fn wait_for_enter(ignore_path: &Path) -> anyhow::Result<()> {
    let term = Term::stderr();
    term.write_line(&format!(
        "Created empty ignore file {}. List file names in it to skip them.",
        ignore_path.display()
    ))?;
    term.write_line("Press Enter to continue...")?;
    term.read_line()?;
    Ok(())
}

/// Find the target files and run one transform over them.
fn run_transform<T>(
    target: &TargetArgs,
    filter: FileFilter,
    action: &str,
    transform: T,
) -> anyhow::Result<()>
where
    T: FnMut(&Path, &str) -> Edit,
{
    let started = Instant::now();
    let quiet = target.quiet;

    if !quiet {
        print_step(1, 2, LOOKING_GLASS, &format!("Scanning {}...", target.path.display()));
    }
    let files = find_files(&target.path, &filter.excluding_current_exe())?;
    if files.is_empty() {
        println!("No matching files found in: {}", target.path.display());
        return Ok(());
    }

    if !quiet {
        print_step(2, 2, GEAR, &format!("{action} {} files...", files.len()));
    }
    let pb = batch_bar(files.len(), quiet);
    let result = run_batch(&files, |progress| update_bar(&pb, progress), transform);
    pb.finish_and_clear();

    print_summary(&result);
    if !quiet {
        print_done(started.elapsed());
    }
    Ok(())
}

fn print_summary(result: &BatchResult) {
    println!();
    println!("Processing complete:");
    println!("  Updated: {}", result.changed_count);
    println!("  Unchanged: {}", result.unchanged_count);
    println!("  Failed: {}", result.fail_count);
    if result.warning_count > 0 {
        println!("  Warnings: {}", result.warning_count);
    }

    if result.fail_count > 0 {
        println!();
        println!("Failures:");
        for msg in result.results.iter().filter(|m| m.starts_with("Failed")) {
            println!("  {msg}");
        }
    }
}
