//! CLI command for prefix renaming

use std::cell::Cell;
use std::time::Instant;

use super::TargetArgs;
use crate::cli::progress::{TRUCK, batch_bar, print_done, print_step, update_bar};
use crate::transform::{PhaseCounts, rename_tree};
use crate::types::ToolPhase;

/// Rename `.mbch` and `.mbtc` files with `prefix` and fix references
pub fn rename(target: &TargetArgs, prefix: &str) -> anyhow::Result<()> {
    let started = Instant::now();
    let quiet = target.quiet;

    let pb = batch_bar(0, quiet);
    let step = Cell::new(0);
    let summary = rename_tree(&target.path, prefix, |progress| {
        if progress.current == 1 && !quiet {
            let label = match progress.phase {
                ToolPhase::RenamingMbch => Some((1, ".mbch")),
                ToolPhase::RenamingMbtc => Some((2, ".mbtc")),
                _ => None,
            };
            if let Some((current, ext)) = label
                && current != step.get()
            {
                step.set(current);
                pb.suspend(|| {
                    print_step(current, 2, TRUCK, &format!("Renaming {ext} files with prefix '{prefix}'..."));
                });
            }
        }
        update_bar(&pb, progress);
    });
    pb.finish_and_clear();
    let summary = summary?;

    println!();
    println!("Rename complete:");
    print_phase(".mbch", summary.mbch);
    print_phase(".mbtc", summary.mbtc);
    println!("  References tracked: {}", summary.map.len());

    if summary.mbch.failed + summary.mbtc.failed > 0 {
        println!();
        println!("Failures:");
        for msg in summary.results.iter().filter(|m| m.starts_with("Failed")) {
            println!("  {msg}");
        }
    }

    if !quiet {
        print_done(started.elapsed());
    }
    Ok(())
}

fn print_phase(label: &str, counts: PhaseCounts) {
    println!(
        "  {label}: {} found, {} processed, {} renamed, {} failed",
        counts.found, counts.processed, counts.renamed, counts.failed
    );
}
