//! Implementation of `quarry update`.

use std::process::ExitCode;

use quarry_index::Indexer;

use crate::cli::CommandContext;

/// Rebuilds the search index from the configured sources.
pub fn run(ctx: &CommandContext) -> ExitCode {
    if ctx.require_sources(true).is_err() {
        return ExitCode::FAILURE;
    }

    let mut indexer = match Indexer::from_config(&ctx.config) {
        Ok(indexer) => indexer,
        Err(e) => {
            eprintln!("error: failed to open index: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stats = match indexer.rebuild(&ctx.config) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("error: indexing failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if stats.files_skipped > 0 {
        println!(
            "Indexed {} files ({} skipped).",
            stats.files_indexed, stats.files_skipped
        );
    } else {
        println!("Indexed {} files.", stats.files_indexed);
    }

    ExitCode::SUCCESS
}
