//! Implementation of `quarry search`.

use std::process::ExitCode;

use quarry_index::SearchError;

use crate::cli::{
    CommandContext,
    args::SearchCommand,
    output::output_results,
};

/// Searches the index and prints highlighted excerpts.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let searcher = match ctx.searcher(cmd.context) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let limit = cmd.limit.unwrap_or(ctx.config.settings.default_limit);

    match searcher.find_text(&query, cmd.page, limit) {
        Ok(results) => output_results(&results, &query, cmd.json),
        Err(e) => {
            eprintln!("error: search failed: {e}");
            if matches!(e, SearchError::FileRead { .. }) {
                eprintln!("The index may be stale; run 'quarry update'.");
            }
            ExitCode::FAILURE
        }
    }
}
