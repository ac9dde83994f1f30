//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use quarry_index::SearchResult;
use serde::Serialize;

/// JSON output for a search.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The original query string.
    query: &'a str,
    /// Total matches on this page.
    total_matches: usize,
    /// Results for this page.
    results: &'a [SearchResult],
}

/// Outputs search results as text or JSON.
pub fn output_results(results: &[SearchResult], query: &str, json: bool) -> ExitCode {
    if json {
        let output = JsonSearchOutput {
            query,
            total_matches: results.len(),
            results,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if results.is_empty() {
        println!("No results found.");
        return ExitCode::SUCCESS;
    }

    for result in results {
        println!("{}", result.path);
        for line in result.context.lines() {
            println!("  {line}");
        }
        println!();
    }

    ExitCode::SUCCESS
}
