//! Clap argument definitions for the `quarry` CLI.

use clap::{Args, Parser, Subcommand};

/// Parses a positive (non-zero) count argument.
fn parse_positive(value: &str) -> Result<usize, String> {
    let parsed: usize = value.parse().map_err(|_| format!("invalid count: {value}"))?;
    if parsed == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(parsed)
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "Full-text file search with highlighted excerpts")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `quarry search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query (multiple words are required together)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Page of results to show, starting at 1
    #[arg(short = 'p', long, default_value = "1", value_parser = parse_positive)]
    pub page: usize,

    /// Results per page [default: 10]
    #[arg(short = 'n', long, value_parser = parse_positive)]
    pub limit: Option<usize>,

    /// Context lines on each side of a match [default: 2]
    #[arg(short = 'c', long, value_parser = parse_positive)]
    pub context: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `quarry init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.quarry.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `quarry` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search indexed files and print highlighted excerpts
    #[command(after_help = "\
QUERY SYNTAX:
  term              Term must appear
  term1 term2       Both terms (implicit AND)
  \"phrase\"          Exact phrase match
  -term             Term must NOT appear
  term1 OR term2    Either term
  filename:term     Search file names only

EXAMPLES:
  quarry search read_file
  quarry search 'parser error' -c 3
  quarry search 'config OR settings' -n 5 -p 2")]
    Search(SearchCommand),

    /// Initialize quarry configuration in current directory
    Init(InitCommand),

    /// Rebuild the search index from configured sources
    Update,

    /// Show configuration, sources, and index statistics
    Status,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("abc").is_err());
        assert_eq!(parse_positive("3").unwrap(), 3);
    }

    #[test]
    fn search_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["quarry", "search", "needle"]).unwrap();
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search command");
        };

        assert_eq!(cmd.query, vec!["needle"]);
        assert_eq!(cmd.page, 1);
        assert!(cmd.limit.is_none());
        assert!(!cmd.json);
    }

    #[test]
    fn search_rejects_zero_page() {
        let result = Cli::try_parse_from(["quarry", "search", "needle", "--page", "0"]);
        assert!(result.is_err());
    }
}
