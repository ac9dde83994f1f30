//! Implementation of `quarry status`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use quarry_index::open_searcher;

use crate::cli::CommandContext;

/// Shows configuration, sources, and index statistics.
pub fn run(ctx: &CommandContext) -> ExitCode {
    match &ctx.config.config_root {
        Some(root) => println!("Configuration: {}", root.display()),
        None => {
            println!("No configuration file found.");
            println!();
            println!("Run 'quarry init' to create a configuration file.");
            return ExitCode::SUCCESS;
        }
    }
    println!();

    println!("Sources:");
    if ctx.config.sources.is_empty() {
        println!("  (none defined)");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["name", "path", "include", "exclude"]);
        for source in &ctx.config.sources {
            table.add_row(vec![
                Cell::new(&source.name),
                Cell::new(source.path.display()),
                Cell::new(source.include.join(", ")),
                Cell::new(source.exclude.join(", ")),
            ]);
        }
        println!("{table}");
    }
    println!();

    match open_searcher(&ctx.config) {
        Ok(searcher) => match searcher.num_docs() {
            Ok(count) => println!("Index: {count} documents"),
            Err(e) => println!("Index: unreadable ({e})"),
        },
        Err(_) => println!("Index: not built (run 'quarry update')"),
    }
    if let Some(index_dir) = ctx.index_dir() {
        println!("Index location: {}", index_dir.display());
    }
    println!();

    println!("Effective settings:");
    for line in ctx.config.settings_to_toml().lines() {
        println!("  {line}");
    }

    ExitCode::SUCCESS
}
