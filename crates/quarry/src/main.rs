//! Command-line entry point for the `quarry` file search tool.

use std::process::ExitCode;

use clap::Parser;
use quarry::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(cmd) => match CommandContext::load() {
            Ok(ctx) => commands::search::run(&ctx, &cmd),
            Err(code) => code,
        },
        Commands::Init(cmd) => match CommandContext::load_cwd_only() {
            Ok(ctx) => commands::init::run(&ctx, &cmd),
            Err(code) => code,
        },
        Commands::Update => match CommandContext::load() {
            Ok(ctx) => commands::update::run(&ctx),
            Err(code) => code,
        },
        Commands::Status => match CommandContext::load() {
            Ok(ctx) => commands::status::run(&ctx),
            Err(code) => code,
        },
    }
}
