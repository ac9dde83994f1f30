//! Implementation of `quarry init`.

use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use quarry_config::{CONFIG_FILENAME, global_config_path};

use crate::cli::{CommandContext, args::InitCommand};

/// Default configuration template with commented examples.
const CONFIG_TEMPLATE: &str = include_str!("../../templates/config.toml");

/// Creates a `.quarry.toml` in the current directory (or globally).
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let config_path = if cmd.global {
        match global_config_path() {
            Some(path) => path,
            None => {
                eprintln!("error: could not determine home directory");
                return ExitCode::FAILURE;
            }
        }
    } else {
        ctx.cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    if let Err(e) = fs::write(&config_path, CONFIG_TEMPLATE) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());

    // For local configs, try to add .quarry/ to .gitignore
    if !cmd.global && let Err(e) = update_gitignore(&config_path) {
        eprintln!("warning: could not update .gitignore: {e}");
    }

    ExitCode::SUCCESS
}

/// Adds `.quarry/` to `.gitignore` if it exists and doesn't already contain it.
fn update_gitignore(config_path: &Path) -> io::Result<()> {
    let Some(parent) = config_path.parent() else {
        return Ok(());
    };

    let gitignore_path = parent.join(".gitignore");

    // Only update if .gitignore exists
    if !gitignore_path.exists() {
        return Ok(());
    }

    let contents = fs::read_to_string(&gitignore_path)?;

    let quarry_pattern = ".quarry/";
    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed == quarry_pattern || trimmed == ".quarry" {
            return Ok(());
        }
    }

    let mut file = fs::OpenOptions::new().append(true).open(&gitignore_path)?;

    // Add newline if file doesn't end with one
    if !contents.is_empty() && !contents.ends_with('\n') {
        writeln!(file)?;
    }

    writeln!(file, "{quarry_pattern}")?;
    println!("Added {quarry_pattern} to .gitignore");

    Ok(())
}
