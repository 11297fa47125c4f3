use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;
use miette::{Context, IntoDiagnostic, Result};

use logdb::Store;

#[derive(Parser, Debug)]
#[command(name = "logdb", version, about, long_about = None)]
struct Cli {
    /// Path to the log file (defaults to $HOME/.logdb/data.log)
    #[arg(global = true, short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Insert a key-value pair
    #[command(alias = "p")]
    Put { key: String, value: String },

    /// Get a value by key
    #[command(alias = "g")]
    Get { key: String },

    /// Get a value by key, failing if the key is absent
    #[command(alias = "f")]
    Find { key: String },

    /// Mark a key as present, without a value
    #[command(alias = "s")]
    Set { key: String },

    /// Check whether a key is present
    #[command(alias = "e")]
    Exists { key: String },

    /// Remove a key
    #[command(alias = "rm")]
    Delete { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_path = cli.file.unwrap_or_else(default_log_path);
    if let Some(dir) = file_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .into_diagnostic()
            .wrap_err_with(|| format!("could not create directory {:?}", dir))?;
    }

    let mut store = Store::open(&file_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not open store at {:?}", file_path))?;

    match cli.command {
        Command::Put { key, value } => {
            store
                .put(&key, value.as_bytes())
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to put key={key}"))?;

            success(&format!("put: {key} = {value}"));
        }
        Command::Get { key } => {
            match store
                .get(&key)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to get key={key}"))?
            {
                Some(value) => info(&format!("{key} = {}", String::from_utf8_lossy(&value))),
                None => warn(&format!("key not found: {key}")),
            }
        }
        Command::Find { key } => {
            let value = store
                .find(&key)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to find key={key}"))?;

            info(&format!("{key} = {}", String::from_utf8_lossy(&value)));
        }
        Command::Set { key } => {
            store
                .set(&key)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to set key={key}"))?;

            success(&format!("set: {key}"));
        }
        Command::Exists { key } => {
            if store.exists(&key) {
                info(&format!("{key} exists"));
            } else {
                warn(&format!("key not found: {key}"));
            }
        }
        Command::Delete { key } => {
            store
                .delete(&key)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to delete key={key}"))?;

            success(&format!("deleted: {key}"));
        }
    }

    Ok(())
}

/// Resolve a default log file path depending on OS
fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".logdb").join("data.log"))
        .unwrap_or_else(|| PathBuf::from("./logdb-data.log"))
}

fn success(msg: &str) {
    println!("{} {}", "✔".bright_green().bold(), msg.normal());
}

fn warn(msg: &str) {
    eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.yellow());
}

fn info(msg: &str) {
    println!("{} {}", "➤".bright_cyan().bold(), msg.cyan());
}
