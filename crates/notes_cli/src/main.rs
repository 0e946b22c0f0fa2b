//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notes_core` linkage by saving notes into a fresh `Memory`.
//! - Print the saved list and the latest note deterministically.
//!
//! Nothing is persisted; every invocation starts from an empty memory.

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;
use notes_core::{core_version, default_log_level, init_logging_for, Memory, Note};
use serde::Serialize;

/// notes - write to-do notes into an in-process memory and read them back
#[derive(Parser, Debug)]
#[command(name = "notes", version, about = "Save notes into memory and list them")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging stays off when unset
    #[arg(long)]
    log_dir: Option<String>,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    json: bool,

    /// Note texts to save, in order
    notes: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    notes: &'a [Note],
    latest: Option<&'a Note>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging_for("cli", level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let memory: Memory = cli.notes.into_iter().map(Note::from).collect();
    info!(
        "event=cli_run module=cli status=ok count={}",
        memory.len()
    );

    let report = Report {
        notes: memory.get_notes(),
        latest: memory.get_saved_note().ok(),
    };
    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print!("{}", render_plain(&report));
    }
    Ok(())
}

fn render_plain(report: &Report<'_>) -> String {
    let mut out = format!("notes_core version={}\n", core_version());
    for (index, note) in report.notes.iter().enumerate() {
        out.push_str(&format!("{}. {note}\n", index + 1));
    }
    match report.latest {
        Some(note) => out.push_str(&format!("latest: {note}\n")),
        None => out.push_str("latest: <none>\n"),
    }
    out
}
