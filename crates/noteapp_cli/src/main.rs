//! Command-line front end for the contact note store.
//!
//! # Responsibility
//! - Parse flags into an explicit `StoreConfig` and logging setup.
//! - Drive `EntryService` and print its feedback messages.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use noteapp_core::{
    default_log_level, init_logging, EntryDraft, EntryService, SqliteEntryRepository,
    StoreConfig, SubmitOutcome,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[clap(author, version, about = "Store and manage contact notes", long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Directory holding `entries.db`
    #[clap(long, default_value = "data")]
    data_dir: PathBuf,

    /// Write rolling log files to this directory
    #[clap(long)]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[clap(long, requires = "log_dir")]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct EntryFields {
    /// Contact name, at most 100 characters
    #[clap(short, long, default_value = "")]
    name: String,

    /// Contact email address
    #[clap(short, long, default_value = "")]
    email: String,

    /// Free-text notes, at most 1000 characters
    #[clap(long, default_value = "")]
    notes: String,
}

impl EntryFields {
    fn draft(&self) -> EntryDraft {
        EntryDraft::new(self.name.as_str(), self.email.as_str(), self.notes.as_str())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the storage directory and table if missing
    Init,

    /// Add a new entry
    Add {
        #[clap(flatten)]
        fields: EntryFields,
    },

    /// List entries, newest first
    List {
        /// Print entries as JSON
        #[clap(long)]
        json: bool,
    },

    /// Replace name, email and notes of an entry
    Update {
        id: i64,

        #[clap(flatten)]
        fields: EntryFields,
    },

    /// Delete an entry
    Delete { id: i64 },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, absolute(log_dir)?).context("failed to initialize logging")?;
    }

    let repo = SqliteEntryRepository::new(StoreConfig::in_dir(&cli.data_dir));
    let service = EntryService::new(repo);
    service
        .initialize()
        .with_context(|| format!("failed to initialize storage in {}", cli.data_dir.display()))?;

    let success = match cli.command {
        Commands::Init => {
            println!("storage ready: {}", cli.data_dir.display());
            true
        }
        Commands::Add { fields } => {
            let outcome = service.submit(&fields.draft())?;
            print_lines(&outcome.messages());
            if let SubmitOutcome::Saved(id) = outcome {
                println!("id={id}");
            }
            outcome.is_success()
        }
        Commands::List { json } => {
            let entries = service.entries()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("no entries");
            } else {
                for entry in &entries {
                    println!(
                        "#{} [{}] {} <{}>\n    {}",
                        entry.id, entry.created_at, entry.name, entry.email, entry.notes
                    );
                }
            }
            true
        }
        Commands::Update { id, fields } => {
            let outcome = service.revise(id, &fields.draft())?;
            print_lines(&outcome.messages());
            outcome.is_success()
        }
        Commands::Delete { id } => {
            let outcome = service.remove(id)?;
            println!("{}", outcome.message());
            outcome.is_success()
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}
