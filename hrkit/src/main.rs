//! HR toolkit command line entry point
//!
//! Loads configuration, wires real storage and creative-text services into a
//! `Toolkit` session and runs one subcommand against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use hrkit::core::export::format_export_time;
use hrkit::{
    CreativeText, DrawRequest, FileStorage, HistoryStore, MemoryStorage, StorageBackend, Toolkit, ToolkitConfig,
    ToolkitError, creative_text_from_config,
};
use shared::{ActivityId, Component, component_info, logging};

/// Lucky draws, random grouping and an activity log for HR events
#[derive(Parser)]
#[command(name = "hrkit")]
#[command(about = "Run lucky draws and random team assignment from a name list")]
struct Cli {
    /// Directory holding the activity log (overrides HRKIT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Keep the activity log in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect or generate name lists
    Roster {
        #[command(subcommand)]
        action: RosterCommand,
    },
    /// Draw winners from a name list
    Draw {
        /// Name list: one name per line or comma separated
        file: PathBuf,

        /// Winners per round
        #[arg(long, default_value = "1")]
        count: usize,

        /// Prize label recorded with each winner
        #[arg(long)]
        prize: String,

        /// Let earlier winners be drawn again
        #[arg(long)]
        allow_repeat: bool,

        /// Number of consecutive draws
        #[arg(long, default_value = "1")]
        rounds: usize,
    },
    /// Split a name list into random groups
    Group {
        file: PathBuf,

        /// Members per group; the last group takes the remainder
        #[arg(long)]
        size: usize,

        /// Ask the creative-text service for team names
        #[arg(long)]
        creative_names: bool,
    },
    /// Browse or edit the activity log
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[derive(Subcommand)]
enum RosterCommand {
    /// Report duplicate names in a list
    Check {
        file: PathBuf,

        /// Print the list with repeats removed
        #[arg(long)]
        dedupe: bool,
    },
    /// Print a random sample of demo names
    Demo {
        #[arg(long, default_value = "10")]
        count: usize,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List records, newest first
    List {
        /// Only records whose title or details contain this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete one record
    Delete { id: String },
    /// Delete every record
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Print one record as JSON export rows
    Export { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ToolkitConfig::from_env()?;

    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    logging::init_tracing_with_level(Some(&log_level));

    let creative = creative_text_from_config(config.creative.clone());
    let wait_limit = config.creative.timeout + Duration::from_secs(1);

    let result = if cli.ephemeral {
        component_info!(Component::Cli, "🧪 Ephemeral run, history is kept in memory");
        let history = HistoryStore::with_key(MemoryStorage::new(), config.history_key.clone());
        run(cli.command, Toolkit::with_history(history, creative), wait_limit).await
    } else {
        let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
        logging::log_progress(Component::Cli, "Using data directory", &data_dir.display().to_string());
        let history = HistoryStore::with_key(FileStorage::with_base_dir(data_dir), config.history_key.clone());
        run(cli.command, Toolkit::with_history(history, creative), wait_limit).await
    };

    if let Err(e) = &result {
        logging::log_error(Component::Cli, "Command", e);
    }
    result
}

async fn run<S: StorageBackend>(
    command: Command,
    mut toolkit: Toolkit<S, dyn CreativeText>,
    wait_limit: Duration,
) -> anyhow::Result<()> {
    match command {
        Command::Roster { action } => run_roster(action, &mut toolkit),
        Command::Draw {
            file,
            count,
            prize,
            allow_repeat,
            rounds,
        } => {
            load_roster(&mut toolkit, &file)?;
            let request = DrawRequest::new(count, prize).allow_repeat(allow_repeat);
            run_draw(&mut toolkit, &request, rounds, wait_limit).await
        }
        Command::Group {
            file,
            size,
            creative_names,
        } => {
            load_roster(&mut toolkit, &file)?;
            run_group(&mut toolkit, size, creative_names, wait_limit).await
        }
        Command::History { action } => run_history(action, &toolkit),
    }
}

fn load_roster<S: StorageBackend>(toolkit: &mut Toolkit<S, dyn CreativeText>, file: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file).with_context(|| format!("failed to read name list {}", file.display()))?;
    let added = toolkit.import_text(&raw);
    logging::log_success(Component::Roster, &format!("Loaded {} names from {}", added, file.display()));
    Ok(())
}

fn run_roster<S: StorageBackend>(action: RosterCommand, toolkit: &mut Toolkit<S, dyn CreativeText>) -> anyhow::Result<()> {
    match action {
        RosterCommand::Check { file, dedupe } => {
            load_roster(toolkit, &file)?;
            let report = toolkit.duplicates();

            println!("{} names", toolkit.roster().len());
            if report.has_duplicates() {
                for name in report.duplicated_names() {
                    println!("duplicate: {} (x{})", name, report.count_of(name));
                }
            } else {
                println!("no duplicates");
            }

            if dedupe {
                let removed = toolkit.dedupe_roster();
                println!("removed {removed} repeats:");
                for participant in toolkit.roster() {
                    println!("{}", participant.name);
                }
            }
        }
        RosterCommand::Demo { count } => {
            toolkit.add_demo_participants(count);
            for participant in toolkit.roster() {
                println!("{}", participant.name);
            }
        }
    }
    Ok(())
}

async fn run_draw<S: StorageBackend>(
    toolkit: &mut Toolkit<S, dyn CreativeText>,
    request: &DrawRequest,
    rounds: usize,
    wait_limit: Duration,
) -> anyhow::Result<()> {
    for round in 1..=rounds.max(1) {
        let outcome = match toolkit.draw(request) {
            Ok(outcome) => outcome,
            Err(ToolkitError::EmptyPool) => {
                println!("Round {round}: nobody left to draw");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        println!("Round {round}: {}", outcome.activity.title);
        for winner in &outcome.winners {
            println!("  🏆 {}", winner.name());
        }
    }

    if toolkit.pending_enrichments() > 0 {
        let _ = tokio::time::timeout(wait_limit, toolkit.next_enrichment()).await;
    }
    if let Some(message) = toolkit.advisory() {
        println!("{message}");
    }

    Ok(())
}

async fn run_group<S: StorageBackend>(
    toolkit: &mut Toolkit<S, dyn CreativeText>,
    size: usize,
    creative_names: bool,
    wait_limit: Duration,
) -> anyhow::Result<()> {
    let Some(outcome) = toolkit.generate_groups(size)? else {
        println!("Roster is empty, nothing to group");
        return Ok(());
    };

    if creative_names {
        for group in &outcome.groups {
            toolkit.request_group_name(&group.id)?;
        }
        let deadline = tokio::time::Instant::now() + wait_limit;
        while toolkit.pending_enrichments() > 0 {
            match tokio::time::timeout_at(deadline, toolkit.next_enrichment()).await {
                Ok(Some(_)) => {}
                Ok(None) | Err(_) => break,
            }
        }
        toolkit.drain_enrichments();
    }

    println!("{}", outcome.activity.title);
    for group in toolkit.groups() {
        println!("{} ({} members)", group.name, group.members.len());
        for member in &group.members {
            println!("  - {}", member.name);
        }
    }

    Ok(())
}

fn run_history<S: StorageBackend>(action: HistoryCommand, toolkit: &Toolkit<S, dyn CreativeText>) -> anyhow::Result<()> {
    match action {
        HistoryCommand::List { search } => {
            let entries = match search {
                Some(term) => toolkit.search_history(&term),
                None => toolkit.history_entries(),
            };
            if entries.is_empty() {
                println!("No activity recorded");
            }
            for entry in entries {
                println!(
                    "{}  {}  {:<10}  {}  |  {}",
                    entry.id,
                    format_export_time(&entry.timestamp),
                    entry.kind().to_string(),
                    entry.title,
                    entry.details
                );
            }
        }
        HistoryCommand::Delete { id } => {
            let id = ActivityId::from_string(&id)?;
            let before = toolkit.history_entries().len();
            let remaining = toolkit.delete_activity(&id);
            if remaining.len() == before {
                bail!("no activity with id {id}");
            }
            println!("Deleted {id}, {} records remain", remaining.len());
        }
        HistoryCommand::Clear { yes } => {
            if !yes {
                bail!("refusing to clear history without --yes");
            }
            toolkit.clear_history();
            println!("History cleared");
        }
        HistoryCommand::Export { id } => {
            let id = ActivityId::from_string(&id)?;
            let Some(rows) = toolkit.export_activity(&id) else {
                bail!("no activity with id {id}");
            };
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
