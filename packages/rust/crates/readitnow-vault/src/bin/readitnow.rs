#![allow(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use readitnow_vault::{
    ReadItNowConfig, ReadState, VaultError, VaultManager, load_or_create_config,
    resolve_config_path, write_config,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "readitnow",
    about = "Browse and mark the most recent notes of a ReadItLater vault",
    arg_required_else_help = true
)]
struct Cli {
    /// Explicit config file path (default: `<config_dir>/readitnow/config.yaml`).
    #[arg(long = "conf", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Vault directory, overriding the config file.
    #[arg(long, short = 'v', value_name = "DIR", global = true)]
    vault: Option<PathBuf>,

    /// Maximum notes listed, overriding the config file.
    #[arg(long, value_name = "N", global = true)]
    max_notes: Option<usize>,

    /// Excerpt length in lines, overriding the config file.
    #[arg(long, value_name = "N", global = true, value_parser = clap::value_parser!(u64).range(1..))]
    excerpt_lines: Option<u64>,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    /// Debug logging on stderr (`RUST_LOG` takes precedence).
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the most recently modified notes, newest first.
    List,
    /// Return vault statistics.
    Stats,
    /// Return metadata for one note file.
    Show { path: PathBuf },
    /// Mark a note as read.
    Read { path: PathBuf },
    /// Mark a note as unread.
    Unread { path: PathBuf },
    /// Flip the read state of a note.
    Toggle { path: PathBuf },
    /// Write the default config file if it does not exist yet.
    Init,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn emit<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("failed to serialize CLI output as JSON")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "readitnow_vault=debug,readitnow_io=debug,readitnow=debug"
        } else {
            "readitnow_vault=info,readitnow_io=info,readitnow=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_effective_config(cli: &Cli) -> Result<ReadItNowConfig> {
    let mut config = load_or_create_config(cli.config_file.as_deref())
        .context("failed to load readitnow config")?;
    if let Some(vault) = &cli.vault {
        config.vault_path = readitnow_vault::config::expand_home(vault);
    }
    if let Some(max_notes) = cli.max_notes {
        config.max_notes = max_notes;
    }
    if let Some(excerpt_lines) = cli.excerpt_lines {
        config.excerpt_lines = usize::try_from(excerpt_lines).context("excerpt_lines too large")?;
    }
    Ok(config)
}

fn run_mutation(
    path: &Path,
    output: OutputFormat,
    outcome: Result<ReadState, VaultError>,
) -> Result<()> {
    match outcome {
        Ok(state) => emit(
            &json!({"path": path, "ok": true, "is_read": state.is_read()}),
            output,
        ),
        Err(err) => {
            emit(
                &json!({"path": path, "ok": false, "error": err.to_string()}),
                output,
            )?;
            bail!("{err}")
        }
    }
}

fn init_config(cli: &Cli) -> Result<()> {
    let path = resolve_config_path(cli.config_file.as_deref())?;
    let created = !path.is_file();
    if created {
        write_config(&path, &ReadItNowConfig::default())?;
    }
    emit(&json!({"path": path, "created": created}), cli.output)
}

fn open_vault(cli: &Cli) -> Result<VaultManager> {
    let config = load_effective_config(cli)?;
    VaultManager::from_config(&config)
        .with_context(|| format!("cannot open vault {}", config.vault_path.display()))
}

fn execute(cli: &Cli, vault: Option<&VaultManager>) -> Result<()> {
    let vault = match (&cli.command, vault) {
        (Command::Init, _) => return init_config(cli),
        (_, Some(vault)) => vault,
        (_, None) => bail!("vault is not open"),
    };
    match &cli.command {
        Command::List => {
            let notes = vault.scan().context("failed to scan vault")?;
            emit(&notes, cli.output)
        }
        Command::Stats => emit(&vault.statistics(), cli.output),
        Command::Show { path } => match vault.get_by_path(path) {
            Some(note) => emit(&note, cli.output),
            None => bail!("note not found: {}", path.display()),
        },
        Command::Read { path } => run_mutation(path, cli.output, vault.try_mark_as_read(path)),
        Command::Unread { path } => {
            run_mutation(path, cli.output, vault.try_mark_as_unread(path))
        }
        Command::Toggle { path } => {
            run_mutation(path, cli.output, vault.try_toggle_read_status(path))
        }
        Command::Init => init_config(cli),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let needs_vault = !matches!(&cli.command, Command::Init);
    if needs_vault {
        let vault = open_vault(&cli)?;
        execute(&cli, Some(&vault))
    } else {
        execute(&cli, None)
    }
}
