use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fibertrack::audit::AuditLogger;
use fibertrack::cli::Shell;
use fibertrack::config::{LedgerPaths, Settings};
use fibertrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fibertrack",
    version,
    about = "Customer record keeper for a fabric business",
    long_about = "fibertrack keeps a session's customer purchase records: name, date \
                  of purchase, size, design, colour, rate, bill amount and outstanding \
                  balance. Records live in memory for the length of the session."
)]
struct Cli {
    /// Append the audit trail to this file as JSON lines
    #[arg(long, global = true, env = "FIBERTRACK_AUDIT_LOG")]
    audit_log: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Read commands line by line from standard input
    Shell,

    /// Show current configuration and paths
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            let mut storage = open_storage(&cli.audit_log, &settings, &paths);
            fibertrack::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::Shell) => {
            let mut storage = open_storage(&cli.audit_log, &settings, &paths);
            let interactive = io::stdin().is_terminal();
            Shell::new(&mut storage, &settings).run(io::stdin().lock(), io::stdout().lock(), interactive)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                paths.ensure_directories()?;
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }

            println!("fibertrack Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            let written = if paths.is_initialized() {
                ""
            } else {
                " (not written; run 'fibertrack config --init')"
            };
            println!("Settings file:    {}{}", paths.settings_file().display(), written);
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Business name:     {}", settings.business_name);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Audit log enabled: {}", settings.audit_log_enabled);
        }
        None => {
            println!("fibertrack - {}", settings.business_name);
            println!();
            println!("Run 'fibertrack --help' for usage information.");
            println!("Run 'fibertrack tui' to launch the interactive interface.");
            println!("Run 'fibertrack shell' to enter records line by line.");
        }
    }

    Ok(())
}

/// A fresh session store with the audit sink chosen by flag, env or settings
fn open_storage(audit_log: &Option<PathBuf>, settings: &Settings, paths: &LedgerPaths) -> Storage {
    let audit = match audit_log {
        Some(path) => AuditLogger::with_file(path.clone()),
        None if settings.audit_log_enabled => AuditLogger::with_file(paths.audit_log()),
        None => AuditLogger::in_memory(),
    };

    if let Some(path) = audit.log_path() {
        log::info!("Audit trail mirrored to {}", path.display());
    }

    Storage::in_memory(audit)
}
