//! notes - plain-text notes with tags and an in-memory search index

pub mod app;
pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::io;
use std::sync::Arc;

use app::NotesApp;
use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add_tags, handle_create, handle_delete, handle_edit, handle_list, handle_refresh,
        handle_remove_tags, handle_search, handle_set_tags, handle_show, handle_stats, handle_tags,
    },
    shell::run_interactive,
};
use infra::LogFacade;

/// Environment variable that turns on debug logging when non-empty.
pub const DEBUG_ENV: &str = "NOTESAPP_DEBUG";

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "notes", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    let mut app = NotesApp::open(&notes_dir, Arc::new(LogFacade))
        .with_context(|| format!("failed to open notes directory {}", notes_dir.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Create(args) => handle_create(args, &mut app, &mut out),
        Command::List(args) => handle_list(args, &app, &mut out),
        Command::Search(args) => handle_search(args, &app, &mut out),
        Command::Show(args) => handle_show(args, &app, &mut out),
        Command::Tags(args) => handle_tags(args, &app, &mut out),
        Command::SetTags(args) => handle_set_tags(args, &mut app, &mut out),
        Command::AddTags(args) => handle_add_tags(args, &mut app, &mut out),
        Command::RemoveTags(args) => handle_remove_tags(args, &mut app, &mut out),
        Command::Delete(args) => handle_delete(args, &mut app, &mut io::stdin().lock(), &mut out),
        Command::Edit(args) => handle_edit(args, &mut app, &config, &mut out),
        Command::Refresh => handle_refresh(&mut app, verbose, &mut out),
        Command::Stats => handle_stats(&app, &mut out),
        Command::Shell => {
            // The shell locks stdout itself.
            drop(out);
            run_interactive(&mut app).with_context(|| "shell I/O failed")
        }
        Command::Completions(_) => Ok(()),
    }
}

/// Installs the `env_logger` backend.
///
/// Warnings are shown by default; `-v` or a non-empty `NOTESAPP_DEBUG`
/// raises the level to debug. `RUST_LOG` overrides both.
fn init_logging(verbose: u8) {
    let debug = verbose > 0 || std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty());
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
