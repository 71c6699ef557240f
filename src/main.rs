//! quill entrypoint.
//!
//! Opens a file in an editor window and drives the find/replace dialogs from
//! the command line, printing each status line.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use quill_app::{AppWindow, Command, Outcome};
use quill_config::Config;
use quill_logger::LogLevel;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Find and replace in a text file")]
struct Args {
    /// File to open
    pub path: PathBuf,
    /// Term to search for
    #[arg(long)]
    pub find: Option<String>,
    /// Replace occurrences of the term with this text
    #[arg(long, requires = "find")]
    pub replace: Option<String>,
    /// Replace every occurrence at once
    #[arg(long, requires = "replace")]
    pub all: bool,
    /// Search backwards
    #[arg(long, conflicts_with = "replace")]
    pub previous: bool,
    /// Match letter case exactly
    #[arg(long)]
    pub case_sensitive: bool,
    /// Stop at the end of the document instead of wrapping
    #[arg(long)]
    pub no_wrap: bool,
    /// Number of find or replace steps
    #[arg(long, default_value_t = 1)]
    pub count: usize,
    /// Write the document back when it changed
    #[arg(long)]
    pub save: bool,
    /// Configuration file (overrides the XDG config)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Log at debug level and print the session log to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let result = run(&args);
    if args.verbose {
        for entry in quill_logger::get_entries() {
            eprintln!("{}", entry);
        }
    }
    result
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Using default configuration: {:#}", e);
            Config::default()
        }),
    };
    if args.case_sensitive {
        config.search.case_sensitive = true;
    }
    if args.no_wrap {
        config.search.wrap_around = false;
    }

    quill_app::init_logging(&config.logging);
    if args.verbose {
        quill_logger::set_min_level(LogLevel::Debug);
    }

    let mut window = AppWindow::new(config);
    window.execute(Command::Open(args.path.clone()))?;
    println!("{}", window.status());
    if window.current_path().is_none() {
        anyhow::bail!("Could not open {}", args.path.display());
    }

    if let Some(term) = &args.find {
        match &args.replace {
            Some(replacement) => run_replace(&mut window, args, term, replacement)?,
            None => run_find(&mut window, args, term)?,
        }
    }

    if window.is_modified() {
        if args.save && window.execute(Command::Save)? == Outcome::NeedsPath {
            anyhow::bail!("No path to save to");
        }
        println!("{}", window.status());
    }

    window.close_dialogs()?;
    quill_logger::info("quill finished");
    Ok(())
}

fn run_find(window: &mut AppWindow, args: &Args, term: &str) -> Result<()> {
    window.with_find(|dialog, view| dialog.set_term(view, term))?;

    for _ in 0..args.count {
        let status = window.with_find(|dialog, view| {
            if args.previous {
                dialog.previous(view)
            } else {
                dialog.next(view)
            }
        })?;

        if status.is_match() {
            let buffer = window.view().buffer();
            let (start, _) = buffer.selection()?;
            let (line, column) = buffer.line_column(start)?;
            println!("{} ({}:{})", status, line + 1, column + 1);
        } else {
            println!("{}", status);
            break;
        }
    }
    Ok(())
}

fn run_replace(window: &mut AppWindow, args: &Args, term: &str, replacement: &str) -> Result<()> {
    window.with_replace(|dialog, view| {
        dialog.set_replacement(replacement);
        dialog.set_term(view, term)
    })?;

    if args.all {
        let status = window.with_replace(|dialog, view| dialog.replace_all(view))?;
        println!("{}", status);
        return Ok(());
    }

    for _ in 0..args.count {
        let status = window.with_replace(|dialog, view| dialog.replace_next(view))?;
        println!("{}", status);
        if status.is_failure() {
            break;
        }
    }
    Ok(())
}
