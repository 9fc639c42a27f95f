//! Folio CLI entry point
//!
//! Command-line interface for the folio terminal portfolio: interactive
//! viewing, structured export, plain-text preview, and a terminal check.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::{
    content::ContentStore,
    models::presentation::PresentationMode,
    theme::ThemeMode,
};
use folio_tui::{export_structured_data, run_tui, FolioTui, TuiConfig};
use folio_utils::logging::{basic_config, LogLevel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - a terminal portfolio viewer")]
#[command(
    long_about = "Renders a personal portfolio as a scrollable terminal document with a \
                  dark/light theme toggle, scroll-linked experience timeline, and \
                  certificate detail overlay."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a content profile file (JSON or TOML) overriding the
    /// built-in data
    #[arg(value_name = "PROFILE_PATH")]
    profile_path: Option<PathBuf>,

    /// Export the generated document to JSON instead of running the TUI
    #[arg(short, long)]
    export: bool,

    /// Output file for exported data
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Presentation mode: gallery or studio
    #[arg(long)]
    mode: Option<PresentationMode>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Settings file (TOML or JSON); FOLIO_* environment variables
    /// override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show a plain-text preview of every section (no interactive
    /// terminal)
    #[arg(long)]
    preview: bool,

    /// Force TUI mode (skip terminal check)
    #[arg(long)]
    force_tui: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive TUI
    Run {
        /// Path to a content profile file
        profile_path: Option<PathBuf>,
    },
    /// Export the generated document as structured JSON
    Export {
        /// Path to a content profile file
        profile_path: Option<PathBuf>,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a plain-text preview of every section
    Preview {
        /// Path to a content profile file
        profile_path: Option<PathBuf>,
    },
    /// Validate terminal configuration
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    basic_config(Some(LogLevel::Warning)).ok();
    run_main_logic(&cli)
}

fn run_main_logic(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Run { profile_path }) => {
            run_interactive_tui(profile_path.clone(), cli, false)
        }
        Some(Commands::Export {
            profile_path,
            output,
        }) => export_document(profile_path.clone(), output.clone(), cli),
        Some(Commands::Preview { profile_path }) => show_text_preview(profile_path.clone(), cli),
        Some(Commands::Validate) => validate_configuration(),
        None => {
            // Legacy flag interface
            if cli.export {
                export_document(cli.profile_path.clone(), cli.output.clone(), cli)
            } else if cli.preview {
                show_text_preview(cli.profile_path.clone(), cli)
            } else {
                run_interactive_tui(cli.profile_path.clone(), cli, cli.force_tui)
            }
        }
    }
}

fn load_store(profile_path: Option<&PathBuf>) -> Result<ContentStore> {
    match profile_path {
        Some(path) => {
            let store = ContentStore::from_file(path)?;
            eprintln!("Loaded content profile from {}", path.display());
            Ok(store)
        }
        None => Ok(ContentStore::builtin()),
    }
}

fn tui_config(cli: &Cli) -> Result<TuiConfig> {
    // Defaults -> settings file -> FOLIO_* environment, then CLI flags win
    let mut config: TuiConfig = folio_utils::config::load_layered(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if cli.dark {
        config.theme = ThemeMode::Dark;
    }
    Ok(config)
}

/// Run the interactive TUI
fn run_interactive_tui(
    profile_path: Option<PathBuf>,
    cli: &Cli,
    force_tui: bool,
) -> Result<()> {
    if !force_tui && !atty::is(atty::Stream::Stdout) {
        eprintln!("Error: not running in a terminal environment.");
        eprintln!("Try preview or export mode instead:");
        eprintln!("   folio --preview");
        eprintln!("   folio export -o portfolio.json");
        eprintln!("Or force TUI mode: folio --force-tui");
        std::process::exit(1);
    }

    let store = load_store(profile_path.as_ref())?;
    match run_tui(store, tui_config(cli)?) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("TUI failed: {e}");
            eprintln!("Try export mode instead: folio export -o portfolio.json");
            Err(e)
        }
    }
}

/// Show a plain-text preview of every section (no interactive terminal
/// required)
fn show_text_preview(profile_path: Option<PathBuf>, cli: &Cli) -> Result<()> {
    let store = load_store(profile_path.as_ref())?;
    let tui = FolioTui::new_headless(store, tui_config(cli)?)?;
    print!("{}", tui.preview_text());
    println!("Run `folio` in a terminal for the interactive experience.");
    Ok(())
}

/// Export the generated document as structured JSON
fn export_document(
    profile_path: Option<PathBuf>,
    output: Option<PathBuf>,
    cli: &Cli,
) -> Result<()> {
    let store = load_store(profile_path.as_ref())?;
    let tui = FolioTui::new_headless(store, tui_config(cli)?)?;
    let exported = export_structured_data(tui.store(), tui.document())?;

    match output {
        Some(file_path) => {
            std::fs::write(&file_path, &exported)?;
            println!("Document exported to: {}", file_path.display());
        }
        None => println!("{exported}"),
    }

    println!();
    println!("Export summary:");
    println!("   Sections: {}", tui.document().len());
    println!("   Experiences: {}", tui.store().experiences.len());
    println!("   Projects: {}", tui.store().projects.len());
    println!("   Certifications: {}", tui.store().certifications.len());
    Ok(())
}

/// Validate terminal configuration
fn validate_configuration() -> Result<()> {
    println!("Validating folio terminal configuration...");

    let terminal_size = crossterm::terminal::size()?;
    println!("   Terminal size: {}x{}", terminal_size.0, terminal_size.1);

    if terminal_size.0 < 80 || terminal_size.1 < 24 {
        println!("   Warning: terminal is small. Recommended: 120x40 or larger");
    } else {
        println!("   Terminal size is adequate");
    }

    println!("   Color support: available");
    println!();
    println!("folio is ready. Usage: folio [run|export|preview|validate]");
    Ok(())
}
