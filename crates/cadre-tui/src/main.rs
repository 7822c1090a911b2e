//! Standalone roster panel binary for Cadre.

use std::path::PathBuf;
use std::process;

use cadre_core::{EntitySet, Roster};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cadre-tui",
    about = "Terminal roster panel for Cadre",
    version
)]
struct Args {
    /// Path to a JSON roster file; the built-in demo roster when omitted
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Entity set to open on (subordinates, player, hq, reserves)
    #[arg(long, default_value = "subordinates")]
    set: String,

    /// Entity slot to open on
    #[arg(long, default_value = "0")]
    slot: usize,

    /// Write tracing output to this file (stderr would tear the screen)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log
        && let Err(e) = init_logging(path)
    {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let roster = match &args.roster {
        Some(path) => match Roster::from_path(path) {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => Roster::demo(),
    };

    let Some(set) = EntitySet::from_name(&args.set) else {
        eprintln!("error: unknown entity set \"{}\"", args.set);
        process::exit(1);
    };

    let app = cadre_tui::app::CadreApp::new(roster, set, args.slot);

    if let Err(e) = cadre_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Route tracing output to a file so it never corrupts the alternate
/// screen.
fn init_logging(path: &std::path::Path) -> Result<(), String> {
    let file = std::fs::File::create(path).map_err(|e| format!("cannot open log file: {e}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
