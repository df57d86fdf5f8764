use anyhow::{Context, Result};
use clap::Parser;
use playlist_manager::clock::ClockKind;
use playlist_manager::{Session, SessionConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Manage a song/album library and a most-recent-first playlist", long_about = None)]
struct Args {
    /// Read commands from this file instead of standard input
    #[arg(short = 's', long)]
    script: Option<String>,

    /// Keep playlist entries when their library record is deleted
    #[arg(long)]
    no_cascade: bool,

    /// Stamp entries with a logical clock (reproducible ordering)
    #[arg(long)]
    logical_clock: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let clock = if args.logical_clock {
        ClockKind::Logical
    } else {
        ClockKind::System
    };
    let config = SessionConfig::new()
        .with_cascade(!args.no_cascade)
        .with_clock(clock);

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.script {
        Some(script) => {
            // Expand ~ in the script path
            let path = PathBuf::from(shellexpand::tilde(&script).as_ref());
            log::info!("Running script {:?}", path);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {:?}", path))?;
            session.run_script(BufReader::new(file), &mut out)?;
        }
        None => {
            log::info!("Reading commands from standard input (type 'help')");
            session.run_script(io::stdin().lock(), &mut out)?;
        }
    }

    log::info!(
        "Session finished: {} songs, {} albums, {} playlist entries",
        session.library().song_count(),
        session.library().album_count(),
        session.playlist().len()
    );

    Ok(())
}
