//! Query an orienteering terrain map from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use orienteering_cli::{Config, OutputFormat, Session};
use orienteering_core::{load_map, TerrainMap};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load a terrain map and query its waypoints and routes
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Map definition (JSON). Defaults to $ORIENTEERING_MAP
    #[arg(long)]
    map: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Run a command and exit instead of reading stdin (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orienteering=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let map = match args.map.or(config.map_file) {
        Some(path) => {
            let (map, report) = load_map(&path)
                .with_context(|| format!("loading map {}", path.display()))?;
            for rejected in &report.rejected_connections {
                tracing::warn!("{rejected}");
            }
            map
        }
        None => {
            tracing::warn!("no map file given, starting with an empty map");
            TerrainMap::new()
        }
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let session = Session::new(map, format);

    if args.commands.is_empty() {
        let stdin = io::stdin();
        return session.run(stdin.lock(), io::stdout(), &config.prompt);
    }

    session.run_commands(&args.commands, io::stdout().lock())
}
