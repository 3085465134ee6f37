/// Tapedeck - playlist import and inspection from the command line
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tapedeck_playlist_tool::{commands, input::read_input, ToolConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tapedeck")]
#[command(about = "Normalize, inspect and export stream playlists", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TAPEDECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a playlist and print its export JSON
    Import {
        /// Playlist file, or `-` for stdin
        input: String,
        /// Further playlist files appended to the queue
        #[arg(short, long = "append", value_name = "FILE")]
        append: Vec<String>,
        /// Direct stream URLs appended as manual entries
        #[arg(short, long = "link", value_name = "URL")]
        link: Vec<String>,
    },
    /// Print the queue summary and one line per track
    Inspect {
        /// Playlist file, or `-` for stdin
        input: String,
    },
    /// Print the built-in sample playlist
    Sample,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ToolConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut session = commands::new_session(&config.player);

    let output = match cli.command {
        Commands::Import {
            input,
            append,
            link,
        } => {
            let primary = read_input(&input)?;
            let extra = append
                .into_iter()
                .map(|path| read_input(&path).map(|raw| (path, raw)))
                .collect::<Result<Vec<_>, _>>()?;
            commands::import(&mut session, &primary, &extra, &link)?
        }
        Commands::Inspect { input } => {
            let raw = read_input(&input)?;
            commands::inspect(&mut session, &raw)?
        }
        Commands::Sample => commands::sample(&mut session),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
