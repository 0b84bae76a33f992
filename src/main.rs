use clap::Parser;
use eyre::Result;
use std::io;
use std::path::PathBuf;
use taskmanager::{Config, IdScheme, Navigator, Renderer, Screen, Shell, TaskList};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "taskmanager")]
#[command(about = "TaskManager - add, complete and remove tasks in an interactive shell")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/taskmanager/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to start on: login, tasks, completed, removed
    #[arg(long)]
    start: Option<Screen>,

    /// Id scheme for new tasks: sequential, time-ordered
    #[arg(long)]
    ids: Option<IdScheme>,

    /// Disable ANSI styling
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing on stderr so it does not interleave with rendered screens
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(screen) = cli.start {
        config.start_screen = screen;
    }
    if let Some(scheme) = cli.ids {
        config.id_scheme = scheme;
    }
    if cli.no_color {
        config.color = false;
    }
    info!(?config, "Starting task manager");

    let mut shell = Shell::new(
        TaskList::with_ids(config.id_scheme.generator()),
        Navigator::new(config.start_screen),
        Renderer::new(config.color),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
