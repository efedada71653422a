mod app;
mod config;
mod logging;
mod settings;
mod terminal;

use clap::{Parser, Subcommand};
use config::{RunConfig, WaveArgs};
use settings::Settings;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavefill")]
#[command(version)]
#[command(about = "Scrolling Bezier wave fill animation for the terminal", long_about = None)]
struct Cli {
    /// Append engine logs to this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the waves in the terminal (q to quit, s to stop gracefully)
    Run {
        #[command(flatten)]
        wave: WaveArgs,
    },

    /// Print a single frame to stdout after a number of ticks
    Print {
        #[command(flatten)]
        wave: WaveArgs,

        /// Ticks to advance before drawing
        #[arg(short, long, default_value = "0")]
        ticks: u32,

        /// Canvas width in cells
        #[arg(long, default_value = "80")]
        cols: u16,

        /// Canvas height in cells
        #[arg(long, default_value = "24")]
        rows: u16,
    },

    /// Dump wave state and outline commands as text after a number of ticks
    Dump {
        #[command(flatten)]
        wave: WaveArgs,

        /// Ticks to advance before dumping
        #[arg(short, long, default_value = "0")]
        ticks: u32,

        /// Canvas width in cells
        #[arg(long, default_value = "80")]
        cols: u16,

        /// Canvas height in cells
        #[arg(long, default_value = "24")]
        rows: u16,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        logging::init(path, logging::level_for(cli.verbose))?;
    }

    let settings = Settings::load();

    match cli.command {
        Commands::Run { wave } => {
            app::run(RunConfig::resolve(&wave, &settings))?;
        }
        Commands::Print { wave, ticks, cols, rows } => {
            let config = RunConfig::resolve(&wave, &settings);
            app::print(config, cols, rows, ticks, &mut io::stdout().lock())?;
        }
        Commands::Dump { wave, ticks, cols, rows } => {
            let config = RunConfig::resolve(&wave, &settings);
            app::dump(config, cols, rows, ticks, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
