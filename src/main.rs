use anyhow::Result;
use clap::{Parser, Subcommand};
use shutdown_scheduler::tui::{self, Settings};
use shutdown_scheduler::{abort_shutdown, schedule_shutdown, Logger, NativeShutdown};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shutdown-scheduler")]
#[command(author, version, about = "Schedule or cancel an OS shutdown from a terminal menu", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// How long result messages stay on screen in the menu, in milliseconds
    #[arg(long, default_value_t = 1000, global = true)]
    pause_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Interactive,

    /// Schedule a shutdown without the menu
    Schedule {
        /// Delay before the shutdown, in minutes
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        minutes: u32,
    },

    /// Cancel a pending shutdown without the menu
    Abort,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(started: bool) -> ExitCode {
    if started {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let settings = Settings {
                pause: Duration::from_millis(cli.pause_ms),
            };
            tui::run(settings)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Schedule { minutes } => {
            setup_logging(cli.verbose);
            let started = schedule_shutdown(&NativeShutdown::default(), &Logger::stdout(), minutes);
            Ok(exit_code(started))
        }

        Commands::Abort => {
            setup_logging(cli.verbose);
            let started = abort_shutdown(&NativeShutdown::default(), &Logger::stdout());
            Ok(exit_code(started))
        }
    }
}
