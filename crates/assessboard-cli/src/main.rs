//! CLI for assessboard: assessment results in your terminal.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

use commands::ResultArgs;

#[derive(Parser)]
#[command(name = "assessboard")]
#[command(about = "assessboard: rank, percentile and score dashboard for an assessment")]
#[command(version = assessboard_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (TUI). Press `u` to edit the results.
    Dashboard {
        #[command(flatten)]
        result: ResultArgs,

        /// Keep drafts and error messages when the update dialog is reopened
        /// (default: reset them to the current values)
        #[arg(long)]
        keep_errors: bool,
    },

    /// Print the dashboard contents: stats, comparison text, syllabus, score analysis
    Summary {
        #[command(flatten)]
        result: ResultArgs,

        /// Emit the full dashboard view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the comparison curve for a percentile
    Series {
        /// User percentile the curve is centred on (0-100)
        #[arg(value_parser = clap::value_parser!(u32).range(0..=100))]
        percentile: u32,

        /// Emit the points as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard {
            result,
            keep_errors,
        } => commands::dashboard::run(result.summary(), result.average, keep_errors),
        Commands::Summary { result, json } => {
            commands::summary::run(&result.summary(), result.average, json)
        }
        Commands::Series { percentile, json } => commands::series::run(percentile, json),
    }
}
