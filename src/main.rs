// src/main.rs
mod cli;
use std::path::PathBuf;
use clap::{Parser, Subcommand};
#[derive(Parser)]
#[command(name = "eit-model")]
#[command(about = "Process EIT voltage frames and inspect chamber models")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}
#[derive(Subcommand)]
enum Commands {
    /// Transform a reference/measurement frame pair and print data and plot labels
    Process {
        /// Measurement JSON: {"reference": [[[re, im], ...]] | null, "frame": ..., "labels": [[idx, freq], [idx, freq]]}
        #[arg(short, long)]
        data: PathBuf,

        /// Model config JSON (defaults to a 16 electrode ring)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Imaging type, e.g. "Time difference imaging"
        #[arg(short, long, default_value = "Absolute imaging")]
        imaging: String,

        /// Transform pair applied to both frames
        #[arg(short, long, num_args = 2, value_names = ["FIRST", "SECOND"], default_values = ["Identity", "Identity"])]
        transform: Vec<String>,
    },

    /// Print the electrode positions and patterns derived from a model config
    Setup {
        /// Model config JSON (defaults to a 16 electrode ring)
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
}
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Process {
            data,
            model,
            imaging,
            transform,
        } => cli::run_process(&data, model.as_deref(), &imaging, &transform),
        Commands::Setup { model } => cli::run_setup(model.as_deref()),
    }
}
