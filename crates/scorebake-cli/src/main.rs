//! scorebake CLI - renders the built-in arrangement offline
//!
//! This binary renders the compiled-in multi-track arrangement, writes it to a
//! WAV file and inspects its score and pitches.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use scorebake_cli::{commands, logging};
use scorebake_render::{RenderConfig, DEFAULT_SAMPLE_RATE};

/// scorebake - offline arrangement renderer
#[derive(Parser)]
#[command(name = "scorebake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log render diagnostics to stderr (RUST_LOG overrides the filter)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the arrangement to a normalized stereo buffer
    Render {
        /// Output sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Seed for the noise tracks (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// WAV file to write
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the arrangement expanded to frame positions as JSON
    Score {
        /// Sample rate the frame positions are computed for
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Resolve pitch names to frequencies
    Pitch {
        /// Pitch names such as A4, C#5 or Bb3
        #[arg(required = true)]
        names: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check that this host can render and write output
    Doctor {
        /// Directory the WAV sink would write into
        #[arg(long, default_value = ".")]
        output_dir: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            sample_rate,
            seed,
            output,
            json,
        } => {
            let config = RenderConfig { sample_rate, seed };
            commands::render::run(&config, output.as_deref(), json)
        }
        Commands::Score {
            sample_rate,
            pretty,
        } => commands::score::run(sample_rate, pretty),
        Commands::Pitch { names, json } => commands::pitch::run(&names, json),
        Commands::Doctor { output_dir, json } => commands::doctor::run(&output_dir, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
