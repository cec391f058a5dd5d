//! Backspin CLI - play audio backwards
//!
//! This binary reverses audio files or raw recordings and writes the result
//! as WAV, and inspects the WAV files it produces.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use backspin_cli::commands;
use backspin_cli::commands::record::RawInput;

/// Backspin - reverse audio and export it as WAV
#[derive(Parser)]
#[command(name = "backspin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an audio file, reverse it and write a WAV file
    Reverse {
        /// Path to the input audio file (WAV, MP3, FLAC, Ogg Vorbis)
        #[arg(short, long)]
        input: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        /// Output sample format (overrides the config file)
        #[arg(short, long, value_parser = ["float32", "int16"])]
        format: Option<String>,

        /// JSON file with export options
        #[arg(long)]
        config: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Capture raw PCM from a file or stdin, reverse it and write a WAV file
    Record {
        /// Raw interleaved PCM source, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Number of interleaved channels in the source
        #[arg(short, long, default_value_t = 2)]
        channels: u16,

        /// Sample rate of the source in Hz
        #[arg(short = 'r', long, default_value_t = 44100)]
        sample_rate: u32,

        /// Raw sample encoding of the source
        #[arg(long, default_value = "s16le", value_parser = ["f32le", "s16le"])]
        raw_format: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        /// Output sample format (overrides the config file)
        #[arg(short, long, value_parser = ["float32", "int16"])]
        format: Option<String>,

        /// JSON file with export options
        #[arg(long)]
        config: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header fields of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Reverse {
            input,
            output,
            format,
            config,
            json,
        } => commands::reverse::run(
            &input,
            &output,
            format.as_deref(),
            config.as_deref(),
            json,
        ),
        Commands::Record {
            input,
            channels,
            sample_rate,
            raw_format,
            output,
            format,
            config,
            json,
        } => commands::record::run(
            RawInput {
                path: &input,
                channels,
                sample_rate,
                raw_format: &raw_format,
            },
            &output,
            format.as_deref(),
            config.as_deref(),
            json,
        ),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
