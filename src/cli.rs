use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use quiz_songs::{
    config::ConfigBuilder,
    songs::{SongRecord, codec, errors::Result, openapi},
};

#[derive(Parser)]
#[command(name = "quiz-songs")]
#[command(version, about = "Song records of the quiz backend", long_about = None)]
struct Cli {
    /// Print compact JSON instead of pretty JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the OpenAPI document describing the song schema
    Schema {},
    /// Print the documented example song
    Example {},
    /// Decode a song, or an array of songs, and print it back as JSON
    Decode {
        /// Input file, stdin when omitted or `-`
        path: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ConfigBuilder::new();
    if cli.compact {
        builder = builder.pretty(false);
    }
    let config = builder.build()?;

    let output = match &cli.command {
        Commands::Schema {} => openapi::render(&config)?,
        Commands::Example {} => codec::to_json_string(&SongRecord::example(), config.pretty)?,
        Commands::Decode { path } => {
            info!("Decoding songs ...");
            codec::decode_to_json(path.as_deref(), io::stdin().lock(), config.pretty)?
        }
    };
    println!("{output}");
    Ok(())
}
