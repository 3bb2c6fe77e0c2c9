use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod decode;
pub mod encode;
pub mod stream;

// Re-exports for convenient access
pub use decode::run_decode;
pub use encode::run_encode;

#[derive(Parser)]
#[command(name = "vox-convert")]
#[command(author, version, about = "Dialogic/OKI VOX ADPCM voice file converter")]
#[command(long_about = "Converts raw voice files between linear PCM and the Dialogic/OKI \
    ADPCM (.vox / .32K) format.\n\n\
    Input and output are headerless sample streams. Files must be sampled at a rate the \
    target hardware expects: 8 kHz for 32K files, 6053 Hz for the normal 24K vox format.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a raw PCM voice file to VOX ADPCM
    Encode {
        /// Input file (raw 8-bit unsigned or 16-bit signed PCM)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (VOX ADPCM, two samples per byte)
        #[arg(short, long)]
        output: PathBuf,

        /// Bits per input sample: 8 or 16.
        /// Other values fall back to the 8-bit default with a warning.
        #[arg(short, long)]
        bits: Option<u32>,
    },

    /// Decode a VOX ADPCM file to raw PCM
    Decode {
        /// Input file (VOX ADPCM)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (raw 8-bit unsigned or 16-bit signed PCM)
        #[arg(short, long)]
        output: PathBuf,

        /// Bits per output sample: 8 or 16.
        /// Other values fall back to the 8-bit default with a warning.
        #[arg(short, long)]
        bits: Option<u32>,
    },
}
