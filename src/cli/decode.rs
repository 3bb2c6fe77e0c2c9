use super::stream::{convert_blocks, StreamError};
use crate::codec::{LinearCodec, SampleWidth, VoxCodec};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub struct DecodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: SampleWidth,
    pub block_samples: usize,
    pub quiet: bool,
}

/// Run the decode command
pub fn run_decode(options: DecodeOptions) -> Result<(), DecodeError> {
    if !options.input.exists() {
        return Err(DecodeError::FileNotFound(
            options.input.to_string_lossy().to_string(),
        ));
    }

    let mut reader = BufReader::new(File::open(&options.input)?);
    let mut writer = BufWriter::new(File::create(&options.output)?);

    let mut vox = VoxCodec::new();
    let mut pcm = LinearCodec::new(options.width);

    if !options.quiet {
        println!(
            "Decoding {} to {}",
            options.input.display(),
            options.output.display()
        );
        println!("  Output: {}", options.width);
    }

    // Two samples per ADPCM byte.
    let block_bytes = (options.block_samples.max(2) / 2).max(1);

    let stats = convert_blocks(&mut reader, &mut writer, &mut vox, &mut pcm, block_bytes)?;

    info!(
        samples = stats.samples,
        bytes = stats.bytes_out,
        "decode complete"
    );

    if !options.quiet {
        println!("  {} samples -> {} PCM bytes", stats.samples, stats.bytes_out);
    }

    Ok(())
}
