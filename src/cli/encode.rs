use super::stream::{convert_blocks, StreamError};
use crate::codec::{LinearCodec, SampleWidth, VoxCodec};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub struct EncodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: SampleWidth,
    pub block_samples: usize,
    pub quiet: bool,
}

/// Run the encode command
pub fn run_encode(options: EncodeOptions) -> Result<(), EncodeError> {
    if !options.input.exists() {
        return Err(EncodeError::FileNotFound(
            options.input.to_string_lossy().to_string(),
        ));
    }

    let mut reader = BufReader::new(File::open(&options.input)?);
    let mut writer = BufWriter::new(File::create(&options.output)?);

    let mut pcm = LinearCodec::new(options.width);
    let mut vox = VoxCodec::new();

    if !options.quiet {
        println!(
            "Encoding {} to {}",
            options.input.display(),
            options.output.display()
        );
        println!("  Input: {}", options.width);
    }

    // Round up to an even sample count so packed nibbles stay aligned
    // across block boundaries.
    let block_samples = options.block_samples.max(2);
    let block_samples = block_samples + (block_samples & 1);
    let block_bytes = block_samples * options.width.bytes_per_sample();

    let stats = convert_blocks(&mut reader, &mut writer, &mut pcm, &mut vox, block_bytes)?;

    info!(
        samples = stats.samples,
        bytes = stats.bytes_out,
        "encode complete"
    );

    if !options.quiet {
        println!("  {} samples -> {} ADPCM bytes", stats.samples, stats.bytes_out);
    }

    Ok(())
}
