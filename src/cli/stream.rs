//! Block-oriented conversion pipeline.
//!
//! Drives a decoder/encoder pair over fixed-size blocks read from an
//! input stream. Both conversion directions run through the same loop:
//! encoding decodes linear PCM bytes and re-encodes them as ADPCM,
//! decoding does the reverse.

use crate::codec::{AudioDecoder, AudioEncoder, CodecError};
use std::io::{self, Read, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Totals for one completed conversion
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertStats {
    /// Samples that passed through the codec pair
    pub samples: u64,
    /// Bytes written to the output stream
    pub bytes_out: u64,
}

/// Run one conversion to completion.
///
/// Reads blocks of up to `block_bytes`, feeds them through `decoder` and
/// `encoder`, and writes every produced block in full. A zero-length read
/// ends the stream; I/O failures surface unchanged, with no retry and no
/// cleanup of partially written output.
pub fn convert_blocks<R, W, D, E>(
    reader: &mut R,
    writer: &mut W,
    decoder: &mut D,
    encoder: &mut E,
    block_bytes: usize,
) -> Result<ConvertStats, StreamError>
where
    R: Read,
    W: Write,
    D: AudioDecoder,
    E: AudioEncoder,
{
    let mut block = vec![0u8; block_bytes];
    let mut stats = ConvertStats::default();

    loop {
        let n = read_block(reader, &mut block)?;
        if n == 0 {
            break;
        }

        let samples = decoder.decode(&block[..n])?;
        let bytes = encoder.encode(&samples)?;
        writer.write_all(&bytes)?;

        stats.samples += samples.len() as u64;
        stats.bytes_out += bytes.len() as u64;
        debug!(block_bytes = n, samples = samples.len(), "converted block");
    }

    writer.flush()?;
    Ok(stats)
}

/// Fill `block` from `reader`, tolerating end of input. A short return
/// value can only mean the stream ended.
fn read_block<R: Read>(reader: &mut R, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
