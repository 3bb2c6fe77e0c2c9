//! Linear PCM handling and bit-depth normalization.
//!
//! External voice samples are 8-bit unsigned (biased by 128) or 16-bit
//! signed little-endian. The ADPCM coder works on a common 12-bit signed
//! range regardless of the external width; the conversions here bridge
//! the two. The 8-bit path loses more precision than the 16-bit path, a
//! property of the format rather than a defect.

#![allow(dead_code)]

use super::traits::{AudioDecoder, AudioEncoder, CodecError, SampleWidth};
use tracing::warn;

/// Linear PCM codec bridging external samples and the coder's 12-bit range
pub struct LinearCodec {
    width: SampleWidth,
}

impl LinearCodec {
    pub fn new(width: SampleWidth) -> Self {
        Self { width }
    }

    #[must_use]
    pub fn width(&self) -> SampleWidth {
        self.width
    }

    /// Expand one 8-bit unsigned sample to the 12-bit range
    #[inline]
    fn sample_from_u8(sample: u8) -> i16 {
        (sample as i16 - 128) * 16
    }

    /// Narrow one 12-bit value to an 8-bit unsigned sample.
    ///
    /// Divides by 32 rather than 16, halving the amplitude; the reference
    /// Dialogic converter settled on this scale after clipping trouble on
    /// the 8-bit path, and existing decoders expect it. The `as u8` cast
    /// narrows with fixed-width wraparound, not a clamp, matching the
    /// legacy hardware.
    #[inline]
    fn sample_to_u8(value: i16) -> u8 {
        (value / 32 + 128) as u8
    }

    /// Truncate one 16-bit signed sample to the 12-bit range
    #[inline]
    fn sample_from_i16(sample: i16) -> i16 {
        sample / 16
    }

    /// Widen one 12-bit value to a 16-bit signed sample
    #[inline]
    fn sample_to_i16(value: i16) -> i16 {
        value * 16
    }
}

impl AudioDecoder for LinearCodec {
    fn decode(&mut self, input: &[u8]) -> Result<Vec<i16>, CodecError> {
        match self.width {
            SampleWidth::Eight => Ok(input.iter().map(|&b| Self::sample_from_u8(b)).collect()),
            SampleWidth::Sixteen => {
                if !input.len().is_multiple_of(2) {
                    // The reference converter floored the sample count;
                    // keep that, but make the truncation visible.
                    warn!("dropping trailing odd byte of 16-bit input");
                }
                Ok(input
                    .chunks_exact(2)
                    .map(|pair| Self::sample_from_i16(i16::from_le_bytes([pair[0], pair[1]])))
                    .collect())
            }
        }
    }
}

impl AudioEncoder for LinearCodec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>, CodecError> {
        match self.width {
            SampleWidth::Eight => Ok(samples.iter().map(|&s| Self::sample_to_u8(s)).collect()),
            SampleWidth::Sixteen => {
                let mut output = Vec::with_capacity(samples.len() * 2);
                for &sample in samples {
                    output.extend_from_slice(&Self::sample_to_i16(sample).to_le_bytes());
                }
                Ok(output)
            }
        }
    }
}
