//! Audio codec traits and type definitions.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid frame data: {0}")]
    InvalidFrame(String),

    #[error("Encode error: {0}")]
    EncodeError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),
}

/// External sample widths accepted by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleWidth {
    /// 8-bit unsigned samples, biased by 128
    Eight,
    /// 16-bit signed little-endian samples
    Sixteen,
}

impl SampleWidth {
    /// Resolve a bits-per-sample argument; anything other than 8 or 16 is `None`
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(SampleWidth::Eight),
            16 => Some(SampleWidth::Sixteen),
            _ => None,
        }
    }

    /// Bits per external sample
    #[must_use]
    pub const fn bits(&self) -> u32 {
        match self {
            SampleWidth::Eight => 8,
            SampleWidth::Sixteen => 16,
        }
    }

    /// Bytes per external sample on disk
    #[must_use]
    pub const fn bytes_per_sample(&self) -> usize {
        match self {
            SampleWidth::Eight => 1,
            SampleWidth::Sixteen => 2,
        }
    }

    /// Get a human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SampleWidth::Eight => "8-bit unsigned",
            SampleWidth::Sixteen => "16-bit signed",
        }
    }
}

impl std::fmt::Display for SampleWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for audio decoders
pub trait AudioDecoder: Send {
    /// Decode input bytes to linear samples
    fn decode(&mut self, input: &[u8]) -> Result<Vec<i16>, CodecError>;
}

/// Trait for audio encoders
pub trait AudioEncoder: Send {
    /// Encode linear samples to output bytes
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>, CodecError>;
}
