//! Dialogic/OKI VOX ADPCM codec.
//!
//! Codes 12-bit linear samples as 4-bit deltas against an adaptive
//! quantizer. The top bit of each code carries the delta's sign, the low
//! three bits its magnitude relative to the current step size. Both
//! tables are fixed interoperability constants shared by every VOX
//! implementation.

#![allow(dead_code)]

use super::traits::{AudioDecoder, AudioEncoder, CodecError};

/// Quantizer step sizes, selected by the coder's step index.
#[rustfmt::skip]
const STEP_SIZES: [i32; 49] = [
    16, 17, 19, 21, 23, 25, 28, 31,
    34, 37, 41, 45, 50, 55, 60, 66,
    73, 80, 88, 97, 107, 118, 130, 143,
    157, 173, 190, 209, 230, 253, 279, 307,
    337, 371, 408, 449, 494, 544, 598, 658,
    724, 796, 876, 963, 1060, 1166, 1282, 1411,
    1552,
];

/// Step index adjustment, selected by a code's magnitude bits. Large
/// deltas push toward coarser steps, small deltas pull back toward finer
/// ones.
const STEP_ADJUSTMENTS: [i32; 8] = [-1, -1, -1, -1, 2, 4, 6, 8];

/// Lower bound of the coder's 12-bit working range
pub const SAMPLE_MIN: i16 = -2048;
/// Upper bound of the coder's 12-bit working range
pub const SAMPLE_MAX: i16 = 2047;

/// Adaptive coder state. Each stream owns exactly one; the state advances
/// once per sample, so samples of a stream must be processed in order.
#[derive(Debug, Clone)]
pub struct AdpcmState {
    predictor: i32,
    step_index: i32,
}

impl AdpcmState {
    pub fn new() -> Self {
        Self {
            predictor: 0,
            step_index: 0,
        }
    }

    /// Running estimate of the next sample
    #[must_use]
    pub fn predictor(&self) -> i32 {
        self.predictor
    }

    /// Current index into the step-size table
    #[must_use]
    pub fn step_index(&self) -> i32 {
        self.step_index
    }

    /// Encode one 12-bit sample to a 4-bit code and advance the state.
    #[inline]
    pub fn encode_sample(&mut self, sample: i16) -> u8 {
        let step = STEP_SIZES[self.step_index as usize];
        let mut delta = sample as i32 - self.predictor;

        let mut code = 0u8;
        if delta < 0 {
            code |= 0x08;
            delta = -delta;
        }
        if delta >= step {
            code |= 0x04;
            delta -= step;
        }
        if delta >= step >> 1 {
            code |= 0x02;
            delta -= step >> 1;
        }
        if delta >= step >> 2 {
            code |= 0x01;
        }

        // Advance through the same reconstruction the decoder performs,
        // so encoder and decoder track identical state trajectories.
        self.advance(code);
        code
    }

    /// Decode one 4-bit code, returning the reconstructed 12-bit sample.
    #[inline]
    pub fn decode_sample(&mut self, code: u8) -> i16 {
        self.advance(code & 0x0F)
    }

    /// Reconstruct the quantized delta for `code`, update the predictor
    /// and step index, and return the new predictor.
    fn advance(&mut self, code: u8) -> i16 {
        let step = STEP_SIZES[self.step_index as usize];

        let mut diff = step >> 3;
        if code & 0x04 != 0 {
            diff += step;
        }
        if code & 0x02 != 0 {
            diff += step >> 1;
        }
        if code & 0x01 != 0 {
            diff += step >> 2;
        }
        if code & 0x08 != 0 {
            diff = -diff;
        }

        self.predictor = (self.predictor + diff).clamp(SAMPLE_MIN as i32, SAMPLE_MAX as i32);
        self.step_index = (self.step_index + STEP_ADJUSTMENTS[(code & 0x07) as usize])
            .clamp(0, STEP_SIZES.len() as i32 - 1);

        self.predictor as i16
    }
}

impl Default for AdpcmState {
    fn default() -> Self {
        Self::new()
    }
}

/// VOX ADPCM codec over 12-bit linear samples.
///
/// Packs two 4-bit codes per byte, high nibble first. An odd sample count
/// is completed by encoding a synthetic zero-valued sample, so the coder
/// state after the block matches what a continuation block expects and
/// the byte stream stays whole-byte aligned.
pub struct VoxCodec {
    state: AdpcmState,
}

impl VoxCodec {
    pub fn new() -> Self {
        Self {
            state: AdpcmState::new(),
        }
    }

    /// Coder state, for inspection
    #[must_use]
    pub fn state(&self) -> &AdpcmState {
        &self.state
    }

    /// Return to the initial coder state for a new stream
    pub fn reset(&mut self) {
        self.state = AdpcmState::new();
    }
}

impl Default for VoxCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEncoder for VoxCodec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::with_capacity(samples.len().div_ceil(2));

        let mut pairs = samples.chunks_exact(2);
        for pair in &mut pairs {
            let high = self.state.encode_sample(pair[0]);
            let low = self.state.encode_sample(pair[1]);
            output.push((high << 4) | low);
        }
        if let [last] = pairs.remainder() {
            let high = self.state.encode_sample(*last);
            let low = self.state.encode_sample(0);
            output.push((high << 4) | low);
        }

        Ok(output)
    }
}

impl AudioDecoder for VoxCodec {
    fn decode(&mut self, input: &[u8]) -> Result<Vec<i16>, CodecError> {
        let mut samples = Vec::with_capacity(input.len() * 2);

        for &byte in input {
            samples.push(self.state.decode_sample(byte >> 4));
            samples.push(self.state.decode_sample(byte & 0x0F));
        }

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGEST_STEP: i32 = 1552;

    #[test]
    fn test_initial_state() {
        let state = AdpcmState::new();
        assert_eq!(state.predictor(), 0);
        assert_eq!(state.step_index(), 0);
    }

    #[test]
    fn test_encoder_decoder_lockstep() {
        // A decoder fed the encoder's code stream must track the exact
        // same state after every sample.
        let mut enc = AdpcmState::new();
        let mut dec = AdpcmState::new();

        let samples: Vec<i16> = (0..200).map(|i| ((i * 37) % 1500 - 750) as i16).collect();

        for &sample in &samples {
            let code = enc.encode_sample(sample);
            dec.decode_sample(code);
            assert_eq!(enc.predictor(), dec.predictor());
            assert_eq!(enc.step_index(), dec.step_index());
        }
    }

    #[test]
    fn test_determinism() {
        let samples: Vec<i16> = (0..100).map(|i| ((i * 91) % 2000 - 1000) as i16).collect();

        let mut first = AdpcmState::new();
        let codes_a: Vec<u8> = samples.iter().map(|&s| first.encode_sample(s)).collect();

        let mut second = AdpcmState::new();
        let codes_b: Vec<u8> = samples.iter().map(|&s| second.encode_sample(s)).collect();

        assert_eq!(codes_a, codes_b);
        assert_eq!(first.predictor(), second.predictor());
        assert_eq!(first.step_index(), second.step_index());
    }

    #[test]
    fn test_roundtrip_tracks_smooth_input() {
        // A slowly varying signal must reconstruct within one step of the
        // largest table entry, sample by sample.
        let mut enc = AdpcmState::new();
        let mut dec = AdpcmState::new();

        for i in 0..2000 {
            let sample = ((f64::from(i) / 50.0).sin() * 1200.0) as i16;
            let code = enc.encode_sample(sample);
            let decoded = dec.decode_sample(code);
            let error = (sample as i32 - decoded as i32).abs();
            assert!(
                error <= LARGEST_STEP,
                "sample {} reconstructed as {} (error {})",
                sample,
                decoded,
                error
            );
        }
    }

    #[test]
    fn test_step_index_stays_bounded() {
        let mut state = AdpcmState::new();

        // Alternating extremes push the index toward the coarse end.
        for _ in 0..500 {
            for &sample in &[SAMPLE_MAX, SAMPLE_MIN] {
                state.encode_sample(sample);
                assert!((0..=48).contains(&state.step_index()));
            }
        }
        assert_eq!(state.step_index(), 48);

        // Encoding the prediction itself pulls it back toward the fine end.
        for _ in 0..500 {
            let target = state.predictor() as i16;
            state.encode_sample(target);
            assert!((0..=48).contains(&state.step_index()));
        }
        assert_eq!(state.step_index(), 0);
    }

    #[test]
    fn test_codes_are_four_bit() {
        let mut state = AdpcmState::new();
        for i in -2048..=2047 {
            let code = state.encode_sample(i);
            assert!(code <= 0x0F);
        }
    }

    #[test]
    fn test_packing_pairs_codes_high_nibble_first() {
        let samples: Vec<i16> = vec![100, -100, 300, -300];

        let mut codec = VoxCodec::new();
        let bytes = codec.encode(&samples).unwrap();
        assert_eq!(bytes.len(), 2);

        let mut reference = AdpcmState::new();
        let codes: Vec<u8> = samples.iter().map(|&s| reference.encode_sample(s)).collect();
        assert_eq!(bytes[0], (codes[0] << 4) | codes[1]);
        assert_eq!(bytes[1], (codes[2] << 4) | codes[3]);
    }

    #[test]
    fn test_odd_sample_count_pads_with_zero_sample() {
        let samples: Vec<i16> = vec![100, -100, 300, -300, 50];

        let mut codec = VoxCodec::new();
        let bytes = codec.encode(&samples).unwrap();
        assert_eq!(bytes.len(), 3);

        // The final low nibble is the code of a synthetic zero sample,
        // and the coder state matches what a continuation block expects.
        let mut reference = AdpcmState::new();
        let mut codes: Vec<u8> = samples.iter().map(|&s| reference.encode_sample(s)).collect();
        codes.push(reference.encode_sample(0));

        assert_eq!(bytes[2] >> 4, codes[4]);
        assert_eq!(bytes[2] & 0x0F, codes[5]);
        assert_eq!(codec.state().predictor(), reference.predictor());
        assert_eq!(codec.state().step_index(), reference.step_index());
    }

    #[test]
    fn test_unpacking_order_matches_packing() {
        let samples: Vec<i16> = (0..64).map(|i| (i * 31 - 992) as i16).collect();

        let mut enc = VoxCodec::new();
        let bytes = enc.encode(&samples).unwrap();

        let mut dec = VoxCodec::new();
        let decoded = dec.decode(&bytes).unwrap();
        assert_eq!(decoded.len(), samples.len());

        // Byte-level decode must equal a straight per-code decode.
        let mut reference_enc = AdpcmState::new();
        let codes: Vec<u8> = samples.iter().map(|&s| reference_enc.encode_sample(s)).collect();
        let mut reference_dec = AdpcmState::new();
        let expected: Vec<i16> = codes.iter().map(|&c| reference_dec.decode_sample(c)).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let samples: Vec<i16> = vec![500, -500, 250, -250, 1000, -1000];

        let mut codec = VoxCodec::new();
        let first = codec.encode(&samples).unwrap();

        codec.reset();
        let second = codec.encode(&samples).unwrap();
        assert_eq!(first, second);
    }
}
