pub mod adpcm;
pub mod pcm;
pub mod traits;

pub use adpcm::{AdpcmState, VoxCodec};
pub use pcm::LinearCodec;
pub use traits::{AudioDecoder, AudioEncoder, CodecError, SampleWidth};
