//! VOX Converter - converts voice files between linear PCM and ADPCM.
//!
//! Encodes raw 8-bit unsigned or 16-bit signed PCM voice files to the
//! Dialogic/OKI 4-bit ADPCM (.vox / .32K) format used by telephony
//! hardware, and decodes such files back to PCM.

// Clippy configuration for code quality
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too restrictive for this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)] // Explicit casts are clearer in audio code
#![allow(clippy::uninlined_format_args)] // Explicit format args are often clearer
#![allow(clippy::needless_pass_by_value)] // Options structs are small and passed once
#![allow(clippy::enum_variant_names)] // Error suffix is conventional for error enums

mod cli;
mod codec;
mod config;

use clap::Parser;
use cli::{Cli, Commands};
use codec::SampleWidth;
use config::Config;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else if args.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::load();

    match args.command {
        Commands::Encode {
            input,
            output,
            bits,
        } => {
            let options = cli::encode::EncodeOptions {
                input,
                output,
                width: resolve_width(bits, &config),
                block_samples: config.convert.block_samples,
                quiet: args.quiet,
            };

            cli::run_encode(options)?;
        }
        Commands::Decode {
            input,
            output,
            bits,
        } => {
            let options = cli::decode::DecodeOptions {
                input,
                output,
                width: resolve_width(bits, &config),
                block_samples: config.convert.block_samples,
                quiet: args.quiet,
            };

            cli::run_decode(options)?;
        }
    }

    Ok(())
}

/// Resolve the sample width from the --bits flag or the configured
/// default. An unsupported value is not fatal: warn and use 8 bits, the
/// behavior existing tooling expects.
fn resolve_width(bits: Option<u32>, config: &Config) -> SampleWidth {
    let requested = bits.unwrap_or(config.convert.default_bits);
    SampleWidth::from_bits(requested).unwrap_or_else(|| {
        warn!("Wrong bit specification ({}), 8 bit/sample used", requested);
        SampleWidth::Eight
    })
}
