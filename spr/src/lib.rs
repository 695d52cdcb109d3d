//! GoldSrc sprite (.spr) decoding for previews.
//!
//! Version 2 sprites are palette indexed, version 3 sprites wrap a DXT5 DDS surface per
//! frame. [`thumbnail`] runs the whole request: detect, parse, pick one frame, decode,
//! resize and pack into BGRA.
mod compose;
mod decode;
mod detect;
pub mod error;
mod parser;
mod resample;
mod select;
mod thumbnail;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use compose::compose_bgra;
pub use decode::{colorize, decompress_dxt5};
pub use detect::detect_format;
pub use error::SprError;
pub use resample::{resample, target_height};
pub use thumbnail::thumbnail;
pub use types::*;
