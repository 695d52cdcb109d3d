mod dxt5;
mod palette;

pub use dxt5::decompress_dxt5;
pub use palette::colorize;

use crate::{error::SprError, DecodedImage, SelectedFrame, DXT5_FOURCC};

impl SelectedFrame<'_> {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            SelectedFrame::Indexed { frame, .. } => {
                (frame.header.width as u32, frame.header.height as u32)
            }
            SelectedFrame::Dxt5(frame) => (frame.width, frame.height),
        }
    }

    pub fn decode(&self) -> Result<DecodedImage, SprError> {
        match self {
            SelectedFrame::Indexed { frame, palette } => {
                colorize(frame, palette).map(DecodedImage::Rgb)
            }
            SelectedFrame::Dxt5(frame) => {
                if frame.format != DXT5_FOURCC {
                    return SprError::UnsupportedVariant {
                        reason: format!("surface format {} is not DXT5", frame.format),
                    }
                    .to_result();
                }

                decompress_dxt5(&frame.data, frame.width, frame.height).map(DecodedImage::Rgba)
            }
        }
    }
}
