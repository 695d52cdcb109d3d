use std::io::{Read, Seek};

use crate::{error::SprError, Sprite, Thumbnail};

impl Sprite {
    /// Selects, decodes, resizes to `cx` wide and composes the preview.
    pub fn thumbnail(&self, cx: u32) -> Result<Thumbnail, SprError> {
        if cx == 0 {
            return SprError::InvalidTargetWidth { width: cx }.to_result();
        }

        let frame = self.select_frame()?;
        log::trace!("selected frame {:?}", frame.dimensions());

        let decoded = frame.decode()?;
        let resized = decoded.resample_to_width(cx)?;

        log::debug!(
            "thumbnail {:?} -> {:?}",
            decoded.dimensions(),
            resized.dimensions()
        );

        Thumbnail::from_decoded(&resized)
    }
}

/// Whole request: byte source and target width in, preview out.
///
/// Everything decoded along the way is dropped before returning, on success or failure.
pub fn thumbnail<R: Read + Seek>(reader: &mut R, cx: u32) -> Result<Thumbnail, SprError> {
    if cx == 0 {
        return SprError::InvalidTargetWidth { width: cx }.to_result();
    }

    Sprite::open_from_reader(reader)?.thumbnail(cx)
}
