use image::RgbaImage;

use crate::{
    error::SprError,
    utils::{buffer_len, try_with_capacity},
    DecodedImage, Thumbnail,
};

/// Packs into BGRA rows, top to bottom. RGB input gets an opaque alpha.
pub fn compose_bgra(image: &DecodedImage) -> Result<Vec<u8>, SprError> {
    let (width, height) = image.dimensions();
    let mut buf: Vec<u8> = try_with_capacity(buffer_len(width, height, 4)?)?;

    match image {
        DecodedImage::Rgb(image) => image
            .pixels()
            .for_each(|&image::Rgb([r, g, b])| buf.extend([b, g, r, 0xFF])),
        DecodedImage::Rgba(image) => image
            .pixels()
            .for_each(|&image::Rgba([r, g, b, a])| buf.extend([b, g, r, a])),
    }

    Ok(buf)
}

impl Thumbnail {
    pub fn from_decoded(image: &DecodedImage) -> Result<Thumbnail, SprError> {
        let (width, height) = image.dimensions();

        Ok(Thumbnail {
            width,
            height,
            pixels: compose_bgra(image)?,
            has_alpha: image.has_alpha(),
        })
    }

    /// Swaps the channels back for hosts that want an ordinary RGBA image.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let buf = self
            .pixels
            .chunks_exact(4)
            .flat_map(|bgra| [bgra[2], bgra[1], bgra[0], bgra[3]])
            .collect::<Vec<u8>>();

        RgbaImage::from_raw(self.width, self.height, buf)
    }
}
