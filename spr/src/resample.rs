//! Separable box filter resize.
//!
//! Every output pixel averages the source pixels its footprint covers, weighted by
//! coverage. The footprint is one source pixel wide when upscaling and one output pixel
//! wide when downscaling. Parts of a footprint outside the source read as zero.
use image::{ImageBuffer, Pixel};

use crate::{
    error::SprError,
    utils::{buffer_len, try_zeroed},
    DecodedImage,
};

/// `round(cx * native_height / native_width)`, never less than 1.
pub fn target_height(cx: u32, native_width: u32, native_height: u32) -> u32 {
    let native_width = native_width.max(1) as u64;
    let numerator = 2 * cx as u64 * native_height as u64 + native_width;
    let height = numerator / (2 * native_width);

    height.clamp(1, u32::MAX as u64) as u32
}

/// One axis of the filter. Taps are computed on demand so nothing is allocated per
/// output index.
struct BoxFilter {
    src_len: u32,
    scale: f64,
    half_width: f64,
}

impl BoxFilter {
    fn new(src_len: u32, dst_len: u32) -> Self {
        let scale = dst_len as f64 / src_len as f64;

        Self {
            src_len,
            scale,
            half_width: 0.5 * (1. / scale).max(1.),
        }
    }

    /// Source index and weight of every sample under output index `dst`.
    fn taps(&self, dst: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let center = (dst as f64 + 0.5) / self.scale;
        let (left, right) = (center - self.half_width, center + self.half_width);
        let footprint = right - left;

        (left.floor() as i64..right.ceil() as i64)
            // zero padding, out of range samples add nothing
            .filter(move |&src| src >= 0 && src < self.src_len as i64)
            .filter_map(move |src| {
                let coverage = right.min(src as f64 + 1.) - left.max(src as f64);

                (coverage > 0.).then_some((src as usize, (coverage / footprint) as f32))
            })
    }
}

/// Resizes to exactly `width` x `height`, keeping the pixel type of the input.
///
/// Both working buffers are reserved before any work. An oversized target fails with
/// `OutOfMemory`.
pub fn resample<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    width: u32,
    height: u32,
) -> Result<ImageBuffer<P, Vec<u8>>, SprError>
where
    P: Pixel<Subpixel = u8>,
{
    if width == 0 || height == 0 {
        return SprError::InvalidTargetWidth { width }.to_result();
    }

    let channels = P::CHANNEL_COUNT as usize;
    let (src_width, src_height) = image.dimensions();
    let src = image.as_raw();

    let buf_len = buffer_len(width, height, channels)?;
    let rows_len = buffer_len(width, src_height, channels)?;

    let mut buf = try_zeroed::<u8>(buf_len)?;
    // src_height rows of the new width
    let mut rows = try_zeroed::<f32>(rows_len)?;

    let horizontal = BoxFilter::new(src_width, width);
    let vertical = BoxFilter::new(src_height, height);

    let (src_row_len, row_len) = (src_width as usize * channels, width as usize * channels);

    // horizontal pass
    for x in 0..width as usize {
        for (src_x, weight) in horizontal.taps(x) {
            for y in 0..src_height as usize {
                let src_offset = y * src_row_len + src_x * channels;
                let dst_offset = y * row_len + x * channels;

                rows[dst_offset..dst_offset + channels]
                    .iter_mut()
                    .zip(&src[src_offset..src_offset + channels])
                    .for_each(|(dst, &src)| *dst += src as f32 * weight);
            }
        }
    }

    // vertical pass
    for (y, dst_row) in buf.chunks_exact_mut(row_len).enumerate() {
        for (idx, dst) in dst_row.iter_mut().enumerate() {
            let value: f32 = vertical
                .taps(y)
                .map(|(src_y, weight)| rows[src_y * row_len + idx] * weight)
                .sum();

            *dst = value.round().clamp(0., 255.) as u8;
        }
    }

    ImageBuffer::from_raw(width, height, buf).ok_or_else(|| SprError::MalformedHeader {
        reason: "resampled buffer does not match its dimensions".to_string(),
    })
}

impl DecodedImage {
    pub fn resample(&self, width: u32, height: u32) -> Result<DecodedImage, SprError> {
        match self {
            DecodedImage::Rgb(image) => resample(image, width, height).map(DecodedImage::Rgb),
            DecodedImage::Rgba(image) => resample(image, width, height).map(DecodedImage::Rgba),
        }
    }

    /// Resizes to `cx` wide, keeping the aspect ratio.
    pub fn resample_to_width(&self, cx: u32) -> Result<DecodedImage, SprError> {
        let (native_width, native_height) = self.dimensions();

        self.resample(cx, target_height(cx, native_width, native_height))
    }
}
