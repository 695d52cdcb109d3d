use std::array::from_fn;

use image::RgbaImage;

use crate::{
    error::SprError,
    utils::{buffer_len, try_zeroed},
    DXT5_BLOCK_SIZE,
};

#[inline]
/// Unpacks 565 into 888 by shifting each field up
pub fn unpack_rgb565(c: u16) -> [u8; 3] {
    [
        (((c >> 11) & 0x1f) as u8) << 3,
        (((c >> 5) & 0x3f) as u8) << 2,
        ((c & 0x1f) as u8) << 3,
    ]
}

pub fn dxt_color_palette(c0: u16, c1: u16) -> [[u8; 3]; 4] {
    let (cp0, cp1) = (unpack_rgb565(c0), unpack_rgb565(c1));

    let blend = |weight0: u16, weight1: u16, divisor: u16| -> [u8; 3] {
        from_fn(|channel| {
            ((cp0[channel] as u16 * weight0 + cp1[channel] as u16 * weight1) / divisor) as u8
        })
    };

    // comparing the packed values, not the unpacked colors
    if c0 > c1 {
        [cp0, cp1, blend(2, 1, 3), blend(1, 2, 3)]
    } else {
        [cp0, cp1, blend(1, 1, 2), [0, 0, 0]]
    }
}

pub fn dxt_alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let lerp = |weight0: u32, weight1: u32, divisor: u32| -> u8 {
        ((a0 as u32 * weight0 + a1 as u32 * weight1) / divisor) as u8
    };

    if a0 > a1 {
        [
            a0,
            a1,
            lerp(6, 1, 7),
            lerp(5, 2, 7),
            lerp(4, 3, 7),
            lerp(3, 4, 7),
            lerp(2, 5, 7),
            lerp(1, 6, 7),
        ]
    } else {
        [
            a0,
            a1,
            lerp(4, 1, 5),
            lerp(3, 2, 5),
            lerp(2, 3, 5),
            lerp(1, 4, 5),
            0,
            255,
        ]
    }
}

/// 16 RGBA pixels of one block in scan order.
///
/// Bytes 0..8 are the alpha half, bytes 8..16 are the color half.
pub fn dxt5_block_to_pixels(block: &[u8]) -> [[u8; 4]; 16] {
    let alphas = dxt_alpha_palette(block[0], block[1]);
    let alpha_look_up = u64::from_le_bytes([
        block[2], block[3], block[4], block[5], block[6], block[7], 0, 0,
    ]);

    let c0 = u16::from_le_bytes([block[8], block[9]]);
    let c1 = u16::from_le_bytes([block[10], block[11]]);
    let colors = dxt_color_palette(c0, c1);
    let color_look_up = u32::from_le_bytes([block[12], block[13], block[14], block[15]]);

    from_fn(|idx| {
        let alpha = alphas[((alpha_look_up >> (idx * 3)) & 0b111) as usize];
        let [r, g, b] = colors[((color_look_up >> (idx * 2)) & 0b11) as usize];

        [r, g, b, alpha]
    })
}

/// Decodes a whole surface. Edge blocks are decoded fully but only pixels inside
/// `width` x `height` are kept.
pub fn decompress_dxt5(data: &[u8], width: u32, height: u32) -> Result<RgbaImage, SprError> {
    let blocks_x = width.div_ceil(4) as usize;
    let blocks_y = height.div_ceil(4) as usize;
    let block_count = blocks_x
        .checked_mul(blocks_y)
        .ok_or(SprError::OutOfMemory { bytes: usize::MAX })?;

    if data.len() / DXT5_BLOCK_SIZE < block_count {
        return SprError::MalformedHeader {
            reason: format!(
                "DXT5 surface {width}x{height} needs {block_count} blocks, found {}",
                data.len() / DXT5_BLOCK_SIZE
            ),
        }
        .to_result();
    }

    let (width, height) = (width as usize, height as usize);
    let mut buf = try_zeroed::<u8>(buffer_len(width as u32, height as u32, 4)?)?;

    data.chunks_exact(DXT5_BLOCK_SIZE)
        .take(block_count)
        .enumerate()
        .for_each(|(block_idx, block)| {
            let (block_x, block_y) = (block_idx % blocks_x, block_idx / blocks_x);

            for (pixel_idx, pixel) in dxt5_block_to_pixels(block).iter().enumerate() {
                let x = block_x * 4 + pixel_idx % 4;
                let y = block_y * 4 + pixel_idx / 4;

                if x >= width || y >= height {
                    continue;
                }

                let offset = (y * width + x) * 4;
                buf[offset..offset + 4].copy_from_slice(pixel);
            }
        });

    RgbaImage::from_raw(width as u32, height as u32, buf).ok_or_else(|| {
        SprError::MalformedHeader {
            reason: "DXT5 buffer does not match its dimensions".to_string(),
        }
    })
}
