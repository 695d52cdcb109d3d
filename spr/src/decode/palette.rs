use image::RgbImage;

use crate::{
    error::SprError,
    utils::{buffer_len, try_with_capacity},
    SprFrame, SprPalette,
};

/// Looks every index up in the palette.
///
/// An index past the end of the palette fails the decode rather than being clamped.
pub fn colorize(frame: &SprFrame, palette: &SprPalette) -> Result<RgbImage, SprError> {
    let SprFrame { header, image } = frame;

    if header.width < 1 || header.height < 1 {
        return SprError::MalformedHeader {
            reason: format!(
                "frame dimensions {}x{} are not positive",
                header.width, header.height
            ),
        }
        .to_result();
    }

    let (width, height) = (header.width as u32, header.height as u32);

    if image.len() != buffer_len(width, height, 1)? {
        return SprError::MalformedHeader {
            reason: format!(
                "frame has {} pixels, expected {width}x{height}",
                image.len()
            ),
        }
        .to_result();
    }

    let mut buf: Vec<u8> = try_with_capacity(buffer_len(width, height, 3)?)?;

    for &index in image {
        let Some(color) = palette.get(index as usize) else {
            return SprError::PaletteIndexOutOfRange {
                index,
                palette_len: palette.len(),
            }
            .to_result();
        };

        buf.extend_from_slice(color);
    }

    RgbImage::from_raw(width, height, buf).ok_or_else(|| SprError::MalformedHeader {
        reason: "frame buffer does not match its dimensions".to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{test_utils::two_color_v2, Spr, SprFrameHeader};

    fn frame(width: i32, height: i32, image: Vec<u8>) -> SprFrame {
        SprFrame {
            header: SprFrameHeader {
                origin_x: 0,
                origin_y: 0,
                width,
                height,
            },
            image,
        }
    }

    #[test]
    fn two_color_lookup() {
        let spr = Spr::open_from_bytes(&two_color_v2()).unwrap();
        let image = colorize(spr.select_frame().unwrap(), &spr.palette).unwrap();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(
            image.into_raw(),
            vec![10, 20, 30, 40, 50, 60, 10, 20, 30, 40, 50, 60]
        );
    }

    #[test]
    fn row_major_order() {
        let palette = vec![[0, 0, 0], [1, 1, 1], [2, 2, 2]];
        let image = colorize(&frame(3, 2, vec![0, 1, 2, 2, 1, 0]), &palette).unwrap();

        assert_eq!(image.get_pixel(2, 0).0, [2, 2, 2]);
        assert_eq!(image.get_pixel(0, 1).0, [2, 2, 2]);
        assert_eq!(image.get_pixel(2, 1).0, [0, 0, 0]);
    }

    #[test]
    fn index_out_of_range() {
        let palette = vec![[0, 0, 0], [1, 1, 1]];
        let err = colorize(&frame(2, 1, vec![1, 2]), &palette).unwrap_err();

        assert!(matches!(
            err,
            SprError::PaletteIndexOutOfRange {
                index: 2,
                palette_len: 2
            }
        ));
    }

    #[test]
    fn last_palette_entry_is_valid() {
        let palette = vec![[7, 8, 9]; 256];
        let image = colorize(&frame(1, 1, vec![255]), &palette).unwrap();

        assert_eq!(image.into_raw(), vec![7, 8, 9]);
    }

    #[test]
    fn pixel_count_mismatch() {
        let palette = vec![[0, 0, 0]];
        let err = colorize(&frame(2, 2, vec![0; 3]), &palette).unwrap_err();

        assert!(matches!(err, SprError::MalformedHeader { .. }));
    }
}
