use image::{RgbImage, RgbaImage};
use proptest::prelude::*;
use spr::{resample, target_height, DecodedImage};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn width_is_exact_and_height_keeps_aspect(
        cx in 1u32..=256,
        native_width in 1u32..=64,
        native_height in 1u32..=64,
    ) {
        let image = DecodedImage::Rgb(RgbImage::new(native_width, native_height));
        let res = image.resample_to_width(cx).unwrap();

        let scaled = cx as f64 * native_height as f64 / native_width as f64;
        let expected = (scaled.round() as u32).max(1);

        prop_assert_eq!(res.dimensions(), (cx, expected));
        prop_assert_eq!(target_height(cx, native_width, native_height), expected);
    }

    #[test]
    fn channel_count_is_kept(
        width in 1u32..=16,
        height in 1u32..=16,
        new_width in 1u32..=32,
        new_height in 1u32..=32,
    ) {
        for image in [
            DecodedImage::Rgb(RgbImage::new(width, height)),
            DecodedImage::Rgba(RgbaImage::new(width, height)),
        ] {
            let res = image.resample(new_width, new_height).unwrap();
            let len = match &res {
                DecodedImage::Rgb(res) => res.as_raw().len(),
                DecodedImage::Rgba(res) => res.as_raw().len(),
            };

            prop_assert_eq!(res.channel_count(), image.channel_count());
            prop_assert_eq!(len, (new_width * new_height) as usize * image.channel_count());
        }
    }

    #[test]
    fn flat_color_survives_downscale(
        width in 2u32..=32,
        height in 2u32..=32,
        value in any::<u8>(),
    ) {
        let image = RgbImage::from_pixel(width, height, [value; 3].into());
        let res = resample(&image, width.div_ceil(2), height.div_ceil(2)).unwrap();

        prop_assert!(res.pixels().all(|pixel| pixel.0 == [value; 3]));
    }
}
