use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use eyre::eyre;

/// `<stem><suffix>.png` next to the input
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    input.with_file_name(format!("{stem}{suffix}.png"))
}

pub fn write_thumbnail(input: &Path, output: &Path, width: u32) -> eyre::Result<()> {
    let file = File::open(input)
        .map_err(|err| eyre!("Cannot open {}: {err}", input.display()))?;
    let mut reader = BufReader::new(file);

    let thumbnail = spr::thumbnail(&mut reader, width)
        .map_err(|err| eyre!("Cannot decode {}: {err}", input.display()))?;

    let Some(image) = thumbnail.to_rgba_image() else {
        return Err(eyre!("Preview of {} has a bad buffer", input.display()));
    };

    image.save(output)?;

    log::info!(
        "{} -> {} ({}x{})",
        input.display(),
        output.display(),
        thumbnail.width,
        thumbnail.height
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::test_utils::gray_v2;

    use super::*;

    #[test]
    fn output_next_to_input() {
        assert_eq!(
            output_path(Path::new("sprites/glow01.spr"), "_thumb"),
            Path::new("sprites/glow01_thumb.png")
        );
        assert_eq!(
            output_path(Path::new("muzzleflash.SPR"), ""),
            Path::new("muzzleflash.png")
        );
    }

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gray.spr");
        let output = dir.path().join("gray.png");
        std::fs::write(&input, gray_v2(8)).unwrap();

        write_thumbnail(&input, &output, 4).unwrap();

        let image = image::open(&output).unwrap().into_rgba8();
        assert_eq!(image.dimensions(), (4, 1));
        assert!(image.pixels().all(|pixel| pixel.0 == [128, 128, 128, 255]));
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();

        assert!(write_thumbnail(
            &dir.path().join("nope.spr"),
            &dir.path().join("nope.png"),
            64
        )
        .is_err());
    }
}
