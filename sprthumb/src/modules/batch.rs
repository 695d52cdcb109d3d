use std::path::{Path, PathBuf};

use eyre::eyre;
use walkdir::WalkDir;

use super::thumb::{output_path, write_thumbnail};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub failed: usize,
}

fn is_sprite(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("spr"))
}

/// Sorted so batch output is stable.
pub fn find_sprites(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut sprites: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_sprite(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    sprites.sort();
    sprites
}

/// One bad sprite does not stop the rest.
pub fn batch(dir: &Path, width: u32, suffix: &str, recursive: bool) -> eyre::Result<BatchReport> {
    if !dir.is_dir() {
        return Err(eyre!("{} is not a folder", dir.display()));
    }

    let mut report = BatchReport::default();

    for sprite in find_sprites(dir, recursive) {
        let output = output_path(&sprite, suffix);

        match write_thumbnail(&sprite, &output, width) {
            Ok(()) => report.written += 1,
            Err(err) => {
                log::warn!("{err}");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod test {
    use std::fs;

    use crate::test_utils::gray_v2;

    use super::*;

    #[test]
    fn finds_sprites_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.spr"), b"").unwrap();
        fs::write(dir.path().join("b.SPR"), b"").unwrap();
        fs::write(dir.path().join("c.wad"), b"").unwrap();
        fs::write(dir.path().join("sub/d.spr"), b"").unwrap();

        let flat = find_sprites(dir.path(), false);
        assert_eq!(
            flat,
            vec![dir.path().join("a.spr"), dir.path().join("b.SPR")]
        );

        assert_eq!(find_sprites(dir.path(), true).len(), 3);
    }

    #[test]
    fn bad_sprite_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.spr"), gray_v2(4)).unwrap();
        fs::write(dir.path().join("junk.spr"), b"not a sprite at all").unwrap();

        let report = batch(dir.path(), 2, "_thumb", false).unwrap();

        assert_eq!(
            report,
            BatchReport {
                written: 1,
                failed: 1
            }
        );
        assert!(dir.path().join("good_thumb.png").is_file());
        assert!(!dir.path().join("junk_thumb.png").exists());
    }

    #[test]
    fn not_a_folder() {
        let dir = tempfile::tempdir().unwrap();

        assert!(batch(&dir.path().join("missing"), 64, "_thumb", false).is_err());
    }
}
