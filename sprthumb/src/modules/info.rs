use spr::{SprFrameEntry, SprOrientation, SprSyncType, SprTextureFormat, Sprite};

fn typed_or_raw<T: std::fmt::Debug>(value: Result<T, i32>) -> String {
    match value {
        Ok(value) => format!("{value:?}"),
        Err(raw) => format!("unknown ({raw})"),
    }
}

pub fn describe(sprite: &Sprite) -> String {
    let header = sprite.header();
    let mut lines = vec![
        format!("version: {}", header.version),
        format!(
            "orientation: {}",
            typed_or_raw(SprOrientation::try_from(header.orientation))
        ),
        format!(
            "texture format: {}",
            typed_or_raw(SprTextureFormat::try_from(header.texture_format))
        ),
        format!(
            "sync type: {}",
            typed_or_raw(SprSyncType::try_from(header.sync_type))
        ),
        format!("bounding radius: {}", header.bounding_radius),
        format!("size: {}x{}", header.max_width, header.max_height),
        format!("frames: {}", header.frame_num),
    ];

    match sprite {
        Sprite::V2(spr) => {
            lines.push(format!("palette: {} colors", spr.palette.len()));

            for (index, entry) in spr.frames.iter().enumerate() {
                lines.push(match entry {
                    SprFrameEntry::Single(frame) => format!(
                        "frame {index}: single {}x{} origin ({}, {})",
                        frame.header.width,
                        frame.header.height,
                        frame.header.origin_x,
                        frame.header.origin_y
                    ),
                    SprFrameEntry::Group(group) => {
                        format!("frame {index}: group of {}", group.frames.len())
                    }
                });
            }
        }
        Sprite::V3(spr) => {
            for (index, frame) in spr.frames.iter().enumerate() {
                lines.push(format!(
                    "frame {index}: {} {}x{}",
                    frame.format, frame.width, frame.height
                ));
            }
        }
    }

    lines.join("\n")
}
