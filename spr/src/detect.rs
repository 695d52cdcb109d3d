use std::io::{Read, Seek, SeekFrom};

use crate::{error::SprError, SprFormat, SPR_IDENT};

impl SprFormat {
    pub fn classify(magic: i32, version: i32) -> Option<SprFormat> {
        match (magic, version) {
            (SPR_IDENT, 2) => Some(SprFormat::V2),
            (SPR_IDENT, 3) => Some(SprFormat::V3),
            _ => None,
        }
    }
}

/// Reads the magic and version at offset 0.
///
/// The stream is rewound to offset 0 afterwards, whether or not the read succeeded.
pub fn detect_format<R: Read + Seek>(reader: &mut R) -> Result<SprFormat, SprError> {
    reader.seek(SeekFrom::Start(0))?;

    let mut buf = [0u8; 8];
    let read = reader.read_exact(&mut buf);

    reader.seek(SeekFrom::Start(0))?;
    read?;

    let magic = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let version = i32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);

    let format = SprFormat::classify(magic, version)
        .ok_or(SprError::UnsupportedFormat { magic, version })?;

    log::debug!("detected {:?} sprite", format);

    Ok(format)
}
