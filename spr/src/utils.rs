use std::{
    ffi::OsStr,
    fs::OpenOptions,
    io::{Read, Seek},
    path::Path,
};

use nom::Parser;

use crate::{
    detect::detect_format,
    error::SprError,
    parser::{parse_spr, parse_spr_v3},
    Spr, SprFormat, SprV3, Sprite,
};

impl Spr {
    pub fn open_from_bytes(i: &[u8]) -> Result<Spr, SprError> {
        parse_spr.parse(i).map(|(_, res)| res).map_err(SprError::from)
    }
}

impl SprV3 {
    pub fn open_from_bytes(i: &[u8]) -> Result<SprV3, SprError> {
        parse_spr_v3
            .parse(i)
            .map(|(_, res)| res)
            .map_err(SprError::from)
    }
}

impl Sprite {
    /// Detects the version, then parses the whole stream from offset 0.
    pub fn open_from_reader<R: Read + Seek>(reader: &mut R) -> Result<Sprite, SprError> {
        let format = detect_format(reader)?;

        let mut bytes = vec![];
        reader.read_to_end(&mut bytes)?;

        log::debug!("parsing {:?} sprite, {} bytes", format, bytes.len());

        let sprite = match format {
            SprFormat::V2 => Sprite::V2(Spr::open_from_bytes(&bytes)?),
            SprFormat::V3 => Sprite::V3(SprV3::open_from_bytes(&bytes)?),
        };

        log::debug!(
            "sprite header: {}x{}, {} frames",
            sprite.header().max_width,
            sprite.header().max_height,
            sprite.header().frame_num
        );

        Ok(sprite)
    }

    pub fn open_from_bytes(i: &[u8]) -> Result<Sprite, SprError> {
        Self::open_from_reader(&mut std::io::Cursor::new(i))
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Sprite, SprError> {
        let mut file = OpenOptions::new().read(true).open(path)?;

        Self::open_from_reader(&mut file)
    }

    pub fn format(&self) -> SprFormat {
        match self {
            Sprite::V2(_) => SprFormat::V2,
            Sprite::V3(_) => SprFormat::V3,
        }
    }

    pub fn header(&self) -> &crate::SprHeader {
        match self {
            Sprite::V2(spr) => &spr.header,
            Sprite::V3(spr) => &spr.header,
        }
    }
}

/// `width * height * channels`, or `OutOfMemory` when that does not fit in memory.
pub(crate) fn buffer_len(width: u32, height: u32, channels: usize) -> Result<usize, SprError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|len| len.checked_mul(channels))
        .ok_or(SprError::OutOfMemory { bytes: usize::MAX })
}

pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>, SprError> {
    let mut buf = Vec::new();

    buf.try_reserve_exact(len)
        .map_err(|_| SprError::OutOfMemory {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;

    Ok(buf)
}

pub(crate) fn try_zeroed<T: Clone + Default>(len: usize) -> Result<Vec<T>, SprError> {
    let mut buf = try_with_capacity(len)?;
    buf.resize(len, T::default());

    Ok(buf)
}
