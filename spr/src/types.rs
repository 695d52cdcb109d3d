use std::fmt;

use image::{RgbImage, RgbaImage};

/// "IDSP" read as a little endian i32
pub const SPR_IDENT: i32 = 0x50534449;
/// "DDS " read as a little endian u32
pub const DDS_MAGIC: u32 = 0x20534444;
/// Declared size of a DDS header, excluding the magic
pub const DDS_HEADER_SIZE: u32 = 124;
/// Declared size of the pixel format block inside a DDS header
pub const DDS_PIXEL_FORMAT_SIZE: u32 = 32;
pub const DXT5_FOURCC: FourCC = FourCC(0x35545844);
pub const DXT5_BLOCK_SIZE: usize = 16;
pub const MAX_PALETTE_COUNT: i16 = 256;

/// Shared by both versions. V2 follows it with a palette, V3 does not.
#[derive(Debug, Clone, PartialEq)]
pub struct SprHeader {
    pub id: i32,
    pub version: i32,
    pub orientation: i32,
    pub texture_format: i32,
    pub bounding_radius: f32,
    pub max_width: i32,
    pub max_height: i32,
    pub frame_num: i32,
    pub beam_length: f32,
    pub sync_type: i32,
}

pub type SprPalette = Vec<[u8; 3]>;

#[derive(Debug, Clone, PartialEq)]
pub struct SprFrameHeader {
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Palette indices, row major
pub type SprFrameImage = Vec<u8>;

#[derive(Debug, Clone, PartialEq)]
pub struct SprFrame {
    pub header: SprFrameHeader,
    pub image: SprFrameImage,
}

/// `intervals` and `frames` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SprFrameGroup {
    pub intervals: Vec<f32>,
    pub frames: Vec<SprFrame>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SprFrameEntry {
    Single(SprFrame),
    Group(SprFrameGroup),
}

impl SprFrameEntry {
    pub const SINGLE_TAG: i32 = 0;
    pub const GROUP_TAG: i32 = 1;
}

/// Palette indexed sprite, version 2
#[derive(Debug, Clone, PartialEq)]
pub struct Spr {
    pub header: SprHeader,
    pub palette: SprPalette,
    pub frames: Vec<SprFrameEntry>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub u32);

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.to_le_bytes() {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{:02x}", byte)?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({}, {:#010x})", self, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DdsPixelFormat {
    pub size: u32,
    pub flags: u32,
    pub four_cc: FourCC,
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DdsHeader {
    pub size: u32,
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_map_count: u32,
    pub reserved1: [u32; 11],
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
    pub reserved2: u32,
}

/// One DDS wrapped surface.
///
/// `data` holds `ceil(width / 4) * ceil(height / 4)` compressed 16 byte blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SprFrameV3 {
    pub width: u32,
    pub height: u32,
    pub format: FourCC,
    pub data: Vec<u8>,
}

/// DXT5 compressed sprite, version 3
#[derive(Debug, Clone, PartialEq)]
pub struct SprV3 {
    pub header: SprHeader,
    pub frames: Vec<SprFrameV3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprFormat {
    V2,
    V3,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sprite {
    V2(Spr),
    V3(SprV3),
}

/// The one frame a preview is made from, borrowed from its [`Sprite`].
#[derive(Debug, Clone, Copy)]
pub enum SelectedFrame<'a> {
    Indexed {
        frame: &'a SprFrame,
        palette: &'a SprPalette,
    },
    Dxt5(&'a SprFrameV3),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodedImage {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl DecodedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            DecodedImage::Rgb(image) => image.dimensions(),
            DecodedImage::Rgba(image) => image.dimensions(),
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, DecodedImage::Rgba(_))
    }

    pub fn channel_count(&self) -> usize {
        if self.has_alpha() {
            4
        } else {
            3
        }
    }
}

/// Final preview: BGRA rows, top to bottom, no row padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub has_alpha: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SprOrientation {
    ParallelUpright = 0,
    FacingUpright,
    Parallel,
    Oriented,
    ParallelOriented,
}

impl TryFrom<i32> for SprOrientation {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ParallelUpright),
            1 => Ok(Self::FacingUpright),
            2 => Ok(Self::Parallel),
            3 => Ok(Self::Oriented),
            4 => Ok(Self::ParallelOriented),
            unknown => Err(unknown),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SprTextureFormat {
    Normal = 0,
    Additive,
    IndexAlpha,
    AlphaTest,
}

impl TryFrom<i32> for SprTextureFormat {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Additive),
            2 => Ok(Self::IndexAlpha),
            3 => Ok(Self::AlphaTest),
            unknown => Err(unknown),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SprSyncType {
    Sync = 0,
    Random,
}

impl TryFrom<i32> for SprSyncType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sync),
            1 => Ok(Self::Random),
            unknown => Err(unknown),
        }
    }
}
