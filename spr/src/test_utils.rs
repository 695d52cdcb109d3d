//! Crafts sprite streams for tests.
use crate::{FourCC, SprFrameEntry, DDS_HEADER_SIZE, DDS_MAGIC, DDS_PIXEL_FORMAT_SIZE, SPR_IDENT};

#[derive(Default)]
pub struct SprBuilder {
    data: Vec<u8>,
}

impl SprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_i32(mut self, i: i32) -> Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_u32(mut self, i: u32) -> Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_i16(mut self, i: i16) -> Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_f32(mut self, i: f32) -> Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_u8_slice(mut self, i: &[u8]) -> Self {
        self.data.extend_from_slice(i);
        self
    }

    pub fn header(self, version: i32, frame_num: i32) -> Self {
        self.header_with_size(version, frame_num, 16, 16)
    }

    pub fn header_with_size(
        self,
        version: i32,
        frame_num: i32,
        max_width: i32,
        max_height: i32,
    ) -> Self {
        self.append_i32(SPR_IDENT)
            .append_i32(version)
            // orientation
            .append_i32(2)
            // texture format
            .append_i32(1)
            .append_f32(8.)
            .append_i32(max_width)
            .append_i32(max_height)
            .append_i32(frame_num)
            .append_f32(0.)
            .append_i32(0)
    }

    pub fn palette(self, colors: &[[u8; 3]]) -> Self {
        self.append_i16(colors.len() as i16)
            .append_u8_slice(colors.as_flattened())
    }

    fn frame_body(self, width: i32, height: i32, indices: &[u8]) -> Self {
        self.append_i32(-width / 2)
            .append_i32(height / 2)
            .append_i32(width)
            .append_i32(height)
            .append_u8_slice(indices)
    }

    pub fn single_frame(self, width: i32, height: i32, indices: &[u8]) -> Self {
        self.append_i32(SprFrameEntry::SINGLE_TAG)
            .frame_body(width, height, indices)
    }

    pub fn group(self, frames: &[(i32, i32, &[u8])]) -> Self {
        let res = self
            .append_i32(SprFrameEntry::GROUP_TAG)
            .append_i32(frames.len() as i32);

        let res = frames.iter().fold(res, |res, _| res.append_f32(0.1));

        frames
            .iter()
            .fold(res, |res, (width, height, indices)| {
                res.frame_body(*width, *height, indices)
            })
    }

    /// DDS magic, a 124 byte header, then `blocks` verbatim.
    pub fn dds_surface(
        self,
        width: u32,
        height: u32,
        mip_map_count: u32,
        four_cc: FourCC,
        blocks: &[u8],
    ) -> Self {
        let res = self
            .append_u32(DDS_MAGIC)
            .append_u32(DDS_HEADER_SIZE)
            // caps, height, width, pixel format, linear size
            .append_u32(0x81007)
            .append_u32(height)
            .append_u32(width)
            .append_u32(blocks.len() as u32)
            .append_u32(0)
            .append_u32(mip_map_count);

        let res = (0..11).fold(res, |res, _| res.append_u32(0));

        res.append_u32(DDS_PIXEL_FORMAT_SIZE)
            // fourcc flag
            .append_u32(0x4)
            .append_u32(four_cc.0)
            .append_u32(0)
            .append_u32(0)
            .append_u32(0)
            .append_u32(0)
            .append_u32(0)
            // texture caps
            .append_u32(0x1000)
            .append_u32(0)
            .append_u32(0)
            .append_u32(0)
            .append_u32(0)
            .append_u8_slice(blocks)
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// 2x2 sprite with a two color palette and indices `[0, 1, 0, 1]`.
pub fn two_color_v2() -> Vec<u8> {
    SprBuilder::new()
        .header(2, 1)
        .palette(&[[10, 20, 30], [40, 50, 60]])
        .single_frame(2, 2, &[0, 1, 0, 1])
        .build()
}

/// Packs one DXT5 block from endpoints and per pixel indices.
pub fn dxt5_block(
    alpha: (u8, u8),
    alpha_indices: [u8; 16],
    color: (u16, u16),
    color_indices: [u8; 16],
) -> [u8; 16] {
    let alpha_bits = alpha_indices
        .iter()
        .enumerate()
        .fold(0u64, |bits, (idx, &value)| bits | ((value as u64 & 7) << (idx * 3)));
    let color_bits = color_indices
        .iter()
        .enumerate()
        .fold(0u32, |bits, (idx, &value)| bits | ((value as u32 & 3) << (idx * 2)));

    let mut block = [0u8; 16];
    block[0] = alpha.0;
    block[1] = alpha.1;
    block[2..8].copy_from_slice(&alpha_bits.to_le_bytes()[..6]);
    block[8..10].copy_from_slice(&color.0.to_le_bytes());
    block[10..12].copy_from_slice(&color.1.to_le_bytes());
    block[12..16].copy_from_slice(&color_bits.to_le_bytes());
    block
}
