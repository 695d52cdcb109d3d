use nom::{
    bytes::complete::{tag, take, take_until},
    combinator::map,
    multi::count,
    number::complete::le_u32,
    Parser,
};

use crate::{
    DdsHeader, DdsPixelFormat, FourCC, SprFrameV3, SprV3, DDS_HEADER_SIZE, DDS_PIXEL_FORMAT_SIZE,
    DXT5_BLOCK_SIZE, DXT5_FOURCC,
};

use super::{malformed, parse_header, unsupported, validate_header, IResult};

const DDS_MAGIC_BYTES: &[u8] = b"DDS ";
const MAX_SURFACE_DIMENSION: u32 = 0x7FFFFFFF;

pub fn parse_dds_pixel_format(i: &'_ [u8]) -> IResult<'_, DdsPixelFormat> {
    map(
        (
            le_u32, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32,
        ),
        |(size, flags, four_cc, rgb_bit_count, r_bit_mask, g_bit_mask, b_bit_mask, a_bit_mask)| {
            DdsPixelFormat {
                size,
                flags,
                four_cc: FourCC(four_cc),
                rgb_bit_count,
                r_bit_mask,
                g_bit_mask,
                b_bit_mask,
                a_bit_mask,
            }
        },
    )
    .parse(i)
}

/// Parses the 124 byte header that follows the DDS magic.
pub fn parse_dds_header(i: &'_ [u8]) -> IResult<'_, DdsHeader> {
    let (i, size) = le_u32.parse(i)?;

    if size != DDS_HEADER_SIZE {
        return malformed(format!("DDS header size {size}, expected {DDS_HEADER_SIZE}"));
    }

    let (i, (flags, height, width, pitch_or_linear_size, depth, mip_map_count)) =
        (le_u32, le_u32, le_u32, le_u32, le_u32, le_u32).parse(i)?;

    let (i, reserved1) = map(count(le_u32, 11), |values| {
        let mut reserved1 = [0u32; 11];
        reserved1.copy_from_slice(&values);
        reserved1
    })
    .parse(i)?;

    let (i, pixel_format) = parse_dds_pixel_format(i)?;

    if pixel_format.size != DDS_PIXEL_FORMAT_SIZE {
        return malformed(format!(
            "DDS pixel format size {}, expected {DDS_PIXEL_FORMAT_SIZE}",
            pixel_format.size
        ));
    }

    let (i, (caps, caps2, caps3, caps4, reserved2)) =
        (le_u32, le_u32, le_u32, le_u32, le_u32).parse(i)?;

    Ok((
        i,
        DdsHeader {
            size,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth,
            mip_map_count,
            reserved1,
            pixel_format,
            caps,
            caps2,
            caps3,
            caps4,
            reserved2,
        },
    ))
}

/// Size of a DXT5 surface: one 16 byte block per 4x4 pixels, partial blocks included.
pub fn dxt5_data_size(width: u32, height: u32) -> Option<usize> {
    (width.div_ceil(4) as usize)
        .checked_mul(height.div_ceil(4) as usize)?
        .checked_mul(DXT5_BLOCK_SIZE)
}

/// Scans forward to the next DDS magic, then reads one surface.
///
/// The surface normally sits right where the scan starts.
pub fn parse_frame_v3(i: &'_ [u8]) -> IResult<'_, SprFrameV3> {
    let scan: IResult<'_, &[u8]> = take_until(DDS_MAGIC_BYTES).parse(i);

    let Ok((i, skipped)) = scan else {
        return malformed("no DDS surface found");
    };

    if !skipped.is_empty() {
        log::warn!("skipped {} bytes before DDS surface", skipped.len());
    }

    log::debug!("DDS surface at +{}", skipped.len());

    let (i, _) = tag(DDS_MAGIC_BYTES).parse(i)?;
    let (i, dds_header) = parse_dds_header(i)?;

    let (width, height) = (dds_header.width, dds_header.height);

    if !(1..=MAX_SURFACE_DIMENSION).contains(&width)
        || !(1..=MAX_SURFACE_DIMENSION).contains(&height)
    {
        return malformed(format!("DDS surface dimensions {width}x{height} are out of range"));
    }

    if dds_header.mip_map_count != 1 {
        return unsupported(format!(
            "DDS surface has {} mipmaps",
            dds_header.mip_map_count
        ));
    }

    let format = dds_header.pixel_format.four_cc;

    if format != DXT5_FOURCC {
        return unsupported(format!("DDS surface format {format} is not DXT5"));
    }

    let Some(data_size) = dxt5_data_size(width, height) else {
        return malformed(format!("DDS surface {width}x{height} is too large"));
    };

    log::trace!("DXT5 surface {width}x{height}, {data_size} bytes");

    let (i, data) = take(data_size).parse(i)?;

    Ok((
        i,
        SprFrameV3 {
            width,
            height,
            format,
            data: data.to_vec(),
        },
    ))
}

pub fn parse_spr_v3(i: &'_ [u8]) -> IResult<'_, SprV3> {
    let (i, header) = parse_header.parse(i)?;
    validate_header(&header, 3)?;

    if header.max_width < 1 || header.max_height < 1 {
        return malformed(format!(
            "sprite dimensions {}x{} are not positive",
            header.max_width, header.max_height
        ));
    }

    let (i, frames) = count(parse_frame_v3, header.frame_num as usize).parse(i)?;

    Ok((i, SprV3 { header, frames }))
}
