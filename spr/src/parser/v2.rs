use nom::{
    bytes::complete::take,
    combinator::map,
    multi::count,
    number::complete::{le_f32, le_i16, le_i32},
    Parser,
};

use crate::{
    Spr, SprFrame, SprFrameEntry, SprFrameGroup, SprFrameHeader, SprPalette, MAX_PALETTE_COUNT,
};

use super::{malformed, parse_header, unsupported, validate_header, IResult};

pub fn parse_palette(i: &'_ [u8]) -> IResult<'_, SprPalette> {
    let (i, palette_count) = le_i16.parse(i)?;

    if !(1..=MAX_PALETTE_COUNT).contains(&palette_count) {
        return malformed(format!(
            "palette count {palette_count} is outside 1..={MAX_PALETTE_COUNT}"
        ));
    }

    count(
        map(take(3usize), |arr: &[u8]| [arr[0], arr[1], arr[2]]),
        palette_count as usize,
    )
    .parse(i)
}

pub fn parse_frame_header(i: &'_ [u8]) -> IResult<'_, SprFrameHeader> {
    let (i, (origin_x, origin_y, width, height)) = (le_i32, le_i32, le_i32, le_i32).parse(i)?;

    if width < 1 || height < 1 {
        return malformed(format!("frame dimensions {width}x{height} are not positive"));
    }

    Ok((
        i,
        SprFrameHeader {
            origin_x,
            origin_y,
            width,
            height,
        },
    ))
}

pub fn parse_frame(i: &'_ [u8]) -> IResult<'_, SprFrame> {
    let (i, header) = parse_frame_header.parse(i)?;

    let Some(image_length) = (header.width as usize).checked_mul(header.height as usize) else {
        return malformed(format!(
            "frame dimensions {}x{} are too large",
            header.width, header.height
        ));
    };

    let (i, image) = take(image_length).parse(i)?;

    Ok((
        i,
        SprFrame {
            header,
            image: image.to_vec(),
        },
    ))
}

pub fn parse_frame_group(i: &'_ [u8]) -> IResult<'_, SprFrameGroup> {
    let (i, frame_count) = le_i32.parse(i)?;

    if frame_count < 1 {
        return malformed(format!("group frame count {frame_count} is less than 1"));
    }

    let (i, intervals) = count(le_f32, frame_count as usize).parse(i)?;
    let (i, frames) = count(parse_frame, frame_count as usize).parse(i)?;

    Ok((i, SprFrameGroup { intervals, frames }))
}

pub fn parse_frame_entry(i: &'_ [u8]) -> IResult<'_, SprFrameEntry> {
    let (i, tag) = le_i32.parse(i)?;

    log::trace!("frame entry tag {tag}");

    match tag {
        SprFrameEntry::SINGLE_TAG => map(parse_frame, SprFrameEntry::Single).parse(i),
        SprFrameEntry::GROUP_TAG => map(parse_frame_group, SprFrameEntry::Group).parse(i),
        unknown => unsupported(format!("unknown frame tag {unknown}")),
    }
}

pub fn parse_spr(i: &'_ [u8]) -> IResult<'_, Spr> {
    let (i, header) = parse_header.parse(i)?;
    validate_header(&header, 2)?;

    let (i, palette) = parse_palette(i)?;
    let (i, frames) = count(parse_frame_entry, header.frame_num as usize).parse(i)?;

    Ok((
        i,
        Spr {
            header,
            palette,
            frames,
        },
    ))
}
