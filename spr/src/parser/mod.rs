//! Sprite parsing on top of `nom`.
//!
//! Native nom failures only ever mean the input ran out, so they all collapse into
//! [`SprParseError::Truncated`]. Field validation raises `nom::Err::Failure` with a reason.
use std::io;

use nom::{
    combinator::map,
    error::{ErrorKind, ParseError},
    number::complete::{le_f32, le_i32},
    IResult as _IResult, Parser,
};

use crate::{error::SprError, SprHeader, SPR_IDENT};

mod v2;
mod v3;

pub use v2::parse_spr;
pub use v3::parse_spr_v3;

#[derive(Debug, Clone, PartialEq)]
pub enum SprParseError {
    Truncated,
    Malformed(String),
    Unsupported(String),
}

impl<I> ParseError<I> for SprParseError {
    fn from_error_kind(_input: I, _kind: ErrorKind) -> Self {
        SprParseError::Truncated
    }

    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<SprParseError>> for SprError {
    fn from(value: nom::Err<SprParseError>) -> Self {
        let err = match value {
            nom::Err::Incomplete(_) => SprParseError::Truncated,
            nom::Err::Error(err) | nom::Err::Failure(err) => err,
        };

        match err {
            SprParseError::Truncated => SprError::Io {
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "sprite data ends early"),
            },
            SprParseError::Malformed(reason) => SprError::MalformedHeader { reason },
            SprParseError::Unsupported(reason) => SprError::UnsupportedVariant { reason },
        }
    }
}

pub type IResult<'a, T> = _IResult<&'a [u8], T, SprParseError>;

pub(crate) fn malformed<T>(reason: impl Into<String>) -> Result<T, nom::Err<SprParseError>> {
    Err(nom::Err::Failure(SprParseError::Malformed(reason.into())))
}

pub(crate) fn unsupported<T>(reason: impl Into<String>) -> Result<T, nom::Err<SprParseError>> {
    Err(nom::Err::Failure(SprParseError::Unsupported(reason.into())))
}

pub fn parse_header(i: &'_ [u8]) -> IResult<'_, SprHeader> {
    map(
        (
            le_i32, le_i32, le_i32, le_i32, le_f32, le_i32, le_i32, le_i32, le_f32, le_i32,
        ),
        |(
            id,
            version,
            orientation,
            texture_format,
            bounding_radius,
            max_width,
            max_height,
            frame_num,
            beam_length,
            sync_type,
        )| SprHeader {
            id,
            version,
            orientation,
            texture_format,
            bounding_radius,
            max_width,
            max_height,
            frame_num,
            beam_length,
            sync_type,
        },
    )
    .parse(i)
}

/// Checks the ident, the version and the frame count.
pub(crate) fn validate_header(
    header: &SprHeader,
    version: i32,
) -> Result<(), nom::Err<SprParseError>> {
    if header.id != SPR_IDENT {
        return malformed(format!("bad magic {:#010x}", header.id));
    }

    if header.version != version {
        return malformed(format!(
            "expected version {version}, found {}",
            header.version
        ));
    }

    if header.frame_num < 1 {
        return malformed(format!("frame count {} is less than 1", header.frame_num));
    }

    Ok(())
}
