#[derive(Debug, thiserror::Error)]
pub enum SprError {
    #[error("IOError: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Not a supported sprite. Magic ({magic:#010x}). Version ({version})")]
    UnsupportedFormat { magic: i32, version: i32 },
    #[error("Malformed sprite: {reason}")]
    MalformedHeader { reason: String },
    #[error("Unsupported sprite variant: {reason}")]
    UnsupportedVariant { reason: String },
    #[error("Cannot allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },
    #[error("Sprite has no renderable frame")]
    EmptySprite,
    #[error("Palette index {index} is out of range for a palette of {palette_len} colors")]
    PaletteIndexOutOfRange { index: u8, palette_len: usize },
    #[error("Invalid target width: {width}")]
    InvalidTargetWidth { width: u32 },
}

impl SprError {
    pub fn to_result<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
