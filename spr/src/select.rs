use crate::{
    error::SprError, SelectedFrame, Spr, SprFrame, SprFrameEntry, SprFrameV3, SprV3, Sprite,
};

impl Spr {
    /// First single frame in file order. A group met before any single frame gives its first
    /// sub-frame.
    pub fn select_frame(&self) -> Result<&SprFrame, SprError> {
        self.frames
            .iter()
            .find_map(|entry| match entry {
                SprFrameEntry::Single(frame) => Some(frame),
                SprFrameEntry::Group(group) => group.frames.first(),
            })
            .ok_or(SprError::EmptySprite)
    }
}

impl SprV3 {
    pub fn select_frame(&self) -> Result<&SprFrameV3, SprError> {
        self.frames.first().ok_or(SprError::EmptySprite)
    }
}

impl Sprite {
    pub fn select_frame(&self) -> Result<SelectedFrame<'_>, SprError> {
        match self {
            Sprite::V2(spr) => Ok(SelectedFrame::Indexed {
                frame: spr.select_frame()?,
                palette: &spr.palette,
            }),
            Sprite::V3(spr) => Ok(SelectedFrame::Dxt5(spr.select_frame()?)),
        }
    }
}
