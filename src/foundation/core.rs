use crate::foundation::error::{ReelError, ReelResult};

/// Opaque RGB8 color, serialized as `[r, g, b]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque RGBA8 bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Position of a frame in the encoded stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Identity of a rendered still: the word event it depicts and its position within that event.
///
/// Ordering is `(event_index, sub_index)`, which is also playback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId {
    /// Index of the event in the script event stream.
    pub event_index: usize,
    /// Index of the still within the event, across all highlight phases.
    pub sub_index: usize,
}

const FRAME_PREFIX: &str = "lvg-";
const FRAME_EXT: &str = ".png";

impl FrameId {
    /// Construct a frame id.
    pub fn new(event_index: usize, sub_index: usize) -> Self {
        Self {
            event_index,
            sub_index,
        }
    }

    /// File name used when persisting this frame (`lvg-{event}-{sub}.png`).
    pub fn file_name(self) -> String {
        format!(
            "{FRAME_PREFIX}{}-{}{FRAME_EXT}",
            self.event_index, self.sub_index
        )
    }

    /// Parse a file name produced by [`FrameId::file_name`].
    pub fn parse_file_name(name: &str) -> ReelResult<Self> {
        let bad = || ReelError::input(format!("'{name}' is not a rendered frame file name"));
        let body = name
            .strip_prefix(FRAME_PREFIX)
            .and_then(|s| s.strip_suffix(FRAME_EXT))
            .ok_or_else(bad)?;
        let (event, sub) = body.split_once('-').ok_or_else(bad)?;
        Ok(Self {
            event_index: event.parse().map_err(|_| bad())?,
            sub_index: sub.parse().map_err(|_| bad())?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
