use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgb8,
    error::{ReelError, ReelResult},
};

/// Default per-word pause when neither options nor environment say otherwise.
pub const DEFAULT_WORD_PAUSE_MS: u64 = 500;
/// Default output frame rate.
pub const DEFAULT_FPS: u32 = 24;

/// Built-in font table: short name -> file name inside the fonts directory.
pub const KNOWN_FONTS: &[(&str, &str)] = &[
    ("caviardreams-bi", "CaviarDreams_BoldItalic.ttf"),
    ("caviardreams", "CaviarDreams.ttf"),
    ("notosans-black", "NotoSans-Black.ttf"),
    ("playfairdisplay-black-i", "PlayfairDisplay-BlackItalic.otf"),
    ("playfairdisplay", "PlayfairDisplay-Regular.otf"),
];

/// Font used when the configured font cannot be loaded.
pub const DEFAULT_FONT_NAME: &str = "caviardreams-bi";

/// How each displayed line is positioned horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Lines start at the left margin.
    #[default]
    Left,
    /// Lines are horizontally centered.
    #[serde(alias = "default")]
    Middle,
}

/// Font selection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSpec {
    /// Explicit font file. Takes precedence over `name`.
    pub path: Option<PathBuf>,
    /// Key into [`KNOWN_FONTS`], resolved inside `dir`.
    pub name: String,
    /// Directory holding the built-in fonts.
    pub dir: PathBuf,
    /// Font size in pixels.
    pub size_px: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            path: None,
            name: DEFAULT_FONT_NAME.to_string(),
            dir: PathBuf::from("media/fonts"),
            size_px: 73.0,
        }
    }
}

impl FontSpec {
    /// Candidate font files in the order they should be tried.
    ///
    /// The explicit path (if any) comes first, then the named font, then the default font.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut out = Vec::with_capacity(3);
        if let Some(p) = &self.path {
            out.push(p.clone());
        }
        for name in [self.name.as_str(), DEFAULT_FONT_NAME] {
            match known_font_file(name) {
                Some(file) => {
                    let p = self.dir.join(file);
                    if !out.contains(&p) {
                        out.push(p);
                    }
                }
                None => tracing::warn!(font = name, "unknown font name, skipping"),
            }
        }
        out
    }
}

/// Look up the file name of a built-in font.
pub fn known_font_file(name: &str) -> Option<&'static str> {
    KNOWN_FONTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, file)| *file)
}

/// Background image selection. See [`crate::resolve_background`] for precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundSpec {
    /// Explicit image path.
    pub image: Option<PathBuf>,
    /// Image id, resolved as `<dir>/<id>.jpg`.
    pub id: Option<String>,
    /// Directory of background images.
    pub dir: Option<PathBuf>,
    /// Pick a random image from `dir` when nothing more specific is configured.
    pub random: bool,
}

/// Resolved rendering configuration shared by the layout engine and the frame renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameSpec {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Y of the first displayed line.
    pub margin_top: f32,
    /// Horizontal margin on both sides.
    pub margin_left_right: f32,
    /// Vertical gap between lines.
    pub line_gap: f32,
    /// Upper bound on simultaneously visible lines.
    pub max_lines_per_frame: usize,
    /// Font selection.
    pub font: FontSpec,
    /// Solid canvas fill.
    pub background_color: Rgb8,
    /// Color of lines already read.
    pub text_color: Rgb8,
    /// Color of the word being highlighted.
    pub text_color_current: Rgb8,
    /// Color of the upcoming-word preview.
    pub text_color_next: Rgb8,
    /// Horizontal line placement.
    pub indentation: IndentStyle,
    /// Output frames per second.
    pub fps: u32,
    /// Background image selection.
    pub background: BackgroundSpec,
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            margin_top: 100.0,
            margin_left_right: 50.0,
            line_gap: 10.0,
            max_lines_per_frame: 5,
            font: FontSpec::default(),
            background_color: Rgb8::new(236, 128, 16),
            text_color: Rgb8::new(201, 66, 0),
            text_color_current: Rgb8::new(255, 103, 38),
            text_color_next: Rgb8::new(255, 135, 84),
            indentation: IndentStyle::Left,
            fps: DEFAULT_FPS,
            background: BackgroundSpec::default(),
        }
    }
}

impl FrameSpec {
    /// Load a spec from a JSON file. Missing keys take their defaults.
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open frame spec '{}'", path.display()))?;
        let spec: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ReelError::serde(format!("parse frame spec '{}': {e}", path.display()))
        })?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> ReelResult<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    /// Check invariants the layout engine and encoder rely on.
    pub fn validate(&self) -> ReelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation(
                "frame spec width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            // Encoded output is yuv420p.
            return Err(ReelError::validation(
                "frame spec width/height must be even",
            ));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(ReelError::validation(
                "frame spec width/height must fit in u16",
            ));
        }
        if self.fps == 0 {
            return Err(ReelError::validation("frame spec fps must be non-zero"));
        }
        if self.max_lines_per_frame == 0 {
            return Err(ReelError::validation(
                "frame spec max_lines_per_frame must be >= 1",
            ));
        }
        if !self.font.size_px.is_finite() || self.font.size_px <= 0.0 {
            return Err(ReelError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("margin_top", self.margin_top),
            ("margin_left_right", self.margin_left_right),
            ("line_gap", self.line_gap),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::validation(format!(
                    "frame spec {name} must be finite and >= 0"
                )));
            }
        }
        if self.usable_width() <= 0.0 {
            return Err(ReelError::validation(
                "frame spec margins leave no usable width",
            ));
        }
        Ok(())
    }

    /// Canvas width minus both horizontal margins.
    pub fn usable_width(&self) -> f32 {
        self.width as f32 - 2.0 * self.margin_left_right
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/spec.rs"]
mod tests;
