use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use crate::{
    config::background::has_image_ext,
    foundation::error::{ReelError, ReelResult},
};

/// Default number of times the last frame is repeated at the end of a video.
pub const DEFAULT_TRAILING_REPEAT: usize = 48;

/// How the output size is chosen when frames are listed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSizePolicy {
    /// Every frame must share one size.
    #[default]
    Uniform,
    /// Use the truncated mean size; frames are resized while encoding.
    Mean,
}

/// Everything the encoder needs, derived once from the listed frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoSpec {
    /// Final output file.
    pub out_path: PathBuf,
    /// Output `(width, height)`.
    pub frame_size: (u32, u32),
    /// Output frames per second.
    pub fps: u32,
    /// Extra copies of the last frame.
    pub trailing_repeat_count: usize,
}

/// Compare names treating runs of ASCII digits as numbers: `frame-2` < `frame-10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = Chunks(a);
    let mut cb = Chunks(b);
    loop {
        match (ca.next(), cb.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x, y) {
                    (Chunk::Num(x), Chunk::Num(y)) => cmp_digits(x, y),
                    (Chunk::Num(_), Chunk::Text(_)) => Ordering::Less,
                    (Chunk::Text(_), Chunk::Num(_)) => Ordering::Greater,
                    (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Chunk<'a> {
    Text(&'a str),
    Num(&'a str),
}

struct Chunks<'a>(&'a str);

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let s = self.0;
        let first = s.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = s
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (head, tail) = s.split_at(end);
        self.0 = tail;
        Some(if digits {
            Chunk::Num(head)
        } else {
            Chunk::Text(head)
        })
    }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Image files in `dir`, in natural order.
pub fn list_frames(dir: &Path) -> ReelResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        ReelError::input(format!("failed to list frames dir '{}': {e}", dir.display()))
    })?;

    let mut frames: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            ReelError::input(format!("failed to list frames dir '{}': {e}", dir.display()))
        })?;
        let path = entry.path();
        if !path.is_file() || !has_image_ext(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            frames.push((name.to_string(), path));
        }
    }
    if frames.is_empty() {
        return Err(ReelError::input(format!(
            "no frames found in '{}'",
            dir.display()
        )));
    }
    frames.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    Ok(frames.into_iter().map(|(_, p)| p).collect())
}

/// Output size for `frames` under `policy`.
pub fn derive_frame_size(frames: &[PathBuf], policy: FrameSizePolicy) -> ReelResult<(u32, u32)> {
    let first = frames
        .first()
        .ok_or_else(|| ReelError::input("cannot derive a frame size from zero frames"))?;
    let first_dims = dimensions(first)?;

    match policy {
        FrameSizePolicy::Uniform => {
            for f in &frames[1..] {
                let dims = dimensions(f)?;
                if dims != first_dims {
                    return Err(ReelError::input(format!(
                        "frame '{}' is {}x{}, expected {}x{} like '{}'",
                        f.display(),
                        dims.0,
                        dims.1,
                        first_dims.0,
                        first_dims.1,
                        first.display()
                    )));
                }
            }
            Ok(first_dims)
        }
        FrameSizePolicy::Mean => {
            let (mut w, mut h) = (u64::from(first_dims.0), u64::from(first_dims.1));
            for f in &frames[1..] {
                let (fw, fh) = dimensions(f)?;
                w += u64::from(fw);
                h += u64::from(fh);
            }
            let n = frames.len() as u64;
            Ok(((w / n) as u32, (h / n) as u32))
        }
    }
}

fn dimensions(path: &Path) -> ReelResult<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| {
        ReelError::input(format!(
            "failed to read frame header '{}': {e}",
            path.display()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/listing.rs"]
mod tests;
