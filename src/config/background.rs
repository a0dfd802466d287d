use std::path::{Path, PathBuf};

use rand::seq::SliceRandom as _;

use crate::config::{env::EnvOverrides, spec::BackgroundSpec};

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png"];

/// Outcome of background resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    /// Paint this image (resized to the canvas) over the background color.
    Image(PathBuf),
    /// Use the solid background color only.
    Solid,
}

/// Resolve which background to paint.
///
/// Precedence, first existing file wins:
/// 1. `spec.image`
/// 2. the `LVG_BG_IMAGE_FULL_PATH` override
/// 3. `spec.id` as `<spec.dir>/<id>.jpg`
/// 4. a random image from `spec.dir` when `spec.random` is set
///
/// Anything else resolves to [`Background::Solid`].
pub fn resolve_background(spec: &BackgroundSpec, env: &EnvOverrides) -> Background {
    let explicit = [spec.image.clone(), env.background_image.clone()];
    for candidate in explicit.into_iter().flatten() {
        if candidate.is_file() {
            return Background::Image(candidate);
        }
        tracing::warn!(path = %candidate.display(), "background image not found, skipping");
    }

    if let (Some(id), Some(dir)) = (&spec.id, &spec.dir) {
        let candidate = dir.join(format!("{id}.jpg"));
        if candidate.is_file() {
            return Background::Image(candidate);
        }
        tracing::warn!(path = %candidate.display(), "background id not found, skipping");
    }

    if spec.random
        && let Some(dir) = &spec.dir
    {
        let images = list_images(dir);
        if let Some(pick) = images.choose(&mut rand::thread_rng()) {
            return Background::Image(pick.clone());
        }
        tracing::warn!(dir = %dir.display(), "no background images to pick from");
    }

    Background::Solid
}

fn list_images(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut out: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_image_ext(p))
        .collect();
    out.sort();
    out
}

pub(crate) fn has_image_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

#[cfg(test)]
#[path = "../../tests/unit/config/background.rs"]
mod tests;
