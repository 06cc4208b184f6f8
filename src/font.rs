use crate::config::{WheelConfig, FONT_ENV_VAR, FONT_SEARCH_PATHS};
use crate::error::{Result, WheelError};
use rusttype::Font;
use std::path::{Path, PathBuf};

pub fn load_font_file(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path).map_err(|source| WheelError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| WheelError::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// Resolve the font for labels and panel text.
///
/// An explicit `font_path` (or `WHEEL_FONT`) must load, otherwise it is an
/// error. Without either, common system locations are probed and `None` is
/// returned when nothing usable is found; the wheel then draws without text.
pub fn load_font(config: &WheelConfig) -> Result<Option<Font<'static>>> {
    let explicit = config
        .font_path
        .clone()
        .or_else(|| std::env::var_os(FONT_ENV_VAR).map(PathBuf::from));
    if let Some(path) = explicit {
        let font = load_font_file(&path)?;
        log::info!("using font {}", path.display());
        return Ok(Some(font));
    }

    for candidate in FONT_SEARCH_PATHS.iter().map(Path::new) {
        if !candidate.is_file() {
            continue;
        }
        match load_font_file(candidate) {
            Ok(font) => {
                log::info!("using font {}", candidate.display());
                return Ok(Some(font));
            }
            Err(err) => log::debug!("skipping font: {err}"),
        }
    }

    log::warn!("no font found; set {FONT_ENV_VAR} to draw labels");
    Ok(None)
}
