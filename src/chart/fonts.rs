// Runtime font loading for the ab_glyph text backend

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow, bail};
use plotters::style::{FontStyle, register_font};

use crate::config::PLOT_CONFIG;

static REGISTERED_FONT: OnceLock<PathBuf> = OnceLock::new();

/// First candidate that exists on disk: the explicit path when given, else the configured list.
pub fn find_font(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Font file {} does not exist", path.display());
        }
        return Ok(path.to_path_buf());
    }

    PLOT_CONFIG
        .font_search_paths
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .ok_or_else(|| {
            anyhow!(
                "No usable font found, pass --font <file.ttf>. Searched: {}",
                PLOT_CONFIG.font_search_paths.join(", ")
            )
        })
}

/// Registers the chart font once per process; later calls are no-ops.
pub fn ensure_font_registered(explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = REGISTERED_FONT.get() {
        log::debug!("Font already registered from {}", path.display());
        return Ok(());
    }

    let path = find_font(explicit)?;
    register_font_file(&path)?;

    log::info!("Using font {}", path.display());
    let _ = REGISTERED_FONT.set(path);
    Ok(())
}

/// Loads `path` under the configured family name. Rejected files leave the registry untouched.
fn register_font_file(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;
    // The text backend keeps a 'static reference for the life of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(PLOT_CONFIG.font_family, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("Invalid font file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_font_is_an_error() {
        let err = find_font(Some(Path::new("/definitely/not/here.ttf"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.ttf"));
    }

    #[test]
    fn test_garbage_font_file_is_rejected() {
        let path = std::env::temp_dir().join("price_mentions_not_a_font.ttf");
        std::fs::write(&path, b"definitely not a TrueType file").unwrap();

        let err = register_font_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid font file"));
        std::fs::remove_file(&path).ok();
    }
}
