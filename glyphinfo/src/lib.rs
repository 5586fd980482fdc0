//! Extract font metadata and glyph metrics to JSON
//!
//! The font binary is parsed by `read-fonts`/`skrifa`; this crate only decides
//! which fields to report and how they are laid out in the output.
pub mod error;
pub mod font;
pub mod info;
#[cfg(any(test, feature = "testfont"))]
pub mod testfont;

use std::path::Path;

pub use error::{Error, Result};
pub use font::{GlyphBounds, GlyphMetricsRecord, LoadedFont};
pub use info::{FontInfo, GlyphInfo};

/// Write a `FontInfo` to `output_json` as compact JSON
///
/// The parent directory must already exist.
pub fn write_json(info: &FontInfo, output_json: &Path) -> Result<()> {
    let json = info.to_json()?;
    std::fs::write(output_json, &json).map_err(|e| Error::output_write(output_json, e))?;
    log::info!("Wrote {} bytes to {}", json.len(), output_json.display());
    Ok(())
}

/// Load `font_file`, extract its info and write it to `output_json`
///
/// Nothing is written unless the font loads and all its fields can be
/// gathered. Returns the record that was written.
pub fn extract(font_file: &Path, output_json: &Path) -> Result<FontInfo> {
    let font = LoadedFont::load(font_file)?;
    let info = FontInfo::from_font(&font)?;
    write_json(&info, output_json)?;
    Ok(info)
}
