use crate::error::{Error, Result};
use crate::font::{GlyphMetricsRecord, LoadedFont};
use read_fonts::TableProvider;
use serde::{Deserialize, Serialize};

/// Font-wide metadata and the metrics of every encoded glyph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    pub font_family: Option<String>,
    pub font_subfamily: Option<String>,
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub units_per_em: u16,
    pub x_min: i16,
    pub x_max: i16,
    pub y_min: i16,
    pub y_max: i16,
    pub ascender: i16,
    pub descender: i16,
    pub advance_width_max: u16,
    pub min_left_side_bearing: i16,
    pub min_right_side_bearing: i16,
    pub glyphs: Vec<GlyphInfo>,
}

/// Metrics of a single encoded glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphInfo {
    pub unicode: u32,
    pub advance_width: i32,
    pub left_side_bearing: i32,
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl GlyphInfo {
    /// Project a raw glyph record, or `None` if the glyph is not encoded.
    ///
    /// Any metric the font did not supply is reported as zero.
    pub fn from_record(record: &GlyphMetricsRecord) -> Option<Self> {
        let unicode = record.unicode?;
        let bounds = record.bounds.unwrap_or_default();
        Some(GlyphInfo {
            unicode,
            advance_width: record.advance_width.unwrap_or(0),
            left_side_bearing: record.left_side_bearing.unwrap_or(0),
            x_min: bounds.x_min,
            x_max: bounds.x_max,
            y_min: bounds.y_min,
            y_max: bounds.y_max,
        })
    }
}

impl FontInfo {
    /// Gather everything we report about a font
    ///
    /// The `head` and `hhea` tables are required; a font without them fails
    /// with [`Error::FontLoad`]. Missing name strings are simply `None`.
    pub fn from_font(font: &LoadedFont) -> Result<Self> {
        let fontref = font.fontref()?;
        let head = fontref
            .head()
            .map_err(|e| Error::font_load(&font.path, e))?;
        let hhea = fontref
            .hhea()
            .map_err(|e| Error::font_load(&font.path, e))?;

        let records = font.glyph_records()?;
        let glyphs: Vec<GlyphInfo> = records.iter().filter_map(GlyphInfo::from_record).collect();
        log::debug!(
            "Skipped {} glyphs without a Unicode mapping",
            records.len() - glyphs.len()
        );

        Ok(FontInfo {
            font_family: font.family_name()?,
            font_subfamily: font.subfamily_name()?,
            full_name: font.full_name()?,
            version: font.version()?,
            license: font.license()?,
            units_per_em: head.units_per_em(),
            x_min: head.x_min(),
            x_max: head.x_max(),
            y_min: head.y_min(),
            y_max: head.y_max(),
            ascender: hhea.ascender().to_i16(),
            descender: hhea.descender().to_i16(),
            advance_width_max: hhea.advance_width_max().to_u16(),
            min_left_side_bearing: hhea.min_left_side_bearing().to_i16(),
            min_right_side_bearing: hhea.min_right_side_bearing().to_i16(),
            glyphs,
        })
    }

    /// Compact JSON, keys in declaration order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
