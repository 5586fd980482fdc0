use crate::error::{Error, Result};
use read_fonts::TableProvider;
use skrifa::instance::{LocationRef, Size};
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, GlyphId16, MetadataProvider};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A font file read into memory, along with where it came from
pub struct LoadedFont {
    /// The file the font was read from
    pub path: PathBuf,
    /// The font binary data
    pub backing: Vec<u8>,
}

/// Metric bounds of a single glyph, in font units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphBounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

/// What the font tells us about one glyph, before any defaulting
///
/// Every field is optional: a glyph may have no Unicode mapping, and fonts
/// without horizontal metrics or TrueType outlines cannot supply the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMetricsRecord {
    pub unicode: Option<u32>,
    pub advance_width: Option<i32>,
    pub left_side_bearing: Option<i32>,
    pub bounds: Option<GlyphBounds>,
}

impl LoadedFont {
    /// Read and parse the font at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let backing = std::fs::read(path).map_err(|e| Error::font_load(path, e))?;
        Self::from_bytes(path, backing)
    }

    /// Wrap an in-memory font binary, checking that it parses
    pub fn from_bytes(path: impl Into<PathBuf>, backing: Vec<u8>) -> Result<Self> {
        let font = LoadedFont {
            path: path.into(),
            backing,
        };
        let num_glyphs = font.num_glyphs()?;
        log::info!(
            "Loaded {} ({} bytes, {} glyphs)",
            font.path.display(),
            font.backing.len(),
            num_glyphs
        );
        Ok(font)
    }

    pub fn fontref(&self) -> Result<FontRef<'_>> {
        FontRef::new(&self.backing).map_err(|e| Error::font_load(&self.path, e))
    }

    /// Number of glyphs, as declared by the `maxp` table
    pub fn num_glyphs(&self) -> Result<u16> {
        self.fontref()?
            .maxp()
            .map(|maxp| maxp.num_glyphs())
            .map_err(|e| Error::font_load(&self.path, e))
    }

    /// The English (or failing that, the first) string for a name ID
    ///
    /// `Ok(None)` means the font simply has no such entry.
    pub fn name(&self, id: StringId) -> Result<Option<String>> {
        let name = self
            .fontref()?
            .localized_strings(id)
            .english_or_first()
            .map(|s| s.chars().collect());
        if name.is_none() {
            log::debug!("{} has no name entry {}", self.path.display(), id);
        }
        Ok(name)
    }

    pub fn family_name(&self) -> Result<Option<String>> {
        self.name(StringId::FAMILY_NAME)
    }

    pub fn subfamily_name(&self) -> Result<Option<String>> {
        self.name(StringId::SUBFAMILY_NAME)
    }

    pub fn full_name(&self) -> Result<Option<String>> {
        self.name(StringId::FULL_NAME)
    }

    pub fn version(&self) -> Result<Option<String>> {
        self.name(StringId::VERSION_STRING)
    }

    pub fn license(&self) -> Result<Option<String>> {
        self.name(StringId::LICENSE_DESCRIPTION)
    }

    /// One record per glyph ID, in glyph order
    ///
    /// Metrics are read unscaled, at the default location, so they come back
    /// in font units.
    pub fn glyph_records(&self) -> Result<Vec<GlyphMetricsRecord>> {
        let font = self.fontref()?;
        let num_glyphs = self.num_glyphs()?;
        let unicodes = reverse_charmap(&font);
        let metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());

        Ok((0..num_glyphs)
            .map(|gid| {
                let gid = GlyphId::from(GlyphId16::new(gid));
                GlyphMetricsRecord {
                    unicode: unicodes.get(&gid).copied(),
                    advance_width: metrics.advance_width(gid).map(to_units),
                    left_side_bearing: metrics.left_side_bearing(gid).map(to_units),
                    bounds: metrics.bounds(gid).map(|bbox| GlyphBounds {
                        x_min: to_units(bbox.x_min),
                        x_max: to_units(bbox.x_max),
                        y_min: to_units(bbox.y_min),
                        y_max: to_units(bbox.y_max),
                    }),
                }
            })
            .collect())
    }
}

fn to_units(value: f32) -> i32 {
    value.round() as i32
}

/// Map each encoded glyph back to a codepoint.
fn reverse_charmap(font: &FontRef) -> HashMap<GlyphId, u32> {
    let mut reverse = HashMap::new();
    for (codepoint, gid) in font.charmap().mappings() {
        // because multiple codepoints may map to the same glyph,
        // we always report the lowest one.
        let val = reverse.entry(gid).or_insert(codepoint);
        *val = codepoint.min(*val);
    }
    reverse
}
