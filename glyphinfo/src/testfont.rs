//! Tiny fonts assembled in memory, so tests don't need binaries on disk.
//!
//! Glyph 0 is always an unmapped `.notdef`. `glyf`/`loca` are only emitted
//! once some glyph has been given an outline.
//!
//! Available to other crates' tests through the `testfont` feature.

use crate::font::LoadedFont;
use write_fonts::tables::cmap::Cmap;
use write_fonts::types::{GlyphId, Tag};
use write_fonts::FontBuilder;

#[derive(Debug, Clone)]
pub struct TestFont {
    units_per_em: u16,
    head_bounds: [i16; 4],
    ascender: i16,
    descender: i16,
    min_lsb: i16,
    min_rsb: i16,
    names: Vec<(u16, String)>,
    glyphs: Vec<(u16, i16)>,
    mappings: Vec<(char, u32)>,
    outlines: Vec<(u16, [i16; 4])>,
    skipped: Vec<Tag>,
    extra: Vec<(Tag, Vec<u8>)>,
}

impl Default for TestFont {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFont {
    pub fn new() -> Self {
        TestFont {
            units_per_em: 1000,
            head_bounds: [-50, -200, 1000, 900],
            ascender: 800,
            descender: -200,
            min_lsb: -50,
            min_rsb: -20,
            names: vec![],
            glyphs: vec![(500, 0)],
            mappings: vec![],
            outlines: vec![],
            skipped: vec![],
            extra: vec![],
        }
    }

    pub fn units_per_em(mut self, upem: u16) -> Self {
        self.units_per_em = upem;
        self
    }

    pub fn head_bounds(mut self, bounds: [i16; 4]) -> Self {
        self.head_bounds = bounds;
        self
    }

    pub fn vertical(mut self, ascender: i16, descender: i16) -> Self {
        self.ascender = ascender;
        self.descender = descender;
        self
    }

    fn name(mut self, id: u16, value: &str) -> Self {
        self.names.push((id, value.to_string()));
        self
    }

    pub fn family(self, value: &str) -> Self {
        self.name(1, value)
    }

    pub fn subfamily(self, value: &str) -> Self {
        self.name(2, value)
    }

    pub fn full_name(self, value: &str) -> Self {
        self.name(4, value)
    }

    pub fn version(self, value: &str) -> Self {
        self.name(5, value)
    }

    pub fn license(self, value: &str) -> Self {
        self.name(13, value)
    }

    /// Append a glyph, optionally encoded
    pub fn glyph(mut self, unicode: Option<char>, advance: u16, lsb: i16) -> Self {
        let gid = self.glyphs.len() as u32;
        self.glyphs.push((advance, lsb));
        if let Some(ch) = unicode {
            self.mappings.push((ch, gid));
        }
        self
    }

    /// Encode an extra codepoint for an existing glyph
    pub fn map_also(mut self, ch: char, gid: u32) -> Self {
        self.mappings.push((ch, gid));
        self
    }

    /// Give a glyph an outline with the given `[x_min, y_min, x_max, y_max]`
    pub fn outline(mut self, gid: u16, bounds: [i16; 4]) -> Self {
        self.outlines.push((gid, bounds));
        self
    }

    pub fn without(mut self, tag: &[u8; 4]) -> Self {
        self.skipped.push(Tag::new(tag));
        self
    }

    /// Add an arbitrary table, stored verbatim
    pub fn raw_table(mut self, tag: &[u8; 4], data: Vec<u8>) -> Self {
        self.extra.push((Tag::new(tag), data));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        let tables = [
            (Tag::new(b"head"), self.head()),
            (Tag::new(b"hhea"), self.hhea()),
            (Tag::new(b"maxp"), self.maxp()),
            (Tag::new(b"hmtx"), self.hmtx()),
            (Tag::new(b"name"), self.name_table()),
        ];
        for (tag, data) in tables {
            if !self.skipped.contains(&tag) {
                builder.add_raw(tag, data);
            }
        }
        let cmap = Cmap::from_mappings(
            self.mappings
                .iter()
                .map(|(ch, gid)| (*ch, GlyphId::new(*gid))),
        )
        .expect("conflicting test mappings");
        builder.add_table(&cmap).expect("couldn't compile cmap");
        if !self.outlines.is_empty() {
            let (loca, glyf) = self.loca_glyf();
            builder.add_raw(Tag::new(b"loca"), loca);
            builder.add_raw(Tag::new(b"glyf"), glyf);
        }
        for (tag, data) in &self.extra {
            builder.add_raw(*tag, data.as_slice());
        }
        builder.build()
    }

    pub fn load(&self) -> LoadedFont {
        LoadedFont::from_bytes("test.ttf", self.build()).expect("test font didn't load")
    }

    fn head(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        out.extend(1u16.to_be_bytes());
        out.extend(0u16.to_be_bytes());
        out.extend(0x0001_0000u32.to_be_bytes()); // fontRevision
        out.extend(0u32.to_be_bytes()); // checksumAdjustment
        out.extend(0x5F0F_3CF5u32.to_be_bytes());
        out.extend(0u16.to_be_bytes()); // flags
        out.extend(self.units_per_em.to_be_bytes());
        out.extend(0i64.to_be_bytes()); // created
        out.extend(0i64.to_be_bytes()); // modified
        for v in self.head_bounds {
            out.extend(v.to_be_bytes());
        }
        out.extend(0u16.to_be_bytes()); // macStyle
        out.extend(8u16.to_be_bytes()); // lowestRecPPEM
        out.extend(2i16.to_be_bytes()); // fontDirectionHint
        out.extend(0i16.to_be_bytes()); // short loca
        out.extend(0i16.to_be_bytes());
        out
    }

    fn hhea(&self) -> Vec<u8> {
        let advance_max = self.glyphs.iter().map(|(adv, _)| *adv).max().unwrap_or(0);
        let mut out = Vec::with_capacity(36);
        out.extend(1u16.to_be_bytes());
        out.extend(0u16.to_be_bytes());
        out.extend(self.ascender.to_be_bytes());
        out.extend(self.descender.to_be_bytes());
        out.extend(0i16.to_be_bytes()); // lineGap
        out.extend(advance_max.to_be_bytes());
        out.extend(self.min_lsb.to_be_bytes());
        out.extend(self.min_rsb.to_be_bytes());
        out.extend(advance_max.to_be_bytes()); // xMaxExtent
        out.extend(1i16.to_be_bytes()); // caretSlopeRise
        out.extend(0i16.to_be_bytes());
        out.extend(0i16.to_be_bytes());
        out.extend([0u8; 8]); // reserved
        out.extend(0i16.to_be_bytes()); // metricDataFormat
        out.extend((self.glyphs.len() as u16).to_be_bytes());
        out
    }

    fn maxp(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6);
        out.extend(0x0000_5000u32.to_be_bytes());
        out.extend((self.glyphs.len() as u16).to_be_bytes());
        out
    }

    fn hmtx(&self) -> Vec<u8> {
        self.glyphs
            .iter()
            .flat_map(|(advance, lsb)| advance.to_be_bytes().into_iter().chain(lsb.to_be_bytes()))
            .collect()
    }

    fn name_table(&self) -> Vec<u8> {
        let mut names = self.names.clone();
        names.sort_by_key(|(id, _)| *id);
        let encoded: Vec<Vec<u8>> = names
            .iter()
            .map(|(_, s)| s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect())
            .collect();

        let mut out = vec![];
        out.extend(0u16.to_be_bytes());
        out.extend((names.len() as u16).to_be_bytes());
        out.extend((6 + 12 * names.len() as u16).to_be_bytes());
        let mut offset = 0u16;
        for ((id, _), string) in names.iter().zip(&encoded) {
            out.extend(3u16.to_be_bytes()); // Windows
            out.extend(1u16.to_be_bytes()); // Unicode BMP
            out.extend(0x0409u16.to_be_bytes()); // en-US
            out.extend(id.to_be_bytes());
            out.extend((string.len() as u16).to_be_bytes());
            out.extend(offset.to_be_bytes());
            offset += string.len() as u16;
        }
        for string in encoded {
            out.extend(string);
        }
        out
    }

    /// A single-point contour per outlined glyph; only the header bounds matter.
    fn loca_glyf(&self) -> (Vec<u8>, Vec<u8>) {
        let mut loca = vec![];
        let mut glyf = vec![];
        for gid in 0..self.glyphs.len() as u16 {
            loca.extend(((glyf.len() / 2) as u16).to_be_bytes());
            if let Some((_, [x_min, y_min, x_max, y_max])) =
                self.outlines.iter().find(|(g, _)| *g == gid)
            {
                glyf.extend(1i16.to_be_bytes()); // numberOfContours
                for v in [x_min, y_min, x_max, y_max] {
                    glyf.extend(v.to_be_bytes());
                }
                glyf.extend(0u16.to_be_bytes()); // endPtsOfContours[0]
                glyf.extend(0u16.to_be_bytes()); // instructionLength
                glyf.push(0x01); // on curve, long x and y
                glyf.extend(x_min.to_be_bytes());
                glyf.extend(y_min.to_be_bytes());
                glyf.push(0); // pad to even length
            }
        }
        loca.extend(((glyf.len() / 2) as u16).to_be_bytes());
        (loca, glyf)
    }
}
