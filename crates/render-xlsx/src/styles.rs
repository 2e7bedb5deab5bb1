//! `xl/styles.xml`: every distinct [`CellStyle`] becomes one `cellXfs`
//! record, with fonts, fills and borders deduplicated underneath it.

use crate::SPREADSHEET_NS;
use rfpdoc_render_core::{RenderError, XmlWriter};
use rfpdoc_sheet::{CellStyle, Font};
use rfpdoc_types::Color;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered set handing out stable indices.
#[derive(Debug)]
struct Interner<T> {
    items: Vec<T>,
    index: HashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> Interner<T> {
    fn with(initial: impl IntoIterator<Item = T>) -> Self {
        let mut interner = Self {
            items: Vec::new(),
            index: HashMap::new(),
        };
        for item in initial {
            interner.intern(item);
        }
        interner
    }

    fn intern(&mut self, item: T) -> u32 {
        if let Some(id) = self.index.get(&item) {
            return *id;
        }
        let id = self.items.len() as u32;
        self.index.insert(item.clone(), id);
        self.items.push(item);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Fill {
    None,
    Gray125,
    Solid(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Xf {
    font: u32,
    fill: u32,
    border: u32,
    style: CellStyle,
}

#[derive(Debug)]
pub struct StyleTable {
    fonts: Interner<Font>,
    fills: Interner<Fill>,
    borders: Interner<Option<Color>>,
    xfs: Interner<Xf>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTable {
    /// Index 0 of every table is the default; fill 1 is the reserved gray125.
    pub fn new() -> Self {
        let mut table = Self {
            fonts: Interner::with([Font::default()]),
            fills: Interner::with([Fill::None, Fill::Gray125]),
            borders: Interner::with([None]),
            xfs: Interner::with([]),
        };
        table.index_of(&CellStyle::default());
        table
    }

    /// The `s` attribute for a cell with this style.
    pub fn index_of(&mut self, style: &CellStyle) -> u32 {
        let xf = Xf {
            font: self.fonts.intern(style.font),
            fill: self.fills.intern(style.fill.map_or(Fill::None, Fill::Solid)),
            border: self.borders.intern(style.border),
            style: *style,
        };
        self.xfs.intern(xf)
    }

    pub fn len(&self) -> usize {
        self.xfs.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xfs.items.is_empty()
    }

    pub fn to_xml(&self) -> Result<Vec<u8>, RenderError> {
        let mut w = XmlWriter::with_declaration()?;
        w.start("styleSheet", &[("xmlns", SPREADSHEET_NS)])?;

        let count = self.fonts.items.len().to_string();
        w.start("fonts", &[("count", &count)])?;
        for font in &self.fonts.items {
            w.start("font", &[])?;
            if font.bold {
                w.empty("b", &[])?;
            }
            w.empty("sz", &[("val", &font.size.to_string())])?;
            if let Some(color) = font.color {
                w.empty("color", &[("rgb", &color.to_argb())])?;
            }
            w.empty("name", &[("val", font.name)])?;
            w.empty("family", &[("val", "2")])?;
            w.end("font")?;
        }
        w.end("fonts")?;

        let count = self.fills.items.len().to_string();
        w.start("fills", &[("count", &count)])?;
        for fill in &self.fills.items {
            w.start("fill", &[])?;
            match fill {
                Fill::None => w.empty("patternFill", &[("patternType", "none")])?,
                Fill::Gray125 => w.empty("patternFill", &[("patternType", "gray125")])?,
                Fill::Solid(color) => {
                    w.start("patternFill", &[("patternType", "solid")])?;
                    w.empty("fgColor", &[("rgb", &color.to_argb())])?;
                    w.empty("bgColor", &[("indexed", "64")])?;
                    w.end("patternFill")?;
                }
            }
            w.end("fill")?;
        }
        w.end("fills")?;

        let count = self.borders.items.len().to_string();
        w.start("borders", &[("count", &count)])?;
        for border in &self.borders.items {
            w.start("border", &[])?;
            for side in ["left", "right", "top", "bottom"] {
                match border {
                    Some(color) => {
                        w.start(side, &[("style", "thin")])?;
                        w.empty("color", &[("rgb", &color.to_argb())])?;
                        w.end(side)?;
                    }
                    None => w.empty(side, &[])?,
                }
            }
            w.empty("diagonal", &[])?;
            w.end("border")?;
        }
        w.end("borders")?;

        w.start("cellStyleXfs", &[("count", "1")])?;
        w.empty(
            "xf",
            &[("numFmtId", "0"), ("fontId", "0"), ("fillId", "0"), ("borderId", "0")],
        )?;
        w.end("cellStyleXfs")?;

        let count = self.xfs.items.len().to_string();
        w.start("cellXfs", &[("count", &count)])?;
        for xf in &self.xfs.items {
            write_xf(&mut w, xf)?;
        }
        w.end("cellXfs")?;

        w.start("cellStyles", &[("count", "1")])?;
        w.empty(
            "cellStyle",
            &[("name", "Normal"), ("xfId", "0"), ("builtinId", "0")],
        )?;
        w.end("cellStyles")?;

        w.end("styleSheet")?;
        Ok(w.finish())
    }
}

fn write_xf(w: &mut XmlWriter, xf: &Xf) -> Result<(), RenderError> {
    let font = xf.font.to_string();
    let fill = xf.fill.to_string();
    let border = xf.border.to_string();
    let mut attrs = vec![
        ("numFmtId", "0"),
        ("fontId", font.as_str()),
        ("fillId", fill.as_str()),
        ("borderId", border.as_str()),
        ("xfId", "0"),
    ];
    if xf.font != 0 {
        attrs.push(("applyFont", "1"));
    }
    if xf.fill != 0 {
        attrs.push(("applyFill", "1"));
    }
    if xf.border != 0 {
        attrs.push(("applyBorder", "1"));
    }

    let alignment = xf.style.alignment;
    if alignment.is_default() {
        return w.empty("xf", &attrs);
    }
    attrs.push(("applyAlignment", "1"));
    w.start("xf", &attrs)?;
    let mut align_attrs = Vec::new();
    if let Some(horizontal) = alignment.horizontal {
        align_attrs.push(("horizontal", horizontal.as_str()));
    }
    if let Some(vertical) = alignment.vertical {
        align_attrs.push(("vertical", vertical.as_str()));
    }
    if alignment.wrap {
        align_attrs.push(("wrapText", "1"));
    }
    w.empty("alignment", &align_attrs)?;
    w.end("xf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdoc_sheet::HorizontalAlign;

    #[test]
    fn test_identical_styles_share_an_index() {
        let mut table = StyleTable::new();
        assert_eq!(table.index_of(&CellStyle::default()), 0);

        let header = || {
            CellStyle::default()
                .bold()
                .with_fill(Color::from_u32(0x1B3A5C))
                .with_horizontal(HorizontalAlign::Center)
        };
        let first = table.index_of(&header());
        let second = table.index_of(&header());
        assert_eq!(first, second);
        assert_eq!(first, 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_fills_start_after_reserved_entries() {
        let mut table = StyleTable::new();
        table.index_of(&CellStyle::default().with_fill(Color::from_u32(0xC6EFCE)));
        let xml = String::from_utf8(table.to_xml().unwrap()).unwrap();
        assert!(xml.contains("<fills count=\"3\">"));
        assert!(xml.contains("patternType=\"gray125\""));
        assert!(xml.contains("<fgColor rgb=\"FFC6EFCE\"/>"));
        assert!(xml.contains("fillId=\"2\""));
    }

    #[test]
    fn test_alignment_and_borders() {
        let mut table = StyleTable::new();
        table.index_of(&CellStyle::default().wrapped().with_grid_border());
        let xml = String::from_utf8(table.to_xml().unwrap()).unwrap();
        assert!(xml.contains("<alignment wrapText=\"1\"/>"));
        assert!(xml.contains("<left style=\"thin\"><color rgb=\"FFD0D0D0\"/></left>"));
        assert!(xml.contains("<borders count=\"2\">"));
    }
}
