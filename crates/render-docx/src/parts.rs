//! The fixed WordprocessingML parts: styles, bullet numbering, settings and
//! the header/footer wrappers.

use crate::body::BodyWriter;
use rfpdoc_layout::Paragraph;
use rfpdoc_render_core::{RenderError, XmlWriter};
use rfpdoc_style::{RunStyle, palette};

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const HEADING_DEPTHS: u8 = 4;
const TOC_INDENT: u32 = 220;
const BULLET_GLYPHS: [&str; 3] = ["\u{2022}", "\u{25E6}", "\u{25AA}"];
const BULLET_LEVELS: u32 = 9;
const BULLET_INDENT: u32 = 720;
const BULLET_HANGING: u32 = 360;

fn val(w: &mut XmlWriter, name: &str, value: &str) -> Result<(), RenderError> {
    w.empty(name, &[("w:val", value)])
}

struct StyleDef<'a> {
    kind: &'a str,
    id: &'a str,
    name: &'a str,
    based_on: Option<&'a str>,
    outline_level: Option<u8>,
    indent: Option<u32>,
}

impl<'a> StyleDef<'a> {
    fn paragraph(id: &'a str, name: &'a str) -> Self {
        Self {
            kind: "paragraph",
            id,
            name,
            based_on: Some("Normal"),
            outline_level: None,
            indent: None,
        }
    }

    fn write(&self, w: &mut XmlWriter) -> Result<(), RenderError> {
        w.start("w:style", &[("w:type", self.kind), ("w:styleId", self.id)])?;
        val(w, "w:name", self.name)?;
        if let Some(parent) = self.based_on {
            val(w, "w:basedOn", parent)?;
        }
        if self.kind == "paragraph" && self.id != "Normal" {
            val(w, "w:next", "Normal")?;
        }
        w.empty("w:qFormat", &[])?;
        if self.outline_level.is_some() || self.indent.is_some() {
            w.start("w:pPr", &[])?;
            if self.outline_level.is_some() {
                w.empty("w:keepNext", &[])?;
            }
            if let Some(indent) = self.indent {
                w.empty("w:ind", &[("w:left", &indent.to_string())])?;
            }
            if let Some(level) = self.outline_level {
                val(w, "w:outlineLvl", &level.to_string())?;
            }
            w.end("w:pPr")?;
        }
        if self.kind == "character" {
            w.start("w:rPr", &[])?;
            val(w, "w:color", &palette::ACCENT.to_hex())?;
            val(w, "w:u", "single")?;
            w.end("w:rPr")?;
        }
        w.end("w:style")
    }
}

/// `word/styles.xml`. Character formatting is applied directly on every run,
/// so the styles mostly carry names, outline levels and TOC indents.
pub fn styles_xml(defaults: &RunStyle) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start("w:styles", &[("xmlns:w", W_NS)])?;

    let size = defaults.size.to_string();
    w.start("w:docDefaults", &[])?;
    w.start("w:rPrDefault", &[])?;
    w.start("w:rPr", &[])?;
    w.empty(
        "w:rFonts",
        &[
            ("w:ascii", defaults.font_family),
            ("w:hAnsi", defaults.font_family),
            ("w:cs", defaults.font_family),
        ],
    )?;
    val(&mut w, "w:color", &defaults.color.to_hex())?;
    val(&mut w, "w:sz", &size)?;
    val(&mut w, "w:szCs", &size)?;
    w.end("w:rPr")?;
    w.end("w:rPrDefault")?;
    w.empty("w:pPrDefault", &[])?;
    w.end("w:docDefaults")?;

    w.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    val(&mut w, "w:name", "Normal")?;
    w.empty("w:qFormat", &[])?;
    w.end("w:style")?;

    StyleDef::paragraph("Title", "Title").write(&mut w)?;
    for depth in 1..=HEADING_DEPTHS {
        let id = format!("Heading{depth}");
        let name = format!("heading {depth}");
        StyleDef {
            outline_level: Some(depth - 1),
            ..StyleDef::paragraph(&id, &name)
        }
        .write(&mut w)?;
    }
    StyleDef::paragraph("TOCHeading", "TOC Heading").write(&mut w)?;
    for level in 1..=3u32 {
        let id = format!("TOC{level}");
        let name = format!("toc {level}");
        StyleDef {
            indent: Some((level - 1) * TOC_INDENT),
            ..StyleDef::paragraph(&id, &name)
        }
        .write(&mut w)?;
    }
    StyleDef {
        kind: "character",
        based_on: None,
        ..StyleDef::paragraph("Hyperlink", "Hyperlink")
    }
    .write(&mut w)?;

    w.end("w:styles")?;
    Ok(w.finish())
}

/// `word/numbering.xml` with one bulleted list definition (`numId` 1).
pub fn numbering_xml() -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start("w:numbering", &[("xmlns:w", W_NS)])?;
    w.start("w:abstractNum", &[("w:abstractNumId", "0")])?;
    val(&mut w, "w:multiLevelType", "hybridMultilevel")?;
    for level in 0..BULLET_LEVELS {
        let glyph = BULLET_GLYPHS[level as usize % BULLET_GLYPHS.len()];
        w.start("w:lvl", &[("w:ilvl", &level.to_string())])?;
        val(&mut w, "w:start", "1")?;
        val(&mut w, "w:numFmt", "bullet")?;
        val(&mut w, "w:lvlText", glyph)?;
        val(&mut w, "w:lvlJc", "left")?;
        w.start("w:pPr", &[])?;
        w.empty(
            "w:ind",
            &[
                ("w:left", &(BULLET_INDENT * (level + 1)).to_string()),
                ("w:hanging", &BULLET_HANGING.to_string()),
            ],
        )?;
        w.end("w:pPr")?;
        w.end("w:lvl")?;
    }
    w.end("w:abstractNum")?;
    w.start("w:num", &[("w:numId", crate::body::BULLET_NUM_ID)])?;
    val(&mut w, "w:abstractNumId", "0")?;
    w.end("w:num")?;
    w.end("w:numbering")?;
    Ok(w.finish())
}

/// `word/settings.xml`. `updateFields` makes Word refresh the TOC on open.
pub fn settings_xml() -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start("w:settings", &[("xmlns:w", W_NS)])?;
    val(&mut w, "w:defaultTabStop", "720")?;
    val(&mut w, "w:updateFields", "true")?;
    w.start("w:compat", &[])?;
    w.empty(
        "w:compatSetting",
        &[
            ("w:name", "compatibilityMode"),
            ("w:uri", "http://schemas.microsoft.com/office/word"),
            ("w:val", "15"),
        ],
    )?;
    w.end("w:compat")?;
    w.end("w:settings")?;
    Ok(w.finish())
}

/// A header (`w:hdr`) or footer (`w:ftr`) part holding one paragraph.
pub fn region_xml(root: &str, paragraph: &Paragraph) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(root, &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
    BodyWriter::new().write_paragraph(&mut w, paragraph)?;
    w.end(root)?;
    Ok(w.finish())
}
