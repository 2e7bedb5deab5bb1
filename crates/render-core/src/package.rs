//! Open Packaging Conventions: the zip container, `[Content_Types].xml`,
//! relationship parts and the core/app property parts.

use crate::error::RenderError;
use crate::xml::XmlWriter;
use chrono::{DateTime, Utc};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    pub const HEADER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    pub const FOOTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
}

pub mod content_types {
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

const APPLICATION_NAME: &str = "rfpdoc";

/// Document-level metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageProperties {
    pub creator: String,
    pub title: String,
    pub description: Option<String>,
    /// Omitted from the package when `None`, which keeps output byte-stable.
    pub created: Option<DateTime<Utc>>,
}

/// `[Content_Types].xml` entries.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Defaults for `.rels` and `.xml` plus the two property parts.
    pub fn new() -> Self {
        let mut types = Self::default();
        types.add_default("rels", content_types::RELATIONSHIPS);
        types.add_default("xml", content_types::XML);
        types.add_override(CORE_PROPS_PART, content_types::CORE_PROPERTIES);
        types.add_override(APP_PROPS_PART, content_types::EXTENDED_PROPERTIES);
        types
    }

    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .push((extension.to_string(), content_type.to_string()));
    }

    /// `part` is the package path without a leading slash.
    pub fn add_override(&mut self, part: &str, content_type: &str) {
        self.overrides
            .push((format!("/{part}"), content_type.to_string()));
    }

    pub fn to_xml(&self) -> Result<Vec<u8>, RenderError> {
        let mut w = XmlWriter::with_declaration()?;
        w.start(
            "Types",
            &[(
                "xmlns",
                "http://schemas.openxmlformats.org/package/2006/content-types",
            )],
        )?;
        for (extension, content_type) in &self.defaults {
            w.empty(
                "Default",
                &[("Extension", extension.as_str()), ("ContentType", content_type.as_str())],
            )?;
        }
        for (part, content_type) in &self.overrides {
            w.empty(
                "Override",
                &[("PartName", part.as_str()), ("ContentType", content_type.as_str())],
            )?;
        }
        w.end("Types")?;
        Ok(w.finish())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    pub target: String,
}

/// One `.rels` part. Ids are assigned `rId1`, `rId2`, ... in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard package-level relationships for a main part at `main_part`.
    pub fn for_package(main_part: &str) -> Self {
        let mut rels = Self::new();
        rels.add(rel_types::OFFICE_DOCUMENT, main_part);
        rels.add(rel_types::CORE_PROPERTIES, CORE_PROPS_PART);
        rels.add(rel_types::EXTENDED_PROPERTIES, APP_PROPS_PART);
        rels
    }

    /// Adds a relationship and returns its id.
    pub fn add(&mut self, rel_type: &'static str, target: &str) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type,
            target: target.to_string(),
        });
        id
    }

    pub fn entries(&self) -> &[Relationship] {
        &self.entries
    }

    pub fn to_xml(&self) -> Result<Vec<u8>, RenderError> {
        let mut w = XmlWriter::with_declaration()?;
        w.start(
            "Relationships",
            &[(
                "xmlns",
                "http://schemas.openxmlformats.org/package/2006/relationships",
            )],
        )?;
        for rel in &self.entries {
            w.empty(
                "Relationship",
                &[
                    ("Id", rel.id.as_str()),
                    ("Type", rel.rel_type),
                    ("Target", rel.target.as_str()),
                ],
            )?;
        }
        w.end("Relationships")?;
        Ok(w.finish())
    }
}

pub fn core_properties_xml(properties: &PackageProperties) -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    w.text_element("dc:title", &[], &properties.title)?;
    w.text_element("dc:creator", &[], &properties.creator)?;
    if let Some(description) = &properties.description {
        w.text_element("dc:description", &[], description)?;
    }
    w.text_element("cp:lastModifiedBy", &[], &properties.creator)?;
    if let Some(created) = properties.created {
        let stamp = created.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let attrs = [("xsi:type", "dcterms:W3CDTF")];
        w.text_element("dcterms:created", &attrs, &stamp)?;
        w.text_element("dcterms:modified", &attrs, &stamp)?;
    }
    w.end("cp:coreProperties")?;
    Ok(w.finish())
}

pub fn app_properties_xml() -> Result<Vec<u8>, RenderError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(
        "Properties",
        &[
            (
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            ),
            (
                "xmlns:vt",
                "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
            ),
        ],
    )?;
    w.text_element("Application", &[], APPLICATION_NAME)?;
    w.end("Properties")?;
    Ok(w.finish())
}

/// Writes parts into a deflated zip with fixed timestamps, so identical parts
/// always produce identical bytes.
pub struct PackageBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    part_count: usize,
}

impl Default for PackageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageBuilder {
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options,
            part_count: 0,
        }
    }

    pub fn add_part(&mut self, path: &str, bytes: &[u8]) -> Result<(), RenderError> {
        self.zip.start_file(path, self.options)?;
        self.zip.write_all(bytes)?;
        self.part_count += 1;
        Ok(())
    }

    /// Writes the content types, package relationships and property parts
    /// that every package carries.
    pub fn add_package_parts(
        &mut self,
        content_types: &ContentTypes,
        main_part: &str,
        properties: &PackageProperties,
    ) -> Result<(), RenderError> {
        self.add_part(CONTENT_TYPES_PART, &content_types.to_xml()?)?;
        self.add_part(
            PACKAGE_RELS_PART,
            &Relationships::for_package(main_part).to_xml()?,
        )?;
        self.add_part(CORE_PROPS_PART, &core_properties_xml(properties)?)?;
        self.add_part(APP_PROPS_PART, &app_properties_xml()?)
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let part_count = self.part_count;
        let bytes = self.zip.finish()?.into_inner();
        log::debug!("Packaged {} parts into {} bytes", part_count, bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Read;

    fn as_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_content_types() {
        let mut types = ContentTypes::new();
        types.add_override("word/document.xml", "application/test+xml");
        let xml = as_string(types.to_xml().unwrap());
        assert!(xml.contains("<Default Extension=\"rels\""));
        assert!(xml.contains("PartName=\"/word/document.xml\""));
        assert!(xml.contains("PartName=\"/docProps/core.xml\""));
    }

    #[test]
    fn test_relationship_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rel_types::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.add(rel_types::SETTINGS, "settings.xml"), "rId2");
        let xml = as_string(rels.to_xml().unwrap());
        assert!(xml.contains("Id=\"rId2\""));
        assert!(xml.contains("Target=\"settings.xml\""));
    }

    #[test]
    fn test_core_properties_created_is_optional() {
        let mut properties = PackageProperties {
            creator: "Acme".into(),
            title: "Bid".into(),
            description: Some("Proposal: Bid".into()),
            created: None,
        };
        let xml = as_string(core_properties_xml(&properties).unwrap());
        assert!(xml.contains("<dc:creator>Acme</dc:creator>"));
        assert!(xml.contains("<dc:description>Proposal: Bid</dc:description>"));
        assert!(!xml.contains("dcterms:created"));

        properties.created = Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap());
        let xml = as_string(core_properties_xml(&properties).unwrap());
        assert!(xml.contains(">2026-03-01T09:30:00Z</dcterms:created>"));
    }

    #[test]
    fn test_package_is_deterministic_and_readable() {
        let build = || {
            let mut package = PackageBuilder::new();
            package
                .add_package_parts(
                    &ContentTypes::new(),
                    "word/document.xml",
                    &PackageProperties::default(),
                )
                .unwrap();
            package.add_part("word/document.xml", b"<doc/>").unwrap();
            package.finish().unwrap()
        };
        let first = build();
        assert_eq!(first, build());

        let mut archive = zip::ZipArchive::new(Cursor::new(first)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), CONTENT_TYPES_PART);
        let mut body = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "<doc/>");
    }
}
