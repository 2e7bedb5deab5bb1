//! A thin event writer over `quick_xml` that maps its errors into
//! [`RenderError`] and keeps call sites to one line per element.

use crate::error::RenderError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;

pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn xml_err(err: impl std::fmt::Display) -> RenderError {
    RenderError::Xml(err.to_string())
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1F}' if !matches!(c, '\t' | '\n' | '\r'))
        || matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

/// Removes characters XML 1.0 cannot carry. Vertical tab and form feed
/// become a space; the other C0 controls are dropped.
pub fn xml_safe(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_forbidden) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .filter_map(|c| match c {
                '\u{B}' | '\u{C}' => Some(' '),
                c if is_forbidden(c) => None,
                c => Some(c),
            })
            .collect(),
    )
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let values: Vec<Cow<'_, str>> = attrs.iter().map(|(_, value)| xml_safe(value)).collect();
    BytesStart::new(name).with_attributes(
        attrs
            .iter()
            .zip(values.iter())
            .map(|((key, _), value)| (*key, &**value)),
    )
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    /// A writer that has already emitted the standalone UTF-8 declaration.
    pub fn with_declaration() -> Result<Self, RenderError> {
        let mut writer = Self::new();
        writer
            .inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(writer)
    }

    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        self.inner
            .write_event(Event::Start(element(name, attrs)))
            .map_err(xml_err)
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        self.inner
            .write_event(Event::Empty(element(name, attrs)))
            .map_err(xml_err)
    }

    pub fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.inner
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    /// Escaped character data, with XML-illegal characters removed.
    pub fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.inner
            .write_event(Event::Text(BytesText::new(&xml_safe(text))))
            .map_err(xml_err)
    }

    /// `<name attrs>text</name>`
    pub fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<(), RenderError> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    pub fn finish(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut writer = XmlWriter::new();
        writer
            .text_element("t", &[("title", "a \"b\"")], "Fish & <Chips>")
            .unwrap();
        let xml = String::from_utf8(writer.finish()).unwrap();
        assert_eq!(
            xml,
            "<t title=\"a &quot;b&quot;\">Fish &amp; &lt;Chips&gt;</t>"
        );
    }

    #[test]
    fn test_strips_control_characters() {
        let mut writer = XmlWriter::new();
        writer
            .text_element("t", &[("name", "a\u{1}b")], "Scope\u{B}of work\u{1}\tdone\r\n")
            .unwrap();
        let xml = String::from_utf8(writer.finish()).unwrap();
        assert_eq!(xml, "<t name=\"ab\">Scope of work\tdone\r\n</t>");
    }

    #[test]
    fn test_xml_safe_borrows_clean_text() {
        assert!(matches!(xml_safe("Plain text"), Cow::Borrowed(_)));
        assert_eq!(xml_safe("Pasted\u{C}text"), "Pasted text");
        assert_eq!(xml_safe("\u{FFFF}\u{0}"), "");
    }

    #[test]
    fn test_declaration() {
        let mut writer = XmlWriter::with_declaration().unwrap();
        writer.empty("root", &[]).unwrap();
        let xml = String::from_utf8(writer.finish()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        assert!(xml.ends_with("<root/>"));
    }
}
