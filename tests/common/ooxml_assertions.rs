use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Names of every part in the package, in archive order.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    match ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive.file_names().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// The text of one part, or `None` when the package lacks it.
pub fn read_part(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).ok()?;
    let mut file = archive.by_name(name).ok()?;
    let mut text = String::new();
    file.read_to_string(&mut text).ok()?;
    Some(text)
}

/// Code points in a part that XML 1.0 does not allow.
pub fn illegal_xml_chars(bytes: &[u8], name: &str) -> Vec<u32> {
    read_part(bytes, name)
        .unwrap_or_default()
        .chars()
        .filter(|c| {
            (*c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r'))
                || matches!(c, '\u{FFFE}' | '\u{FFFF}')
        })
        .map(u32::from)
        .collect()
}

/// The first archive entry, which OOXML consumers expect to be the content types.
pub fn first_part(bytes: &[u8]) -> Option<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).ok()?;
    let file = archive.by_index(0).ok()?;
    Some(file.name().to_string())
}

/// Assert that a package part contains a fragment
#[macro_export]
macro_rules! assert_part_contains {
    ($bytes:expr, $part:expr, $fragment:expr) => {
        let text = $crate::common::ooxml_assertions::read_part(&$bytes, $part)
            .unwrap_or_else(|| panic!("package has no part '{}'", $part));
        assert!(
            text.contains($fragment),
            "part '{}' should contain '{}', but was:\n{}",
            $part,
            $fragment,
            text
        );
    };
}

/// Assert that a package part does NOT contain a fragment
#[macro_export]
macro_rules! assert_part_not_contains {
    ($bytes:expr, $part:expr, $fragment:expr) => {
        let text = $crate::common::ooxml_assertions::read_part(&$bytes, $part)
            .unwrap_or_else(|| panic!("package has no part '{}'", $part));
        assert!(
            !text.contains($fragment),
            "part '{}' should NOT contain '{}', but it was found in:\n{}",
            $part,
            $fragment,
            text
        );
    };
}
