//! Page presets and margins, in twips.
use rfpdoc_types::Size;
use rfpdoc_types::geometry::TWIPS_PER_INCH;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// One inch on every side.
pub const DEFAULT_MARGIN: u32 = TWIPS_PER_INCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    pub fn dimensions(&self) -> Size {
        match self {
            PageSize::Letter => Size::new(12240, 15840),
            PageSize::A4 => Size::new(11906, 16838),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::Letter => "LETTER",
            PageSize::A4 => "A4",
        }
    }

    /// Parse a page size name (e.g., "LETTER", "a4").
    fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::all(DEFAULT_MARGIN)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    pub margins: Margins,
}

impl PageLayout {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            margins: Margins::default(),
        }
    }

    pub fn dimensions(&self) -> Size {
        self.size.dimensions()
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> u32 {
        self.dimensions()
            .width
            .saturating_sub(self.margins.left + self.margins.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(PageSize::Letter.dimensions(), Size::new(12240, 15840));
        assert_eq!(PageSize::A4.dimensions(), Size::new(11906, 16838));
        assert!(PageSize::A4.dimensions().is_portrait());
    }

    #[test]
    fn test_content_width() {
        assert_eq!(PageLayout::new(PageSize::Letter).content_width(), 9360);
        assert_eq!(PageLayout::new(PageSize::A4).content_width(), 9026);
    }

    #[test]
    fn test_page_size_deserialize_is_case_insensitive() {
        let size: PageSize = serde_json::from_str("\"LETTER\"").unwrap();
        assert_eq!(size, PageSize::Letter);
        let size: PageSize = serde_json::from_str("\"a4\"").unwrap();
        assert_eq!(size, PageSize::A4);
        assert!(serde_json::from_str::<PageSize>("\"LEGAL\"").is_err());
        assert_eq!(serde_json::to_string(&PageSize::A4).unwrap(), "\"A4\"");
    }
}
