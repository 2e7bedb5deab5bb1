use rfpdoc_idf::FormattingOptions;
use rfpdoc_style::{PageLayout, PageSize};

/// Geometry the block renderer lays tables out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub page: PageLayout,
    /// Width between the page margins, in twips. Tables span exactly this.
    pub content_width: u32,
}

impl LayoutConfig {
    pub fn for_page(size: PageSize) -> Self {
        let page = PageLayout::new(size);
        Self {
            page,
            content_width: page.content_width(),
        }
    }

    pub fn from_formatting(formatting: &FormattingOptions) -> Self {
        Self::for_page(formatting.page_size)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_page(PageSize::default())
    }
}
