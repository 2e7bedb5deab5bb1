//! Vertical rhythm, in twips.

pub const AFTER_TITLE: u32 = 400;
pub const AFTER_HEADING_1: u32 = 200;
pub const AFTER_HEADING_2: u32 = 160;
pub const AFTER_HEADING: u32 = 120;
pub const AFTER_PARAGRAPH: u32 = 120;
pub const AFTER_LIST_ITEM: u32 = 60;
pub const BEFORE_SECTION: u32 = 400;
// Title page
pub const TITLE_PAGE_TOP: u32 = 3000;
pub const TITLE_PAGE_GAP: u32 = 600;
pub const TITLE_PAGE_LINE: u32 = 200;
pub const TITLE_PAGE_VERSION: u32 = 100;
/// 1.15 line spacing (`w:line` in 240ths).
pub const LINE: u32 = 276;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
    pub line: Option<u32>,
}

impl Spacing {
    pub const NONE: Spacing = Spacing {
        before: 0,
        after: 0,
        line: None,
    };

    pub fn before(before: u32) -> Self {
        Self {
            before,
            ..Self::NONE
        }
    }

    pub fn after(after: u32) -> Self {
        Self {
            after,
            ..Self::NONE
        }
    }

    pub fn with_before(mut self, before: u32) -> Self {
        self.before = before;
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Space after a heading of the given depth.
pub fn heading_after(depth: u8) -> u32 {
    match depth {
        2 => AFTER_HEADING_2,
        3 | 4 => AFTER_HEADING,
        _ => AFTER_HEADING_1,
    }
}
