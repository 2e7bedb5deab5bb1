//! A1-style cell references. Rows and columns are 1-based throughout.

use std::fmt;

/// `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`.
pub fn column_letter(mut column: u32) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        letters.push(b'A' + rem);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub column: u32,
}

impl CellRef {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.column), self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub const fn new(start: CellRef, end: CellRef) -> Self {
        Self { start, end }
    }

    /// `$A$1:$J$4`, the form defined names use.
    pub fn absolute(&self) -> String {
        let anchor = |r: CellRef| format!("${}${}", column_letter(r.column), r.row);
        format!("{}:{}", anchor(self.start), anchor(self.end))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_range() {
        let range = CellRange::new(CellRef::new(1, 1), CellRef::new(4, 10));
        assert_eq!(range.to_string(), "A1:J4");
        assert_eq!(range.absolute(), "$A$1:$J$4");
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(10), "J");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(702), "ZZ");
        assert_eq!(column_letter(703), "AAA");
    }

    #[test]
    fn test_display() {
        assert_eq!(CellRef::new(1, 1).to_string(), "A1");
        assert_eq!(
            CellRange::new(CellRef::new(1, 1), CellRef::new(4, 10)).to_string(),
            "A1:J4"
        );
    }
}
