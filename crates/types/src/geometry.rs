//! Integer page geometry in twentieths of a point (twips), the native unit of
//! WordprocessingML section and table measurements.

/// 1 inch = 1440 twips.
pub const TWIPS_PER_INCH: u32 = 1440;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(&self) -> bool {
        self.height >= self.width
    }
}

/// Splits `total` into the floored share given by `percent`.
///
/// Integer arithmetic keeps the result exact, so `percent_of(9360, 5)` is
/// always `468` rather than whatever a float product happens to floor to.
pub fn percent_of(total: u32, percent: u32) -> u32 {
    (u64::from(total) * u64::from(percent) / 100) as u32
}

/// Equal floored column widths for `count` columns sharing `total`.
pub fn equal_division(total: u32, count: usize) -> u32 {
    if count == 0 {
        return total;
    }
    total / count as u32
}
