use std::fmt;

/// Publication date key - the `(year, month, day)` triple that identifies a post.
///
/// A key only exists when all three parts are non-zero; the store enforces
/// uniqueness across posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: u32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Build a key, returning `None` if any part is zero.
    pub fn new(year: u32, month: u32, day: u32) -> Option<Self> {
        (year != 0 && month != 0 && day != 0).then_some(Self { year, month, day })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}
