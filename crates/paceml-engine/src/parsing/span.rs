/// A byte range `[start, end)` into the workout source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `source` with this span.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
