// src/context.rs
// Runtime context shared by every stage of one compiled pipeline.

/// Fill string used when the caller does not supply one.
pub const DEFAULT_FILL: &str = " ";

/// Runtime context passed to every preprocessing stage.
///
/// Contains:
/// - `fill`: the string substituted for every removed character (punctuation,
///   digits) and for every whitespace gap when spaces are joined.
///
/// `fill` is not restricted to one character: `"XX"` grows the text and `""`
/// deletes outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub fill: String,
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_FILL)
    }
}

impl Context {
    #[inline]
    pub fn new(fill: impl Into<String>) -> Self {
        Self { fill: fill.into() }
    }

    /// True when replacing `c` with the fill string would leave the text as is.
    #[inline(always)]
    pub fn fill_is(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.fill == *c.encode_utf8(&mut buf)
    }
}
