// Character classes used by the preprocessing stages.

use phf::{Set, phf_set};
use std::cmp::Ordering;
use std::sync::LazyLock;
use tracing::debug;

/// ASCII and typographic punctuation removed when punctuation is not kept.
///
/// Quotes, brackets, math and connector symbols, guillemets, em-dash, the raw
/// hyphen and both curly double quotes.
pub static PUNCTUATION: Set<char> = phf_set! {
    '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '/', ':', ';',
    '<', '=', '>', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
    '.', '?', '!', '«', '»', '—', '“', '-', '”',
};

/// Miscellaneous symbols removed together with [`PUNCTUATION`].
///
/// Currency, superscripts, pilcrow and section signs, vulgar fractions, middle
/// dot, bullet, en-dash, curly single quotes, dagger, reversed c, infinity,
/// metrical breve-macron, angle brackets and fullwidth parentheses.
pub static MISC_SYMBOLS: Set<char> = phf_set! {
    '¡', '£', '¤', '¥', '¦', '§', '¨', '©', '¯', '°', '±', '²', '³', '´',
    'µ', '¶', '·', '¸', '¹', 'º', '¼', '½', '¾', '¿', '÷', '–', '‘', '’',
    '†', '•', 'ↄ', '∞', '⏑', '〈', '〉', '（', '）',
};

/// Membership in the punctuation table (punctuation ∪ misc symbols).
#[inline(always)]
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii_alphanumeric() || c == ' ' {
        return false;
    }
    PUNCTUATION.contains(&c) || MISC_SYMBOLS.contains(&c)
}

#[inline(always)]
pub fn is_ascii_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whitespace used for splitting and trimming.
///
/// Unicode `White_Space` plus the ASCII information separators U+001C..U+001F,
/// which corpus tooling has always treated as field breaks.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

/// Sorted, non-overlapping ranges of every code point whose general category
/// is a combining mark (Mn, Mc, Me).
pub struct CombiningMarks {
    ranges: Box<[(char, char)]>,
}

static COMBINING_MARKS: LazyLock<CombiningMarks> = LazyLock::new(CombiningMarks::build);

impl CombiningMarks {
    fn build() -> Self {
        let mut ranges: Vec<(char, char)> = Vec::new();
        for c in '\0'..=char::MAX {
            if !unicode_normalization::char::is_combining_mark(c) {
                continue;
            }
            match ranges.last_mut() {
                Some((_, end)) if char::from_u32(*end as u32 + 1) == Some(c) => *end = c,
                _ => ranges.push((c, c)),
            }
        }
        debug!(ranges = ranges.len(), "built combining mark table");
        Self {
            ranges: ranges.into_boxed_slice(),
        }
    }

    /// The process-wide table. Built on first use; later calls are a load.
    #[inline]
    pub fn get() -> &'static CombiningMarks {
        &COMBINING_MARKS
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        // Nothing below U+0300 is a mark.
        if (c as u32) < 0x0300 {
            return false;
        }
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < c {
                    Ordering::Less
                } else if lo > c {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }
}

#[inline(always)]
pub fn is_combining_mark(c: char) -> bool {
    CombiningMarks::get().contains(c)
}
