use crate::{context::Context, stage::Stage};
use memchr::memchr_iter;
use std::borrow::Cow;

/// Fast pre-scan: a reference needs `&` followed by a name start or `#`.
#[inline(always)]
fn may_contain_reference(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr_iter(b'&', bytes).any(|i| {
        bytes
            .get(i + 1)
            .is_some_and(|&b| b == b'#' || b.is_ascii_alphabetic())
    })
}

/// Decodes HTML character references into literal characters, the way an
/// HTML5 parser does in text content.
///
/// - Named references (`&amp;`, `&eacute;`, `&NotEqualTilde;`) expand to
///   every code point they name.
/// - Legacy names are decoded without the trailing `;` (`&amp`, `&copy2020`).
/// - Numeric references in 0x80..=0x9F follow the windows-1252 remapping
///   (`&#128;` is `€`); NUL, surrogates and values above U+10FFFF become
///   U+FFFD.
///
/// `needs_apply` only looks for something shaped like a reference, so it may
/// say yes to `AT&T`; `apply` then hands the input back borrowed.
///
/// Decoding runs once: `&amp;amp;` becomes `&amp;`, not `&`.
pub struct DecodeEntities;

impl Stage for DecodeEntities {
    fn name(&self) -> &'static str {
        "decode_entities"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        may_contain_reference(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if !may_contain_reference(&text) {
            return text;
        }
        let decoded = match htmlize::unescape(&*text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => (s != *text).then_some(s),
        };
        match decoded {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}
