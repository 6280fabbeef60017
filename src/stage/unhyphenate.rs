use crate::{context::Context, stage::Stage, unicode::is_separator};
use memchr::memchr_iter;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// A line-final hyphen, raised guillemet or em-dash, at most one whitespace
/// character (information separators included), then the newline.
static LINE_BREAK_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)[-»—][\s\x1C-\x1F]?\n").expect("line-break hyphen pattern is valid")
});

#[inline(always)]
fn is_break_marker(c: char) -> bool {
    matches!(c, '-' | '»' | '—')
}

/// Looks back from each newline instead of running the regex.
#[inline]
fn has_line_break_hyphen(text: &str) -> bool {
    memchr_iter(b'\n', text.as_bytes()).any(|i| {
        let mut before = text[..i].chars().rev();
        match before.next() {
            Some(c) if is_break_marker(c) => true,
            Some(c) if is_separator(c) => before.next().is_some_and(is_break_marker),
            _ => false,
        }
    })
}

/// Joins words split across a line break.
///
/// `"multi-\nline"` → `"multiline"`. Only the break marker and the newline are
/// removed; a hyphen that does not end a line is left alone.
pub struct Unhyphenate;

impl Stage for Unhyphenate {
    fn name(&self) -> &'static str {
        "unhyphenate"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        has_line_break_hyphen(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let joined = match LINE_BREAK_HYPHEN.replace_all(&text, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        match joined {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}
