use crate::{context::Context, stage::Stage, unicode::is_separator};
use std::borrow::Cow;

/// Strips leading and trailing whitespace.
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }
        // Unicode fallback: only if needed
        text.starts_with(is_separator) || text.ends_with(is_separator)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let trimmed = text.trim_matches(is_separator);
        if trimmed.len() == text.len() {
            return text;
        }
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(is_separator)),
            Cow::Owned(s) => Cow::Owned(s.trim_matches(is_separator).to_owned()),
        }
    }
}
