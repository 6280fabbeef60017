use crate::{
    context::Context,
    stage::Stage,
    unicode::{is_ascii_digit, is_punctuation},
};
use std::borrow::Cow;

/// Replaces every character of a fixed class with the context's fill string,
/// in a single pass over the text.
///
/// Two instances exist:
///
/// | stage | class |
/// |-------|-------|
/// | [`STRIP_PUNCTUATION`] | [`PUNCTUATION`](crate::unicode::PUNCTUATION) ∪ [`MISC_SYMBOLS`](crate::unicode::MISC_SYMBOLS) |
/// | [`STRIP_NUMBERS`] | ASCII `0`–`9` |
///
/// The fill is substituted verbatim, so a multi-character fill grows the text
/// and an empty fill deletes.
#[derive(Clone, Copy)]
pub struct StripChars {
    name: &'static str,
    is_target: fn(char) -> bool,
}

pub const STRIP_PUNCTUATION: StripChars = StripChars {
    name: "strip_punctuation",
    is_target: is_punctuation,
};

pub const STRIP_NUMBERS: StripChars = StripChars {
    name: "strip_numbers",
    is_target: is_ascii_digit,
};

impl StripChars {
    #[inline(always)]
    fn replaces(&self, c: char, ctx: &Context) -> bool {
        (self.is_target)(c) && !ctx.fill_is(c)
    }
}

impl Stage for StripChars {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        text.chars().any(|c| self.replaces(c, ctx))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let Some(first) = text.find(|c| self.replaces(c, ctx)) else {
            return text;
        };
        let mut out = String::with_capacity(text.len() + ctx.fill.len());
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            if (self.is_target)(c) {
                out.push_str(&ctx.fill);
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}
