use crate::{context::Context, stage::Stage};
use memchr::memchr;
use std::borrow::Cow;

/// Replaces every `\n` with one literal space.
///
/// Deliberately ignores the context fill: line breaks always become `' '`.
/// A preceding `\r` is kept and left to the whitespace-aware stages.
pub struct JoinLines;

impl Stage for JoinLines {
    fn name(&self) -> &'static str {
        "join_lines"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(b'\n', text.as_bytes()).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.replace('\n', " "))
    }
}
