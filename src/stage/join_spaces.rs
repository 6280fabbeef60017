use crate::{context::Context, stage::Stage, unicode::is_separator};
use std::borrow::Cow;

/// Splits on whitespace runs and rejoins the pieces with the fill string.
///
/// Leading and trailing whitespace disappear and every interior gap, whatever
/// its length or kind (space, tab, newline), becomes exactly one fill:
/// `"a   b\tc"` with fill `"_"` → `"a_b_c"`.
pub struct JoinSpaces;

impl Stage for JoinSpaces {
    fn name(&self) -> &'static str {
        "join_spaces"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        let trimmed = text.trim_matches(is_separator);
        if trimmed.len() != text.len() {
            return true;
        }
        let mut rest = trimmed;
        while let Some(start) = rest.find(is_separator) {
            let gap = &rest[start..];
            let end = gap.find(|c| !is_separator(c)).unwrap_or(gap.len());
            if gap[..end] != *ctx.fill {
                return true;
            }
            rest = &gap[end..];
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for (i, piece) in text
            .split(is_separator)
            .filter(|piece| !piece.is_empty())
            .enumerate()
        {
            if i > 0 {
                out.push_str(&ctx.fill);
            }
            out.push_str(piece);
        }
        Cow::Owned(out)
    }
}
