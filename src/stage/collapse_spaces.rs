use crate::{context::Context, stage::Stage};
use memchr::memmem;
use std::borrow::Cow;

/// Collapses every run of ASCII spaces (`U+0020`) into one.
///
/// Tabs, newlines and other whitespace are untouched; only the literal space
/// character is considered.
pub struct CollapseSpaces;

impl Stage for CollapseSpaces {
    fn name(&self) -> &'static str {
        "collapse_spaces"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memmem::find(text.as_bytes(), b"  ").is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let Some(first) = memmem::find(text.as_bytes(), b"  ") else {
            return text;
        };
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..=first]);
        let mut prev_space = true;
        for c in text[first + 1..].chars() {
            if c == ' ' {
                if prev_space {
                    continue;
                }
                prev_space = true;
            } else {
                prev_space = false;
            }
            out.push(c);
        }
        Cow::Owned(out)
    }
}
