use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Locale-independent Unicode lowercasing (`str::to_lowercase`).
///
/// Final sigma is handled contextually (`ΣΟΦΟΣ` → `σοφος`), `İ` expands to
/// `i` + combining dot above. Already-lowercase text stays borrowed.
pub struct LowerCase;

#[inline(always)]
fn changes_under_lowercase(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(changes_under_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        if text.is_ascii() {
            return Cow::Owned(text.to_ascii_lowercase());
        }
        Cow::Owned(text.to_lowercase())
    }
}
