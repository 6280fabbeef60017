//! src/stage/remove_diacritics.rs
//!
//! Removes diacritical marks using NFD (Canonical Decomposition).

use crate::{context::Context, stage::Stage, unicode::is_combining_mark};
use std::borrow::Cow;
use unicode_normalization::{UnicodeNormalization, is_nfd};

/// Decompose `text` to NFD and drop every combining mark.
///
/// `"Aenēās"` → `"Aeneas"`. The result is left decomposed; callers that need
/// composed text run NFC afterwards.
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

/// Removes diacritical marks without expanding compatibility characters
/// (ligatures, fractions, superscripts, etc.).
///
/// # Normalization Form
///
/// Uses **NFD (Canonical Decomposition)** before filtering:
/// - Precomposed characters decomposed: `é` → `e` + combining acute
/// - **Ligatures preserved**: `ﬁ` remains `ﬁ`, `æ` and `œ` remain
/// - **Fractions preserved**: `½` remains `½`
/// - **Superscripts preserved**: `m²` remains `m²`
///
/// Letters whose stroke or bar is not a combining mark (`ł`, `đ`, `ø`) are
/// atomic and kept.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_ascii() {
            return false;
        }
        // NFD alone can change text (singleton decompositions such as
        // U+2126 OHM SIGN), so a text without marks still needs the pass
        // unless it is already decomposed.
        if text.chars().any(is_combining_mark) {
            return true;
        }
        !is_nfd(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(remove_diacritics(&text))
    }
}

// ============================================================================
// Tests
// ============================================================================
