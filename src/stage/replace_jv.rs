//! Latin i/j and u/v spelling harmonisation.
//!
//! Classical orthography does not distinguish the vowel and consonant forms,
//! so `iam`/`jam` and `uenio`/`venio` are folded onto the vowel letter. The
//! table is case-aware and also covers the precomposed accented forms that
//! show up in editions with marked quantities.

use crate::{context::Context, stage::Stage};
use phf::{Map, phf_map};
use std::borrow::Cow;

static JV_TABLE: Map<char, char> = phf_map! {
    'j' => 'i',
    'J' => 'I',
    'v' => 'u',
    'V' => 'U',
    'ĵ' => 'î',
    'Ĵ' => 'Î',
    'ǰ' => 'ǐ',
    'ṽ' => 'ũ',
    'Ṽ' => 'Ũ',
    'ṿ' => 'ụ',
    'Ṿ' => 'Ụ',
};

/// Context-free j→i, v→u replacer.
#[derive(Debug, Default, Clone, Copy)]
pub struct JvReplacer;

impl JvReplacer {
    #[inline(always)]
    pub fn replace_char(c: char) -> char {
        JV_TABLE.get(&c).copied().unwrap_or(c)
    }

    #[inline]
    pub fn needs_replace(text: &str) -> bool {
        text.chars().any(|c| JV_TABLE.contains_key(&c))
    }

    /// Replace every j/v variant; borrowed when there is none.
    pub fn replace<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !Self::needs_replace(text) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.chars().map(Self::replace_char).collect())
    }
}

/// Pipeline stage wrapping [`JvReplacer`].
pub struct ReplaceJv;

impl Stage for ReplaceJv {
    fn name(&self) -> &'static str {
        "replace_jv"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        JvReplacer::needs_replace(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if !JvReplacer::needs_replace(&text) {
            return text;
        }
        Cow::Owned(text.chars().map(JvReplacer::replace_char).collect())
    }
}
