use crate::context::DEFAULT_FILL;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid preprocessing options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Switches for every preprocessing step.
///
/// Flags named after what they *keep* (`punctuation`, `numbers`,
/// `diacriticals`, `entities`) disable the corresponding removal when `true`.
///
/// | field | default | effect |
/// |-------|---------|--------|
/// | `lower` | `true` | lowercase |
/// | `normalize` | `true` | j→i, v→u |
/// | `punctuation` | `false` | keep punctuation |
/// | `numbers` | `false` | keep ASCII digits |
/// | `unhyphenate` | `false` | join words hyphenated across a line break |
/// | `remove_lines` | `false` | turn every `\n` into a space |
/// | `remove_spaces` | `false` | replace every whitespace gap with `fill` |
/// | `entities` | `false` | keep HTML entities undecoded |
/// | `diacriticals` | `true` | keep diacritics |
/// | `fill` | `" "` | replacement for removed characters |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreprocessOptions {
    pub lower: bool,
    pub normalize: bool,
    pub punctuation: bool,
    pub numbers: bool,
    pub unhyphenate: bool,
    pub remove_lines: bool,
    pub remove_spaces: bool,
    pub entities: bool,
    pub diacriticals: bool,
    pub fill: String,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            lower: true,
            normalize: true,
            punctuation: false,
            numbers: false,
            unhyphenate: false,
            remove_lines: false,
            remove_spaces: false,
            entities: false,
            diacriticals: true,
            fill: DEFAULT_FILL.to_owned(),
        }
    }
}

impl PreprocessOptions {
    /// Parse options from a JSON object. Missing fields take their defaults;
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}
