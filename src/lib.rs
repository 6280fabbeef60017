pub mod context;
pub mod options;
pub mod pipeline;
pub mod preprocessor;
pub mod stage;
pub mod unicode;

#[cfg(test)]
mod testing;

pub use context::Context;
pub use options::{OptionsError, PreprocessOptions};
pub use pipeline::Pipeline;
pub use preprocessor::{Preprocessor, PreprocessorBuilder, preprocess};
pub use stage::Stage;
pub use stage::collapse_spaces::CollapseSpaces;
pub use stage::decode_entities::DecodeEntities;
pub use stage::join_lines::JoinLines;
pub use stage::join_spaces::JoinSpaces;
pub use stage::lower_case::LowerCase;
pub use stage::normalization::{NFC, NfcStage};
pub use stage::remove_diacritics::{RemoveDiacritics, remove_diacritics};
pub use stage::replace_jv::{JvReplacer, ReplaceJv};
pub use stage::strip_chars::{STRIP_NUMBERS, STRIP_PUNCTUATION, StripChars};
pub use stage::trim::Trim;
pub use stage::unhyphenate::Unhyphenate;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
