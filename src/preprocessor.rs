use crate::{
    context::Context,
    options::PreprocessOptions,
    pipeline::Pipeline,
    stage::{
        collapse_spaces::CollapseSpaces,
        decode_entities::DecodeEntities,
        join_lines::JoinLines,
        join_spaces::JoinSpaces,
        lower_case::LowerCase,
        normalization::NFC,
        remove_diacritics::RemoveDiacritics,
        replace_jv::ReplaceJv,
        strip_chars::{STRIP_NUMBERS, STRIP_PUNCTUATION},
        trim::Trim,
        unhyphenate::Unhyphenate,
    },
    unicode::CombiningMarks,
};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Latin text preprocessor: a [`PreprocessOptions`] compiled once into a
/// pipeline of the enabled stages.
///
/// Stages always run in this order, each only if enabled:
///
/// 1. decode HTML entities
/// 2. unhyphenate line breaks
/// 3. lowercase
/// 4. j→i, v→u
/// 5. strip punctuation
/// 6. strip digits
/// 7. join lines
/// 8. join whitespace with the fill
/// 9. remove diacritics
/// 10. collapse runs of spaces (always)
/// 11. NFC (always)
/// 12. trim (always)
///
/// A `Preprocessor` is immutable, `Send + Sync`, and meant to be built once and
/// shared.
pub struct Preprocessor {
    options: PreprocessOptions,
    ctx: Context,
    pipeline: Pipeline,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(PreprocessOptions::default())
    }
}

impl Preprocessor {
    pub fn new(options: PreprocessOptions) -> Self {
        let pipeline = Pipeline::new()
            .push_if(!options.entities, DecodeEntities)
            .push_if(options.unhyphenate, Unhyphenate)
            .push_if(options.lower, LowerCase)
            .push_if(options.normalize, ReplaceJv)
            .push_if(!options.punctuation, STRIP_PUNCTUATION)
            .push_if(!options.numbers, STRIP_NUMBERS)
            .push_if(options.remove_lines, JoinLines)
            .push_if(options.remove_spaces, JoinSpaces)
            .push_if(!options.diacriticals, RemoveDiacritics)
            .push(CollapseSpaces)
            .push(NFC)
            .push(Trim);

        if !options.diacriticals {
            // Build the mark table now rather than on the first text.
            CombiningMarks::get();
        }

        debug!(
            stages = ?pipeline.stage_names().collect::<Vec<_>>(),
            fill = %options.fill,
            "compiled preprocessor"
        );

        let ctx = Context::new(options.fill.clone());
        Self {
            options,
            ctx,
            pipeline,
        }
    }

    pub fn builder() -> PreprocessorBuilder {
        PreprocessorBuilder::default()
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names().collect()
    }

    /// Preprocess `text`, borrowing it back when no stage changed anything.
    #[instrument(level = "trace", skip_all, fields(len = text.len()))]
    pub fn process_cow<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pipeline.process(Cow::Borrowed(text), &self.ctx)
    }

    pub fn process(&self, text: &str) -> String {
        self.process_cow(text).into_owned()
    }
}

/// Chained-setter construction of a [`Preprocessor`].
#[derive(Default)]
pub struct PreprocessorBuilder {
    options: PreprocessOptions,
}

impl PreprocessorBuilder {
    pub fn options(mut self, options: PreprocessOptions) -> Self {
        self.options = options;
        self
    }

    pub fn lower(mut self, lower: bool) -> Self {
        self.options.lower = lower;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.options.normalize = normalize;
        self
    }

    pub fn punctuation(mut self, keep: bool) -> Self {
        self.options.punctuation = keep;
        self
    }

    pub fn numbers(mut self, keep: bool) -> Self {
        self.options.numbers = keep;
        self
    }

    pub fn unhyphenate(mut self, unhyphenate: bool) -> Self {
        self.options.unhyphenate = unhyphenate;
        self
    }

    pub fn remove_lines(mut self, remove_lines: bool) -> Self {
        self.options.remove_lines = remove_lines;
        self
    }

    pub fn remove_spaces(mut self, remove_spaces: bool) -> Self {
        self.options.remove_spaces = remove_spaces;
        self
    }

    pub fn entities(mut self, keep: bool) -> Self {
        self.options.entities = keep;
        self
    }

    pub fn diacriticals(mut self, keep: bool) -> Self {
        self.options.diacriticals = keep;
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.options.fill = fill.into();
        self
    }

    pub fn build(self) -> Preprocessor {
        Preprocessor::new(self.options)
    }
}

/// One-shot preprocessing of `text` under `options`.
///
/// Builds a [`Preprocessor`] per call; build one and reuse it when processing
/// many texts with the same options.
pub fn preprocess(text: &str, options: &PreprocessOptions) -> String {
    Preprocessor::new(options.clone()).process(text)
}
