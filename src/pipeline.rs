// src/pipeline.rs
use crate::{context::Context, stage::Stage};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

/// An ordered list of stages run over one text.
///
/// Twelve slots cover every stage the preprocessor can enable, so compiled
/// pipelines never spill to the heap.
#[derive(Default, Clone)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl Pipeline {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Push `stage` only when `enabled`.
    #[inline]
    pub fn push_if<T: Stage + 'static>(self, enabled: bool, stage: T) -> Self {
        if enabled { self.push(stage) } else { self }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current, ctx) {
                continue;
            }

            trace!(stage = stage.name(), len = current.len(), "applying stage");
            current = stage.apply(current, ctx);
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{
        collapse_spaces::CollapseSpaces, lower_case::LowerCase, strip_chars::STRIP_PUNCTUATION,
        trim::Trim,
    };

    #[test]
    fn empty_pipeline_is_identity() {
        let p = Pipeline::new();
        let input = "Arma, uirumque!";
        let out = p.process(Cow::Borrowed(input), &Context::default());
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert!(p.is_empty());
    }

    #[test]
    fn stages_run_in_push_order() {
        let p = Pipeline::new()
            .push(STRIP_PUNCTUATION)
            .push(CollapseSpaces)
            .push(Trim);
        let out = p.process(Cow::Borrowed(" Arma,  uirum! "), &Context::default());
        assert_eq!(out, "Arma uirum");

        let reversed = Pipeline::new().push(Trim).push(CollapseSpaces).push(STRIP_PUNCTUATION);
        let out = reversed.process(Cow::Borrowed(" Arma,  uirum! "), &Context::default());
        assert_eq!(out, "Arma  uirum ");
    }

    #[test]
    fn push_if_skips_disabled_stages() {
        let p = Pipeline::new()
            .push_if(false, LowerCase)
            .push_if(true, Trim);
        assert_eq!(p.stage_names().collect::<Vec<_>>(), ["trim"]);
    }

    #[test]
    fn untouched_text_stays_borrowed() {
        let p = Pipeline::new().push(LowerCase).push(Trim);
        let input = "gallia est omnis diuisa";
        let out = p.process(Cow::Borrowed(input), &Context::default());
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
