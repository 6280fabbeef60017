use crate::{
    context::{Context, DEFAULT_FILL},
    stage::Stage,
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &[
            "Arma virumque cano, Troiae qui primus ab oris",
            "  Iam  venio 123 ",
            "Aenēās\nLāvīnia",
            "",
        ]
    }

    /// Samples that pass through unchanged with the default fill (zero-copy test).
    fn should_pass_through() -> &'static [&'static str] {
        &["arma", "uirum", "abc def", ""]
    }

    /// Input/output pairs under the default fill.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `needs_apply` must match `apply` exactly.
    ///
    /// Stages with a conservative pre-scan return `false`: they may be flagged
    /// on text they leave alone, but never skipped on text they would change.
    fn exact_needs_apply() -> bool {
        true
    }

    /// Fill strings every sample is run under.
    fn fills() -> &'static [&'static str] {
        &[DEFAULT_FILL, "_", ""]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → never misses a change, and is exact unless
///    the stage opts out through `exact_needs_apply`
/// 4. `handles_empty_string` → "" in, "" out, never flagged
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

fn contexts<S: StageTestConfig>() -> impl Iterator<Item = Context> {
    S::fills().iter().map(|&fill| Context::new(fill))
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for ctx in contexts::<S>() {
        for &input in S::samples() {
            let mut text = Cow::Borrowed(input);

            // First pass – respect needs_apply
            if stage.needs_apply(&text, &ctx) {
                let old_ptr = text.as_ref() as *const str;
                text = stage.apply(text, &ctx);
                if text == input {
                    assert_eq!(old_ptr, text.as_ref() as *const str);
                } else {
                    assert_ne!(old_ptr, text.as_ref() as *const str);
                }
            } else {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass – must never allocate again
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, &ctx) {
                text = stage.apply(text, &ctx);
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass (stage: {}, fill: {:?}, input: `{input}`)",
                stage.name(),
                ctx.fill
            );
        }
    }

    let ctx = Context::default();
    for &pass_through in S::should_pass_through() {
        let text = Cow::Borrowed(pass_through);
        assert!(
            !S::exact_needs_apply() || !stage.needs_apply(&text, &ctx),
            "stage `{}` flagged pass-through sample `{pass_through}`",
            stage.name()
        );
        let text = stage.apply(text, &ctx);
        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            pass_through as *const str,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample `{pass_through}`"
        );
    }

    for &(input, expected) in S::should_transform() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text, &ctx) {
            text = stage.apply(text, &ctx);
        }
        assert_eq!(text.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for ctx in contexts::<S>() {
        for &input in S::samples() {
            let once = stage.apply(Cow::Borrowed(input), &ctx);
            let twice = stage.apply(once.clone(), &ctx);
            assert_eq!(
                once,
                twice,
                "apply() of `{}` not idempotent with fill {:?} on `{input}`",
                stage.name(),
                ctx.fill
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for ctx in contexts::<S>() {
        for &sample in S::samples() {
            check_accuracy::<S>(&stage, sample, &ctx);
        }
        for &(sample, _) in S::should_transform() {
            check_accuracy::<S>(&stage, sample, &ctx);
        }
    }
    let ctx = Context::default();
    for &clean in S::should_pass_through() {
        check_accuracy::<S>(&stage, clean, &ctx);
    }
}

#[inline(always)]
fn check_accuracy<S: StageTestConfig>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx);
    // Owned input so stages that always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
    let actually_changes = output != input;
    let consistent = if S::exact_needs_apply() {
        predicted == actually_changes
    } else {
        predicted || !actually_changes
    };
    assert!(
        consistent,
        "needs_apply() mismatch for stage `{}` with fill {:?} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        ctx.fill
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    for ctx in contexts::<S>() {
        assert!(!stage.needs_apply("", &ctx));
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx).as_ref(), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let _ = stage.apply(
        Cow::Borrowed("Gallia 世界 русский Ἀθῆναι العربية e\u{0301}\u{0327} \u{1C}&amp;"),
        &ctx,
    );
}
