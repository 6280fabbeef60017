//! Core preprocessing stage abstraction.
//!
//! Every transformation of the preprocessing pipeline is a [`Stage`]. A stage
//! answers two questions:
//!
//! * `needs_apply(&self, text, ctx) -> bool` – a cheap pre-scan. Returning
//!   `false` lets the pipeline skip the stage and keep the current `Cow`
//!   untouched. It must never return `false` for text `apply` would change,
//!   and should be exact when that costs less than `apply`.
//! * `apply(&self, Cow<str>, ctx) -> Cow<str>` – the transformation itself.
//!   Stages hand the input back unchanged (still borrowed, same pointer) when
//!   nothing needs to change.
//!
//! Stages are total over `&str`: there is no input that makes one fail, so the
//! trait returns values rather than `Result`.

pub mod collapse_spaces;
pub mod decode_entities;
pub mod join_lines;
pub mod join_spaces;
pub mod lower_case;
pub mod normalization;
pub mod remove_diacritics;
pub mod replace_jv;
pub mod strip_chars;
pub mod trim;
pub mod unhyphenate;

use crate::context::Context;
use std::borrow::Cow;

/// A single preprocessing step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in traces and diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a preceding `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
