//! # audit-core - Core Domain Types
//!
//! Foundation crate for the executive self-audit. Provides the questionnaire
//! dataset, scoring bands, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Dataset (`dataset`)
//! - [`Dataset`] - Raw questionnaire content as written in TOML
//! - [`Assessment`] - Validated dataset with its flattened [`Question`] list
//! - [`Section`], [`ScoreBand`], [`NextStep`], [`Intro`]
//! - [`flatten_sections()`] - Stable section-then-question flattening
//!
//! ### Scoring (`scoring`)
//! - [`resolve_band()`] - First band containing a score, last band as fallback
//! - [`validate_bands()`] - Contiguity/coverage check over `[0, max_score]`
//!
//! ### Value Types (`types`)
//! - [`LikertValue`] - An answer in `0..=5`
//! - [`Severity`] - Band severity used for coloring
//! - [`FlowPhase`] - Intro or assessment
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use audit_core::prelude::*;
//! ```

pub mod builtin;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod scoring;
pub mod types;

/// Prelude for common imports used throughout all self-audit crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use dataset::{
    flatten_sections, Assessment, Dataset, Intro, NextStep, Question, ResultsCopy, ScoreBand,
    Section,
};
pub use error::{Error, Result, ResultExt};
pub use scoring::{max_score, resolve_band, validate_bands, BandTable};
pub use types::{
    FlowPhase, LikertValue, Severity, LIKERT_MAX, LIKERT_MIN, SCALE_HIGH_LABEL, SCALE_LOW_LABEL,
};
