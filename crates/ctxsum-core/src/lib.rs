//! ctxsum core
//!
//! Bounded, defensive concatenation of text fragments.
//!
//! # Core Concepts
//!
//! - [`Fragment`]: one input unit; absent, text, or any JSON value
//! - [`Summarizer`]: joins fragments under [`SummaryLimits`]
//! - [`summarize`]: the same with default limits (5,000 characters per
//!   fragment, 20,000 per summary)
//!
//! # Example
//!
//! ```rust
//! use ctxsum_core::{summarize, Fragment};
//!
//! let input = vec![Fragment::Absent, Fragment::from("x"), Fragment::from(3_i64)];
//! assert_eq!(summarize(Some(input)), "x\n3");
//! ```

#![warn(unreachable_pub)]

mod fragment;
mod summarizer;

pub use fragment::Fragment;
pub use summarizer::{
    summarize, truncate_chars, Summarizer, SummaryLimits, FRAGMENT_MAX_CHARS, SEPARATOR,
    SUMMARY_MAX_CHARS,
};
