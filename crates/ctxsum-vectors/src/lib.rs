//! ctxsum conformance vectors
//!
//! Generates seeded (input, expected output) pairs using the summarizer as the
//! oracle and persists them as a JSON manifest for cross-implementation tests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ctxsum_vectors::{run_generation, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_env()?;
//! let report = run_generation(&config)?;
//! println!("{}", report.summary_line());
//! # Ok::<(), ctxsum_vectors::VectorError>(())
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod conformance;
pub mod digest;
pub mod error;
pub mod generator;
pub mod manifest;

pub use config::{DrawLimits, GeneratorConfig};
pub use conformance::{verify_manifest, ConformanceReport, Mismatch};
pub use digest::{DigestError, VectorsDigest};
pub use error::{Result, VectorError};
pub use generator::{
    build_manifest, generate_vectors, run_generation, seeded_rng, GenerationReport,
};
pub use manifest::{Manifest, TestVector};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
