//! Generator configuration

use std::path::PathBuf;

use crate::error::{Result, VectorError};

/// Environment variable overriding the default seed
pub const SEED_ENV: &str = "CTXSUM_SEED";

/// Seed used when [`SEED_ENV`] is unset
pub const DEFAULT_SEED: u64 = 12_345;

/// Vectors produced per run
pub const DEFAULT_VECTOR_COUNT: usize = 50;

/// Manifest location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "fixtures/test_vectors.json";

/// Manifest format version
pub const MANIFEST_VERSION: &str = "1.0";

/// Shape of the drawn input sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawLimits {
    /// Most fragments in one sequence
    pub max_fragments: usize,
    /// Most characters in one fragment
    pub max_fragment_chars: usize,
}

impl Default for DrawLimits {
    fn default() -> Self {
        Self {
            max_fragments: 50,
            max_fragment_chars: ctxsum_core::FRAGMENT_MAX_CHARS,
        }
    }
}

/// Vector generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Number of vectors to generate
    pub count: usize,
    /// Where the manifest is written
    pub output_path: PathBuf,
    /// Input distribution bounds
    pub limits: DrawLimits,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: DEFAULT_VECTOR_COUNT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            limits: DrawLimits::default(),
        }
    }
}

impl GeneratorConfig {
    /// Build from the process environment
    ///
    /// # Errors
    /// Returns [`VectorError::Config`] if `CTXSUM_SEED` is set but not a `u64`
    pub fn from_env() -> Result<Self> {
        Self::from_env_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns [`VectorError::Config`] if the seed value does not parse
    pub fn from_env_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(SEED_ENV) {
            config.seed = parse_seed(&raw)?;
        }
        Ok(config)
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|e| VectorError::Config {
        var: SEED_ENV,
        value: raw.to_owned(),
        reason: e.to_string(),
    })
}
