//! Test vectors and the manifest that persists them

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use ctxsum_core::Fragment;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::config::MANIFEST_VERSION;
use crate::digest::VectorsDigest;
use crate::error::{Result, VectorError};

/// One recorded (input, expected output) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestVector {
    /// Stable identifier, `vector_<index>`
    pub id: String,
    /// Input sequence as drawn
    pub input: Vec<Fragment>,
    /// Summary of `input`
    pub expected_output: String,
}

impl TestVector {
    /// Identifier for the vector at `index`
    #[inline]
    #[must_use]
    pub fn id_for(index: usize) -> String {
        format!("vector_{index}")
    }
}

/// Persisted collection of test vectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version
    pub version: String,
    /// When the run finished drawing vectors
    pub generated_at: DateTime<Utc>,
    /// Vectors in generation order
    pub vectors: Vec<TestVector>,
}

impl Manifest {
    /// Wrap vectors with the current version and timestamp
    #[must_use]
    pub fn new(vectors: Vec<TestVector>) -> Self {
        Self::with_timestamp(vectors, Utc::now())
    }

    /// Wrap vectors with an explicit timestamp
    #[must_use]
    pub fn with_timestamp(vectors: Vec<TestVector>, generated_at: DateTime<Utc>) -> Self {
        Self {
            version: MANIFEST_VERSION.to_owned(),
            generated_at,
            vectors,
        }
    }

    /// Blake3 digest of the compact JSON `vectors` array
    ///
    /// Excludes the timestamp, so equal seeds give equal digests.
    ///
    /// # Errors
    /// Returns error if the vectors cannot be serialized
    pub fn vectors_digest(&self) -> Result<VectorsDigest> {
        Ok(VectorsDigest::compute_serializable(&self.vectors)?)
    }

    /// Pretty-printed JSON document
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `path`, creating parent directories
    ///
    /// The document goes to a temporary file beside the destination and is
    /// renamed into place, so readers never observe a partial manifest.
    ///
    /// # Errors
    /// Returns error on serialization or filesystem failure
    pub fn write(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| VectorError::io(parent, e))?;

        let json = self.to_json()?;
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| VectorError::io(parent, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| VectorError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| VectorError::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| VectorError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        tracing::debug!(path = %path.display(), bytes = json.len(), "manifest persisted");
        Ok(())
    }

    /// Read a manifest from `path`
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a manifest
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| VectorError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}
