//! Content digests for vector sets
//!
//! Provides [`VectorsDigest`], a 32-byte Blake3 hash of the canonical JSON of
//! a vector list. Two runs with the same seed must produce the same digest.

use std::fmt::{self, Display, Formatter};

/// A 32-byte content hash (Blake3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VectorsDigest([u8; 32]);

impl VectorsDigest {
    /// Compute Blake3 hash of arbitrary data
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Compute hash from serializable value (compact JSON encoding)
    ///
    /// # Errors
    /// Returns error if serialization fails
    #[inline]
    pub fn compute_serializable<T>(value: &T) -> Result<Self, DigestError>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_vec(value)?;
        Ok(Self::compute(&json))
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for VectorsDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Errors that can occur when computing digests
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// Value could not be encoded as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_deterministic() {
        assert_eq!(
            VectorsDigest::compute(b"vectors"),
            VectorsDigest::compute(b"vectors")
        );
        assert_ne!(VectorsDigest::compute(b"a"), VectorsDigest::compute(b"b"));
    }

    #[test]
    fn display_is_lowercase_hex() {
        // blake3("abc"), published test vector
        assert_eq!(
            VectorsDigest::compute(b"abc").to_string(),
            "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85"
        );
    }

    #[test]
    fn short_is_prefix() {
        let digest = VectorsDigest::compute(b"test");
        let short = digest.short();
        assert_eq!(short.len(), 16);
        assert!(digest.to_string().starts_with(&short));
    }

    #[test]
    fn serializable_matches_raw_json() {
        let value = vec!["a", "b"];
        let digest = VectorsDigest::compute_serializable(&value).unwrap();
        assert_eq!(digest, VectorsDigest::compute(br#"["a","b"]"#));
    }
}
