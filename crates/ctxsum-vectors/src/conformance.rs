//! Replaying a manifest against a summarizer

use ctxsum_core::Summarizer;

use crate::manifest::Manifest;

/// A vector whose recorded output no longer matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Vector identifier
    pub id: String,
    /// Output recorded in the manifest
    pub expected: String,
    /// Output the summarizer produced now
    pub actual: String,
}

impl Mismatch {
    /// Character offset of the first differing character
    #[must_use]
    pub fn first_divergence(&self) -> usize {
        self.expected
            .chars()
            .zip(self.actual.chars())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

/// Result of replaying every vector in a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConformanceReport {
    /// Vectors replayed
    pub checked: usize,
    /// Vectors that disagreed
    pub mismatches: Vec<Mismatch>,
}

impl ConformanceReport {
    /// Check if every vector matched
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Generate a text report
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = format!(
            "checked {} vectors, {} mismatches\n",
            self.checked,
            self.mismatches.len()
        );
        for m in &self.mismatches {
            report.push_str(&format!(
                "  {}: diverges at char {} (expected {} chars, got {})\n",
                m.id,
                m.first_divergence(),
                m.expected.chars().count(),
                m.actual.chars().count(),
            ));
        }
        report
    }
}

/// Recompute every vector's output and compare with the recorded one
pub fn verify_manifest(manifest: &Manifest, summarizer: &Summarizer) -> ConformanceReport {
    let mut report = ConformanceReport::default();
    for vector in &manifest.vectors {
        report.checked += 1;
        let actual = summarizer.summarize(Some(&vector.input));
        if actual != vector.expected_output {
            tracing::warn!(id = %vector.id, "vector mismatch");
            report.mismatches.push(Mismatch {
                id: vector.id.clone(),
                expected: vector.expected_output.clone(),
                actual,
            });
        }
    }
    report
}
