//! Deterministic vector generator
//!
//! Draws input sequences from a seeded ChaCha stream and records the
//! summarizer's output for each. The random source is passed explicitly to
//! every drawing routine; a fixed seed and fixed limits reproduce the same
//! vectors on every machine. Every integer draw is taken over `u32`, so the
//! stream is read one 32-bit word per attempt on 32- and 64-bit targets alike.

use std::path::PathBuf;

use ctxsum_core::{Fragment, Summarizer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::config::{DrawLimits, GeneratorConfig};
use crate::digest::VectorsDigest;
use crate::error::Result;
use crate::manifest::{Manifest, TestVector};

/// Character classes mixed into drawn text
///
/// Wide and astral classes make byte length diverge from character count, so
/// consumers that count bytes fail the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Printable ASCII
    Ascii,
    /// Space, tab, carriage return, newline
    Whitespace,
    /// Latin-1 supplement and Latin extended
    Latin,
    /// CJK unified ideographs
    Cjk,
    /// Emoji outside the basic multilingual plane
    Emoji,
}

impl CharClass {
    const WEIGHTED: [(CharClass, u32); 5] = [
        (CharClass::Ascii, 60),
        (CharClass::Whitespace, 10),
        (CharClass::Latin, 12),
        (CharClass::Cjk, 12),
        (CharClass::Emoji, 6),
    ];

    fn draw(rng: &mut ChaCha20Rng) -> Self {
        let total: u32 = Self::WEIGHTED.iter().map(|(_, w)| w).sum();
        let mut pick = rng.gen_range(0..total);
        for (class, weight) in Self::WEIGHTED {
            if pick < weight {
                return class;
            }
            pick -= weight;
        }
        CharClass::Ascii
    }

    fn draw_char(self, rng: &mut ChaCha20Rng) -> char {
        const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

        let code = match self {
            Self::Ascii => rng.gen_range(0x20..=0x7E),
            Self::Whitespace => return WHITESPACE[draw_index(rng, 0, WHITESPACE.len() - 1)],
            Self::Latin => rng.gen_range(0xA0..=0x24F),
            Self::Cjk => rng.gen_range(0x4E00..=0x9FFF),
            Self::Emoji => rng.gen_range(0x1F300..=0x1FAFF),
        };
        // all ranges above exclude surrogates
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Seeded random source for a generation run
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Uniform draw in `low..=high`, sampled as `u32`
///
/// Sampling `usize` directly would consume one word on 32-bit targets and two
/// on 64-bit ones. Bounds above `u32::MAX` are clamped.
fn draw_index(rng: &mut ChaCha20Rng, low: usize, high: usize) -> usize {
    let low = u32::try_from(low).unwrap_or(u32::MAX);
    let high = u32::try_from(high).unwrap_or(u32::MAX);
    rng.gen_range(low..=high) as usize
}

/// Draw a fragment length, biased toward short text
fn draw_length(rng: &mut ChaCha20Rng, max_chars: usize) -> usize {
    if max_chars == 0 {
        return 0;
    }
    let r: f64 = rng.gen();
    if r < 0.15 {
        return 0;
    }
    let upper = if r < 0.60 {
        16
    } else if r < 0.85 {
        512
    } else {
        max_chars
    };
    draw_index(rng, 1, upper.min(max_chars))
}

/// Draw one text of at most `max_chars` characters
pub fn draw_text(rng: &mut ChaCha20Rng, max_chars: usize) -> String {
    let len = draw_length(rng, max_chars);
    let mut text = String::with_capacity(len);
    for _ in 0..len {
        let class = CharClass::draw(rng);
        text.push(class.draw_char(rng));
    }
    text
}

/// Draw one input sequence within `limits`
pub fn draw_sequence(rng: &mut ChaCha20Rng, limits: &DrawLimits) -> Vec<Fragment> {
    let count = draw_index(rng, 0, limits.max_fragments);
    (0..count)
        .map(|_| Fragment::Text(draw_text(rng, limits.max_fragment_chars)))
        .collect()
}

/// Generate `count` vectors from `rng`
///
/// Draws are strictly sequential; vector `i` depends on every draw before it.
pub fn generate_vectors(
    rng: &mut ChaCha20Rng,
    count: usize,
    limits: &DrawLimits,
    summarizer: &Summarizer,
) -> Vec<TestVector> {
    let mut vectors = Vec::with_capacity(count);
    for index in 0..count {
        let input = draw_sequence(rng, limits);
        let expected_output = summarizer.summarize(Some(&input));
        tracing::debug!(
            index,
            fragments = input.len(),
            output_chars = expected_output.chars().count(),
            "vector drawn"
        );
        vectors.push(TestVector {
            id: TestVector::id_for(index),
            input,
            expected_output,
        });
    }
    vectors
}

/// Generate the manifest for `config` without writing it
pub fn build_manifest(config: &GeneratorConfig) -> Manifest {
    let mut rng = seeded_rng(config.seed);
    let summarizer = Summarizer::default();
    let vectors = generate_vectors(&mut rng, config.count, &config.limits, &summarizer);
    Manifest::new(vectors)
}

/// Outcome of a completed generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Seed the run used
    pub seed: u64,
    /// Vectors written
    pub vector_count: usize,
    /// Destination of the manifest
    pub output_path: PathBuf,
    /// Digest of the written `vectors` array
    pub digest: VectorsDigest,
}

impl GenerationReport {
    /// One-line summary for standard output
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Wrote {} vectors to {}",
            self.vector_count,
            self.output_path.display()
        )
    }
}

/// Generate vectors and write the manifest
///
/// # Errors
/// Returns error if the manifest cannot be serialized or written; nothing is
/// left at the destination in that case.
pub fn run_generation(config: &GeneratorConfig) -> Result<GenerationReport> {
    tracing::info!(
        seed = config.seed,
        count = config.count,
        path = %config.output_path.display(),
        "generating vectors"
    );

    let manifest = build_manifest(config);
    let digest = manifest.vectors_digest()?;
    manifest.write(&config.output_path)?;

    tracing::info!(digest = %digest.short(), "manifest written");

    Ok(GenerationReport {
        seed: config.seed,
        vector_count: manifest.vectors.len(),
        output_path: config.output_path.clone(),
        digest,
    })
}
