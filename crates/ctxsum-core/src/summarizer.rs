//! Defensive fragment concatenation
//!
//! The summarizer never fails: absent fragments are skipped, everything else
//! is converted to text, and both the per-fragment text and the joined result
//! are cut to fixed character limits. Limits count Unicode scalar values.

use crate::fragment::Fragment;

/// Maximum characters kept from a single fragment
pub const FRAGMENT_MAX_CHARS: usize = 5_000;

/// Maximum characters in a summary
pub const SUMMARY_MAX_CHARS: usize = 20_000;

/// Separator placed between consecutive fragments
pub const SEPARATOR: char = '\n';

/// Character limits applied while summarizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SummaryLimits {
    /// Prefix length kept from each fragment
    pub fragment_max_chars: usize,
    /// Prefix length kept from the joined summary
    pub summary_max_chars: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            fragment_max_chars: FRAGMENT_MAX_CHARS,
            summary_max_chars: SUMMARY_MAX_CHARS,
        }
    }
}

/// Stateless summarizer parameterized by [`SummaryLimits`]
///
/// Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summarizer {
    limits: SummaryLimits,
}

impl Summarizer {
    /// Create a summarizer with explicit limits
    #[inline]
    #[must_use]
    pub const fn with_limits(limits: SummaryLimits) -> Self {
        Self { limits }
    }

    /// Summarize a possibly absent sequence of fragments
    ///
    /// Returns an empty string when the sequence is absent or every fragment
    /// is absent. Otherwise joins the truncated texts with `'\n'` in input
    /// order and truncates the result. Stops reading `chunks` once the limit
    /// is reached, so an unbounded iterator still terminates.
    pub fn summarize<I>(&self, chunks: Option<I>) -> String
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let Some(chunks) = chunks else {
            return String::new();
        };

        let max_chars = self.limits.summary_max_chars;
        let mut summary = String::new();
        let mut written = 0;
        let mut first = true;
        for chunk in chunks {
            let fragment: Fragment = chunk.into();
            let Some(text) = fragment.as_text() else {
                continue;
            };
            if !first {
                summary.push(SEPARATOR);
                written += 1;
            }
            first = false;
            let piece = truncate_chars(&text, self.limits.fragment_max_chars);
            summary.push_str(piece);
            written += piece.chars().count();
            // later fragments fall entirely past the cut
            if written >= max_chars {
                break;
            }
        }

        let end = truncate_chars(&summary, max_chars).len();
        summary.truncate(end);
        summary
    }
}

/// Summarize with the default limits
///
/// ```
/// use ctxsum_core::summarize;
///
/// assert_eq!(summarize(Some(["hello", "world"])), "hello\nworld");
/// assert_eq!(summarize(None::<Vec<&str>>), "");
/// ```
pub fn summarize<I>(chunks: Option<I>) -> String
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    Summarizer::default().summarize(chunks)
}

/// Longest prefix of `text` holding at most `max_chars` characters
///
/// Never splits a multi-byte character.
#[inline]
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
