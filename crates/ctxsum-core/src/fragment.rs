//! Summary input units
//!
//! A [`Fragment`] is one slot of an input sequence. It is either absent,
//! plain text, or an arbitrary JSON value that still has a deterministic
//! textual form.

use std::borrow::Cow;

use serde_json::Value;

/// One unit of summarizer input
///
/// Serializes as `null`, a JSON string, or the raw JSON value, so a
/// sequence of fragments round-trips through the manifest `input` array.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Fragment {
    /// Missing value; contributes nothing to a summary
    #[default]
    Absent,
    /// Plain text
    Text(String),
    /// Any other value, rendered as compact JSON
    Other(Value),
}

impl Fragment {
    /// Textual form of the fragment, or `None` when absent
    ///
    /// Total and deterministic: the same fragment always yields the same text.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Other(Value::Null) => None,
            Self::Other(Value::String(text)) => Some(Cow::Borrowed(text)),
            // Display for Value is compact JSON and cannot fail
            Self::Other(value) => Some(Cow::Owned(value.to_string())),
        }
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Absent => Value::Null,
            Fragment::Text(text) => Value::String(text),
            Fragment::Other(value) => value,
        }
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<&Fragment> for Fragment {
    fn from(fragment: &Fragment) -> Self {
        fragment.clone()
    }
}

impl From<&Value> for Fragment {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl<T> From<Option<T>> for Fragment
where
    T: Into<Fragment>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Fragment {
                fn from(value: $ty) -> Self {
                    Self::from(Value::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, usize, f64);
