//! Typed side-channel metadata attached to every result record.
//!
//! Each engine documents the keys it writes. Values are restricted to
//! numbers, counts, strings, booleans, and lists of those.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ordered key-value metadata map.
pub type Metadata = BTreeMap<String, MetaValue>;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MetaValue {
    /// Boolean flag.
    Flag(bool),
    /// Non-negative integer count.
    Count(usize),
    /// Floating-point number; NaN and infinities use the
    /// [`crate::nonfinite`] string form.
    Number(
        #[serde(with = "crate::nonfinite")]
        #[schemars(with = "crate::nonfinite::Repr")]
        f64,
    ),
    /// Free-form text.
    Text(String),
    /// Homogeneous or mixed list.
    List(Vec<MetaValue>),
}

impl MetaValue {
    /// Numeric view; counts widen to `f64`.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Count(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Count view.
    pub const fn as_usize(&self) -> Option<usize> {
        match self {
            Self::Count(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Flag view.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// List view.
    pub fn as_list(&self) -> Option<&[MetaValue]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<usize> for MetaValue {
    fn from(v: usize) -> Self {
        Self::Count(v)
    }
}

impl From<u64> for MetaValue {
    fn from(v: u64) -> Self {
        Self::Count(usize::try_from(v).unwrap_or(usize::MAX))
    }
}

impl From<f64> for MetaValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for MetaValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// Build a [`Metadata`] map from `key => value` pairs.
macro_rules! metadata {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::lexical::metadata::Metadata::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::lexical::metadata::MetaValue::from($value),
            );
        )*
        map
    }};
}

pub(crate) use metadata;
