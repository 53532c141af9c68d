//! Serde helpers for statistics that may be NaN or infinite.
//!
//! JSON has no encoding for non-finite numbers, and `serde_json` writes them
//! as `null`, which loses the NaN-versus-infinity distinction and cannot be
//! read back into an `f64`. Fields using these helpers write finite values as
//! plain numbers and non-finite values as the strings `"NaN"`, `"inf"`, and
//! `"-inf"`, the same spelling the CLI uses for text output.
//!
//! Reading accepts either form, plus `null` as NaN.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Score {
//!     #[serde(with = "lexdiv_core::nonfinite")]
//!     value: f64,
//! }
//!
//! let json = serde_json::to_string(&Score { value: f64::INFINITY }).unwrap();
//! assert_eq!(json, r#"{"value":"inf"}"#);
//! let back: Score = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.value, f64::INFINITY);
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serializer};

/// Wire form of a statistic: a JSON number or one of the sentinel strings.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Repr {
    /// Finite value.
    Finite(f64),
    /// `"NaN"`, `"inf"`, or `"-inf"`.
    Sentinel(String),
}

impl Repr {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Finite(v) => Ok(v),
            Self::Sentinel(s) => parse_sentinel(&s).ok_or_else(|| {
                E::custom(format!(
                    "expected a number, \"NaN\", \"inf\", or \"-inf\", found {s:?}"
                ))
            }),
        }
    }
}

fn parse_sentinel(s: &str) -> Option<f64> {
    match s {
        "NaN" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Serialize one statistic.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        // f64's Display spells these "NaN", "inf", "-inf".
        serializer.collect_str(value)
    }
}

/// Deserialize one statistic.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<Repr>::deserialize(deserializer)? {
        Some(repr) => repr.into_f64(),
        None => Ok(f64::NAN),
    }
}

/// The same encoding for a list of statistics.
pub mod vec {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Repr;

    struct Item(f64);

    impl Serialize for Item {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            super::serialize(&self.0, serializer)
        }
    }

    /// Serialize a list of statistics.
    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for v in values {
            seq.serialize_element(&Item(*v))?;
        }
        seq.end()
    }

    /// Deserialize a list of statistics.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<Option<Repr>>::deserialize(deserializer)?
            .into_iter()
            .map(|item| item.map_or(Ok(f64::NAN), Repr::into_f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super")]
        value: f64,
        #[serde(with = "super::vec")]
        values: Vec<f64>,
    }

    fn to_json(value: f64, values: Vec<f64>) -> String {
        serde_json::to_string(&Sample { value, values }).unwrap()
    }

    #[test]
    fn finite_values_stay_numbers() {
        assert_eq!(to_json(0.5, vec![1.0, 2.5]), r#"{"value":0.5,"values":[1.0,2.5]}"#);
    }

    #[test]
    fn non_finite_values_become_sentinels() {
        assert_eq!(
            to_json(f64::NAN, vec![f64::INFINITY, f64::NEG_INFINITY, 1.0]),
            r#"{"value":"NaN","values":["inf","-inf",1.0]}"#
        );
    }

    #[test]
    fn sentinels_read_back() {
        let s: Sample = serde_json::from_str(r#"{"value":"inf","values":["NaN","-inf",3]}"#).unwrap();
        assert_eq!(s.value, f64::INFINITY);
        assert!(s.values[0].is_nan());
        assert_eq!(s.values[1], f64::NEG_INFINITY);
        assert_eq!(s.values[2], 3.0);
    }

    #[test]
    fn null_reads_as_nan() {
        let s: Sample = serde_json::from_str(r#"{"value":null,"values":[null]}"#).unwrap();
        assert!(s.value.is_nan());
        assert!(s.values[0].is_nan());
    }

    #[test]
    fn unknown_strings_are_rejected() {
        let err = serde_json::from_str::<Sample>(r#"{"value":"lots","values":[]}"#).unwrap_err();
        assert!(err.to_string().contains("\"lots\""));
    }
}
