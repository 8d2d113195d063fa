//! Path segments
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// One step of a path: a property name or an array index.
///
/// Serialized untagged, so a path is a plain JSON array such as
/// `["lines", 0, "sku"]`.
///
/// Integers outside the `i64` range are held as `Key` in their decimal
/// form, which validates exactly like the integer would.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Segment {
    /// Object property name
    Key(String),
    /// Array index
    Index(i64),
}

impl Segment {
    /// Whether the segment can address an array element.
    ///
    /// True when its decimal string form is made only of ASCII digits, so
    /// `3` and `"3"` qualify while `-1`, `"x"` and `""` do not. The value is
    /// never checked against an array length.
    pub fn is_index(&self) -> bool {
        match self {
            Segment::Index(n) => *n >= 0,
            Segment::Key(key) => !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()),
        }
    }

    /// The segment as a property name
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => Cow::Borrowed(key),
            Segment::Index(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<&String> for Segment {
    fn from(key: &String) -> Self {
        Segment::Key(key.clone())
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(index.into())
    }
}

impl From<u32> for Segment {
    fn from(index: u32) -> Self {
        Segment::Index(index.into())
    }
}

impl From<u64> for Segment {
    fn from(index: u64) -> Self {
        match i64::try_from(index) {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Key(index.to_string()),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        match i64::try_from(index) {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Key(index.to_string()),
        }
    }
}

impl From<&Segment> for Segment {
    fn from(segment: &Segment) -> Self {
        segment.clone()
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SegmentVisitor)
    }
}

struct SegmentVisitor;

impl<'de> Visitor<'de> for SegmentVisitor {
    type Value = Segment;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a property name or an integer index")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Segment, E> {
        Ok(Segment::Index(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Segment, E> {
        Ok(Segment::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Segment, E> {
        Ok(Segment::Key(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Segment, E> {
        Ok(Segment::Key(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_detection() {
        assert!(Segment::from(0).is_index());
        assert!(Segment::from(42usize).is_index());
        assert!(Segment::from("7").is_index());
        assert!(Segment::from("007").is_index());

        assert!(!Segment::from(-1).is_index());
        assert!(!Segment::from("-1").is_index());
        assert!(!Segment::from("x").is_index());
        assert!(!Segment::from("1.5").is_index());
        assert!(!Segment::from("").is_index());
        assert!(!Segment::from("٣").is_index());
    }

    #[test]
    fn test_as_key() {
        assert_eq!(Segment::from("name").as_key(), "name");
        assert_eq!(Segment::from(3).as_key(), "3");
    }

    #[test]
    fn test_untagged_serde() {
        let segments: Vec<Segment> = serde_json::from_value(json!(["lines", 0, "1"])).unwrap();
        assert_eq!(
            segments,
            vec![Segment::from("lines"), Segment::from(0), Segment::from("1")]
        );
        assert_eq!(serde_json::to_value(&segments).unwrap(), json!(["lines", 0, "1"]));

        assert!(serde_json::from_value::<Segment>(json!(1.5)).is_err());
        assert!(serde_json::from_value::<Segment>(json!(null)).is_err());
    }

    #[test]
    fn test_indices_beyond_i64_keep_their_value() {
        let huge = u64::MAX;
        assert_eq!(Segment::from(huge), Segment::Key(huge.to_string()));
        assert!(Segment::from(huge).is_index());
        assert_eq!(
            Segment::from(i64::MAX as u64 + 1),
            Segment::Key("9223372036854775808".to_string())
        );
        assert_eq!(Segment::from(7u64), Segment::Index(7));

        let segment: Segment = serde_json::from_value(json!(huge)).unwrap();
        assert_eq!(segment, Segment::Key("18446744073709551615".to_string()));
        assert_eq!(segment.as_key(), huge.to_string());

        let segment: Segment = serde_json::from_str("-5").unwrap();
        assert_eq!(segment, Segment::Index(-5));
    }

    #[test]
    fn test_integer_and_string_forms_stay_distinct() {
        assert_ne!(Segment::from(0), Segment::from("0"));
        assert_eq!(Segment::from(0).as_key(), Segment::from("0").as_key());
    }
}
