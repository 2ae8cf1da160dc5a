//! Field paths
//!
//! A [`FieldPath`] locates a value inside a nested input as an ordered list of
//! object keys and array indices. Rules receive the path of the value they
//! inspect and extend it with [`FieldPath::push`] when they descend.
//!
//! # Examples
//!
//! ```
//! use nuisance_validator::path::FieldPath;
//!
//! let root = FieldPath::root();
//! let email = root.key("contact").key("email");
//! let first = root.key("items").index(0).key("name");
//!
//! assert!(root.is_root());
//! assert_eq!(email.to_string(), "contact.email");
//! assert_eq!(first.to_string(), "items[0].name");
//! ```

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Object member access by name.
    Key(String),
    /// Array element access by position.
    Index(usize),
}

impl PathSegment {
    /// Returns the wire form of the segment (indices as decimal strings).
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Index(index) => index.to_string(),
        }
    }

    /// Returns true if both segments have the same wire form, so `Index(1)`
    /// matches `Key("1")`.
    #[must_use]
    pub fn wire_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Key(a), Self::Key(b)) => a == b,
            (Self::Index(a), Self::Index(b)) => a == b,
            (Self::Key(key), Self::Index(index)) | (Self::Index(index), Self::Key(key)) => {
                *key == index.to_string()
            }
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

// ============================================================================
// FIELD PATH
// ============================================================================

/// Ordered sequence of segments locating a value inside an input.
///
/// The empty path refers to the whole input. Paths are immutable: [`push`]
/// and its shorthands return a new path and leave the parent untouched.
/// Equality and hashing follow the segment sequence; the `Display` form is
/// for diagnostics only.
///
/// [`push`]: FieldPath::push
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl FieldPath {
    /// The path of the whole input.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from a sequence of segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path extended by one segment.
    #[must_use]
    pub fn push(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Shorthand for pushing an object key.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.push(PathSegment::Key(key.into()))
    }

    /// Shorthand for pushing an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns the path without its last segment, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.iter().cloned().collect(),
        })
    }

    /// Returns the last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`is_root`](Self::is_root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the wire form: one string per segment.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.segments.iter().map(PathSegment::to_wire).collect()
    }

    /// Compares wire forms segment by segment.
    ///
    /// A path decoded from the wire holds indices as keys; this matches it
    /// against the path the validator built.
    #[must_use]
    pub fn wire_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.wire_eq(b))
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i > 0 => write!(f, ".{key}")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.segments.len()))?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => seq.serialize_element(key)?,
                PathSegment::Index(index) => seq.serialize_element(&index.to_string())?,
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FieldPathVisitor)
    }
}

struct FieldPathVisitor;

impl<'de> Visitor<'de> for FieldPathVisitor {
    type Value = FieldPath;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of path segments")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FieldPath, A::Error> {
        let mut segments = SmallVec::new();
        while let Some(segment) = seq.next_element::<WireSegment>()? {
            segments.push(segment.0);
        }
        Ok(FieldPath { segments })
    }
}

/// Accepts either a string (key) or a non-negative integer (index).
struct WireSegment(PathSegment);

impl<'de> Deserialize<'de> for WireSegment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SegmentVisitor;

        impl Visitor<'_> for SegmentVisitor {
            type Value = WireSegment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or a non-negative integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<WireSegment, E> {
                Ok(WireSegment(PathSegment::Key(v.to_owned())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<WireSegment, E> {
                Ok(WireSegment(PathSegment::Key(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<WireSegment, E> {
                usize::try_from(v)
                    .map(|index| WireSegment(PathSegment::Index(index)))
                    .map_err(|_| E::custom(format!("index {v} out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<WireSegment, E> {
                usize::try_from(v)
                    .map(|index| WireSegment(PathSegment::Index(index)))
                    .map_err(|_| E::custom(format!("negative index {v}")))
            }
        }

        deserializer.deserialize_any(SegmentVisitor)
    }
}
