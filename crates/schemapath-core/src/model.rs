//! Paths into Rust types that describe their own schema
//!
//! With the `schemars` feature, any `T: JsonSchema` can act as the schema
//! source. [`ModelPath<T>`] carries the model in its type, so a path into one
//! model cannot be passed where a path into another is expected.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::path::{PathType, TypedPath};
use crate::segment::Segment;
use schemars::JsonSchema;
use serde::de::{DeserializeSeed, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use tracing::debug;

impl PathType {
    /// Build a path type from the JSON Schema generated for `M`
    pub fn for_model<M: JsonSchema>() -> Result<Self> {
        let schema = schemars::schema_for!(M);
        debug!(model = %M::schema_name(), "Generated model schema");
        PathType::from_value(schema.as_value())
    }
}

/// A validated path into model `M`
pub struct ModelPath<M> {
    path: TypedPath,
    model: PhantomData<fn() -> M>,
}

impl<M: JsonSchema> ModelPath<M> {
    /// Validate `segments` against the schema of `M`
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let path = PathType::for_model::<M>()?.path(segments)?;
        Ok(Self::from_path(path))
    }

    /// Parse and validate a path string against the schema of `M`
    pub fn parse(text: &str) -> Result<Self> {
        let path = PathType::for_model::<M>()?.parse(text)?;
        Ok(Self::from_path(path))
    }
}

impl<M> ModelPath<M> {
    fn from_path(path: TypedPath) -> Self {
        Self {
            path,
            model: PhantomData,
        }
    }

    pub fn as_path(&self) -> &TypedPath {
        &self.path
    }

    pub fn into_path(self) -> TypedPath {
        self.path
    }

    pub fn segments(&self) -> &[Segment] {
        self.path.segments()
    }
}

impl<M> Clone for ModelPath<M> {
    fn clone(&self) -> Self {
        Self::from_path(self.path.clone())
    }
}

impl<M> PartialEq for ModelPath<M> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<M> Eq for ModelPath<M> {}

impl<M> Hash for ModelPath<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl<M> fmt::Debug for ModelPath<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelPath")
            .field(&self.path.segments())
            .finish()
    }
}

impl<M> fmt::Display for ModelPath<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}

impl<M> Serialize for ModelPath<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.path.serialize(serializer)
    }
}

impl<'de, M: JsonSchema> Deserialize<'de> for ModelPath<M> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let path_type = PathType::for_model::<M>().map_err(serde::de::Error::custom)?;
        let path = (&path_type).deserialize(deserializer)?;
        Ok(Self::from_path(path))
    }
}
