//! Schema document model
//!
//! A JSON Schema is parsed once into a closed set of node shapes
//! ([`SchemaNode`]). Every keyword the path walker relies on is checked here,
//! so a node that comes out of [`SchemaNode::from_value`] can be matched
//! exhaustively without re-inspecting raw JSON.
//!
//! Copyright (c) 2025 Schemapath Team
//! Licensed under the Apache-2.0 license

use crate::error::{SchemaError, SchemaResult};
use crate::resolver;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Keyword holding the definitions map (JSON Schema 2020-12)
pub const DEFS_KEY: &str = "$defs";

/// Definitions keyword used by draft-07 generators
pub const LEGACY_DEFS_KEY: &str = "definitions";

/// Definition key to schema node
pub type Definitions = HashMap<String, SchemaNode>;

/// One position in a data shape
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `{"type": "object", "properties": {...}}`
    Object(ObjectSchema),
    /// `{"type": "array", "items": ...}` or `{"type": "array", "prefixItems": [...]}`
    Array(ArraySchema),
    /// `{"$ref": "#/$defs/<key>"}`
    Reference(String),
    /// `{"anyOf": [...]}`
    Union(UnionSchema),
    /// Anything else. Holds the raw schema for diagnostics.
    Leaf(Value),
}

/// Declared properties of an object node, in declaration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    properties: Vec<(String, SchemaNode)>,
}

/// An array node.
///
/// `anyOf` alternatives next to `"type": "array"` are kept: they apply to
/// segments that are not indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    items: ArrayItems,
    any_of: Vec<SchemaNode>,
    raw: Value,
}

/// Alternatives of an `anyOf` node
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    alternatives: Vec<SchemaNode>,
    raw: Value,
}

/// Item schemas of an array node
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItems {
    /// One schema for every index
    Items(Box<SchemaNode>),
    /// One schema per position
    PrefixItems(Vec<SchemaNode>),
}

/// A root schema node together with its definitions map
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    root: SchemaNode,
    definitions: Definitions,
}

impl ObjectSchema {
    /// Create an object schema from `(name, schema)` pairs
    pub fn new(properties: Vec<(String, SchemaNode)>) -> Self {
        Self { properties }
    }

    /// Look up a declared property
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Declared property names, in declaration order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over `(name, schema)` pairs
    pub fn properties(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.properties.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ArraySchema {
    pub fn items(&self) -> &ArrayItems {
        &self.items
    }

    /// Alternatives tried for segments that are not indices
    pub fn any_of(&self) -> &[SchemaNode] {
        &self.any_of
    }

    /// The schema as written
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl UnionSchema {
    pub fn alternatives(&self) -> &[SchemaNode] {
        &self.alternatives
    }

    /// The schema as written
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl SchemaNode {
    /// Parse a JSON Schema value into a node
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        Self::parse(value, "")
    }

    /// A schema that accepts no further navigation
    pub fn leaf() -> Self {
        SchemaNode::Leaf(Value::Object(Map::new()))
    }

    /// Short name of the node shape
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Object(_) => "object",
            SchemaNode::Array(_) => "array",
            SchemaNode::Reference(_) => "reference",
            SchemaNode::Union(_) => "union",
            SchemaNode::Leaf(_) => "leaf",
        }
    }

    /// Render the node as JSON Schema.
    ///
    /// Array, union and leaf nodes give back the schema as written. Object
    /// nodes are rebuilt from `type` and their declared properties.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        match self {
            SchemaNode::Object(object) => {
                obj.insert("type".into(), Value::from("object"));
                let properties = object
                    .properties()
                    .map(|(key, node)| (key.to_string(), node.to_value()))
                    .collect::<Map<_, _>>();
                obj.insert("properties".into(), Value::Object(properties));
            }
            SchemaNode::Reference(reference) => {
                obj.insert("$ref".into(), Value::from(reference.as_str()));
            }
            SchemaNode::Array(array) => return array.raw.clone(),
            SchemaNode::Union(union) => return union.raw.clone(),
            SchemaNode::Leaf(value) => return value.clone(),
        }
        Value::Object(obj)
    }

    fn parse(value: &Value, pointer: &str) -> SchemaResult<Self> {
        let Some(obj) = value.as_object() else {
            return Ok(SchemaNode::Leaf(value.clone()));
        };

        if let Some(reference) = obj.get("$ref") {
            return match reference.as_str() {
                Some(reference) => Ok(SchemaNode::Reference(reference.to_string())),
                None => Err(SchemaError::malformed_node(
                    child_pointer(pointer, "$ref"),
                    "'$ref' must be a string",
                )),
            };
        }

        match obj.get("type").and_then(Value::as_str) {
            Some("object") => return Self::parse_object(obj, pointer).map(SchemaNode::Object),
            Some("array") => {
                let items = Self::parse_array(obj, pointer)?;
                let any_of = Self::parse_any_of(obj, pointer)?.unwrap_or_default();
                return Ok(SchemaNode::Array(ArraySchema {
                    items,
                    any_of,
                    raw: value.clone(),
                }));
            }
            _ => {}
        }

        match Self::parse_any_of(obj, pointer)? {
            Some(alternatives) => Ok(SchemaNode::Union(UnionSchema {
                alternatives,
                raw: value.clone(),
            })),
            None => Ok(SchemaNode::Leaf(value.clone())),
        }
    }

    fn parse_any_of(obj: &Map<String, Value>, pointer: &str) -> SchemaResult<Option<Vec<SchemaNode>>> {
        obj.get("anyOf")
            .map(|any_of| Self::parse_list(any_of, &child_pointer(pointer, "anyOf")))
            .transpose()
    }

    fn parse_object(obj: &Map<String, Value>, pointer: &str) -> SchemaResult<ObjectSchema> {
        let Some(properties) = obj.get("properties") else {
            return Ok(ObjectSchema::default());
        };
        let properties_pointer = child_pointer(pointer, "properties");
        let properties = properties.as_object().ok_or_else(|| {
            SchemaError::malformed_node(properties_pointer.clone(), "'properties' must be an object")
        })?;

        properties
            .iter()
            .map(|(key, value)| {
                let node = Self::parse(value, &child_pointer(&properties_pointer, key))?;
                Ok((key.clone(), node))
            })
            .collect::<SchemaResult<Vec<_>>>()
            .map(ObjectSchema::new)
    }

    fn parse_array(obj: &Map<String, Value>, pointer: &str) -> SchemaResult<ArrayItems> {
        match obj.get("items") {
            // Draft-07 tuple form
            Some(items @ Value::Array(_)) => {
                let items_pointer = child_pointer(pointer, "items");
                return Self::parse_list(items, &items_pointer).map(ArrayItems::PrefixItems);
            }
            Some(Value::Bool(false)) if obj.contains_key("prefixItems") => {}
            Some(items) => {
                let node = Self::parse(items, &child_pointer(pointer, "items"))?;
                return Ok(ArrayItems::Items(Box::new(node)));
            }
            None => {}
        }

        match obj.get("prefixItems") {
            Some(prefix) => {
                let prefix_pointer = child_pointer(pointer, "prefixItems");
                Self::parse_list(prefix, &prefix_pointer).map(ArrayItems::PrefixItems)
            }
            None => Err(SchemaError::malformed_array(display_pointer(pointer))),
        }
    }

    fn parse_list(value: &Value, pointer: &str) -> SchemaResult<Vec<SchemaNode>> {
        let list = value.as_array().ok_or_else(|| {
            SchemaError::malformed_node(pointer.to_string(), "expected an array of schemas")
        })?;
        list.iter()
            .enumerate()
            .map(|(i, item)| Self::parse(item, &child_pointer(pointer, &i.to_string())))
            .collect()
    }
}

impl SchemaDocument {
    /// Create a document from an already parsed root and definitions map
    pub fn new(root: SchemaNode, definitions: Definitions) -> Self {
        Self { root, definitions }
    }

    /// Parse a full JSON Schema document.
    ///
    /// Definitions are read from `$defs`, or from `definitions` when `$defs`
    /// is absent.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        let root = SchemaNode::from_value(value)?;

        let (defs_key, defs) = match value.get(DEFS_KEY) {
            Some(defs) => (DEFS_KEY, Some(defs)),
            None => (LEGACY_DEFS_KEY, value.get(LEGACY_DEFS_KEY)),
        };

        let mut definitions = Definitions::new();
        if let Some(defs) = defs {
            let defs_pointer = child_pointer("", defs_key);
            let defs = defs.as_object().ok_or_else(|| {
                SchemaError::malformed_node(defs_pointer.clone(), "definitions must be an object")
            })?;
            for (key, schema) in defs {
                let node = SchemaNode::parse(schema, &child_pointer(&defs_pointer, key))?;
                definitions.insert(key.clone(), node);
            }
        }

        debug!(
            root = root.kind(),
            definitions = definitions.len(),
            "Parsed schema document"
        );

        Ok(Self { root, definitions })
    }

    /// The root schema node
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// The definitions map
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    /// Look up a definition by key
    pub fn definition(&self, key: &str) -> Option<&SchemaNode> {
        self.definitions.get(key)
    }

    /// Resolve a `$ref` string against this document's definitions
    pub fn resolve(&self, reference: &str) -> SchemaResult<&SchemaNode> {
        resolver::resolve(reference, &self.definitions)
    }
}

impl TryFrom<&Value> for SchemaDocument {
    type Error = SchemaError;

    fn try_from(value: &Value) -> SchemaResult<Self> {
        Self::from_value(value)
    }
}

fn child_pointer(pointer: &str, token: &str) -> String {
    format!("{}/{}", pointer, token.replace('~', "~0").replace('/', "~1"))
}

fn display_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
