//! Inferred JSON shape definitions
//!
//! A [`JsonSchema`] tree describes the shape of the payload a type
//! serializes to. Nodes carry no behavior; the engine builds them and an
//! external renderer consumes them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node of an inferred JSON shape tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JsonSchema {
    /// Terminal scalar value. `restrictions` is populated only for
    /// enum-derived primitives and lists the constant names in declaration
    /// order.
    Primitive {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        restrictions: Option<Vec<String>>,
    },
    /// List-like container with a single element shape
    Array { element: Box<JsonSchema> },
    /// Map-like container; `key` always precedes `value`
    Dict {
        key: Box<JsonSchema>,
        value: Box<JsonSchema>,
    },
    /// Composite object. Field insertion order is declaration order, with
    /// base-type fields ahead of derived-type fields; a re-declared field
    /// keeps its original position.
    Object { fields: IndexMap<String, JsonSchema> },
}

impl JsonSchema {
    /// Create a primitive schema for a canonical type name
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive {
            name: name.into(),
            restrictions: None,
        }
    }

    /// Create a string primitive restricted to a fixed set of constants
    #[must_use]
    pub fn enumeration(constants: Vec<String>) -> Self {
        Self::Primitive {
            name: "string".to_string(),
            restrictions: Some(constants),
        }
    }

    /// Create an array schema
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Create a dict schema
    #[must_use]
    pub fn dict(key: Self, value: Self) -> Self {
        Self::Dict {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create an object schema from ordered fields
    #[must_use]
    pub fn object(fields: IndexMap<String, Self>) -> Self {
        Self::Object { fields }
    }
}
