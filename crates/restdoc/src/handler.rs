//! Handler declaration model consumed by the collector.
//!
//! An adapter (annotation scanner, compiler plugin, ...) describes each
//! routable unit with a [`HandlerDecl`]: the enclosing type, the routing
//! metadata exactly as declared (possibly malformed — cardinality is
//! validated during collection, not here), and the parameter list with role
//! tags.

use serde::{Deserialize, Serialize};

use crate::reflect::TypeRef;

/// Role of a handler parameter for documentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamRole {
    /// Value extracted from a placeholder segment of the URL path
    PathVariable,
    /// Inbound message payload
    RequestBody,
    /// Anything else; ignored by the collector
    Other,
}

/// One declared handler parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name as declared
    pub name: String,
    /// Declared parameter type
    pub ty: TypeRef,
    /// Role tag
    pub role: ParamRole,
}

/// One routable unit: an annotated method on a mounted type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerDecl {
    /// Enclosing type name, for path resolution and error reporting
    pub type_name: String,
    /// Handler method name, for error reporting
    pub method_name: String,
    /// The enclosing type's mount-point path
    #[serde(default)]
    pub mount_point: String,
    /// Class-level routing prefix strings as declared (zero or one allowed)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_paths: Vec<String>,
    /// Method-level routing path strings as declared (exactly one required)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub method_paths: Vec<String>,
    /// HTTP method tokens as declared (exactly one required)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_methods: Vec<String>,
    /// Ordered parameter list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    /// Declared return type
    pub return_type: TypeRef,
}

impl HandlerDecl {
    /// Create a handler declaration with no routing metadata yet
    #[must_use]
    pub fn new(
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        mount_point: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            method_name: method_name.into(),
            mount_point: mount_point.into(),
            class_paths: Vec::new(),
            method_paths: Vec::new(),
            http_methods: Vec::new(),
            params: Vec::new(),
            return_type: TypeRef::Void,
        }
    }

    /// Append a class-level routing prefix string
    #[must_use]
    pub fn with_class_path(mut self, path: impl Into<String>) -> Self {
        self.class_paths.push(path.into());
        self
    }

    /// Append a method-level routing path string
    #[must_use]
    pub fn with_method_path(mut self, path: impl Into<String>) -> Self {
        self.method_paths.push(path.into());
        self
    }

    /// Append an HTTP method token
    #[must_use]
    pub fn with_http_method(mut self, token: impl Into<String>) -> Self {
        self.http_methods.push(token.into());
        self
    }

    /// Append a parameter
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, ty: TypeRef, role: ParamRole) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty,
            role,
        });
        self
    }

    /// Set the declared return type
    #[must_use]
    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_routing_metadata() {
        let handler = HandlerDecl::new("WidgetController", "getWidget", "/api")
            .with_class_path("/widgets")
            .with_method_path("/{id}")
            .with_http_method("GET")
            .with_param("id", TypeRef::primitive("int"), ParamRole::PathVariable)
            .returning(TypeRef::declared("widget"));

        assert_eq!(handler.class_paths, vec!["/widgets"]);
        assert_eq!(handler.method_paths, vec!["/{id}"]);
        assert_eq!(handler.http_methods, vec!["GET"]);
        assert_eq!(handler.params.len(), 1);
        assert_eq!(handler.return_type, TypeRef::declared("widget"));
    }

    #[test]
    fn declaration_round_trips_through_serde() {
        let handler = HandlerDecl::new("WidgetController", "listWidgets", "/api")
            .with_method_path("/widgets")
            .with_http_method("GET")
            .returning(TypeRef::declared("widget"));

        let json = serde_json::to_string(&handler).unwrap();
        let back: HandlerDecl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, handler);
    }
}
