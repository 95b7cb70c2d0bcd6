//! Unified error handling for the documentation pass.
//!
//! Every error here is fatal: the pass aborts at the point of detection and
//! the error propagates up through the whole call chain. There is no
//! partial-result mode; a documentation tree that silently drops broken
//! endpoints is worse than a build step that fails loudly.
//!
//! Each variant names the offending declaration (type, and member where one
//! exists) so the adapter can point the user at the source to fix.

use thiserror::Error;

/// Result type for all documentation-pass operations.
pub type DocResult<T> = Result<T, DocError>;

/// Fatal errors raised while inferring schemas or collecting endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// A handler's routing metadata is not exactly single-valued.
    #[error("routing metadata for {type_name}.{method_name} is not parseable: {detail}")]
    AmbiguousMapping {
        type_name: String,
        method_name: String,
        detail: String,
    },

    /// More than one parameter on one handler carries the request-body role.
    #[error("method {method_name} in type {type_name} has multiple request-body parameters")]
    ConflictingRequestBody {
        type_name: String,
        method_name: String,
    },

    /// A type shape the classifier does not recognize.
    #[error("unsupported type shape: {type_name}")]
    UnsupportedShape { type_name: String },

    /// A type-variable name not found in the active resolution context.
    #[error("unknown generic binding: {variable}; bindings in this context: {bindings:?}")]
    UnknownGenericBinding {
        variable: String,
        bindings: Vec<String>,
    },

    /// A composite type reached again while its own fields were still being
    /// expanded.
    #[error("cyclic type reference through {type_name}")]
    CyclicType { type_name: String },
}

impl DocError {
    /// Create an [`DocError::AmbiguousMapping`] for a handler declaration.
    pub fn ambiguous(
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::AmbiguousMapping {
            type_name: type_name.into(),
            method_name: method_name.into(),
            detail: detail.into(),
        }
    }

    /// Create an [`DocError::UnsupportedShape`] naming the offending type.
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_mapping_names_the_declaration() {
        let err = DocError::ambiguous("WidgetController", "getWidget", "two paths");
        let text = err.to_string();
        assert!(text.contains("WidgetController.getWidget"), "got: {text}");
        assert!(text.contains("two paths"), "got: {text}");
    }

    #[test]
    fn unknown_binding_lists_visible_bindings() {
        let err = DocError::UnknownGenericBinding {
            variable: "T".to_string(),
            bindings: vec!["K".to_string(), "V".to_string()],
        };
        let text = err.to_string();
        assert!(text.contains('T'), "got: {text}");
        assert!(text.contains('K') && text.contains('V'), "got: {text}");
    }
}
