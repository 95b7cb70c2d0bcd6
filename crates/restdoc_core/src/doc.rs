//! Documentation tree assembled by the endpoint collector
//!
//! The tree maps normalized URL paths to per-method records. Entries are
//! created lazily on first access and are singletons per (path, method)
//! pair; repeated declarations for the same pair overwrite at the field
//! level. The whole tree is a plain value: the collector builds one per
//! pass and hands it to a renderer.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::route::HttpMethod;
use crate::schema::JsonSchema;

/// Documentation for one (path, method) pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDoc {
    /// Path-variable schemas keyed by parameter name, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub path_variables: IndexMap<String, JsonSchema>,
    /// Inbound payload shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<JsonSchema>,
    /// Outbound payload shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<JsonSchema>,
}

/// All documented methods for one URL path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Method documentation keyed by HTTP method
    pub methods: BTreeMap<HttpMethod, MethodDoc>,
}

impl Resource {
    /// Fetch or lazily create the documentation record for a method
    pub fn method_mut(&mut self, method: HttpMethod) -> &mut MethodDoc {
        self.methods.entry(method).or_default()
    }
}

/// The finished documentation tree, keyed by normalized URL path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Resource documentation keyed by path
    pub resources: BTreeMap<String, Resource>,
}

impl Documentation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or lazily create the resource record for a path
    pub fn resource_mut(&mut self, path: impl Into<String>) -> &mut Resource {
        self.resources.entry(path.into()).or_default()
    }

    /// Look up a finished resource record
    #[must_use]
    pub fn resource(&self, path: &str) -> Option<&Resource> {
        self.resources.get(path)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_entries_are_lazy_singletons() {
        let mut docs = Documentation::new();
        docs.resource_mut("api/widgets")
            .method_mut(HttpMethod::Get)
            .response_body = Some(JsonSchema::primitive("string"));
        docs.resource_mut("api/widgets")
            .method_mut(HttpMethod::Get)
            .request_body = Some(JsonSchema::primitive("int"));

        assert_eq!(docs.resources.len(), 1);
        let doc = &docs.resource("api/widgets").unwrap().methods[&HttpMethod::Get];
        // second access mutated the same record rather than replacing it
        assert_eq!(doc.response_body, Some(JsonSchema::primitive("string")));
        assert_eq!(doc.request_body, Some(JsonSchema::primitive("int")));
    }

    #[test]
    fn methods_for_one_path_stay_separate() {
        let mut docs = Documentation::new();
        docs.resource_mut("api/widgets").method_mut(HttpMethod::Get);
        docs.resource_mut("api/widgets").method_mut(HttpMethod::Post);

        assert_eq!(
            docs.resource("api/widgets").unwrap().methods.len(),
            2,
            "one record per HTTP method"
        );
    }

    #[test]
    fn serialize_skips_empty_method_fields() {
        let mut docs = Documentation::new();
        docs.resource_mut("api/widgets").method_mut(HttpMethod::Get);

        let json = serde_json::to_string(&docs).unwrap();
        assert!(!json.contains("pathVariables"), "got: {json}");
        assert!(!json.contains("requestBody"), "got: {json}");
    }
}
