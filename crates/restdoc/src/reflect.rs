//! Structural reflection facade consumed by the classifier.
//!
//! The engine never inspects live types; an adapter describes them with the
//! closed shapes in this module and registers the declarations in a
//! [`TypeRegistry`]. Classification is then an exhaustive match over
//! [`TypeRef`] variants rather than open-ended dispatch.
//!
//! Everything here is serializable, so adapters can hand the engine a
//! declaration set produced out-of-process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Capability name for list-like types (a sequence of single-typed elements).
pub const SEQUENCE_CAPABILITY: &str = "sequence";

/// Capability name for map-like types (associative, two-typed).
pub const MAP_CAPABILITY: &str = "map";

/// Accessor-method prefix that marks a serialized field.
pub const GETTER_PREFIX: &str = "get";

/// A use of a type in some position: a field's return type, a handler
/// parameter, a generic argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum TypeRef {
    /// A primitive value type (`int`, `boolean`, ...)
    Primitive { name: String },
    /// A declared type, optionally instantiated with type arguments
    Declared {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeRef>,
    },
    /// A generic type-variable use (`T`)
    Variable { name: String },
    /// A native array type; not a supported shape
    Array { element: Box<TypeRef> },
    /// A wildcard/bounded type; not a supported shape
    Wildcard,
    /// The "no value" type; not a supported shape
    Void,
}

impl TypeRef {
    /// Create a primitive value-type reference
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive { name: name.into() }
    }

    /// Create a declared-type reference without type arguments
    #[must_use]
    pub fn declared(name: impl Into<String>) -> Self {
        Self::Declared {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a declared-type reference with concrete type arguments
    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Declared {
            name: name.into(),
            args,
        }
    }

    /// Create a type-variable reference
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Human-readable name for error reporting
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Primitive { name } | Self::Variable { name } => name.clone(),
            Self::Declared { name, args } if args.is_empty() => name.clone(),
            Self::Declared { name, args } => {
                let args: Vec<String> = args.iter().map(Self::describe).collect();
                format!("{name}<{}>", args.join(", "))
            }
            Self::Array { element } => format!("{}[]", element.describe()),
            Self::Wildcard => "?".to_string(),
            Self::Void => "void".to_string(),
        }
    }
}

/// A zero-or-more-argument accessor method on a composite declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    /// Method name as declared
    pub name: String,
    /// Number of declared parameters
    #[serde(default)]
    pub param_count: usize,
    /// Declared return type
    pub return_type: TypeRef,
    /// Explicitly marked non-serializable
    #[serde(default)]
    pub ignored: bool,
}

impl Accessor {
    /// Create a zero-argument accessor
    #[must_use]
    pub fn getter(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            param_count: 0,
            return_type,
            ignored: false,
        }
    }

    /// Mark the accessor as non-serializable
    #[must_use]
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Whether this accessor contributes a documented field: getter naming
    /// convention, no parameters, not marked non-serializable.
    #[must_use]
    pub fn is_documentable(&self) -> bool {
        self.name.starts_with(GETTER_PREFIX)
            && self.name.len() > GETTER_PREFIX.len()
            && self.param_count == 0
            && !self.ignored
    }

    /// Field name derived from the accessor name: prefix stripped, first
    /// remaining character lower-cased.
    #[must_use]
    pub fn field_name(&self) -> String {
        let stem = &self.name[GETTER_PREFIX.len()..];
        let mut chars = stem.chars();
        chars.next().map_or_else(String::new, |first| {
            format!("{}{}", first.to_lowercase(), chars.as_str())
        })
    }
}

/// What a declared type is, structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeclKind {
    /// A composite type whose fields come from accessor methods
    Composite {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        accessors: Vec<Accessor>,
    },
    /// An enumeration with constants in declaration order
    Enum { constants: Vec<String> },
}

/// One declared type as seen by the reflection facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Canonical type name
    pub name: String,
    /// Generic parameter names in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<String>,
    /// Direct supertype; `None` marks a hierarchy root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<TypeRef>,
    /// Directly implemented interfaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    /// Structural kind
    pub kind: DeclKind,
}

impl TypeDecl {
    /// Create a composite declaration with no members yet
    #[must_use]
    pub fn composite(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            supertype: None,
            interfaces: Vec::new(),
            kind: DeclKind::Composite {
                accessors: Vec::new(),
            },
        }
    }

    /// Create an enum declaration
    #[must_use]
    pub fn enumeration(name: impl Into<String>, constants: Vec<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            supertype: None,
            interfaces: Vec::new(),
            kind: DeclKind::Enum { constants },
        }
    }

    /// Declare generic parameter names
    #[must_use]
    pub fn with_generics(mut self, params: Vec<String>) -> Self {
        self.generics = params;
        self
    }

    /// Declare the direct supertype
    #[must_use]
    pub fn with_supertype(mut self, supertype: TypeRef) -> Self {
        self.supertype = Some(supertype);
        self
    }

    /// Declare an implemented interface
    #[must_use]
    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Append an accessor to a composite declaration.
    ///
    /// Has no effect on enum declarations.
    #[must_use]
    pub fn with_accessor(mut self, accessor: Accessor) -> Self {
        if let DeclKind::Composite { accessors } = &mut self.kind {
            accessors.push(accessor);
        }
        self
    }
}

/// Name-indexed set of type declarations plus the structural capability test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDecl>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration, replacing any previous one with the same name
    pub fn insert(&mut self, decl: TypeDecl) {
        self.types.insert(decl.name.clone(), decl);
    }

    /// Look up a declaration by canonical name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Structural capability test: does the referenced type behave as the
    /// named capability? Walks the type's own name, its interfaces, and its
    /// supertype chain.
    #[must_use]
    pub fn behaves_as(&self, ty: &TypeRef, capability: &str) -> bool {
        match ty {
            TypeRef::Declared { name, .. } => {
                let mut visited = Vec::new();
                self.name_behaves_as(name, capability, &mut visited)
            }
            _ => false,
        }
    }

    fn name_behaves_as(&self, name: &str, capability: &str, visited: &mut Vec<String>) -> bool {
        if name == capability {
            return true;
        }
        if visited.iter().any(|seen| seen == name) {
            return false;
        }
        visited.push(name.to_string());

        let Some(decl) = self.types.get(name) else {
            return false;
        };
        decl.interfaces
            .iter()
            .chain(decl.supertype.as_ref())
            .any(|parent| match parent {
                TypeRef::Declared { name, .. } => self.name_behaves_as(name, capability, visited),
                _ => false,
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("getName", "name")]
    #[case("getURL", "uRL")]
    #[case("getWidgetCount", "widgetCount")]
    fn field_name_strips_prefix_and_lowercases(#[case] method: &str, #[case] expected: &str) {
        let accessor = Accessor::getter(method, TypeRef::primitive("string"));
        assert_eq!(accessor.field_name(), expected);
    }

    #[rstest]
    #[case("getName", 0, false, true)]
    #[case("get", 0, false, false)] // bare prefix is not a getter
    #[case("name", 0, false, false)]
    #[case("getName", 1, false, false)]
    #[case("getName", 0, true, false)]
    fn is_documentable_cases(
        #[case] name: &str,
        #[case] param_count: usize,
        #[case] ignored: bool,
        #[case] expected: bool,
    ) {
        let accessor = Accessor {
            name: name.to_string(),
            param_count,
            return_type: TypeRef::primitive("string"),
            ignored,
        };
        assert_eq!(accessor.is_documentable(), expected);
    }

    #[test]
    fn behaves_as_matches_the_capability_name_itself() {
        let registry = TypeRegistry::new();
        assert!(registry.behaves_as(&TypeRef::declared("sequence"), SEQUENCE_CAPABILITY));
        assert!(!registry.behaves_as(&TypeRef::declared("sequence"), MAP_CAPABILITY));
    }

    #[test]
    fn behaves_as_walks_interfaces() {
        let mut registry = TypeRegistry::new();
        registry.insert(
            TypeDecl::composite("widgetList").with_interface(TypeRef::declared("sequence")),
        );

        assert!(registry.behaves_as(&TypeRef::declared("widgetList"), SEQUENCE_CAPABILITY));
    }

    #[test]
    fn behaves_as_walks_the_supertype_chain() {
        let mut registry = TypeRegistry::new();
        registry
            .insert(TypeDecl::composite("baseMap").with_interface(TypeRef::declared("map")));
        registry
            .insert(TypeDecl::composite("settings").with_supertype(TypeRef::declared("baseMap")));

        assert!(registry.behaves_as(&TypeRef::declared("settings"), MAP_CAPABILITY));
        assert!(!registry.behaves_as(&TypeRef::declared("settings"), SEQUENCE_CAPABILITY));
    }

    #[test]
    fn behaves_as_is_false_for_non_declared_shapes() {
        let registry = TypeRegistry::new();
        assert!(!registry.behaves_as(&TypeRef::variable("T"), SEQUENCE_CAPABILITY));
        assert!(!registry.behaves_as(&TypeRef::Wildcard, SEQUENCE_CAPABILITY));
    }

    #[test]
    fn behaves_as_terminates_on_cyclic_inheritance() {
        let mut registry = TypeRegistry::new();
        registry.insert(TypeDecl::composite("a").with_supertype(TypeRef::declared("b")));
        registry.insert(TypeDecl::composite("b").with_supertype(TypeRef::declared("a")));

        assert!(!registry.behaves_as(&TypeRef::declared("a"), SEQUENCE_CAPABILITY));
    }

    #[test]
    fn describe_renders_generic_instantiations() {
        let ty = TypeRef::generic(
            "map",
            vec![TypeRef::declared("string"), TypeRef::variable("V")],
        );
        assert_eq!(ty.describe(), "map<string, V>");
    }

    #[test]
    fn registry_round_trips_through_serde() {
        let mut registry = TypeRegistry::new();
        registry.insert(
            TypeDecl::composite("widget")
                .with_accessor(Accessor::getter("getName", TypeRef::declared("string"))),
        );

        let json = serde_json::to_string(&registry).unwrap();
        let back: TypeRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("widget"), registry.get("widget"));
    }
}
