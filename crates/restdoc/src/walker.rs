//! Type classification and recursive schema construction.
//!
//! [`TypeWalker::classify`] is the engine's entry point: given a type
//! reference and a resolution context, decide whether the type is a scalar,
//! a list-like container, a map-like container, an enum, or a composite
//! object, and recurse accordingly. Composite fields are aggregated from the
//! full supertype chain, base-type fields first.
//!
//! Classification either yields a schema, yields nothing (an unreified
//! generic position, omitted from its enclosing object), or fails the whole
//! pass with a [`DocError`].

use indexmap::IndexMap;
use restdoc_core::schema::JsonSchema;

use crate::context::ResolutionContext;
use crate::error::{DocError, DocResult};
use crate::reflect::{
    DeclKind, MAP_CAPABILITY, SEQUENCE_CAPABILITY, TypeDecl, TypeRef, TypeRegistry,
};

/// Canonical names of opaque scalar types: value primitives, strings,
/// date/time types, and money/decimal types all serialize as terminal
/// values.
pub const SCALAR_TYPES: &[&str] = &[
    "object", "string", "boolean", "char", "byte", "short", "int", "long", "float", "double",
    "decimal", "date", "datetime", "time", "duration", "uuid",
];

/// Canonical name of the fully unknown value shape.
const OBJECT_TYPE: &str = "object";

/// Check if a canonical name denotes an opaque scalar.
#[must_use]
pub fn is_scalar_name(name: &str) -> bool {
    SCALAR_TYPES.contains(&name)
}

/// Recursive classifier over a [`TypeRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct TypeWalker<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TypeWalker<'a> {
    #[must_use]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Classify a type reference under a resolution context.
    ///
    /// Returns `Ok(None)` when the position is an unreified generic and must
    /// be omitted entirely from its enclosing object.
    pub fn classify(
        &self,
        ty: &TypeRef,
        ctx: &ResolutionContext,
    ) -> DocResult<Option<JsonSchema>> {
        let mut expanding = Vec::new();
        self.classify_inner(ty, ctx, &mut expanding)
    }

    /// `expanding` is the stack of composite type names currently being
    /// built; re-entering one of them is a cycle.
    fn classify_inner(
        &self,
        ty: &TypeRef,
        ctx: &ResolutionContext,
        expanding: &mut Vec<String>,
    ) -> DocResult<Option<JsonSchema>> {
        match ty {
            TypeRef::Primitive { name } => Ok(Some(JsonSchema::primitive(name.clone()))),
            TypeRef::Declared { name, args } => self.classify_declared(name, args, ctx, expanding),
            TypeRef::Variable { name } => match ctx.lookup(name) {
                None => Err(DocError::UnknownGenericBinding {
                    variable: name.clone(),
                    bindings: ctx.binding_names(),
                }),
                Some(None) => Ok(None),
                Some(Some(bound)) => {
                    let bound = bound.clone();
                    self.classify_inner(&bound, ctx, expanding)
                }
            },
            TypeRef::Array { .. } | TypeRef::Wildcard | TypeRef::Void => {
                Err(DocError::unsupported(ty.describe()))
            }
        }
    }

    fn classify_declared(
        &self,
        name: &str,
        args: &[TypeRef],
        ctx: &ResolutionContext,
        expanding: &mut Vec<String>,
    ) -> DocResult<Option<JsonSchema>> {
        if is_scalar_name(name) {
            return Ok(Some(JsonSchema::primitive(name)));
        }

        let shape = TypeRef::declared(name);
        if self.registry.behaves_as(&shape, SEQUENCE_CAPABILITY) {
            let element = match args.first() {
                None => JsonSchema::primitive(OBJECT_TYPE),
                Some(arg) => self
                    .classify_inner(arg, ctx, expanding)?
                    .unwrap_or_else(|| JsonSchema::primitive(OBJECT_TYPE)),
            };
            return Ok(Some(JsonSchema::array(element)));
        }
        if self.registry.behaves_as(&shape, MAP_CAPABILITY) {
            let key = match args.first() {
                None => JsonSchema::primitive(OBJECT_TYPE),
                Some(arg) => self
                    .classify_inner(arg, ctx, expanding)?
                    .unwrap_or_else(|| JsonSchema::primitive(OBJECT_TYPE)),
            };
            let value = match args.get(1) {
                None => JsonSchema::primitive(OBJECT_TYPE),
                Some(arg) => self
                    .classify_inner(arg, ctx, expanding)?
                    .unwrap_or_else(|| JsonSchema::primitive(OBJECT_TYPE)),
            };
            return Ok(Some(JsonSchema::dict(key, value)));
        }

        let Some(decl) = self.registry.get(name) else {
            return Err(DocError::unsupported(name));
        };
        match &decl.kind {
            DeclKind::Enum { constants } => Ok(Some(JsonSchema::enumeration(constants.clone()))),
            DeclKind::Composite { .. } => self
                .build_object(decl, args, ctx, expanding)
                .map(Some),
        }
    }

    /// Build an `Object` schema for a composite declaration.
    ///
    /// A fresh context is constructed for the declaration by zipping its
    /// generic parameters against the caller-supplied arguments, after
    /// substituting any type variables among the arguments through the
    /// caller's own context.
    fn build_object(
        &self,
        decl: &TypeDecl,
        args: &[TypeRef],
        outer_ctx: &ResolutionContext,
        expanding: &mut Vec<String>,
    ) -> DocResult<JsonSchema> {
        if expanding.iter().any(|entered| entered == &decl.name) {
            return Err(DocError::CyclicType {
                type_name: decl.name.clone(),
            });
        }
        expanding.push(decl.name.clone());

        let resolved: Vec<Option<TypeRef>> = args
            .iter()
            .map(|arg| self.resolve_argument(arg, outer_ctx))
            .collect::<DocResult<_>>()?;
        let ctx = ResolutionContext::bind(&decl.generics, &resolved);

        let mut fields = IndexMap::new();
        self.collect_fields(decl, &ctx, &mut fields, expanding)?;

        expanding.pop();
        Ok(JsonSchema::object(fields))
    }

    fn resolve_argument(
        &self,
        arg: &TypeRef,
        ctx: &ResolutionContext,
    ) -> DocResult<Option<TypeRef>> {
        match arg {
            TypeRef::Variable { name } => ctx.lookup(name).cloned().ok_or_else(|| {
                DocError::UnknownGenericBinding {
                    variable: name.clone(),
                    bindings: ctx.binding_names(),
                }
            }),
            concrete => Ok(Some(concrete.clone())),
        }
    }

    /// Insert the declaration's fields into `fields`, supertype chain first.
    ///
    /// Supertype accessors are classified in the entry type's context; a
    /// same-named field declared lower in the chain overwrites the schema
    /// but keeps the base field's position.
    fn collect_fields(
        &self,
        decl: &TypeDecl,
        ctx: &ResolutionContext,
        fields: &mut IndexMap<String, JsonSchema>,
        expanding: &mut Vec<String>,
    ) -> DocResult<()> {
        if let Some(TypeRef::Declared { name: sup, .. }) = &decl.supertype
            && !is_scalar_name(sup)
        {
            let sup_decl = self
                .registry
                .get(sup)
                .ok_or_else(|| DocError::unsupported(sup.clone()))?;
            if expanding.iter().any(|entered| entered == sup) {
                return Err(DocError::CyclicType {
                    type_name: sup.clone(),
                });
            }
            expanding.push(sup.clone());
            self.collect_fields(sup_decl, ctx, fields, expanding)?;
            expanding.pop();
        }

        if let DeclKind::Composite { accessors } = &decl.kind {
            for accessor in accessors {
                if !accessor.is_documentable() {
                    continue;
                }
                if let Some(schema) =
                    self.classify_inner(&accessor.return_type, ctx, expanding)?
                {
                    fields.insert(accessor.field_name(), schema);
                }
            }
        }
        Ok(())
    }
}
