//! restdoc - REST endpoint documentation from structural type descriptions
//!
//! Given a [`reflect::TypeRegistry`] of type declarations and a set of
//! [`handler::HandlerDecl`]s, [`collect`] infers the JSON shape of every
//! path variable, request body, and response body, and assembles a
//! [`restdoc_core::doc::Documentation`] tree ready for rendering.
//!
//! The pass is single-threaded, deterministic, and all-or-nothing: the
//! first malformed declaration or unsupported type shape aborts it with a
//! [`DocError`] naming the offending declaration.

pub mod collector;
pub mod context;
pub mod error;
pub mod handler;
pub mod path;
pub mod reflect;
pub mod render;
pub mod walker;

pub use collector::collect;
pub use context::ResolutionContext;
pub use error::{DocError, DocResult};
pub use handler::{HandlerDecl, Param, ParamRole};
pub use reflect::{Accessor, DeclKind, TypeDecl, TypeRef, TypeRegistry};
pub use walker::TypeWalker;
