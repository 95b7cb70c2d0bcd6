//! Restdoc Core - inferred-schema and documentation-tree definitions
//!
//! Provides the language-neutral data model produced by the restdoc engine.

pub mod doc;
pub mod route;
pub mod schema;

pub use doc::*;
pub use route::*;
pub use schema::*;
