//! Endpoint metadata collection.
//!
//! [`collect`] drives the walker once per handler declaration: it resolves
//! the effective URL path and HTTP method, validates routing-metadata
//! cardinality, partitions parameters by role, and writes the inferred
//! schemas into a fresh [`Documentation`] tree. Handlers are processed
//! strictly in the order the adapter supplies them; the first error aborts
//! the whole pass.

use log::debug;
use restdoc_core::doc::Documentation;
use restdoc_core::route::HttpMethod;

use crate::context::ResolutionContext;
use crate::error::{DocError, DocResult};
use crate::handler::{HandlerDecl, ParamRole};
use crate::path::join_paths;
use crate::reflect::TypeRegistry;
use crate::walker::TypeWalker;

/// Run one documentation pass over a set of handler declarations.
pub fn collect(registry: &TypeRegistry, handlers: &[HandlerDecl]) -> DocResult<Documentation> {
    let walker = TypeWalker::new(registry);
    let mut docs = Documentation::new();
    for handler in handlers {
        process_handler(walker, handler, &mut docs)?;
    }
    Ok(docs)
}

fn process_handler(
    walker: TypeWalker<'_>,
    handler: &HandlerDecl,
    docs: &mut Documentation,
) -> DocResult<()> {
    let path = effective_path(handler)?;
    let method = resolve_http_method(handler)?;
    debug!(
        "documenting {method} {path} from {}.{}",
        handler.type_name, handler.method_name
    );

    let bodies: Vec<_> = handler
        .params
        .iter()
        .filter(|param| param.role == ParamRole::RequestBody)
        .collect();
    if bodies.len() > 1 {
        return Err(DocError::ConflictingRequestBody {
            type_name: handler.type_name.clone(),
            method_name: handler.method_name.clone(),
        });
    }

    // path variables and payloads are classified with a fresh context: no
    // enclosing generic parameters are assumed for a handler signature
    let ctx = ResolutionContext::empty();
    let doc = docs.resource_mut(path).method_mut(method);

    for param in &handler.params {
        if param.role == ParamRole::PathVariable
            && let Some(schema) = walker.classify(&param.ty, &ctx)?
        {
            doc.path_variables.insert(param.name.clone(), schema);
        }
    }

    if let Some(body) = bodies.first()
        && let Some(schema) = walker.classify(&body.ty, &ctx)?
    {
        doc.request_body = Some(schema);
    }

    if let Some(schema) = walker.classify(&handler.return_type, &ctx)? {
        doc.response_body = Some(schema);
    }

    Ok(())
}

/// Join the mount point, the optional class-level prefix, and the mandatory
/// method-level suffix into the effective URL path.
fn effective_path(handler: &HandlerDecl) -> DocResult<String> {
    let mut path = match handler.class_paths.as_slice() {
        [] => handler.mount_point.clone(),
        [prefix] => join_paths(&handler.mount_point, prefix),
        _ => {
            return Err(DocError::ambiguous(
                &handler.type_name,
                &handler.method_name,
                "the type declares multiple routing prefix strings; only zero or one is supported",
            ));
        }
    };
    path = match handler.method_paths.as_slice() {
        [suffix] => join_paths(&path, suffix),
        _ => {
            return Err(DocError::ambiguous(
                &handler.type_name,
                &handler.method_name,
                "exactly one routing path is required",
            ));
        }
    };
    Ok(path)
}

fn resolve_http_method(handler: &HandlerDecl) -> DocResult<HttpMethod> {
    match handler.http_methods.as_slice() {
        [token] => HttpMethod::try_from(token.as_str()).map_err(|detail| {
            DocError::ambiguous(&handler.type_name, &handler.method_name, detail)
        }),
        _ => Err(DocError::ambiguous(
            &handler.type_name,
            &handler.method_name,
            "exactly one HTTP method is required",
        )),
    }
}
