//! Plain-text rendering of a finished documentation tree.
//!
//! Emits an indented listing of paths, methods, path variables, and
//! request/response field trees. This is a thin adapter over the data model;
//! structured output comes from the tree's serde implementation instead.

use std::io::{self, Write};

use restdoc_core::doc::Documentation;
use restdoc_core::schema::JsonSchema;

const INDENT_STEP: usize = 2;

/// Write the documentation tree as an indented human-readable listing.
pub fn write_plain_text<W: Write>(docs: &Documentation, out: &mut W) -> io::Result<()> {
    for (path, resource) in &docs.resources {
        writeln!(out, "{path}")?;
        for (method, doc) in &resource.methods {
            writeln!(out, "  {method}")?;
            if !doc.path_variables.is_empty() {
                writeln!(out, "    path variables:")?;
                for (name, schema) in &doc.path_variables {
                    write_schema(out, 6, Some(name.as_str()), schema)?;
                }
            }
            if let Some(schema) = &doc.request_body {
                writeln!(out, "    request body:")?;
                write_schema(out, 6, None, schema)?;
            }
            if let Some(schema) = &doc.response_body {
                writeln!(out, "    response body:")?;
                write_schema(out, 6, None, schema)?;
            }
        }
    }
    Ok(())
}

/// Render the documentation tree to a string.
pub fn to_plain_text(docs: &Documentation) -> String {
    let mut buffer = Vec::new();
    // Vec<u8> writes are infallible
    write_plain_text(docs, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("renderer emits UTF-8")
}

fn write_schema<W: Write>(
    out: &mut W,
    indent: usize,
    label: Option<&str>,
    schema: &JsonSchema,
) -> io::Result<()> {
    let pad = " ".repeat(indent);
    let prefix = label.map_or_else(String::new, |label| format!("{label}: "));
    match schema {
        JsonSchema::Primitive { name, restrictions } => match restrictions {
            Some(constants) => {
                writeln!(out, "{pad}{prefix}{name} in [{}]", constants.join(", "))
            }
            None => writeln!(out, "{pad}{prefix}{name}"),
        },
        JsonSchema::Array { element } => {
            writeln!(out, "{pad}{prefix}array of")?;
            write_schema(out, indent + INDENT_STEP, None, element)
        }
        JsonSchema::Dict { key, value } => {
            writeln!(out, "{pad}{prefix}dict")?;
            write_schema(out, indent + INDENT_STEP, Some("key"), key)?;
            write_schema(out, indent + INDENT_STEP, Some("value"), value)
        }
        JsonSchema::Object { fields } => {
            writeln!(out, "{pad}{prefix}object")?;
            for (name, field) in fields {
                write_schema(out, indent + INDENT_STEP, Some(name.as_str()), field)?;
            }
            Ok(())
        }
    }
}
