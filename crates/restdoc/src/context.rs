//! Generic-parameter resolution for schema construction.
//!
//! A [`ResolutionContext`] maps the generic parameter names of one declared
//! type to the concrete arguments supplied at its use site. It is built once
//! per recursive entry into a generic type and never mutated afterwards, so
//! binding scope is explicit and nothing leaks between recursion levels.

use std::collections::BTreeMap;

use crate::reflect::TypeRef;

/// Per-instantiation binding environment.
///
/// A parameter bound to `None` means "this type was used without reifying
/// the parameter": no structural information exists for it, which is
/// different from the name being absent altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    bindings: BTreeMap<String, Option<TypeRef>>,
}

impl ResolutionContext {
    /// Context with no bindings, for positions outside any generic type
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Zip parameter names against caller-supplied arguments.
    ///
    /// An argument list shorter than the parameter list leaves the tail
    /// unresolved; an empty list leaves every parameter unresolved.
    #[must_use]
    pub fn bind(params: &[String], args: &[Option<TypeRef>]) -> Self {
        let bindings = params
            .iter()
            .enumerate()
            .map(|(index, param)| (param.clone(), args.get(index).cloned().flatten()))
            .collect();
        Self { bindings }
    }

    /// Look up a type-variable name.
    ///
    /// `None` means the name is not bound in this context at all;
    /// `Some(None)` means it is bound but unresolved.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Option<TypeRef>> {
        self.bindings.get(name)
    }

    /// Names visible in this context, for error reporting
    #[must_use]
    pub fn binding_names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn bind_zips_params_against_args() {
        let ctx = ResolutionContext::bind(
            &params(&["K", "V"]),
            &[
                Some(TypeRef::declared("string")),
                Some(TypeRef::primitive("int")),
            ],
        );

        assert_eq!(ctx.lookup("K"), Some(&Some(TypeRef::declared("string"))));
        assert_eq!(ctx.lookup("V"), Some(&Some(TypeRef::primitive("int"))));
    }

    #[test]
    fn bind_with_no_args_marks_all_unresolved() {
        let ctx = ResolutionContext::bind(&params(&["T"]), &[]);
        assert_eq!(ctx.lookup("T"), Some(&None));
    }

    #[test]
    fn bind_with_short_args_leaves_tail_unresolved() {
        let ctx = ResolutionContext::bind(
            &params(&["K", "V"]),
            &[Some(TypeRef::declared("string"))],
        );
        assert_eq!(ctx.lookup("K"), Some(&Some(TypeRef::declared("string"))));
        assert_eq!(ctx.lookup("V"), Some(&None));
    }

    #[test]
    fn lookup_distinguishes_absent_from_unresolved() {
        let ctx = ResolutionContext::bind(&params(&["T"]), &[]);
        assert_eq!(ctx.lookup("T"), Some(&None), "bound but unresolved");
        assert_eq!(ctx.lookup("U"), None, "not bound at all");
    }

    #[test]
    fn binding_names_lists_visible_names() {
        let ctx = ResolutionContext::bind(&params(&["K", "V"]), &[]);
        assert_eq!(ctx.binding_names(), vec!["K".to_string(), "V".to_string()]);
    }
}
