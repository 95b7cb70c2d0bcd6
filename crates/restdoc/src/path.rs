//! URL path normalization for route resolution.

/// Join two URL path fragments with exactly one separator.
///
/// Separator characters are trimmed from both ends of both fragments, so
/// the join is idempotent on already-normalized input and never produces
/// doubled or trailing separators. An empty fragment contributes nothing.
#[must_use]
pub fn join_paths(lhs: &str, rhs: &str) -> String {
    let lhs = lhs.trim_matches('/');
    let rhs = rhs.trim_matches('/');
    if lhs.is_empty() {
        rhs.to_string()
    } else if rhs.is_empty() {
        lhs.to_string()
    } else {
        format!("{lhs}/{rhs}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("api", "widgets", "api/widgets")]
    #[case("/api/", "/widgets/", "api/widgets")]
    #[case("/api", "widgets", "api/widgets")]
    #[case("api/", "/widgets", "api/widgets")]
    #[case("", "widgets", "widgets")]
    #[case("api", "", "api")]
    #[case("", "", "")]
    #[case("api/v1", "widgets/{id}", "api/v1/widgets/{id}")]
    fn join_normalizes_separators(#[case] lhs: &str, #[case] rhs: &str, #[case] expected: &str) {
        assert_eq!(join_paths(lhs, rhs), expected);
    }

    #[test]
    fn join_is_idempotent_on_normalized_parts() {
        let once = join_paths("/api/", "/widgets/");
        let again = join_paths(&once, "");
        assert_eq!(once, again);
    }
}
