//! Collapsing of `.` and `..` path segments.

use crate::PathError;
use crate::path::{Root, body_segments, root_of};

/// Resolve `.` and `..` segments in a normalized path string.
///
/// `.` segments are removed; a `..` segment removes the preceding non-`..`
/// segment. Leading `..` runs in a relative path are kept (there is nothing
/// to remove), while collapsing an absolute path above its root is an error.
/// The result is normalized, so collapsing is idempotent.
pub(crate) fn collapse(full: &str) -> Result<String, PathError> {
    let root = root_of(full);
    let mut stack: Vec<&str> = Vec::new();

    for segment in body_segments(full) {
        match segment {
            "." => {}
            ".." => match stack.last() {
                Some(&top) if top != ".." => {
                    stack.pop();
                }
                _ => {
                    if root.is_some() {
                        return Err(PathError::CollapsePastRoot);
                    }
                    stack.push("..");
                }
            },
            other => stack.push(other),
        }
    }

    let body = stack.join("/");
    Ok(match root {
        Some(Root::Unix) => {
            if body.is_empty() {
                String::new()
            } else {
                format!("/{body}")
            }
        }
        Some(Root::Drive(letter)) => {
            if body.is_empty() {
                format!("{letter}:/")
            } else {
                format!("{letter}:/{body}")
            }
        }
        None => body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/hello/temp/test/../../world", "/hello/world")]
    #[case("/hello/temp/../temp2/../world", "/hello/world")]
    #[case("/hello/./world", "/hello/world")]
    #[case("C:/project/../other/file", "C:/other/file")]
    #[case("C:/a/..", "C:/")]
    #[case("hello/temp/test/../../world", "hello/world")]
    #[case("hello/world", "hello/world")]
    #[case("a/..", "")]
    fn resolves_dot_segments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("..")]
    #[case("../foo")]
    #[case("../../foo")]
    fn keeps_leading_parent_runs_in_relative_paths(#[case] input: &str) {
        assert_eq!(collapse(input).unwrap(), input);
    }

    #[rstest]
    #[case("/..")]
    #[case("/a/../..")]
    #[case("C:/..")]
    fn rejects_collapsing_above_an_absolute_root(#[case] input: &str) {
        assert_eq!(collapse(input), Err(PathError::CollapsePastRoot));
    }

    #[test]
    fn collapsing_is_idempotent() {
        let once = collapse("/hello/temp/test/../../world").unwrap();
        assert_eq!(collapse(&once).unwrap(), once);
    }
}
