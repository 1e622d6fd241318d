//! Relative path resolution between absolute paths.

use crate::PathError;
use crate::path::{Root, body_segments, root_of};

/// Compute the relative path from the directory `from` to the directory
/// `to`. Both must be absolute and share a root: the same drive letter
/// (compared case-insensitively) on Windows paths, or the `/` root on Unix
/// paths. Resolves to `.` when the directories are equal.
pub(crate) fn relative_between(from: &str, to: &str) -> Result<String, PathError> {
    let from_root = root_of(from).ok_or(PathError::RelativeSource)?;
    let to_root = root_of(to).ok_or(PathError::RelativeTarget)?;

    let shared = match (from_root, to_root) {
        (Root::Unix, Root::Unix) => true,
        (Root::Drive(a), Root::Drive(b)) => a.eq_ignore_ascii_case(&b),
        _ => false,
    };
    if !shared {
        return Err(PathError::NoCommonPrefix);
    }

    let from_segments = body_segments(from);
    let to_segments = body_segments(to);
    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    parts.resize(from_segments.len() - common, "..");
    parts.extend(&to_segments[common..]);

    Ok(if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C:/A/B/C", "C:/A/B/C", ".")]
    #[case("C:/", "C:/", ".")]
    #[case("C:/A/B/C", "C:/A/D/E", "../../D/E")]
    #[case("C:/A/B/C", "C:/", "../../..")]
    #[case("C:/A/B/C/D/E/F", "C:/A/B/C", "../../..")]
    #[case("C:/A/B/C", "C:/A/B/C/D/E/F", "D/E/F")]
    fn resolves_between_drive_rooted_directories(
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(relative_between(from, to).unwrap(), expected);
    }

    #[rstest]
    #[case("/A/B/C", "/A/D", "../../D")]
    #[case("/A", "/B", "../B")]
    #[case("/Working", "/Working/Foo", "Foo")]
    fn unix_paths_share_the_slash_root(#[case] from: &str, #[case] to: &str, #[case] expected: &str) {
        assert_eq!(relative_between(from, to).unwrap(), expected);
    }

    #[rstest]
    #[case("C:/A/B/C", "D:/A/B/C")]
    #[case("C:/A/B", "D:/E")]
    #[case("C:/", "B:/")]
    #[case("C:/A", "/A")]
    fn rejects_divergent_roots(#[case] from: &str, #[case] to: &str) {
        assert_eq!(relative_between(from, to), Err(PathError::NoCommonPrefix));
    }

    #[test]
    fn rejects_relative_endpoints() {
        assert_eq!(relative_between("A/B", "/C"), Err(PathError::RelativeSource));
        assert_eq!(relative_between("/A", "C/D"), Err(PathError::RelativeTarget));
    }

    #[test]
    fn drive_letters_compare_case_insensitively() {
        assert_eq!(relative_between("c:/A", "C:/A/B").unwrap(), "B");
    }
}
