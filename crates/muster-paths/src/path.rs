//! Shared normalization and segmentation for path values.
//!
//! Every path string in this crate passes through [`normalize`] exactly once,
//! at construction. After that, all operations can assume forward slashes,
//! no duplicate separators, no trailing separator, and no surrounding
//! whitespace. The empty string is the "current directory" value; it can
//! only arise from inputs like `./`; empty input is rejected.

use crate::{DirectoryPath, FilePath, PathError};

/// The root kind of an absolute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Root {
    /// A leading `/`.
    Unix,
    /// A drive letter, e.g. `C:`.
    Drive(char),
}

/// A matched path, tagged as file or directory.
///
/// Globbing resolves every result against the filesystem before returning
/// it, so the tag reflects what actually exists rather than what the
/// pattern looked like.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyPath {
    File(FilePath),
    Directory(DirectoryPath),
}

impl AnyPath {
    pub fn full_path(&self) -> &str {
        match self {
            AnyPath::File(p) => p.full_path(),
            AnyPath::Directory(p) => p.full_path(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, AnyPath::File(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, AnyPath::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FilePath> {
        match self {
            AnyPath::File(p) => Some(p),
            AnyPath::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryPath> {
        match self {
            AnyPath::Directory(p) => Some(p),
            AnyPath::File(_) => None,
        }
    }
}

impl std::fmt::Display for AnyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.full_path())
    }
}

/// Normalize a raw path string.
///
/// Trims whitespace, folds backslashes to `/`, collapses duplicate
/// separators, removes a leading `./`, and strips trailing separators.
/// A bare drive root keeps its separator (`C:` and `C:/` both become
/// `C:/`); `./` and a bare Unix root become the empty current-directory
/// value, while a lone `.` stays `.`.
pub(crate) fn normalize(input: &str) -> Result<String, PathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PathError::Empty);
    }

    let slashed = trimmed.replace('\\', "/");
    if slashed == "./" {
        return Ok(String::new());
    }
    let rooted = slashed.starts_with('/');
    let mut chunks: Vec<&str> = slashed.split('/').filter(|c| !c.is_empty()).collect();

    if rooted {
        return Ok(if chunks.is_empty() {
            String::new()
        } else {
            format!("/{}", chunks.join("/"))
        });
    }

    if chunks.first().is_some_and(|c| is_drive(c)) {
        return Ok(if chunks.len() == 1 {
            format!("{}/", chunks[0])
        } else {
            chunks.join("/")
        });
    }

    // Relative path: drop a leading `.` chunk (`./foo` means `foo`), but
    // keep a lone `.` as the explicit current directory.
    if chunks.len() > 1 && chunks.first() == Some(&".") {
        chunks.remove(0);
    }
    Ok(chunks.join("/"))
}

fn is_drive(chunk: &str) -> bool {
    let mut chars = chunk.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic()
    )
}

/// Whether a normalized path is relative (neither `/`- nor drive-rooted).
pub(crate) fn is_relative(full: &str) -> bool {
    root_of(full).is_none()
}

/// The root of a normalized path, if any.
pub(crate) fn root_of(full: &str) -> Option<Root> {
    if full.starts_with('/') {
        return Some(Root::Unix);
    }
    let mut chars = full.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some(Root::Drive(letter)),
        _ => None,
    }
}

/// Path components with the Unix root marker fused into the first segment:
/// `/Hello/World` yields `["/Hello", "World"]`, `C:/Hello` yields
/// `["C:", "Hello"]`.
pub(crate) fn segments(full: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = full.split('/').filter(|p| !p.is_empty()).collect();
    if full.starts_with('/') && !parts.is_empty() {
        parts[0] = &full[..parts[0].len() + 1];
    }
    parts
}

/// Path components without root fusion, with the root itself stripped.
/// `/Hello/World` and `C:/Hello/World` both yield `["Hello", "World"]`
/// (the drive/root is reported by [`root_of`]).
pub(crate) fn body_segments(full: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = full.split('/').filter(|p| !p.is_empty()).collect();
    if matches!(root_of(full), Some(Root::Drive(_))) && !parts.is_empty() {
        parts.remove(0);
    }
    parts
}

/// Join two normalized paths. A current-directory base (empty or `.`)
/// yields the child unchanged.
pub(crate) fn join(base: &str, child: &str) -> String {
    if base.is_empty() || base == "." {
        return child.to_string();
    }
    if child.is_empty() || child == "." {
        return base.to_string();
    }
    if base.ends_with('/') {
        // Only a bare drive root keeps its trailing separator.
        format!("{base}{child}")
    } else {
        format!("{base}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", PathError::Empty)]
    #[case("\t ", PathError::Empty)]
    fn rejects_empty_input(#[case] input: &str, #[case] expected: PathError) {
        assert_eq!(normalize(input), Err(expected));
    }

    #[test]
    fn current_directory_normalizes_to_empty() {
        assert_eq!(normalize("./").unwrap(), "");
    }

    #[test]
    fn normalizes_separators() {
        assert_eq!(normalize("shaders\\basic").unwrap(), "shaders/basic");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize(" shaders/basic ").unwrap(), "shaders/basic");
    }

    #[test]
    fn keeps_interior_whitespace() {
        assert_eq!(
            normalize("my awesome shaders/basic").unwrap(),
            "my awesome shaders/basic"
        );
    }

    #[rstest]
    #[case("/Hello/World/", "/Hello/World")]
    #[case("\\Hello\\World\\", "/Hello/World")]
    #[case("file.txt/", "file.txt")]
    #[case("file.txt\\", "file.txt")]
    #[case("Temp/file.txt/", "Temp/file.txt")]
    #[case("Temp\\file.txt\\", "Temp/file.txt")]
    fn strips_trailing_separators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input).unwrap(), expected);
    }

    #[rstest]
    #[case("c:", "c:/")]
    #[case("c:/", "c:/")]
    #[case("C://Working", "C:/Working")]
    fn drive_roots_keep_their_separator(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input).unwrap(), expected);
    }

    #[test]
    fn strips_leading_current_directory() {
        assert_eq!(normalize("./Hello/World/").unwrap(), "Hello/World");
    }

    #[rstest]
    #[case("Hello/World", vec!["Hello", "World"])]
    #[case("/Hello/World", vec!["/Hello", "World"])]
    #[case("C:/Hello/World", vec!["C:", "Hello", "World"])]
    #[case("", vec![])]
    fn segments_fuse_the_root_marker(#[case] full: &str, #[case] expected: Vec<&str>) {
        assert_eq!(segments(full), expected);
    }

    #[rstest]
    #[case("assets/shaders", true)]
    #[case("assets/shaders/basic.frag", true)]
    #[case("/assets/shaders", false)]
    #[case("c:/assets/shaders", false)]
    #[case("c:/", false)]
    fn relative_detection(#[case] full: &str, #[case] expected: bool) {
        assert_eq!(is_relative(full), expected);
    }

    #[test]
    fn join_handles_current_directory_and_drive_roots() {
        assert_eq!(join("", "x"), "x");
        assert_eq!(join("C:/", "x"), "C:/x");
        assert_eq!(join("/Working", "x"), "/Working/x");
    }
}
