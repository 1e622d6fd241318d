//! The compiled pattern: a chain of typed segment nodes.

use std::cell::Cell;

use muster_paths::PathComparer;

/// Maximum number of recursive calls for a single segment match. Protects
/// against adversarial patterns like `*a*a*a*...*a` that cause exponential
/// backtracking; counted as total work, not stack depth.
const MAX_MATCH_CALLS: usize = 100_000;

/// One node of a compiled pattern. Each node owns the rest of the chain
/// through `next`, so a pattern is a straight singly linked list headed by
/// exactly one root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GlobNode {
    /// Anchors at `/`.
    UnixRoot { next: Option<Box<GlobNode>> },
    /// Anchors at a drive letter.
    WindowsRoot {
        drive: char,
        next: Option<Box<GlobNode>>,
    },
    /// Anchors at the caller-supplied base directory.
    RelativeRoot { next: Option<Box<GlobNode>> },
    /// A literal or wildcard path segment.
    Segment {
        pattern: SegmentPattern,
        next: Option<Box<GlobNode>>,
    },
    /// `**`: zero or more directory levels, including the current one.
    RecursiveWildcard { next: Option<Box<GlobNode>> },
    /// `..`
    Parent { next: Option<Box<GlobNode>> },
    /// `.`
    Current { next: Option<Box<GlobNode>> },
}

/// What a [`GlobNode::Segment`] matches against a single path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SegmentPattern {
    /// An identifier with no wildcard metacharacters, appended directly.
    Literal(String),
    /// A token sequence requiring directory enumeration; a bare `*` chunk
    /// compiles to a single [`Token::AnyRun`].
    Wildcard(Vec<Token>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    /// `*`
    AnyRun,
    /// `?`
    AnyChar,
}

impl SegmentPattern {
    /// Match one path component. Only `*` and `?` are metacharacters;
    /// everything else, spaces and punctuation included, is literal. Case
    /// folding follows the comparer.
    pub(crate) fn is_match(&self, name: &str, comparer: &PathComparer) -> bool {
        match self {
            SegmentPattern::Literal(text) => comparer.eq(text, name),
            SegmentPattern::Wildcard(tokens) => {
                let name: Vec<char> = name.chars().collect();
                let calls = Cell::new(0usize);
                match_tokens(tokens, 0, &name, 0, comparer.is_case_sensitive(), &calls)
            }
        }
    }
}

/// Work-bounded recursive matching with backtracking for `*`.
///
/// Returns `false` (non-match) once the work cap is exceeded.
fn match_tokens(
    tokens: &[Token],
    ti: usize,
    name: &[char],
    ni: usize,
    case_sensitive: bool,
    calls: &Cell<usize>,
) -> bool {
    let count = calls.get() + 1;
    calls.set(count);
    if count > MAX_MATCH_CALLS {
        return false;
    }

    let Some(token) = tokens.get(ti) else {
        return ni >= name.len();
    };

    match token {
        Token::Literal(text) => {
            let mut idx = ni;
            for expected in text.chars() {
                let Some(&actual) = name.get(idx) else {
                    return false;
                };
                if !chars_eq(expected, actual, case_sensitive) {
                    return false;
                }
                idx += 1;
            }
            match_tokens(tokens, ti + 1, name, idx, case_sensitive, calls)
        }
        Token::AnyChar => {
            ni < name.len() && match_tokens(tokens, ti + 1, name, ni + 1, case_sensitive, calls)
        }
        Token::AnyRun => {
            // A trailing star matches everything that remains.
            if ti + 1 >= tokens.len() {
                return true;
            }
            (ni..=name.len())
                .any(|split| match_tokens(tokens, ti + 1, name, split, case_sensitive, calls))
        }
    }
}

fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}
