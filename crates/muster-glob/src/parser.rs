//! Pattern-to-node-chain compilation.

use muster_paths::DirectoryPath;
use muster_vfs::Environment;

use crate::GlobError;
use crate::node::{GlobNode, SegmentPattern, Token};

/// Compile a pattern string into a node chain.
///
/// Returns `Ok(None)` for an empty or whitespace-only pattern: nothing to
/// match, not an error. The environment resolves the root of `/`-anchored
/// patterns: when the working directory is drive-rooted the pattern inherits
/// that drive, otherwise it anchors at the Unix root.
pub(crate) fn parse(
    pattern: &str,
    environment: &dyn Environment,
) -> Result<Option<GlobNode>, GlobError> {
    let pattern = pattern.trim().replace('\\', "/");
    if pattern.is_empty() {
        return Ok(None);
    }
    if pattern.starts_with("//") {
        return Err(GlobError::UncNotSupported);
    }

    let chunks: Vec<&str> = pattern.split('/').collect();
    let (root, rest) = if pattern.starts_with('/') {
        let root = match drive_of(&environment.working_directory()) {
            Some(drive) => RootKind::Windows(drive),
            None => RootKind::Unix,
        };
        (root, &chunks[1..])
    } else if let Some(drive) = drive_chunk(chunks[0]) {
        (RootKind::Windows(drive), &chunks[1..])
    } else {
        (RootKind::Relative, &chunks[..])
    };

    let mut next: Option<Box<GlobNode>> = None;
    for chunk in rest.iter().rev().filter(|c| !c.is_empty()) {
        let node = match *chunk {
            "." => GlobNode::Current { next },
            ".." => GlobNode::Parent { next },
            "**" => GlobNode::RecursiveWildcard { next },
            chunk => GlobNode::Segment {
                pattern: classify(chunk),
                next,
            },
        };
        next = Some(Box::new(node));
    }

    Ok(Some(match root {
        RootKind::Unix => GlobNode::UnixRoot { next },
        RootKind::Windows(drive) => GlobNode::WindowsRoot { drive, next },
        RootKind::Relative => GlobNode::RelativeRoot { next },
    }))
}

enum RootKind {
    Unix,
    Windows(char),
    Relative,
}

/// The drive letter of a drive-rooted path, if any.
fn drive_of(path: &DirectoryPath) -> Option<char> {
    let mut chars = path.full_path().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

fn drive_chunk(chunk: &str) -> Option<char> {
    let mut chars = chunk.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

fn classify(chunk: &str) -> SegmentPattern {
    if !chunk.contains('*') && !chunk.contains('?') {
        return SegmentPattern::Literal(chunk.to_string());
    }

    let mut tokens = Vec::new();
    let mut literal = String::new();
    for c in chunk.chars() {
        match c {
            '*' => {
                flush(&mut literal, &mut tokens);
                // Consecutive stars within a segment collapse to one.
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
            }
            '?' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::AnyChar);
            }
            c => literal.push(c),
        }
    }
    flush(&mut literal, &mut tokens);
    SegmentPattern::Wildcard(tokens)
}

fn flush(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}
