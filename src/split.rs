use crate::error::Result;
use crate::grammar::PathGrammar;
use crate::root::root_length;
use serde::Serialize;

/// Directory and final segment of a path, both borrowed from the input.
///
/// `file` is `None` when no separator follows the root: the bare root
/// (`C:\`) as well as a root plus one segment (`C:\a`, `\a`, `name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitPath<'a> {
    pub directory: &'a str,
    pub file: Option<&'a str>,
}

pub fn ends_in_directory_separator<G: PathGrammar + ?Sized>(grammar: &G, path: &str) -> bool {
    path.chars()
        .next_back()
        .is_some_and(|ch| grammar.is_directory_separator(ch))
}

/// Splits a validated full path at its last separator after the root.
///
/// Exactly one trailing separator is ignored, unless it belongs to the root
/// (`C:\`). Pure index arithmetic: nothing is renormalized.
pub fn split_directory_file<'a, G: PathGrammar + ?Sized>(
    grammar: &G,
    path: &'a str,
) -> Result<SplitPath<'a>> {
    let root = root_length(grammar, path)?;
    let mut length = path.len();

    if length > root {
        if let Some(last) = path.chars().next_back() {
            if grammar.is_directory_separator(last) {
                length -= last.len_utf8();
            }
        }
    }

    let pivot = path[root..length]
        .char_indices()
        .rev()
        .find(|&(_, ch)| grammar.is_directory_separator(ch))
        .map(|(offset, ch)| (root + offset, ch.len_utf8()));

    Ok(match pivot {
        Some((pivot, width)) => {
            log::trace!("split {path:?} at pivot {pivot}");
            SplitPath {
                directory: &path[..pivot],
                file: Some(&path[pivot + width..length]),
            }
        }
        None => SplitPath {
            directory: &path[..length],
            file: None,
        },
    })
}

/// Parent directory without renormalization; `None` when no separator
/// follows the root.
pub fn directory_name<'a, G: PathGrammar + ?Sized>(
    grammar: &G,
    path: &'a str,
) -> Result<Option<&'a str>> {
    let split = split_directory_file(grammar, path)?;
    Ok(split.file.map(|_| split.directory))
}
