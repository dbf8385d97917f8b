use crate::error::{PathError, Result};
use crate::grammar::PathGrammar;
use crate::resolve::PathResolver;
use crate::root::is_path_rooted;

/// Trailing characters file systems such as NTFS and FAT treat as blank.
/// Narrower than `char::is_whitespace`.
pub const TRIM_END_CHARS: &[char] = &[
    '\u{9}', '\u{a}', '\u{b}', '\u{c}', '\u{d}', '\u{20}', '\u{85}', '\u{a0}',
];

pub const TRIM_START_CHARS: &[char] = &[' '];

pub fn trim(path: &str) -> &str {
    path.trim_start_matches(TRIM_START_CHARS)
        .trim_end_matches(TRIM_END_CHARS)
}

pub fn trim_path(path: Option<&str>) -> Result<&str> {
    path.map(trim).ok_or(PathError::NullPath)
}

/// Trims `path` and hands it to `resolver`.
///
/// Only a rooted result is passed on trimmed. A relative path goes to the
/// resolver untouched, so its blanks survive the join with the current
/// directory.
pub fn full_path<G, R>(grammar: &G, resolver: &R, path: Option<&str>) -> Result<String>
where
    G: PathGrammar + ?Sized,
    R: PathResolver + ?Sized,
{
    let Some(original) = path else {
        return Err(PathError::NullPath);
    };
    let trimmed = trim(original);
    if is_path_rooted(grammar, trimmed)? {
        resolver.resolve_full_path(trimmed)
    } else {
        if trimmed.len() != original.len() {
            log::debug!("{trimmed:?} is relative, resolving untrimmed {original:?}");
        }
        resolver.resolve_full_path(original)
    }
}
