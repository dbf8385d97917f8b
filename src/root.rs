use crate::error::Result;
use crate::grammar::PathGrammar;
use crate::invalid_chars::check_invalid_path_chars;

/// Number of UNC components (server, share) that belong to the root.
const UNC_ROOT_COMPONENTS: usize = 2;

/// Returns the byte length of the root prefix of `path`.
///
/// The root is the leading separator of a path rooted on the current drive
/// (`\foo`), the `\\server\share` prefix of a UNC path, or the drive prefix
/// (`C:` or `C:\`). Relative paths have an empty root. The invalid-character
/// check always runs first.
pub fn root_length<G: PathGrammar + ?Sized>(grammar: &G, path: &str) -> Result<usize> {
    check_invalid_path_chars(grammar, path)?;

    let mut chars = path.char_indices();
    let Some((_, first)) = chars.next() else {
        return Ok(0);
    };
    let second = chars.next();

    if grammar.is_directory_separator(first) {
        return Ok(match second {
            Some((at, ch)) if grammar.is_directory_separator(ch) => {
                unc_root_end(grammar, path, at + ch.len_utf8())
            }
            _ => first.len_utf8(),
        });
    }

    match second {
        Some((at, ch)) if grammar.is_volume_separator(ch) => {
            let mut end = at + ch.len_utf8();
            if let Some((_, third)) = chars.next() {
                if grammar.is_directory_separator(third) {
                    end += third.len_utf8();
                }
            }
            Ok(end)
        }
        _ => Ok(0),
    }
}

// Stops on the separator that closes the share name, leaving it outside the
// root, or at the end of the string when fewer components are present.
fn unc_root_end<G: PathGrammar + ?Sized>(grammar: &G, path: &str, start: usize) -> usize {
    let mut remaining = UNC_ROOT_COMPONENTS;
    for (offset, ch) in path[start..].char_indices() {
        if grammar.is_directory_separator(ch) {
            remaining -= 1;
            if remaining == 0 {
                log::trace!("unc root of {path:?} ends at {}", start + offset);
                return start + offset;
            }
        }
    }
    path.len()
}

/// True when `path` names a root: a leading separator or a drive prefix.
pub fn is_path_rooted<G: PathGrammar + ?Sized>(grammar: &G, path: &str) -> Result<bool> {
    check_invalid_path_chars(grammar, path)?;
    let mut chars = path.chars();
    let Some(first) = chars.next() else {
        return Ok(false);
    };
    Ok(grammar.is_directory_separator(first)
        || chars.next().is_some_and(|ch| grammar.is_volume_separator(ch)))
}

/// A bare `<letter>:` is a root syntactically, but callers resolving against
/// a current directory must treat it as that drive's current directory.
pub fn should_revise_directory_path_to_current<G: PathGrammar + ?Sized>(
    grammar: &G,
    path: &str,
) -> bool {
    let mut chars = path.chars();
    chars.next().is_some()
        && chars.next().is_some_and(|ch| grammar.is_volume_separator(ch))
        && chars.next().is_none()
}
