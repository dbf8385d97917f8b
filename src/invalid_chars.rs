use crate::error::{PathError, Result};
use crate::grammar::PathGrammar;

/// Fails on the first character the grammar reserves as invalid in a path.
pub fn check_invalid_path_chars<G: PathGrammar + ?Sized>(grammar: &G, path: &str) -> Result<()> {
    if let Some((index, ch)) = path
        .char_indices()
        .find(|&(_, ch)| grammar.is_invalid_path_char(ch))
    {
        log::debug!("rejecting path {path:?}: invalid character {ch:?} at {index}");
        return Err(PathError::InvalidPathCharacter {
            path: path.to_string(),
            ch,
            index,
        });
    }
    Ok(())
}
