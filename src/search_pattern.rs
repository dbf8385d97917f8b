use crate::error::{PathError, Result};
use crate::grammar::PathGrammar;

const PARENT_TOKEN: &str = "..";

/// Rejects search patterns that could climb out of the searched directory.
///
/// `..` is allowed only inside a longer name: `a..b` and `abc..d` pass, while
/// `..`, `ab..` and `..\x` fail. Matches are non-overlapping, left to right.
pub fn check_search_pattern<G: PathGrammar + ?Sized>(grammar: &G, pattern: &str) -> Result<()> {
    for (index, token) in pattern.match_indices(PARENT_TOKEN) {
        let after = index + token.len();
        let terminal = match pattern[after..].chars().next() {
            None => true,
            Some(ch) => grammar.is_directory_separator(ch),
        };
        if terminal {
            log::debug!("rejecting search pattern {pattern:?}: parent token at {index}");
            return Err(PathError::InvalidSearchPattern {
                pattern: pattern.to_string(),
                index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_search_pattern;
    use crate::error::PathError;
    use crate::grammar::{Posix, Windows};

    fn rejected_at(pattern: &str) -> usize {
        match check_search_pattern(&Windows, pattern).expect_err("pattern should be rejected") {
            PathError::InvalidSearchPattern { index, .. } => index,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn interior_parent_token_is_accepted() {
        assert!(check_search_pattern(&Windows, "abc..d").is_ok());
        assert!(check_search_pattern(&Windows, "a..b").is_ok());
        assert!(check_search_pattern(&Windows, "..ab").is_ok());
        assert!(check_search_pattern(&Windows, "*.txt").is_ok());
        assert!(check_search_pattern(&Windows, "").is_ok());
    }

    #[test]
    fn terminal_parent_token_is_rejected() {
        assert_eq!(rejected_at(".."), 0);
        assert_eq!(rejected_at("ab.."), 2);
        assert_eq!(rejected_at(r"abc..d\abc.."), 10);
    }

    #[test]
    fn parent_segment_before_separator_is_rejected() {
        assert_eq!(rejected_at(r"..\x"), 0);
        assert_eq!(rejected_at("../x"), 0);
        assert_eq!(rejected_at(r"dir\..\*"), 4);
    }

    #[test]
    fn matches_do_not_overlap() {
        // "..." matches at 0, the next search starts at 2 and finds nothing.
        assert!(check_search_pattern(&Windows, "...a").is_ok());
        // "...." matches at 0 and 2; the second is terminal.
        assert_eq!(rejected_at("...."), 2);
        // "..." is terminal only through an overlapping match, which is not taken.
        assert!(check_search_pattern(&Windows, "...").is_ok());
    }

    #[test]
    fn separator_set_follows_grammar() {
        assert!(check_search_pattern(&Posix, r"..\x").is_ok());
        assert!(check_search_pattern(&Posix, "../x").is_err());
    }
}
