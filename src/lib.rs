pub mod config;
pub mod env_util;
pub mod error;
pub mod grammar;
pub mod invalid_chars;
pub mod resolve;
pub mod rhai_engine;
mod rhai_facade;
mod rhai_facade_validation;
pub mod root;
pub mod search_pattern;
pub mod split;
pub mod trim;

#[cfg(test)]
mod test_support;

pub use error::{PathError, Result};
pub use grammar::{PathGrammar, Platform, Posix, Windows};
pub use invalid_chars::check_invalid_path_chars;
pub use resolve::{HostResolver, PathResolver};
pub use root::{is_path_rooted, root_length, should_revise_directory_path_to_current};
pub use search_pattern::check_search_pattern;
pub use split::{directory_name, ends_in_directory_separator, split_directory_file, SplitPath};
pub use trim::{full_path, trim, trim_path};
