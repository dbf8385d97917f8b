use crate::error::{PathError, Result};
use std::path::Path;

/// Canonicalizes a syntactically valid path.
///
/// Implementations own drive-relative resolution, `.`/`..` collapsing and
/// any case rules of the host; the analyzers never do.
pub trait PathResolver {
    fn resolve_full_path(&self, path: &str) -> Result<String>;
}

/// Resolves through the host operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostResolver;

impl PathResolver for HostResolver {
    fn resolve_full_path(&self, path: &str) -> Result<String> {
        let resolved = std::path::absolute(Path::new(path)).map_err(|source| PathError::Resolve {
            path: path.to_string(),
            source,
        })?;
        Ok(resolved.display().to_string())
    }
}

impl<F> PathResolver for F
where
    F: Fn(&str) -> Result<String>,
{
    fn resolve_full_path(&self, path: &str) -> Result<String> {
        self(path)
    }
}
