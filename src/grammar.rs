use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator and volume rules a path grammar supplies to the analyzers.
///
/// The root, split and search-pattern algorithms are written once against
/// this trait; each platform only describes its characters.
pub trait PathGrammar {
    fn directory_separator(&self) -> char;

    fn alt_directory_separator(&self) -> char;

    /// Drive-letter separator, if the grammar has drive roots at all.
    fn volume_separator(&self) -> Option<char>;

    fn is_invalid_path_char(&self, ch: char) -> bool;

    fn is_directory_separator(&self, ch: char) -> bool {
        ch == self.directory_separator() || ch == self.alt_directory_separator()
    }

    fn is_volume_separator(&self, ch: char) -> bool {
        self.volume_separator() == Some(ch)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Windows;

impl PathGrammar for Windows {
    fn directory_separator(&self) -> char {
        '\\'
    }

    fn alt_directory_separator(&self) -> char {
        '/'
    }

    fn volume_separator(&self) -> Option<char> {
        Some(':')
    }

    fn is_invalid_path_char(&self, ch: char) -> bool {
        matches!(ch, '"' | '<' | '>' | '|') || ch < ' '
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Posix;

impl PathGrammar for Posix {
    fn directory_separator(&self) -> char {
        '/'
    }

    fn alt_directory_separator(&self) -> char {
        '/'
    }

    fn volume_separator(&self) -> Option<char> {
        None
    }

    fn is_invalid_path_char(&self, ch: char) -> bool {
        ch == '\0'
    }
}

/// Platform names a grammar by configuration value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Posix,
}

impl Platform {
    pub fn grammar(self) -> &'static (dyn PathGrammar + Send + Sync) {
        match self {
            Platform::Windows => &Windows,
            Platform::Posix => &Posix,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Posix => "posix",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarNameViolation {
    Empty,
    Unknown,
}

impl fmt::Display for GrammarNameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarNameViolation::Empty => f.write_str("platform name cannot be blank"),
            GrammarNameViolation::Unknown => {
                f.write_str("platform name must be one of windows/win/posix/unix")
            }
        }
    }
}

impl std::error::Error for GrammarNameViolation {}

impl FromStr for Platform {
    type Err = GrammarNameViolation;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(GrammarNameViolation::Empty);
        }
        match normalized.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "posix" | "unix" => Ok(Platform::Posix),
            _ => Err(GrammarNameViolation::Unknown),
        }
    }
}
