//! The languages that `kickoff` is able to scaffold a project for

use core::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The target language of a new project. Each variant maps to exactly one
/// [`crate::scaffold::LanguageProfile`]
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[value(alias = "py")]
    Python,
    #[value(alias = "golang")]
    Go,
    #[value(alias = "rs")]
    Rust,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    #[value(name = "cpp", alias = "c++")]
    #[serde(rename = "cpp")]
    CPlusPlus,
    #[value(name = "csharp", alias = "c#", alias = "cs")]
    #[serde(rename = "csharp")]
    CSharp,
    Java,
}

impl Language {
    /// Every supported language, in the order they are offered to the user
    pub const ALL: [Language; 8] = [
        Language::Python,
        Language::Go,
        Language::Rust,
        Language::JavaScript,
        Language::TypeScript,
        Language::CPlusPlus,
        Language::CSharp,
        Language::Java,
    ];

    /// The human readable name of the language, as shown on selectors and status lines
    pub fn display_name(&self) -> &'static str {
        match *self {
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::CPlusPlus => "C++",
            Language::CSharp => "C#",
            Language::Java => "Java",
        }
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        match *self {
            Language::Python => "python",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::CPlusPlus => "cpp",
            Language::CSharp => "csharp",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_names_and_aliases() {
        assert_eq!(Language::from_str("cpp", true), Ok(Language::CPlusPlus));
        assert_eq!(Language::from_str("c++", true), Ok(Language::CPlusPlus));
        assert_eq!(Language::from_str("c#", true), Ok(Language::CSharp));
        assert_eq!(Language::from_str("ts", true), Ok(Language::TypeScript));
        assert_eq!(Language::from_str("javascript", true), Ok(Language::JavaScript));
        assert!(Language::from_str("cobol", true).is_err());
    }

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for language in Language::ALL {
            assert!(seen.insert(language));
        }
        assert_eq!(seen.len(), 8);
    }
}
