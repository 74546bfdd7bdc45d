//! Commit message grammars
//!
//! A grammar decides how a message decomposes into type token, scope,
//! description and breaking-change markers. The set is closed; grammars are
//! selected by name.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::rules::{angular_rules, conventional_rules, RuleTable};
use crate::error::{Result, SemrelError};

/// `type(scope)!: description`
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>\w+)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?: (?P<description>.*)$",
    )
    .expect("conventional commit regex is valid")
});

/// `type(scope): description`
static ANGULAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^()]*)\))?: (?P<description>.*)$")
        .expect("angular commit regex is valid")
});

const CONVENTIONAL_FOOTERS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];
const ANGULAR_FOOTERS: [&str; 1] = ["BREAKING CHANGE:"];

/// Structural pieces of a commit message, before any rule is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposed {
    pub type_token: String,
    /// Empty if the message has no scope
    pub scope: String,
    /// Trimmed description from the first line
    pub description: String,
    /// `!` right before the colon
    pub breaking_marker: bool,
    /// Trimmed text of the first breaking-change footer, if any
    pub breaking_footer: Option<String>,
}

impl Decomposed {
    pub fn is_breaking(&self) -> bool {
        self.breaking_marker || self.breaking_footer.is_some()
    }
}

/// Registered commit message grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Conventional,
    Angular,
}

impl Grammar {
    /// Look up a grammar by its registered name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "conventional" => Ok(Grammar::Conventional),
            "angular" => Ok(Grammar::Angular),
            other => Err(SemrelError::UnknownGrammar(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Conventional => "conventional",
            Grammar::Angular => "angular",
        }
    }

    /// The rule table that belongs to this grammar
    pub fn rules(&self) -> RuleTable {
        match self {
            Grammar::Conventional => conventional_rules(),
            Grammar::Angular => angular_rules(),
        }
    }

    /// Match the first line of `message` and split it into its parts.
    ///
    /// Returns `None` when the first line does not follow the grammar.
    pub fn decompose(&self, message: &str) -> Option<Decomposed> {
        let (regex, footers): (&Regex, &[&str]) = match self {
            Grammar::Conventional => (&*CONVENTIONAL_REGEX, &CONVENTIONAL_FOOTERS[..]),
            Grammar::Angular => (&*ANGULAR_REGEX, &ANGULAR_FOOTERS[..]),
        };

        let mut lines = message.lines();
        let first_line = lines.next()?;
        let captures = regex.captures(first_line)?;

        let type_token = captures.name("type")?.as_str().to_string();
        let scope = captures
            .name("scope")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let description = captures
            .name("description")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let breaking_marker = captures.name("breaking").is_some();

        let breaking_footer = lines.find_map(|line| {
            footers
                .iter()
                .find_map(|marker| line.strip_prefix(*marker))
                .map(|text| text.trim().to_string())
        });

        Some(Decomposed {
            type_token,
            scope,
            description,
            breaking_marker,
            breaking_footer,
        })
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
