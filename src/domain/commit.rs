use super::version::Severity;

/// A raw commit as read from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit message, first line plus optional body and footers
    pub message: String,
    pub author: String,
    pub hash: String,
}

impl Commit {
    pub fn new(
        message: impl Into<String>,
        author: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Commit {
            message: message.into(),
            author: author.into(),
            hash: hash.into(),
        }
    }

    /// Abbreviated hash (first 7 characters)
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

/// A commit that matched the active grammar and a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedCommit {
    pub commit: Commit,
    /// Sub-area from `type(scope): ...`, empty if absent
    pub scope: String,
    /// Description with type, scope and breaking markers stripped
    pub parsed_message: String,
    /// Raw classification key, e.g. "feat"
    pub type_token: String,
    pub section_title: String,
    pub visible_in_changelog: bool,
    /// Set by a `!` marker or a breaking-change footer
    pub breaking: bool,
    /// Text of the break; empty when the commit carries no detail for it
    pub breaking_change_message: String,
    /// Resolved bucket
    pub severity: Severity,
    /// Index of the commit in the analyzed input
    pub position: usize,
}

impl AnalyzedCommit {
    pub fn is_breaking(&self) -> bool {
        self.breaking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash() {
        let commit = Commit::new("fix: x", "me", "1234567890abcdef");
        assert_eq!(commit.short_hash(), "1234567");

        let short = Commit::new("fix: x", "me", "12ab");
        assert_eq!(short.short_hash(), "12ab");
    }
}
