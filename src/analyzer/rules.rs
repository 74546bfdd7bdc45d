use std::collections::HashMap;

use crate::domain::Severity;

/// How one commit type token is treated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub type_token: String,
    pub severity: Severity,
    pub section_title: String,
    pub visible_in_changelog: bool,
}

impl Rule {
    pub fn new(
        type_token: impl Into<String>,
        severity: Severity,
        section_title: impl Into<String>,
        visible_in_changelog: bool,
    ) -> Self {
        Rule {
            type_token: type_token.into(),
            severity,
            section_title: section_title.into(),
            visible_in_changelog,
        }
    }
}

/// Ordered rules of one grammar; the order is the changelog section order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Build a table; a repeated token keeps its first rule
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            index.entry(rule.type_token.clone()).or_insert(position);
        }
        RuleTable { rules, index }
    }

    pub fn lookup(&self, type_token: &str) -> Option<&Rule> {
        self.index.get(type_token).map(|&position| &self.rules[position])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Distinct section titles in table order
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !sections.contains(&rule.section_title.as_str()) {
                sections.push(&rule.section_title);
            }
        }
        sections
    }
}

const CI_CD: &str = "Changes to CI/CD";

const COMMON_RULES: [(&str, Severity, &str, bool); 10] = [
    ("feat", Severity::Minor, "Features", true),
    ("fix", Severity::Patch, "Bug fixes", true),
    ("perf", Severity::Patch, "Performance improvements", true),
    ("docs", Severity::None, "Documentation changes", false),
    ("style", Severity::None, "Style", false),
    ("refactor", Severity::None, "Code refactor", false),
    ("test", Severity::None, "Testing", false),
    ("chore", Severity::None, CI_CD, false),
    ("build", Severity::None, CI_CD, false),
    ("ci", Severity::None, CI_CD, false),
];

fn to_rules(entries: &[(&str, Severity, &str, bool)]) -> Vec<Rule> {
    entries
        .iter()
        .map(|&(token, severity, title, visible)| Rule::new(token, severity, title, visible))
        .collect()
}

/// Rules for the `conventional` commit format
pub fn conventional_rules() -> RuleTable {
    RuleTable::new(to_rules(&COMMON_RULES))
}

/// Rules for the `angular` commit format
pub fn angular_rules() -> RuleTable {
    let mut rules = to_rules(&COMMON_RULES);
    // Reverts are listed right after performance improvements
    rules.insert(3, Rule::new("revert", Severity::Patch, "Reverts", true));
    RuleTable::new(rules)
}
