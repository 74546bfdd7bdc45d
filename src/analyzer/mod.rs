//! Commit classification: grammars, rule tables and the analyzer

pub mod commit_analyzer;
pub mod grammar;
pub mod rules;

pub use commit_analyzer::CommitAnalyzer;
pub use grammar::{Decomposed, Grammar};
pub use rules::{Rule, RuleTable};
