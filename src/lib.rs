pub mod analyzer;
pub mod calculator;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod git;
pub mod release;
pub mod ui;

pub use error::{Result, SemrelError};
pub use release::SemanticRelease;
