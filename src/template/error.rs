//! Template error definitions.

use thiserror::Error;

/// A template that cannot be compiled.
///
/// Offsets are byte positions into `template`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `${` without a closing `}`.
    #[error("unclosed placeholder at byte {offset} in `{template}`")]
    UnclosedPlaceholder { template: String, offset: usize },

    /// `${}` or `${:default}`.
    #[error("empty placeholder key at byte {offset} in `{template}`")]
    EmptyPlaceholderKey { template: String, offset: usize },

    /// `{` without a closing `}`.
    #[error("unclosed path variable at byte {offset} in `{template}`")]
    UnclosedPathVariable { template: String, offset: usize },

    /// `{}`.
    #[error("empty path variable at byte {offset} in `{template}`")]
    EmptyPathVariable { template: String, offset: usize },

    /// A `{` opened inside a placeholder or path variable.
    #[error("nested brace at byte {offset} in `{template}`")]
    NestedBrace { template: String, offset: usize },

    /// A `}` that closes nothing.
    #[error("unmatched closing brace at byte {offset} in `{template}`")]
    UnmatchedBrace { template: String, offset: usize },

    /// `"` is the wildcard translator's sentinel and cannot appear in a path.
    #[error("reserved character '\"' at byte {offset} in `{template}`")]
    ReservedCharacter { template: String, offset: usize },

    /// The translated pattern was refused by the regex engine.
    #[error("invalid matcher pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl TemplateError {
    /// The template (or pattern) the error refers to.
    pub fn template(&self) -> &str {
        match self {
            TemplateError::UnclosedPlaceholder { template, .. }
            | TemplateError::EmptyPlaceholderKey { template, .. }
            | TemplateError::UnclosedPathVariable { template, .. }
            | TemplateError::EmptyPathVariable { template, .. }
            | TemplateError::NestedBrace { template, .. }
            | TemplateError::UnmatchedBrace { template, .. }
            | TemplateError::ReservedCharacter { template, .. } => template,
            TemplateError::InvalidPattern { pattern, .. } => pattern,
        }
    }
}
