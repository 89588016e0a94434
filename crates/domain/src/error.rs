#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{0} id must not be empty")]
    EmptyId(&'static str),
    #[error("price must be finite and non-negative, got {0}")]
    InvalidPrice(f64),
    #[error("unknown style tag: {0}")]
    UnknownStyleTag(String),
    #[error("unknown item category: {0}")]
    UnknownCategory(String),
    #[error("unknown grouping mode: {0}")]
    UnknownGroupMode(String),
}
