use thiserror::Error;

pub type Result<T> = std::result::Result<T, HintError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// No concept's template matches the hint text
    #[error("Unrecognized hint: {0:?}")]
    UnrecognizedHint(String),

    /// The pool/relevant/redundant bookkeeping no longer adds up
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    /// Random sampling failed
    #[error("Number error: {0}")]
    Range(#[from] guess_numbers::NumberError),

    /// A hint template or its parameters are malformed
    #[error("Template error: {0}")]
    Template(String),
}

impl HintError {
    pub fn unrecognized(hint: impl Into<String>) -> Self {
        Self::UnrecognizedHint(hint.into())
    }

    pub fn consistency(msg: impl Into<String>) -> Self {
        Self::InternalConsistency(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }
}
