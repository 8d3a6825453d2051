use thiserror::Error;

use crate::syntax::kind::SyntaxKind;

pub type Result<T> = std::result::Result<T, SuppressError>;

/// Failures surfaced to the host. Contract violations carry the node kind
/// that was actually supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuppressError {
    #[error("operation cancelled")]
    Cancelled,
    #[error("expected a declaration node, found {0:?}")]
    NotADeclaration(SyntaxKind),
    #[error("expected a compilation unit root, found {0:?}")]
    NotACompilationUnit(SyntaxKind),
    #[error("expected a #pragma warning directive, found {0:?}")]
    NotADirective(SyntaxKind),
    #[error("expected a suppression attribute, found {0:?}")]
    NotAnAttribute(SyntaxKind),
    #[error("no active suppression of {id} covers the diagnostic span")]
    NoSuppression { id: String },
    #[error("diagnostic span lies outside the source text")]
    SpanOutOfBounds,
}
