pub mod cancel;
pub mod diagnostics;
pub mod error;
pub mod suppress;
pub mod syntax;

pub use cancel::CancelToken;
pub use diagnostics::{Diagnostic, Severity};
pub use error::{Result, SuppressError};
pub use suppress::{
    PragmaKeyword, SuppressionState, SymbolKind, attribute::SymbolInfo, suppression_state,
};
pub use syntax::SyntaxTree;
