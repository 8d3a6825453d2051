use rowan::{GreenNode, GreenToken, NodeOrToken};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::diagnostics::Diagnostic;
use crate::error::{Result, SuppressError};
use crate::syntax::ast::{AstNode, PragmaWarning};
use crate::syntax::cst::{GreenElement, SyntaxElement};
use crate::syntax::kind::SyntaxKind;
use crate::syntax::trivia;

/// Caller-supplied hook that gets the freshly built directive node before
/// it is wrapped in surrounding trivia, so placement rules run once.
pub type ReformatFn<'a> = dyn Fn(GreenNode) -> GreenNode + 'a;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PragmaKeyword {
    Disable,
    Restore,
}

impl PragmaKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            PragmaKeyword::Disable => "disable",
            PragmaKeyword::Restore => "restore",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            PragmaKeyword::Disable => PragmaKeyword::Restore,
            PragmaKeyword::Restore => PragmaKeyword::Disable,
        }
    }
}

fn id_kind(id: &str) -> SyntaxKind {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        SyntaxKind::Integer
    } else {
        SyntaxKind::Ident
    }
}

/// `#pragma warning {keyword} {id}` as a green node, single spaces, no
/// surrounding trivia.
pub fn pragma_green(id: &str, keyword: PragmaKeyword) -> GreenNode {
    GreenNode::new(
        SyntaxKind::PragmaWarning.into(),
        [
            trivia::token(SyntaxKind::Hash, "#"),
            trivia::token(SyntaxKind::Ident, "pragma"),
            trivia::whitespace(" "),
            trivia::token(SyntaxKind::Ident, "warning"),
            trivia::whitespace(" "),
            trivia::token(SyntaxKind::Ident, keyword.as_str()),
            trivia::whitespace(" "),
            trivia::token(id_kind(id), id),
        ],
    )
}

/// Builds the trivia sequence for one disable or restore line.
///
/// The directive node is passed through `reformat` before being wrapped.
/// A non-blank title becomes a trailing `" // {title}"` comment. The two
/// booleans control the surrounding end-of-lines; the caller sets them
/// from what already exists at the insertion point, so no blank lines
/// accumulate across repeated edits.
pub fn synthesize_directive(
    diagnostic: &Diagnostic,
    keyword: PragmaKeyword,
    reformat: &ReformatFn<'_>,
    needs_leading_eol: bool,
    needs_trailing_eol: bool,
    cancel: &CancelToken,
) -> Result<Vec<GreenElement>> {
    cancel.check()?;
    let directive = reformat(pragma_green(&diagnostic.id, keyword));
    cancel.check()?;

    let mut sequence = Vec::with_capacity(4);
    if needs_leading_eol {
        sequence.push(trivia::end_of_line());
    }
    sequence.push(NodeOrToken::Node(directive));
    if diagnostic.has_title() {
        sequence.push(trivia::comment(&format!(" // {}", diagnostic.title)));
    }
    if needs_trailing_eol {
        sequence.push(trivia::end_of_line());
    }
    debug!("synthesized #pragma warning {} {}", keyword.as_str(), diagnostic.id);
    Ok(sequence)
}

/// What the toggle resolver reports about an existing directive.
/// `multiple_ids` is advisory; the toggle itself never splits a
/// multi-id directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveMatch {
    pub matches: bool,
    pub restores: bool,
    pub multiple_ids: bool,
}

/// Inspects an element believed to be a `#pragma warning` directive.
/// Anything else is a contract violation.
pub fn directive_match(element: &SyntaxElement, id: &str) -> Result<DirectiveMatch> {
    let node = element
        .as_node()
        .ok_or(SuppressError::NotADirective(element.kind()))?;
    let pragma = PragmaWarning::cast(node.clone()).ok_or(SuppressError::NotADirective(node.kind()))?;
    let ids = pragma.ids();
    Ok(DirectiveMatch {
        matches: ids.iter().any(|token| token.text() == id),
        restores: pragma.restores(),
        multiple_ids: ids.len() > 1,
    })
}

/// Swaps disable and restore in place, returning the new tree root green.
/// The keywords have equal length, so every other byte of the tree keeps
/// its offset. Toggling twice round-trips exactly.
pub fn toggle_directive(pragma: &PragmaWarning) -> Result<GreenNode> {
    let keyword = pragma
        .keyword_token()
        .ok_or(SuppressError::NotADirective(pragma.syntax().kind()))?;
    let flipped = match keyword.text() {
        "disable" => "restore",
        "restore" => "disable",
        _ => return Err(SuppressError::NotADirective(pragma.syntax().kind())),
    };
    Ok(keyword.replace_with(GreenToken::new(SyntaxKind::Ident.into(), flipped)))
}

#[cfg(test)]
#[path = "../../tests/src/suppress/pragma_tests.rs"]
mod tests;
