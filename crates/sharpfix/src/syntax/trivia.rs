use rowan::{GreenToken, NodeOrToken};

use crate::syntax::cst::{GreenElement, SyntaxElement, SyntaxNode};
use crate::syntax::kind::SyntaxKind;

/// Classified trivia attached around meaningful tokens. Directive lines
/// count as trivia for attachment purposes even though they are nodes in
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trivia {
    Whitespace(String),
    EndOfLine(String),
    Comment(String),
    DocComment(String),
    BlockComment(String),
    Directive(SyntaxNode),
}

pub fn classify(element: &SyntaxElement) -> Option<Trivia> {
    match element {
        NodeOrToken::Token(token) => match token.kind() {
            SyntaxKind::Whitespace => Some(Trivia::Whitespace(token.text().to_string())),
            SyntaxKind::EndOfLine => Some(Trivia::EndOfLine(token.text().to_string())),
            SyntaxKind::Comment => Some(Trivia::Comment(token.text().to_string())),
            SyntaxKind::DocComment => Some(Trivia::DocComment(token.text().to_string())),
            SyntaxKind::BlockComment => Some(Trivia::BlockComment(token.text().to_string())),
            _ => None,
        },
        NodeOrToken::Node(node) => match node.kind() {
            SyntaxKind::PragmaWarning | SyntaxKind::Directive => Some(Trivia::Directive(node.clone())),
            _ => None,
        },
    }
}

pub fn is_trivia_element(element: &SyntaxElement) -> bool {
    match element {
        NodeOrToken::Token(token) => token.kind().is_trivia_token(),
        NodeOrToken::Node(node) => {
            matches!(node.kind(), SyntaxKind::PragmaWarning | SyntaxKind::Directive)
        },
    }
}

/// Number of leading children of `node` that are trivia elements.
pub fn leading_trivia_len(node: &SyntaxNode) -> usize {
    node.children_with_tokens()
        .take_while(is_trivia_element)
        .count()
}

/// Indentation in effect at the end of a leading trivia run: the final
/// whitespace token, if the run ends with one.
pub fn trailing_indent(node: &SyntaxNode) -> Option<String> {
    node.children_with_tokens()
        .take_while(is_trivia_element)
        .last()
        .and_then(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::Whitespace)
        .map(|token| token.text().to_string())
}

pub fn token(kind: SyntaxKind, text: &str) -> GreenElement {
    NodeOrToken::Token(GreenToken::new(kind.into(), text))
}

pub fn whitespace(text: &str) -> GreenElement {
    token(SyntaxKind::Whitespace, text)
}

pub fn end_of_line() -> GreenElement {
    token(SyntaxKind::EndOfLine, "\n")
}

/// Comment trivia; `text` must include the `//` prefix.
pub fn comment(text: &str) -> GreenElement {
    token(SyntaxKind::Comment, text)
}

#[cfg(test)]
#[path = "../../tests/src/syntax/trivia_tests.rs"]
mod tests;
