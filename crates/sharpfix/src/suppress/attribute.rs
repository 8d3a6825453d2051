use rowan::{GreenNode, NodeOrToken};
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::syntax::cst::GreenElement;
use crate::syntax::kind::SyntaxKind;
use crate::syntax::trivia;

/// Justification placeholder left for a human to replace; suppressions
/// are never silently explained away.
pub const JUSTIFICATION_PENDING: &str = "<Pending>";

pub const ATTRIBUTE_NAME: &str = "SuppressMessage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Assembly,
    Module,
    Namespace,
    Type,
    Member,
    Parameter,
    ReturnValue,
    Local,
}

/// Kind plus fully qualified name, as supplied by the host's symbol
/// naming service. The name is treated as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub kind: SymbolKind,
    pub qualified_name: String,
}

/// Scope string for the assembly-scoped attribute's `Scope` argument.
/// Kinds without a mapping get no Scope/Target pair at all.
pub fn target_scope(kind: SymbolKind) -> Option<&'static str> {
    match kind {
        SymbolKind::Member => Some("member"),
        SymbolKind::Type => Some("type"),
        SymbolKind::Namespace => Some("namespace"),
        SymbolKind::Module => Some("module"),
        SymbolKind::Assembly | SymbolKind::Parameter | SymbolKind::ReturnValue | SymbolKind::Local => None,
    }
}

/// Second positional argument: the id alone, or `id:title` when the
/// diagnostic carries a title.
pub fn rule_id(diagnostic: &Diagnostic) -> String {
    if diagnostic.has_title() {
        format!("{}:{}", diagnostic.id, diagnostic.title)
    } else {
        diagnostic.id.clone()
    }
}

/// One argument of the suppression attribute; `name` is set for the
/// named (`Name = "..."`) arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeArgument {
    pub name: Option<&'static str>,
    pub value: String,
}

/// Fixed argument shape: `[category, ruleId, Justification]`, extended
/// with `[Scope, Target]` only at assembly scope for mapped symbol kinds.
pub fn suppression_arguments(
    diagnostic: &Diagnostic,
    symbol: &SymbolInfo,
    assembly_scoped: bool,
) -> Vec<AttributeArgument> {
    let mut arguments = vec![
        AttributeArgument {
            name: None,
            value: diagnostic.category.clone(),
        },
        AttributeArgument {
            name: None,
            value: rule_id(diagnostic),
        },
        AttributeArgument {
            name: Some("Justification"),
            value: JUSTIFICATION_PENDING.to_string(),
        },
    ];
    if assembly_scoped
        && let Some(scope) = target_scope(symbol.kind)
    {
        arguments.push(AttributeArgument {
            name: Some("Scope"),
            value: scope.to_string(),
        });
        arguments.push(AttributeArgument {
            name: Some("Target"),
            value: symbol.qualified_name.clone(),
        });
    }
    arguments
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `[SuppressMessage(...)]` or `[assembly: SuppressMessage(...)]` as a
/// green attribute-list node, no surrounding trivia.
pub fn suppression_attribute_list(
    diagnostic: &Diagnostic,
    symbol: &SymbolInfo,
    assembly_scoped: bool,
) -> GreenNode {
    let arguments = suppression_arguments(diagnostic, symbol, assembly_scoped);

    let mut arg_children: Vec<GreenElement> = vec![trivia::token(SyntaxKind::LParen, "(")];
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            arg_children.push(trivia::token(SyntaxKind::Comma, ","));
            arg_children.push(trivia::whitespace(" "));
        }
        if let Some(name) = argument.name {
            arg_children.push(trivia::token(SyntaxKind::Ident, name));
            arg_children.push(trivia::whitespace(" "));
            arg_children.push(trivia::token(SyntaxKind::Equal, "="));
            arg_children.push(trivia::whitespace(" "));
        }
        arg_children.push(trivia::token(
            SyntaxKind::String,
            &format!("\"{}\"", escape(&argument.value)),
        ));
    }
    arg_children.push(trivia::token(SyntaxKind::RParen, ")"));
    let arg_list = GreenNode::new(SyntaxKind::AttributeArgList.into(), arg_children);

    let attribute = GreenNode::new(
        SyntaxKind::Attribute.into(),
        [
            trivia::token(SyntaxKind::Ident, ATTRIBUTE_NAME),
            NodeOrToken::Node(arg_list),
        ],
    );

    let mut children: Vec<GreenElement> = vec![trivia::token(SyntaxKind::LBracket, "[")];
    if assembly_scoped {
        children.push(trivia::token(SyntaxKind::Ident, "assembly"));
        children.push(trivia::token(SyntaxKind::Colon, ":"));
        children.push(trivia::whitespace(" "));
    }
    children.push(NodeOrToken::Node(attribute));
    children.push(trivia::token(SyntaxKind::RBracket, "]"));
    GreenNode::new(SyntaxKind::AttributeList.into(), children)
}

#[cfg(test)]
#[path = "../../tests/src/suppress/attribute_tests.rs"]
mod tests;
