pub mod attribute;
pub mod insert;
pub mod pragma;

use rowan::GreenNode;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::suppress::attribute::{ATTRIBUTE_NAME, SymbolInfo};
use crate::syntax::ast::{AstNode, Attribute, PragmaWarning};
use crate::syntax::cst::SyntaxNode;

pub use crate::suppress::attribute::{JUSTIFICATION_PENDING, SymbolKind, suppression_attribute_list};
pub use crate::suppress::insert::{
    attach_assembly_attribute, attach_attribute, insert_pragma_suppression, remove_attribute,
    remove_attribute_list, remove_pragma_suppression,
};
pub use crate::suppress::pragma::{
    DirectiveMatch, PragmaKeyword, ReformatFn, directive_match, synthesize_directive, toggle_directive,
};

/// How a diagnostic is currently silenced at its reported location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionState {
    Unsuppressed,
    SuppressedByDirective,
    SuppressedByAttribute,
}

/// The disable directive governing the diagnostic's span, with the first
/// matching restore after the span when the pair is terminated.
///
/// Directives are replayed in document order; a restore of the same id
/// between a disable and the span cancels that disable.
pub fn find_bracketing_pair(
    root: &SyntaxNode,
    diagnostic: &Diagnostic,
) -> Option<(PragmaWarning, Option<PragmaWarning>)> {
    let span = diagnostic.span;
    let mut active: Option<PragmaWarning> = None;
    let mut restore_after: Option<PragmaWarning> = None;
    for pragma in root.descendants().filter_map(PragmaWarning::cast) {
        if !pragma.mentions(&diagnostic.id) {
            continue;
        }
        let range = pragma.syntax().text_range();
        if range.end() <= span.start() {
            active = if pragma.disables() { Some(pragma) } else { None };
        } else if range.start() >= span.end() && pragma.restores() && restore_after.is_none() {
            restore_after = Some(pragma);
        }
    }
    active.map(|disable| (disable, restore_after))
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

/// A suppression attribute whose rule-id argument names `id`, either
/// alone or as the `id:title` form.
pub fn find_suppression_attribute(root: &SyntaxNode, id: &str) -> Option<Attribute> {
    root.descendants().filter_map(Attribute::cast).find(|attribute| {
        attribute
            .name_token()
            .is_some_and(|name| name.text().ends_with(ATTRIBUTE_NAME))
            && attribute.arg_list().is_some_and(|args| {
                args.string_tokens().get(1).is_some_and(|token| {
                    let rule = unquote(token.text());
                    rule == id || rule.split(':').next() == Some(id)
                })
            })
    })
}

pub fn suppression_state(root: &SyntaxNode, diagnostic: &Diagnostic) -> SuppressionState {
    if find_bracketing_pair(root, diagnostic).is_some() {
        SuppressionState::SuppressedByDirective
    } else if find_suppression_attribute(root, &diagnostic.id).is_some() {
        SuppressionState::SuppressedByAttribute
    } else {
        SuppressionState::Unsuppressed
    }
}

/// Builds the symbol-scoped attribute and attaches it to `declaration`.
pub fn suppress_with_attribute(
    declaration: &SyntaxNode,
    diagnostic: &Diagnostic,
    symbol: &SymbolInfo,
    cancel: &CancelToken,
) -> Result<GreenNode> {
    cancel.check()?;
    let list = attribute::suppression_attribute_list(diagnostic, symbol, false);
    debug!("attaching [{ATTRIBUTE_NAME}] for {} to {:?}", diagnostic.id, declaration.kind());
    insert::attach_attribute(declaration, list)
}

/// Builds the assembly-scoped attribute and appends it to the unit.
pub fn suppress_with_assembly_attribute(
    unit: &SyntaxNode,
    diagnostic: &Diagnostic,
    symbol: &SymbolInfo,
    cancel: &CancelToken,
) -> Result<GreenNode> {
    cancel.check()?;
    let list = attribute::suppression_attribute_list(diagnostic, symbol, true);
    debug!("attaching [assembly: {ATTRIBUTE_NAME}] for {}", diagnostic.id);
    insert::attach_assembly_attribute(unit, list)
}

#[cfg(test)]
#[path = "../../tests/src/suppress/state_tests.rs"]
mod tests;
