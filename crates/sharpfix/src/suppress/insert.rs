use std::ops::Range;

use rowan::{GreenNode, NodeOrToken, TextSize};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::diagnostics::Diagnostic;
use crate::error::{Result, SuppressError};
use crate::suppress::pragma::{self, PragmaKeyword, ReformatFn};
use crate::syntax::ast::{AstNode, PragmaWarning};
use crate::syntax::cst::{GreenElement, SyntaxElement, SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;
use crate::syntax::trivia;

/// Header comment attached when the first assembly-scoped suppression
/// lands in a unit with no attribute lists and no leading trivia.
pub const FILE_BANNER: &str = "// This file records diagnostic suppressions applied at assembly scope.";

fn green_of(element: &SyntaxElement) -> GreenElement {
    match element {
        NodeOrToken::Node(node) => NodeOrToken::Node(node.green().into_owned()),
        NodeOrToken::Token(token) => NodeOrToken::Token(token.green().to_owned()),
    }
}

fn green_children(node: &GreenNode) -> Vec<GreenElement> {
    node.children()
        .map(|child| match child {
            NodeOrToken::Node(node) => NodeOrToken::Node(node.to_owned()),
            NodeOrToken::Token(token) => NodeOrToken::Token(token.to_owned()),
        })
        .collect()
}

/// Rebuilds `parent` with `range` of its children replaced, returning
/// the new tree root green.
fn splice(
    parent: &SyntaxNode,
    range: Range<usize>,
    replace_with: impl IntoIterator<Item = GreenElement>,
) -> GreenNode {
    let new_parent = parent.green().into_owned().splice_children(range, replace_with);
    parent.replace_with(new_parent)
}

fn is_token_kind(element: &SyntaxElement, kind: SyntaxKind) -> bool {
    element.as_token().is_some_and(|token| token.kind() == kind)
}

/// First end-of-line token at or after `offset`.
fn next_end_of_line(root: &SyntaxNode, offset: TextSize) -> Option<SyntaxToken> {
    let mut token = root.token_at_offset(offset).left_biased()?;
    loop {
        if token.kind() == SyntaxKind::EndOfLine {
            return Some(token);
        }
        token = token.next_token()?;
    }
}

/// First token of the line containing `offset`.
fn line_start_token(root: &SyntaxNode, offset: TextSize) -> Option<SyntaxToken> {
    let at = root.token_at_offset(offset);
    let mut token = at.clone().right_biased().or_else(|| at.left_biased())?;
    while let Some(prev) = token.prev_token() {
        if prev.kind() == SyntaxKind::EndOfLine {
            break;
        }
        token = prev;
    }
    Some(token)
}

/// Brackets the diagnostic's span with a disable/restore pair.
///
/// The restore line goes in first, before the end-of-line that closes the
/// span's last line; since its insertion point is at or past the span
/// end, the offsets used to place the disable stay valid. The disable
/// then lands at the start of the span's first line.
pub fn insert_pragma_suppression(
    root: &SyntaxNode,
    diagnostic: &Diagnostic,
    reformat: &ReformatFn<'_>,
    cancel: &CancelToken,
) -> Result<GreenNode> {
    cancel.check()?;
    if diagnostic.span.end() > root.text().len() {
        return Err(SuppressError::SpanOutOfBounds);
    }
    if root.first_token().is_none() {
        let mut sequence =
            pragma::synthesize_directive(diagnostic, PragmaKeyword::Disable, reformat, false, true, cancel)?;
        sequence.extend(pragma::synthesize_directive(
            diagnostic,
            PragmaKeyword::Restore,
            reformat,
            false,
            true,
            cancel,
        )?);
        return Ok(splice(root, 0..0, sequence));
    }

    let restore = pragma::synthesize_directive(diagnostic, PragmaKeyword::Restore, reformat, true, false, cancel)?;
    let with_restore = match next_end_of_line(root, diagnostic.span.end()) {
        Some(eol) => {
            let parent = eol.parent().ok_or(SuppressError::SpanOutOfBounds)?;
            let index = eol.index();
            splice(&parent, index..index, restore)
        },
        None => {
            // The span's line is the last line of the file.
            let last = root.last_token().ok_or(SuppressError::SpanOutOfBounds)?;
            let parent = last.parent().ok_or(SuppressError::SpanOutOfBounds)?;
            let index = last.index() + 1;
            splice(&parent, index..index, restore)
        },
    };

    let root = SyntaxNode::new_root(with_restore);
    let disable = pragma::synthesize_directive(diagnostic, PragmaKeyword::Disable, reformat, false, true, cancel)?;
    let anchor = line_start_token(&root, diagnostic.span.start()).ok_or(SuppressError::SpanOutOfBounds)?;
    let parent = anchor.parent().ok_or(SuppressError::SpanOutOfBounds)?;
    let index = anchor.index();
    debug!("inserted #pragma pair for {} around {:?}", diagnostic.id, diagnostic.span);
    Ok(splice(&parent, index..index, disable))
}

/// Removes the disable/restore pair bracketing the diagnostic's span.
/// The disable is the closest matching directive before the span; an
/// unterminated pair (no restore after the span) is removed as just the
/// disable line.
pub fn remove_pragma_suppression(
    root: &SyntaxNode,
    diagnostic: &Diagnostic,
    cancel: &CancelToken,
) -> Result<GreenNode> {
    cancel.check()?;
    let (disable, restore) =
        crate::suppress::find_bracketing_pair(root, diagnostic).ok_or_else(|| SuppressError::NoSuppression {
            id: diagnostic.id.clone(),
        })?;

    let disable_range = disable.syntax().text_range();
    let green = match restore {
        Some(restore) => {
            // Later line first so the disable's offsets survive.
            let green = remove_directive_line(restore.syntax())?;
            let root = SyntaxNode::new_root(green);
            let disable = root
                .covering_element(disable_range)
                .into_node()
                .and_then(PragmaWarning::cast)
                .ok_or_else(|| SuppressError::NoSuppression {
                    id: diagnostic.id.clone(),
                })?;
            remove_directive_line(disable.syntax())?
        },
        None => remove_directive_line(disable.syntax())?,
    };
    cancel.check()?;
    debug!("removed #pragma pair for {}", diagnostic.id);
    Ok(green)
}

/// Deletes a directive node together with its line: the indentation
/// before it, any same-line trailing whitespace or comment, and one
/// end-of-line.
fn remove_directive_line(node: &SyntaxNode) -> Result<GreenNode> {
    let parent = node.parent().ok_or(SuppressError::NotADirective(node.kind()))?;
    let siblings: Vec<SyntaxElement> = parent.children_with_tokens().collect();
    let index = node.index();

    let mut start = index;
    if index > 0
        && is_token_kind(&siblings[index - 1], SyntaxKind::Whitespace)
        && (index == 1 || is_token_kind(&siblings[index - 2], SyntaxKind::EndOfLine))
    {
        start = index - 1;
    }
    let mut end = index + 1;
    while end < siblings.len()
        && (is_token_kind(&siblings[end], SyntaxKind::Whitespace)
            || is_token_kind(&siblings[end], SyntaxKind::Comment))
    {
        end += 1;
    }
    if end < siblings.len() && is_token_kind(&siblings[end], SyntaxKind::EndOfLine) {
        end += 1;
    }
    Ok(splice(&parent, start..end, Vec::new()))
}

/// Attaches a symbol-scoped attribute list to a declaration.
///
/// With existing lists the new one is appended below them and the
/// declaration's leading trivia is untouched. With none, the entire
/// leading trivia run moves onto the new list, leaving the declaration
/// itself with no leading trivia.
pub fn attach_attribute(declaration: &SyntaxNode, list: GreenNode) -> Result<GreenNode> {
    if !declaration.kind().is_declaration() {
        return Err(SuppressError::NotADeclaration(declaration.kind()));
    }
    let children: Vec<SyntaxElement> = declaration.children_with_tokens().collect();
    let last_list = children
        .iter()
        .rposition(|element| element.as_node().is_some_and(|node| node.kind() == SyntaxKind::AttributeList));

    match last_list {
        Some(index) => {
            let indent = index
                .checked_sub(1)
                .and_then(|i| children[i].as_token())
                .filter(|token| token.kind() == SyntaxKind::Whitespace)
                .map(|token| token.text().to_string());
            let mut sequence = vec![trivia::end_of_line()];
            if let Some(indent) = &indent {
                sequence.push(trivia::whitespace(indent));
            }
            sequence.push(NodeOrToken::Node(list));
            Ok(splice(declaration, index + 1..index + 1, sequence))
        },
        None => {
            let run_len = children.iter().take_while(|element| trivia::is_trivia_element(element)).count();
            let indent = children[..run_len]
                .last()
                .and_then(|element| element.as_token())
                .filter(|token| token.kind() == SyntaxKind::Whitespace)
                .map(|token| token.text().to_string());

            // The new list node carries the moved trivia itself, plus the
            // line break and indentation separating it from the keyword.
            let mut list_children: Vec<GreenElement> =
                children[..run_len].iter().map(green_of).collect();
            list_children.extend(green_children(&list));
            list_children.push(trivia::end_of_line());
            if let Some(indent) = &indent {
                list_children.push(trivia::whitespace(indent));
            }
            let list = GreenNode::new(SyntaxKind::AttributeList.into(), list_children);
            Ok(splice(declaration, 0..run_len, [NodeOrToken::Node(list)]))
        },
    }
}

fn unit_has_leading_trivia(unit: &SyntaxNode) -> bool {
    match unit.first_token() {
        None => false,
        Some(token) => {
            token.kind().is_trivia_token()
                || token
                    .parent()
                    .is_some_and(|parent| matches!(parent.kind(), SyntaxKind::PragmaWarning | SyntaxKind::Directive))
        },
    }
}

/// Appends an assembly-scoped attribute list to the compilation unit.
///
/// The banner comment is added only when the unit has zero attribute
/// lists and zero leading trivia. The guard is on the list count, so once
/// a unit carries any attribute list, later insertions never add another
/// banner.
pub fn attach_assembly_attribute(unit: &SyntaxNode, list: GreenNode) -> Result<GreenNode> {
    if unit.kind() != SyntaxKind::Root {
        return Err(SuppressError::NotACompilationUnit(unit.kind()));
    }
    let children: Vec<SyntaxElement> = unit.children_with_tokens().collect();
    let last_list = children
        .iter()
        .rposition(|element| element.as_node().is_some_and(|node| node.kind() == SyntaxKind::AttributeList));

    if let Some(index) = last_list {
        if children.get(index + 1).is_some_and(|element| is_token_kind(element, SyntaxKind::EndOfLine)) {
            Ok(splice(unit, index + 2..index + 2, [NodeOrToken::Node(list), trivia::end_of_line()]))
        } else {
            Ok(splice(unit, index + 1..index + 1, [trivia::end_of_line(), NodeOrToken::Node(list)]))
        }
    } else {
        let run_len = children.iter().take_while(|element| trivia::is_trivia_element(element)).count();
        let mut sequence: Vec<GreenElement> = Vec::new();
        if !unit_has_leading_trivia(unit) {
            sequence.push(trivia::comment(FILE_BANNER));
            sequence.push(trivia::end_of_line());
            sequence.push(trivia::end_of_line());
        }
        sequence.push(NodeOrToken::Node(list));
        sequence.push(trivia::end_of_line());
        Ok(splice(unit, run_len..run_len, sequence))
    }
}

/// Removes a suppression attribute. When it is the only member of its
/// list the whole list goes, and any leading trivia the list carried,
/// relocated there by [`attach_attribute`], moves back to the owner.
pub fn remove_attribute(attribute: &SyntaxNode) -> Result<GreenNode> {
    if attribute.kind() != SyntaxKind::Attribute {
        return Err(SuppressError::NotAnAttribute(attribute.kind()));
    }
    let list = attribute
        .parent()
        .filter(|parent| parent.kind() == SyntaxKind::AttributeList)
        .ok_or(SuppressError::NotAnAttribute(attribute.kind()))?;
    let members = list.children().filter(|child| child.kind() == SyntaxKind::Attribute).count();
    if members == 1 {
        return remove_attribute_list(&list);
    }

    let siblings: Vec<SyntaxElement> = list.children_with_tokens().collect();
    let index = attribute.index();
    let mut start = index;
    let mut end = index + 1;
    let mut cursor = end;
    while cursor < siblings.len() && is_token_kind(&siblings[cursor], SyntaxKind::Whitespace) {
        cursor += 1;
    }
    if cursor < siblings.len() && is_token_kind(&siblings[cursor], SyntaxKind::Comma) {
        // Not the last member: drop the following ", ".
        end = cursor + 1;
        while end < siblings.len() && is_token_kind(&siblings[end], SyntaxKind::Whitespace) {
            end += 1;
        }
    } else {
        // Last member: drop the ", " before it.
        let mut back = index;
        while back > 0 && is_token_kind(&siblings[back - 1], SyntaxKind::Whitespace) {
            back -= 1;
        }
        if back > 0 && is_token_kind(&siblings[back - 1], SyntaxKind::Comma) {
            start = back - 1;
        }
    }
    Ok(splice(&list, start..end, Vec::new()))
}

/// Removes a whole attribute list, restoring any trivia it internally
/// carries before its `[` and absorbing the line break that followed a
/// source-parsed list.
pub fn remove_attribute_list(list: &SyntaxNode) -> Result<GreenNode> {
    let parent = list.parent().ok_or(SuppressError::NotAnAttribute(list.kind()))?;
    let siblings: Vec<SyntaxElement> = parent.children_with_tokens().collect();
    let index = list.index();

    let replacement: Vec<GreenElement> = list
        .children_with_tokens()
        .take_while(|element| trivia::is_trivia_element(element))
        .map(|element| green_of(&element))
        .collect();

    let mut end = index + 1;
    if replacement.is_empty()
        && end < siblings.len()
        && is_token_kind(&siblings[end], SyntaxKind::EndOfLine)
    {
        end += 1;
        if end < siblings.len() && is_token_kind(&siblings[end], SyntaxKind::Whitespace) {
            end += 1;
        }
    }
    Ok(splice(&parent, index..end, replacement))
}

#[cfg(test)]
#[path = "../../tests/src/suppress/insert_tests.rs"]
mod tests;
