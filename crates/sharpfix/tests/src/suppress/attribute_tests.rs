use rowan::TextRange;

use super::*;
use crate::diagnostics::Severity;
use crate::syntax::ast::{AstNode, AttributeList};
use crate::syntax::cst::SyntaxNode;

fn diag(id: &str, title: &str) -> Diagnostic {
    Diagnostic::new(
        id,
        "Compiler",
        title,
        Severity::Warning,
        TextRange::new(0.into(), 0.into()),
    )
}

fn member(name: &str) -> SymbolInfo {
    SymbolInfo {
        kind: SymbolKind::Member,
        qualified_name: name.to_string(),
    }
}

fn render(list: rowan::GreenNode) -> String {
    SyntaxNode::new_root(list).text().to_string()
}

#[test]
fn rule_id_joins_id_and_title() {
    assert_eq!(rule_id(&diag("X0219", "Variable is assigned but never used")), "X0219:Variable is assigned but never used");
    assert_eq!(rule_id(&diag("X0219", "")), "X0219");
    assert_eq!(rule_id(&diag("X0219", "  ")), "X0219");
}

#[test]
fn scope_mapping_is_total_over_symbol_kinds() {
    assert_eq!(target_scope(SymbolKind::Member), Some("member"));
    assert_eq!(target_scope(SymbolKind::Type), Some("type"));
    assert_eq!(target_scope(SymbolKind::Namespace), Some("namespace"));
    assert_eq!(target_scope(SymbolKind::Module), Some("module"));
    assert_eq!(target_scope(SymbolKind::Assembly), None);
    assert_eq!(target_scope(SymbolKind::Parameter), None);
    assert_eq!(target_scope(SymbolKind::ReturnValue), None);
    assert_eq!(target_scope(SymbolKind::Local), None);
}

#[test]
fn symbol_scoped_list_has_three_arguments() {
    let arguments = suppression_arguments(&diag("X1", "t"), &member("N.C.M"), false);
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[0].name, None);
    assert_eq!(arguments[0].value, "Compiler");
    assert_eq!(arguments[1].name, None);
    assert_eq!(arguments[1].value, "X1:t");
    assert_eq!(arguments[2].name, Some("Justification"));
    assert_eq!(arguments[2].value, JUSTIFICATION_PENDING);
}

#[test]
fn mapped_kind_at_assembly_scope_has_five_arguments() {
    let arguments = suppression_arguments(&diag("X1", "t"), &member("N.C.M"), true);
    assert_eq!(arguments.len(), 5);
    assert_eq!(arguments[3].name, Some("Scope"));
    assert_eq!(arguments[3].value, "member");
    assert_eq!(arguments[4].name, Some("Target"));
    assert_eq!(arguments[4].value, "N.C.M");
}

#[test]
fn unmapped_kind_at_assembly_scope_omits_scope_and_target() {
    let symbol = SymbolInfo {
        kind: SymbolKind::Parameter,
        qualified_name: "N.C.M(x)".to_string(),
    };
    let arguments = suppression_arguments(&diag("X1", "t"), &symbol, true);
    assert_eq!(arguments.len(), 3);
}

#[test]
fn symbol_scoped_attribute_renders_exactly() {
    let list = suppression_attribute_list(
        &diag("X0219", "Variable is assigned but never used"),
        &member("N.C.M"),
        false,
    );
    assert_eq!(
        render(list),
        "[SuppressMessage(\"Compiler\", \"X0219:Variable is assigned but never used\", Justification = \"<Pending>\")]"
    );
}

#[test]
fn assembly_scoped_attribute_renders_exactly() {
    let list = suppression_attribute_list(&diag("X0219", ""), &member("N.C.M"), true);
    assert_eq!(
        render(list),
        "[assembly: SuppressMessage(\"Compiler\", \"X0219\", Justification = \"<Pending>\", Scope = \"member\", Target = \"N.C.M\")]"
    );
}

#[test]
fn argument_values_are_string_escaped() {
    let list = suppression_attribute_list(&diag("X1", "say \"hi\" with \\slashes"), &member("M"), false);
    assert_eq!(
        render(list),
        "[SuppressMessage(\"Compiler\", \"X1:say \\\"hi\\\" with \\\\slashes\", Justification = \"<Pending>\")]"
    );
}

#[test]
fn built_list_reparses_to_the_same_shape() {
    let list = suppression_attribute_list(&diag("X1", "t"), &member("N.C.M"), true);
    let text = render(list);
    let tree = crate::syntax::SyntaxTree::parse(&text);
    let parsed = tree
        .root()
        .children()
        .find_map(AttributeList::cast)
        .expect("attribute list");
    assert!(parsed.is_global());
    let attribute = parsed.attributes().next().expect("attribute");
    assert_eq!(attribute.name_token().expect("name").text(), ATTRIBUTE_NAME);
    assert_eq!(attribute.arg_list().expect("args").string_tokens().len(), 5);
}
