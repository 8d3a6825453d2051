use rowan::TextRange;

use super::*;
use crate::diagnostics::Severity;
use crate::error::SuppressError;
use crate::syntax::SyntaxTree;

fn identity(node: GreenNode) -> GreenNode {
    node
}

fn parse(source: &str) -> SyntaxNode {
    SyntaxTree::parse(source).root()
}

fn apply(green: GreenNode) -> String {
    SyntaxNode::new_root(green).text().to_string()
}

fn diag_at(source: &str, needle: &str, id: &str) -> Diagnostic {
    let start = source.find(needle).expect("needle in source") as u32;
    let end = start + needle.len() as u32;
    Diagnostic::new(id, "Compiler", "", Severity::Warning, TextRange::new(start.into(), end.into()))
}

fn member(name: &str) -> SymbolInfo {
    SymbolInfo {
        kind: SymbolKind::Member,
        qualified_name: name.to_string(),
    }
}

#[test]
fn directive_cycle_walks_the_states() {
    let source = "class C {\n    void M() {\n        int x = 1;\n    }\n}\n";
    let root = parse(source);
    let diagnostic = diag_at(source, "int x = 1;", "X0219");
    assert_eq!(suppression_state(&root, &diagnostic), SuppressionState::Unsuppressed);

    let edited = apply(insert::insert_pragma_suppression(&root, &diagnostic, &identity, &CancelToken::new()).unwrap());
    let root = parse(&edited);
    let diagnostic = diag_at(&edited, "int x = 1;", "X0219");
    assert_eq!(suppression_state(&root, &diagnostic), SuppressionState::SuppressedByDirective);

    let restored = apply(insert::remove_pragma_suppression(&root, &diagnostic, &CancelToken::new()).unwrap());
    let root = parse(&restored);
    let diagnostic = diag_at(&restored, "int x = 1;", "X0219");
    assert_eq!(suppression_state(&root, &diagnostic), SuppressionState::Unsuppressed);
}

#[test]
fn closed_pair_before_the_span_does_not_suppress() {
    let source = "#pragma warning disable CS1\nint a = 1;\n#pragma warning restore CS1\nint b = 2;\n";
    let root = parse(source);
    let diagnostic = diag_at(source, "int b = 2;", "CS1");
    assert_eq!(suppression_state(&root, &diagnostic), SuppressionState::Unsuppressed);
    assert!(find_bracketing_pair(&root, &diagnostic).is_none());
}

#[test]
fn unterminated_disable_still_suppresses() {
    let source = "#pragma warning disable CS1\nint a = 1;\n";
    let root = parse(source);
    let diagnostic = diag_at(source, "int a = 1;", "CS1");
    let (disable, restore) = find_bracketing_pair(&root, &diagnostic).expect("pair");
    assert!(disable.disables());
    assert!(restore.is_none());
}

#[test]
fn pair_matching_is_per_id() {
    let source = "#pragma warning disable CS1\nint a = 1;\n#pragma warning restore CS1\n";
    let root = parse(source);
    let other = diag_at(source, "int a = 1;", "CS2");
    assert!(find_bracketing_pair(&root, &other).is_none());
}

#[test]
fn attribute_cycle_walks_the_states() {
    let source = "class C {\n    void M() {\n        int x = 1;\n    }\n}\n";
    let root = parse(source);
    let diagnostic = diag_at(source, "int x = 1;", "X0219");
    let method = root
        .descendants()
        .find(|node| node.kind() == crate::syntax::kind::SyntaxKind::MethodDecl)
        .expect("method");
    let edited_root = SyntaxNode::new_root(
        suppress_with_attribute(&method, &diagnostic, &member("N.C.M"), &CancelToken::new()).unwrap(),
    );
    let shifted = diag_at(&edited_root.text().to_string(), "int x = 1;", "X0219");
    assert_eq!(suppression_state(&edited_root, &shifted), SuppressionState::SuppressedByAttribute);

    let attribute = find_suppression_attribute(&edited_root, "X0219").expect("attribute");
    let restored = SyntaxNode::new_root(insert::remove_attribute(attribute.syntax()).unwrap());
    assert_eq!(restored.text().to_string(), source);
    let diagnostic = diag_at(source, "int x = 1;", "X0219");
    assert_eq!(suppression_state(&restored, &diagnostic), SuppressionState::Unsuppressed);
}

#[test]
fn assembly_attribute_suppresses_by_rule_id_prefix() {
    let source = "class C {\n}\n";
    let root = parse(source);
    let mut diagnostic = diag_at(source, "class", "X0219");
    diagnostic.title = "Variable is assigned but never used".to_string();
    let edited_root = SyntaxNode::new_root(
        suppress_with_assembly_attribute(&root, &diagnostic, &member("N.C"), &CancelToken::new()).unwrap(),
    );
    assert!(find_suppression_attribute(&edited_root, "X0219").is_some());
    assert!(find_suppression_attribute(&edited_root, "X02").is_none());
}

#[test]
fn facade_checks_cancellation_first() {
    let source = "class C {\n}\n";
    let root = parse(source);
    let diagnostic = diag_at(source, "class", "X1");
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = suppress_with_assembly_attribute(&root, &diagnostic, &member("N.C"), &cancel);
    assert_eq!(result, Err(SuppressError::Cancelled));
}
