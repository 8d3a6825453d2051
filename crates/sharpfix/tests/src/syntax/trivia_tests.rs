use super::*;
use crate::syntax::SyntaxTree;
use crate::syntax::kind::SyntaxKind;

fn first_declaration(tree: &SyntaxTree) -> SyntaxNode {
    tree.root()
        .children()
        .find(|child| child.kind().is_declaration())
        .expect("declaration")
}

#[test]
fn classifies_token_trivia() {
    let tree = SyntaxTree::parse("  // note\n/// doc\n/* b */class C { }");
    let class = first_declaration(&tree);
    let kinds: Vec<Trivia> = class
        .children_with_tokens()
        .take_while(|el| is_trivia_element(el))
        .filter_map(|el| classify(&el))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Trivia::Whitespace("  ".to_string()),
            Trivia::Comment("// note".to_string()),
            Trivia::EndOfLine("\n".to_string()),
            Trivia::DocComment("/// doc".to_string()),
            Trivia::EndOfLine("\n".to_string()),
            Trivia::BlockComment("/* b */".to_string()),
        ]
    );
}

#[test]
fn classifies_directive_nodes_as_trivia() {
    let tree = SyntaxTree::parse("#pragma warning disable CS1\nclass C { }");
    let class = first_declaration(&tree);
    let first = class.children_with_tokens().next().expect("first child");
    assert!(matches!(classify(&first), Some(Trivia::Directive(_))));
    assert!(is_trivia_element(&first));
}

#[test]
fn leading_run_stops_at_first_meaningful_token() {
    let tree = SyntaxTree::parse("// one\n// two\n    class C { }");
    let class = first_declaration(&tree);
    assert_eq!(leading_trivia_len(&class), 5);
    assert_eq!(trailing_indent(&class), Some("    ".to_string()));
}

#[test]
fn no_indent_when_run_ends_with_end_of_line() {
    let tree = SyntaxTree::parse("// one\nclass C { }");
    let class = first_declaration(&tree);
    assert_eq!(leading_trivia_len(&class), 2);
    assert_eq!(trailing_indent(&class), None);
}

#[test]
fn green_constructors_render_their_text() {
    let root = rowan::GreenNode::new(
        SyntaxKind::Root.into(),
        [whitespace("  "), comment("// c"), end_of_line()],
    );
    let node = SyntaxNode::new_root(root);
    assert_eq!(node.text().to_string(), "  // c\n");
}
