use super::*;
use crate::syntax::cst::SyntaxNode;

fn check(input: &str, expected_tree: &str) {
    let parser = Parser::new(input);
    let green = parser.parse();
    let node = SyntaxNode::new_root(green);
    let actual_tree = format!("{:#?}", node);

    // Normalize newlines and trim
    let actual_tree = actual_tree.trim();
    let expected_tree = expected_tree.trim();

    assert_eq!(actual_tree, expected_tree);
}

fn check_lossless(input: &str) {
    let node = SyntaxNode::new_root(Parser::new(input).parse());
    assert_eq!(node.text().to_string(), input);
}

#[test]
fn test_empty() {
    check("", "Root@0..0");
}

#[test]
fn test_field_decl() {
    check(
        "int x = 1;",
        r#"
Root@0..10
  FieldDecl@0..10
    TypeRef@0..3
      KwInt@0..3 "int"
    Whitespace@3..4 " "
    Ident@4..5 "x"
    Whitespace@5..6 " "
    Equal@6..7 "="
    Whitespace@7..8 " "
    Integer@8..9 "1"
    Semicolon@9..10 ";"
"#,
    );
}

#[test]
fn test_class_with_method() {
    check(
        "class C { void M() { } }",
        r#"
Root@0..24
  ClassDecl@0..24
    KwClass@0..5 "class"
    Whitespace@5..6 " "
    Ident@6..7 "C"
    Whitespace@7..8 " "
    Block@8..24
      LBrace@8..9 "{"
      MethodDecl@9..22
        Whitespace@9..10 " "
        TypeRef@10..14
          KwVoid@10..14 "void"
        Whitespace@14..15 " "
        Ident@15..16 "M"
        ParameterList@16..18
          LParen@16..17 "("
          RParen@17..18 ")"
        Whitespace@18..19 " "
        Block@19..22
          LBrace@19..20 "{"
          Whitespace@20..21 " "
          RBrace@21..22 "}"
      Whitespace@22..23 " "
      RBrace@23..24 "}"
"#,
    );
}

#[test]
fn test_pragma_warning_excludes_trailing_comment() {
    check(
        "#pragma warning disable CS0219 // note\n",
        r##"
Root@0..39
  PragmaWarning@0..30
    Hash@0..1 "#"
    Ident@1..7 "pragma"
    Whitespace@7..8 " "
    Ident@8..15 "warning"
    Whitespace@15..16 " "
    Ident@16..23 "disable"
    Whitespace@23..24 " "
    Ident@24..30 "CS0219"
  Whitespace@30..31 " "
  Comment@31..38 "// note"
  EndOfLine@38..39 "\n"
"##,
    );
}

#[test]
fn test_pragma_warning_multiple_ids() {
    check(
        "#pragma warning restore CS1, CS2",
        r##"
Root@0..32
  PragmaWarning@0..32
    Hash@0..1 "#"
    Ident@1..7 "pragma"
    Whitespace@7..8 " "
    Ident@8..15 "warning"
    Whitespace@15..16 " "
    Ident@16..23 "restore"
    Whitespace@23..24 " "
    Ident@24..27 "CS1"
    Comma@27..28 ","
    Whitespace@28..29 " "
    Ident@29..32 "CS2"
"##,
    );
}

#[test]
fn test_assembly_attribute_list() {
    check(
        "[assembly: SuppressMessage(\"A\", \"B\")]\n",
        r#"
Root@0..38
  AttributeList@0..37
    LBracket@0..1 "["
    Ident@1..9 "assembly"
    Colon@9..10 ":"
    Whitespace@10..11 " "
    Attribute@11..36
      Ident@11..26 "SuppressMessage"
      AttributeArgList@26..36
        LParen@26..27 "("
        String@27..30 "\"A\""
        Comma@30..31 ","
        Whitespace@31..32 " "
        String@32..35 "\"B\""
        RParen@35..36 ")"
    RBracket@36..37 "]"
  EndOfLine@37..38 "\n"
"#,
    );
}

#[test]
fn test_attribute_list_wraps_into_declaration() {
    let input = "[Obsolete]\nclass C { }";
    let node = SyntaxNode::new_root(Parser::new(input).parse());
    let class = node
        .children()
        .find(|child| child.kind() == SyntaxKind::ClassDecl)
        .expect("class declaration");
    let list = class
        .children()
        .find(|child| child.kind() == SyntaxKind::AttributeList);
    assert!(list.is_some(), "attribute list should be a child of the declaration");
    assert_eq!(node.text().to_string(), input);
}

#[test]
fn test_leading_trivia_owned_by_declaration() {
    let input = "// header\nclass C { }";
    let node = SyntaxNode::new_root(Parser::new(input).parse());
    let class = node
        .children()
        .find(|child| child.kind() == SyntaxKind::ClassDecl)
        .expect("class declaration");
    let first = class.children_with_tokens().next().expect("first child");
    assert_eq!(first.kind(), SyntaxKind::Comment);
    assert_eq!(node.text().to_string(), input);
}

#[test]
fn test_directive_inside_method_body() {
    let input = "class C {\n    void M() {\n#pragma warning disable CS1\n        int x = 1;\n#pragma warning restore CS1\n    }\n}\n";
    let node = SyntaxNode::new_root(Parser::new(input).parse());
    let pragmas: Vec<_> = node
        .descendants()
        .filter(|descendant| descendant.kind() == SyntaxKind::PragmaWarning)
        .collect();
    assert_eq!(pragmas.len(), 2);
    assert_eq!(node.text().to_string(), input);
}

#[test]
fn test_lossless_round_trips() {
    check_lossless("using System;\n\nnamespace N\n{\n    class C\n    {\n    }\n}\n");
    check_lossless("namespace N;\n\npublic sealed class C<T> : Base where T : new()\n{\n    private readonly int _count = 0;\n\n    public int Count => _count;\n\n    public void M(int a, string b = \"x\")\n    {\n        var y = a + 1;\n    }\n}\n");
    check_lossless("enum E { A, B = 2 }\n");
    check_lossless("#if DEBUG\nclass Debug { }\n#endif\n");
    check_lossless("interface I\n{\n    int P { get; set; }\n}\n");
    check_lossless("/* block */ class C { } // tail");
    check_lossless("class Broken {\n    void M(\n}\n");
}
