use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::kind::SyntaxKind;

pub trait AstNode: Sized {
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

fn first_ident_token(syntax: &SyntaxNode) -> Option<SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == SyntaxKind::Ident)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    syntax: SyntaxNode,
}

impl AstNode for Root {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Root {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Root {
    pub fn attribute_lists(&self) -> impl Iterator<Item = AttributeList> {
        self.syntax.children().filter_map(AttributeList::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsingDirective {
    syntax: SyntaxNode,
}

impl AstNode for UsingDirective {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::UsingDirective {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceDecl {
    syntax: SyntaxNode,
}

impl AstNode for NamespaceDecl {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::NamespaceDecl {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl NamespaceDecl {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn body(&self) -> Option<Block> {
        self.syntax.children().find_map(Block::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassDecl {
    syntax: SyntaxNode,
}

impl AstNode for ClassDecl {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::ClassDecl {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl ClassDecl {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn body(&self) -> Option<Block> {
        self.syntax.children().find_map(Block::cast)
    }

    pub fn attribute_lists(&self) -> impl Iterator<Item = AttributeList> {
        self.syntax.children().filter_map(AttributeList::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDecl {
    syntax: SyntaxNode,
}

impl AstNode for MethodDecl {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::MethodDecl {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl MethodDecl {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn body(&self) -> Option<Block> {
        self.syntax.children().find_map(Block::cast)
    }

    pub fn attribute_lists(&self) -> impl Iterator<Item = AttributeList> {
        self.syntax.children().filter_map(AttributeList::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    syntax: SyntaxNode,
}

impl AstNode for FieldDecl {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::FieldDecl {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl FieldDecl {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    syntax: SyntaxNode,
}

impl AstNode for Block {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Block {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeList {
    syntax: SyntaxNode,
}

impl AstNode for AttributeList {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::AttributeList {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl AttributeList {
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> {
        self.syntax.children().filter_map(Attribute::cast)
    }

    /// Target specifier of `[assembly: ...]` / `[module: ...]` lists.
    /// Attribute names live inside `Attribute` children, so any direct
    /// `Ident` token child is the specifier.
    pub fn target_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn is_global(&self) -> bool {
        self.target_token()
            .is_some_and(|token| matches!(token.text(), "assembly" | "module"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    syntax: SyntaxNode,
}

impl AstNode for Attribute {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Attribute {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Attribute {
    /// Last segment of a possibly dotted attribute name.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::Ident)
            .last()
    }

    pub fn arg_list(&self) -> Option<AttributeArgList> {
        self.syntax.children().find_map(AttributeArgList::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeArgList {
    syntax: SyntaxNode,
}

impl AstNode for AttributeArgList {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::AttributeArgList {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl AttributeArgList {
    /// String literal tokens in argument order, quotes included.
    pub fn string_tokens(&self) -> Vec<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::String)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PragmaWarning {
    syntax: SyntaxNode,
}

impl AstNode for PragmaWarning {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::PragmaWarning {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl PragmaWarning {
    /// The disable/restore keyword: the third identifier, after `pragma`
    /// and `warning`.
    pub fn keyword_token(&self) -> Option<SyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::Ident)
            .nth(2)
    }

    pub fn disables(&self) -> bool {
        self.keyword_token().is_some_and(|token| token.text() == "disable")
    }

    pub fn restores(&self) -> bool {
        self.keyword_token().is_some_and(|token| token.text() == "restore")
    }

    /// Warning ids listed after the keyword. Both alphanumeric ids
    /// (`CS0219`) and bare numeric ids (`0219`) appear here.
    pub fn ids(&self) -> Vec<SyntaxToken> {
        let Some(keyword) = self.keyword_token() else {
            return Vec::new();
        };
        self.syntax
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .skip_while(|token| *token != keyword)
            .skip(1)
            .filter(|token| matches!(token.kind(), SyntaxKind::Ident | SyntaxKind::Integer))
            .collect()
    }

    pub fn mentions(&self, id: &str) -> bool {
        self.ids().iter().any(|token| token.text() == id)
    }
}
