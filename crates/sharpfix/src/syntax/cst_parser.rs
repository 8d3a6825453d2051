use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};

use crate::syntax::{kind::SyntaxKind, lexer::Lexer};

/// Lossless parser for the C#-shaped subset the suppression engine edits.
///
/// Every input byte ends up in the tree: declarations are recognized with
/// shallow lookahead, anything else is consumed with balanced-bracket
/// recovery. Trivia preceding a declaration is wrapped into the declaration
/// node (builder checkpoints), so a declaration owns its leading trivia.
/// `#pragma warning` lines become structured `PragmaWarning` nodes that end
/// after their last id; the same-line trailing comment and the terminating
/// end-of-line stay outside the node.
pub struct Parser<'a> {
    tokens: Vec<(SyntaxKind, &'a str)>,
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    line_start: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let tokens: Vec<_> = Lexer::new(input).collect();
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            line_start: true,
        }
    }

    pub fn parse(mut self) -> GreenNode {
        self.builder.start_node(SyntaxKind::Root.into());
        self.parse_members(None);
        self.builder.finish_node();
        self.builder.finish()
    }

    /// Member loop shared by the compilation unit and type bodies.
    fn parse_members(&mut self, end: Option<SyntaxKind>) {
        loop {
            let cp = self.builder.checkpoint();
            self.skip_trivia_and_directives();
            if self.is_eof() {
                break;
            }
            if let Some(end) = end
                && self.at(end)
            {
                break;
            }

            let mut global_attrs = false;
            while self.at(SyntaxKind::LBracket) {
                global_attrs = self.parse_attribute_list();
                self.skip_trivia();
                if global_attrs {
                    // Assembly/module-targeted lists stand alone as unit
                    // children rather than decorating the next declaration.
                    break;
                }
            }
            if global_attrs {
                continue;
            }
            if self.is_eof() {
                break;
            }
            if let Some(end) = end
                && self.at(end)
            {
                break;
            }

            self.parse_declaration(cp);
        }
    }

    fn parse_declaration(&mut self, cp: Checkpoint) {
        // Trivia between an attribute list and the keyword.
        self.skip_trivia();
        while is_modifier(self.peek()) {
            self.bump();
            self.skip_trivia();
        }

        match self.peek() {
            SyntaxKind::KwUsing => {
                self.builder.start_node_at(cp, SyntaxKind::UsingDirective.into());
                self.bump();
                self.consume_until_semi();
                self.builder.finish_node();
            },
            SyntaxKind::KwNamespace => self.parse_namespace_decl(cp),
            SyntaxKind::KwClass => self.parse_type_decl(cp, SyntaxKind::ClassDecl),
            SyntaxKind::KwStruct => self.parse_type_decl(cp, SyntaxKind::StructDecl),
            SyntaxKind::KwInterface => self.parse_type_decl(cp, SyntaxKind::InterfaceDecl),
            SyntaxKind::KwEnum => self.parse_enum_decl(cp),
            _ => self.parse_member(cp),
        }
    }

    fn parse_namespace_decl(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, SyntaxKind::NamespaceDecl.into());
        self.bump(); // namespace keyword
        while !self.is_eof() && !self.at(SyntaxKind::LBrace) && !self.at(SyntaxKind::Semicolon) {
            self.bump();
        }
        if self.at(SyntaxKind::LBrace) {
            self.start_node(SyntaxKind::Block);
            self.bump();
            self.parse_members(Some(SyntaxKind::RBrace));
            if self.at(SyntaxKind::RBrace) {
                self.bump();
            }
            self.finish_node();
        } else if self.at(SyntaxKind::Semicolon) {
            // File-scoped namespace; members follow as unit children.
            self.bump();
        }
        self.builder.finish_node();
    }

    fn parse_type_decl(&mut self, cp: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(cp, kind.into());
        self.bump(); // class/struct/interface keyword
        self.skip_trivia();
        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        // Generic parameters, base list, constraints.
        while !self.is_eof() && !self.at(SyntaxKind::LBrace) && !self.at(SyntaxKind::Semicolon) {
            self.bump();
        }
        if self.at(SyntaxKind::LBrace) {
            self.start_node(SyntaxKind::Block);
            self.bump();
            self.parse_members(Some(SyntaxKind::RBrace));
            if self.at(SyntaxKind::RBrace) {
                self.bump();
            }
            self.finish_node();
        }
        if self.at(SyntaxKind::Semicolon) {
            self.bump();
        }
        self.builder.finish_node();
    }

    fn parse_enum_decl(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, SyntaxKind::EnumDecl.into());
        self.bump(); // enum keyword
        self.skip_trivia();
        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        while !self.is_eof() && !self.at(SyntaxKind::LBrace) && !self.at(SyntaxKind::Semicolon) {
            self.bump();
        }
        if self.at(SyntaxKind::LBrace) {
            self.start_node(SyntaxKind::Block);
            self.consume_balanced(SyntaxKind::LBrace, SyntaxKind::RBrace);
            self.finish_node();
        }
        if self.at(SyntaxKind::Semicolon) {
            self.bump();
        }
        self.builder.finish_node();
    }

    /// Method, field, or property, decided by which terminator shows up
    /// first in the token stream.
    fn parse_member(&mut self, cp: Checkpoint) {
        let Some(kind) = self.member_lookahead() else {
            // Consume unexpected token to make progress
            self.bump();
            return;
        };

        self.builder.start_node_at(cp, kind.into());
        self.parse_type_ref();
        self.skip_trivia();
        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        // Stray declarator tokens: generic arity, explicit interface
        // prefixes, operator punctuation.
        while !self.is_eof() && !at_member_terminator(self.peek()) {
            self.bump();
        }
        if self.at(SyntaxKind::LParen) {
            self.parse_parameter_list();
            self.skip_trivia();
            // Constraints between the parameter list and the body.
            while !self.is_eof()
                && !matches!(
                    self.peek(),
                    SyntaxKind::LBrace | SyntaxKind::FatArrow | SyntaxKind::Semicolon | SyntaxKind::RBrace
                )
            {
                self.bump();
            }
        }
        match self.peek() {
            SyntaxKind::LBrace => self.parse_block(),
            SyntaxKind::FatArrow | SyntaxKind::Equal => {
                self.bump();
                self.consume_until_semi();
            },
            SyntaxKind::Semicolon => self.bump(),
            _ => {},
        }
        self.builder.finish_node();
    }

    fn member_lookahead(&self) -> Option<SyntaxKind> {
        let mut idx = self.pos;
        while idx < self.tokens.len() {
            let (kind, _) = self.tokens[idx];
            match kind {
                k if k.is_trivia_token() => {},
                SyntaxKind::LParen => return Some(SyntaxKind::MethodDecl),
                SyntaxKind::LBrace | SyntaxKind::FatArrow => return Some(SyntaxKind::PropertyDecl),
                SyntaxKind::Semicolon | SyntaxKind::Equal => return Some(SyntaxKind::FieldDecl),
                SyntaxKind::RBrace | SyntaxKind::Hash => return None,
                _ => {},
            }
            idx += 1;
        }
        None
    }

    fn parse_parameter_list(&mut self) {
        self.start_node(SyntaxKind::ParameterList);
        if self.at(SyntaxKind::LParen) {
            self.bump();
        }

        while !self.is_eof() && !self.at(SyntaxKind::RParen) {
            self.skip_trivia();
            if self.is_eof() || self.at(SyntaxKind::RParen) {
                break;
            }

            let pos_before = self.pos;
            self.parse_parameter();

            // Ensure progress
            if self.pos == pos_before {
                self.bump();
            }

            self.skip_trivia();
            if self.at(SyntaxKind::Comma) {
                self.bump();
            }
        }

        if self.at(SyntaxKind::RParen) {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_parameter(&mut self) {
        self.start_node(SyntaxKind::Parameter);
        while self.at(SyntaxKind::LBracket) {
            self.parse_attribute_list();
            self.skip_trivia();
        }
        self.parse_type_ref();
        self.skip_trivia();
        if self.at(SyntaxKind::Ident) {
            self.bump();
        }
        // Default value or remaining declarator tokens.
        while !self.is_eof() && !self.at(SyntaxKind::Comma) && !self.at(SyntaxKind::RParen) {
            match self.peek() {
                SyntaxKind::LParen => self.consume_balanced(SyntaxKind::LParen, SyntaxKind::RParen),
                SyntaxKind::LBracket => self.consume_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket),
                SyntaxKind::LBrace => self.consume_balanced(SyntaxKind::LBrace, SyntaxKind::RBrace),
                _ => self.bump(),
            }
        }
        self.finish_node();
    }

    fn parse_type_ref(&mut self) -> bool {
        if !self.at_type_starter() {
            return false;
        }
        self.start_node(SyntaxKind::TypeRef);
        self.bump();
        loop {
            match self.peek() {
                SyntaxKind::Dot => {
                    if matches!(self.tokens.get(self.pos + 1), Some((SyntaxKind::Ident, _))) {
                        self.bump();
                        self.bump();
                    } else {
                        break;
                    }
                },
                SyntaxKind::Less => self.consume_balanced(SyntaxKind::Less, SyntaxKind::Greater),
                SyntaxKind::Question => self.bump(),
                SyntaxKind::LBracket => {
                    // Array suffix only; `[` that starts an indexer arm is
                    // left for the caller.
                    if matches!(self.peek_nth_non_trivia(1), Some(SyntaxKind::RBracket | SyntaxKind::Comma)) {
                        self.consume_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
                    } else {
                        break;
                    }
                },
                _ => break,
            }
        }
        self.finish_node();
        true
    }

    /// `[Name(...)]` or `[assembly: Name(...)]`. Returns true for
    /// assembly/module-targeted lists.
    fn parse_attribute_list(&mut self) -> bool {
        self.start_node(SyntaxKind::AttributeList);
        self.bump(); // [
        self.skip_trivia();
        let mut global = false;
        if self.at(SyntaxKind::Ident) && self.peek_nth_non_trivia(1) == Some(SyntaxKind::Colon) {
            global = matches!(self.peek_text(), "assembly" | "module");
            self.bump(); // target specifier
            self.skip_trivia();
            self.bump(); // colon
            self.skip_trivia();
        }
        while !self.is_eof() && !self.at(SyntaxKind::RBracket) {
            if self.at(SyntaxKind::Ident) {
                self.parse_attribute();
            } else {
                self.bump();
            }
            self.skip_trivia();
            if self.at(SyntaxKind::Comma) {
                self.bump();
                self.skip_trivia();
            }
        }
        if self.at(SyntaxKind::RBracket) {
            self.bump();
        }
        self.finish_node();
        global
    }

    fn parse_attribute(&mut self) {
        self.start_node(SyntaxKind::Attribute);
        self.bump(); // name
        while self.at(SyntaxKind::Dot) && matches!(self.tokens.get(self.pos + 1), Some((SyntaxKind::Ident, _))) {
            self.bump();
            self.bump();
        }
        if self.peek_nth_non_trivia(0) == Some(SyntaxKind::LParen) {
            self.skip_trivia();
            self.start_node(SyntaxKind::AttributeArgList);
            self.consume_balanced(SyntaxKind::LParen, SyntaxKind::RParen);
            self.finish_node();
        }
        self.finish_node();
    }

    /// Bodies are consumed as balanced token runs; the only structure
    /// recognized inside is `#...` directive lines.
    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.bump(); // {
        let mut depth = 1usize;
        while !self.is_eof() {
            if self.line_start && self.at(SyntaxKind::Hash) {
                self.parse_directive();
                continue;
            }
            match self.peek() {
                SyntaxKind::LBrace => {
                    depth += 1;
                    self.bump();
                },
                SyntaxKind::RBrace => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        break;
                    }
                },
                _ => self.bump(),
            }
        }
        self.finish_node();
    }

    fn parse_directive(&mut self) {
        if self.at_pragma_warning() {
            self.parse_pragma_warning();
        } else {
            self.start_node(SyntaxKind::Directive);
            while !self.is_eof() && !self.at(SyntaxKind::EndOfLine) {
                self.bump();
            }
            self.finish_node();
        }
    }

    /// `#pragma warning disable|restore ID[, ID...]`. The node ends after
    /// the last id so a trailing comment stays outside it.
    fn parse_pragma_warning(&mut self) {
        self.start_node(SyntaxKind::PragmaWarning);
        self.bump(); // '#'
        self.bump_inline_ws();
        self.bump(); // pragma
        self.bump_inline_ws();
        self.bump(); // warning
        if self.try_bump_inline(SyntaxKind::Ident) {
            // keyword consumed; now the id list
            if self.try_bump_inline(SyntaxKind::Ident) || self.try_bump_inline(SyntaxKind::Integer) {
                loop {
                    if !self.try_bump_inline(SyntaxKind::Comma) {
                        break;
                    }
                    if !(self.try_bump_inline(SyntaxKind::Ident) || self.try_bump_inline(SyntaxKind::Integer)) {
                        break;
                    }
                }
            }
        }
        self.finish_node();
    }

    fn at_pragma_warning(&self) -> bool {
        let mut idx = self.pos + 1;
        let mut saw_pragma = false;
        while idx < self.tokens.len() {
            let (kind, text) = self.tokens[idx];
            match kind {
                SyntaxKind::Whitespace => {},
                SyntaxKind::Ident if !saw_pragma && text == "pragma" => saw_pragma = true,
                SyntaxKind::Ident if saw_pragma && text == "warning" => return true,
                _ => return false,
            }
            idx += 1;
        }
        false
    }

    fn skip_trivia(&mut self) {
        while !self.is_eof() && self.peek().is_trivia_token() {
            self.bump();
        }
    }

    fn skip_trivia_and_directives(&mut self) {
        loop {
            if self.is_eof() {
                break;
            }
            if self.peek().is_trivia_token() {
                self.bump();
            } else if self.line_start && self.at(SyntaxKind::Hash) {
                self.parse_directive();
            } else {
                break;
            }
        }
    }

    fn bump_inline_ws(&mut self) {
        while self.at(SyntaxKind::Whitespace) {
            self.bump();
        }
    }

    /// Bump inline whitespace plus the next token iff that token has the
    /// given kind; otherwise consume nothing.
    fn try_bump_inline(&mut self, kind: SyntaxKind) -> bool {
        let mut idx = self.pos;
        while idx < self.tokens.len() && self.tokens[idx].0 == SyntaxKind::Whitespace {
            idx += 1;
        }
        if idx < self.tokens.len() && self.tokens[idx].0 == kind {
            while self.pos <= idx {
                self.bump();
            }
            true
        } else {
            false
        }
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn peek(&self) -> SyntaxKind {
        if self.is_eof() {
            return SyntaxKind::Error;
        }
        self.tokens[self.pos].0
    }

    fn peek_text(&self) -> &'a str {
        if self.is_eof() {
            return "";
        }
        self.tokens[self.pos].1
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.peek() == kind
    }

    fn bump(&mut self) {
        if !self.is_eof() {
            let (kind, text) = self.tokens[self.pos];
            self.builder.token(kind.into(), text);
            self.pos += 1;
            match kind {
                SyntaxKind::EndOfLine => self.line_start = true,
                k if k.is_trivia_token() => {},
                _ => self.line_start = false,
            }
        }
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at_type_starter(&self) -> bool {
        matches!(
            self.peek(),
            SyntaxKind::Ident
                | SyntaxKind::KwVoid
                | SyntaxKind::KwVar
                | SyntaxKind::KwInt
                | SyntaxKind::KwLong
                | SyntaxKind::KwFloat
                | SyntaxKind::KwDouble
                | SyntaxKind::KwBool
                | SyntaxKind::KwString
                | SyntaxKind::KwObject
        )
    }

    fn consume_until_semi(&mut self) {
        while !self.is_eof() && !self.at(SyntaxKind::Semicolon) {
            match self.peek() {
                SyntaxKind::LBrace => self.consume_balanced(SyntaxKind::LBrace, SyntaxKind::RBrace),
                _ => self.bump(),
            }
        }
        if self.at(SyntaxKind::Semicolon) {
            self.bump();
        }
    }

    fn consume_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        if !self.at(open) {
            return;
        }
        let mut depth = 0usize;
        while !self.is_eof() {
            if self.at(open) {
                depth += 1;
            } else if self.at(close) {
                depth = depth.saturating_sub(1);
                self.bump();
                if depth == 0 {
                    break;
                }
                continue;
            }
            self.bump();
        }
    }

    fn peek_nth_non_trivia(&self, nth: usize) -> Option<SyntaxKind> {
        let mut count = 0usize;
        let mut idx = self.pos;
        while idx < self.tokens.len() {
            let (kind, _) = self.tokens[idx];
            if !kind.is_trivia_token() {
                if count == nth {
                    return Some(kind);
                }
                count += 1;
            }
            idx += 1;
        }
        None
    }
}

fn is_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::KwPublic
            | SyntaxKind::KwPrivate
            | SyntaxKind::KwProtected
            | SyntaxKind::KwInternal
            | SyntaxKind::KwStatic
            | SyntaxKind::KwReadonly
            | SyntaxKind::KwConst
            | SyntaxKind::KwAbstract
            | SyntaxKind::KwSealed
            | SyntaxKind::KwPartial
            | SyntaxKind::KwOverride
            | SyntaxKind::KwVirtual
            | SyntaxKind::KwNew
    )
}

fn at_member_terminator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::LParen
            | SyntaxKind::LBrace
            | SyntaxKind::FatArrow
            | SyntaxKind::Equal
            | SyntaxKind::Semicolon
            | SyntaxKind::RBrace
    )
}

#[cfg(test)]
#[path = "../../tests/src/syntax/cst_parser_tests.rs"]
mod tests;
