use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    Error = 0,
    Whitespace,
    EndOfLine,
    Comment,
    DocComment,
    BlockComment,

    // Identifiers & Literals
    Ident,
    Integer,
    Float,
    String,
    Char,

    // Preprocessor / punctuation
    Hash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Question,
    QuestionQuestion,
    FatArrow,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Amp,
    Pipe,
    Tilde,
    Exclaim,
    Equal,
    Less,
    Greater,
    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    EqualEqual,
    NotEqual,
    LessEqual,
    GreaterEqual,
    AndAnd,
    OrOr,

    // Keywords
    KwUsing,
    KwNamespace,
    KwClass,
    KwStruct,
    KwInterface,
    KwEnum,
    KwPublic,
    KwPrivate,
    KwProtected,
    KwInternal,
    KwStatic,
    KwReadonly,
    KwConst,
    KwAbstract,
    KwSealed,
    KwPartial,
    KwOverride,
    KwVirtual,
    KwNew,
    KwVoid,
    KwVar,
    KwInt,
    KwLong,
    KwFloat,
    KwDouble,
    KwBool,
    KwString,
    KwObject,
    KwReturn,

    // Composite Nodes (Parser output)
    Root,
    UsingDirective,
    NamespaceDecl,
    ClassDecl,
    StructDecl,
    InterfaceDecl,
    EnumDecl,
    MethodDecl,
    FieldDecl,
    PropertyDecl,
    ParameterList,
    Parameter,
    Block,
    TypeRef,
    AttributeList,
    Attribute,
    AttributeArgList,
    PragmaWarning,
    Directive,
}

impl SyntaxKind {
    /// Declaration-shaped nodes: valid targets for a symbol-scoped
    /// suppression attribute.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::NamespaceDecl
                | SyntaxKind::ClassDecl
                | SyntaxKind::StructDecl
                | SyntaxKind::InterfaceDecl
                | SyntaxKind::EnumDecl
                | SyntaxKind::MethodDecl
                | SyntaxKind::FieldDecl
                | SyntaxKind::PropertyDecl
        )
    }

    /// Trivia tokens: non-semantic source material attached between
    /// meaningful tokens.
    pub fn is_trivia_token(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace
                | SyntaxKind::EndOfLine
                | SyntaxKind::Comment
                | SyntaxKind::DocComment
                | SyntaxKind::BlockComment
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = ())] // Use unit type for error
pub enum TokenKind {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\r\n")]
    #[token("\n")]
    #[token("\r")]
    EndOfLine,

    #[regex(r"///[^\n\r]*", priority = 10, allow_greedy = true)]
    DocComment,

    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    Comment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // Preprocessor tokens
    #[token("#")]
    Hash,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("??")]
    QuestionQuestion,
    #[token("?")]
    Question,
    #[token("=>")]
    FatArrow,

    // Operators (multi-char first)
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("~")]
    Tilde,
    #[token("!")]
    Exclaim,
    #[token("=")]
    Equal,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    // Keywords
    #[token("using")]
    KwUsing,
    #[token("namespace")]
    KwNamespace,
    #[token("class")]
    KwClass,
    #[token("struct")]
    KwStruct,
    #[token("interface")]
    KwInterface,
    #[token("enum")]
    KwEnum,
    #[token("public")]
    KwPublic,
    #[token("private")]
    KwPrivate,
    #[token("protected")]
    KwProtected,
    #[token("internal")]
    KwInternal,
    #[token("static")]
    KwStatic,
    #[token("readonly")]
    KwReadonly,
    #[token("const")]
    KwConst,
    #[token("abstract")]
    KwAbstract,
    #[token("sealed")]
    KwSealed,
    #[token("partial")]
    KwPartial,
    #[token("override")]
    KwOverride,
    #[token("virtual")]
    KwVirtual,
    #[token("new")]
    KwNew,
    #[token("void")]
    KwVoid,
    #[token("var")]
    KwVar,
    #[token("int")]
    KwInt,
    #[token("long")]
    KwLong,
    #[token("float")]
    KwFloat,
    #[token("double")]
    KwDouble,
    #[token("bool")]
    KwBool,
    #[token("string")]
    KwString,
    #[token("object")]
    KwObject,
    #[token("return")]
    KwReturn,

    // Literals
    #[regex(r"[a-zA-Z_@][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r#"'([^'\\]|\\[\s\S])'"#)]
    Char,
    #[regex(r#""([^"\\\n\r]|\\[\s\S])*""#)]
    String,
    #[regex(r"0[xX][0-9A-Fa-f](_?[0-9A-Fa-f])*[uUlL]*")]
    #[regex(r"[0-9](_?[0-9])*[uUlL]*")]
    Integer,
    #[regex(r"[0-9](_?[0-9])*\.[0-9](_?[0-9])*([eE][+-]?[0-9]+)?[fFdDmM]?")]
    Float,
}

impl From<TokenKind> for SyntaxKind {
    fn from(token: TokenKind) -> Self {
        match token {
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::EndOfLine => SyntaxKind::EndOfLine,
            TokenKind::Comment => SyntaxKind::Comment,
            TokenKind::DocComment => SyntaxKind::DocComment,
            TokenKind::BlockComment => SyntaxKind::BlockComment,
            TokenKind::Hash => SyntaxKind::Hash,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::LBrace => SyntaxKind::LBrace,
            TokenKind::RBrace => SyntaxKind::RBrace,
            TokenKind::LBracket => SyntaxKind::LBracket,
            TokenKind::RBracket => SyntaxKind::RBracket,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Colon => SyntaxKind::Colon,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::QuestionQuestion => SyntaxKind::QuestionQuestion,
            TokenKind::Question => SyntaxKind::Question,
            TokenKind::FatArrow => SyntaxKind::FatArrow,
            TokenKind::PlusPlus => SyntaxKind::PlusPlus,
            TokenKind::MinusMinus => SyntaxKind::MinusMinus,
            TokenKind::PlusEqual => SyntaxKind::PlusEqual,
            TokenKind::MinusEqual => SyntaxKind::MinusEqual,
            TokenKind::StarEqual => SyntaxKind::StarEqual,
            TokenKind::SlashEqual => SyntaxKind::SlashEqual,
            TokenKind::EqualEqual => SyntaxKind::EqualEqual,
            TokenKind::NotEqual => SyntaxKind::NotEqual,
            TokenKind::LessEqual => SyntaxKind::LessEqual,
            TokenKind::GreaterEqual => SyntaxKind::GreaterEqual,
            TokenKind::AndAnd => SyntaxKind::AndAnd,
            TokenKind::OrOr => SyntaxKind::OrOr,
            TokenKind::Plus => SyntaxKind::Plus,
            TokenKind::Minus => SyntaxKind::Minus,
            TokenKind::Star => SyntaxKind::Star,
            TokenKind::Slash => SyntaxKind::Slash,
            TokenKind::Percent => SyntaxKind::Percent,
            TokenKind::Caret => SyntaxKind::Caret,
            TokenKind::Amp => SyntaxKind::Amp,
            TokenKind::Pipe => SyntaxKind::Pipe,
            TokenKind::Tilde => SyntaxKind::Tilde,
            TokenKind::Exclaim => SyntaxKind::Exclaim,
            TokenKind::Equal => SyntaxKind::Equal,
            TokenKind::Less => SyntaxKind::Less,
            TokenKind::Greater => SyntaxKind::Greater,
            TokenKind::KwUsing => SyntaxKind::KwUsing,
            TokenKind::KwNamespace => SyntaxKind::KwNamespace,
            TokenKind::KwClass => SyntaxKind::KwClass,
            TokenKind::KwStruct => SyntaxKind::KwStruct,
            TokenKind::KwInterface => SyntaxKind::KwInterface,
            TokenKind::KwEnum => SyntaxKind::KwEnum,
            TokenKind::KwPublic => SyntaxKind::KwPublic,
            TokenKind::KwPrivate => SyntaxKind::KwPrivate,
            TokenKind::KwProtected => SyntaxKind::KwProtected,
            TokenKind::KwInternal => SyntaxKind::KwInternal,
            TokenKind::KwStatic => SyntaxKind::KwStatic,
            TokenKind::KwReadonly => SyntaxKind::KwReadonly,
            TokenKind::KwConst => SyntaxKind::KwConst,
            TokenKind::KwAbstract => SyntaxKind::KwAbstract,
            TokenKind::KwSealed => SyntaxKind::KwSealed,
            TokenKind::KwPartial => SyntaxKind::KwPartial,
            TokenKind::KwOverride => SyntaxKind::KwOverride,
            TokenKind::KwVirtual => SyntaxKind::KwVirtual,
            TokenKind::KwNew => SyntaxKind::KwNew,
            TokenKind::KwVoid => SyntaxKind::KwVoid,
            TokenKind::KwVar => SyntaxKind::KwVar,
            TokenKind::KwInt => SyntaxKind::KwInt,
            TokenKind::KwLong => SyntaxKind::KwLong,
            TokenKind::KwFloat => SyntaxKind::KwFloat,
            TokenKind::KwDouble => SyntaxKind::KwDouble,
            TokenKind::KwBool => SyntaxKind::KwBool,
            TokenKind::KwString => SyntaxKind::KwString,
            TokenKind::KwObject => SyntaxKind::KwObject,
            TokenKind::KwReturn => SyntaxKind::KwReturn,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::Char => SyntaxKind::Char,
            TokenKind::String => SyntaxKind::String,
            TokenKind::Integer => SyntaxKind::Integer,
            TokenKind::Float => SyntaxKind::Float,
        }
    }
}
