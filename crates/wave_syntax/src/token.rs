//! Token definitions.
//!
//! Defines all tokens of the wave language: literals, operators,
//! punctuation, keywords, and the trivia kinds (newlines and comments) the
//! lexer keeps in the stream.

/// Token kind.
///
/// Tokens carry no length; fixed-width kinds know their own width via
/// [`TokenKind::fixed_len`] and variable-width kinds are re-scanned from
/// their start offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of file. Always the last token of a stream.
    Eof,
    /// A byte the lexer could not make sense of; one per offending byte.
    Bad,
    /// `\n` (also emitted for `\r\n`, anchored at the `\n` byte).
    Newline,
    /// `// …`
    Comment,
    /// `/// …`
    DocComment,
    /// `/* … */`, pairs nest.
    MultilineComment,

    /// Integer literal in any base.
    Int,
    /// Float literal.
    Float,
    /// `'c'`
    Char,
    /// `"…"`
    Str,
    /// `"""…"""`
    MultilineStr,
    /// Identifier.
    Ident,

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    Plus,
    PlusEq,
    Minus,
    MinusEq,
    /// `->`
    Arrow,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Amp,
    AmpAmp,
    AmpEq,
    Pipe,
    PipePipe,
    PipeEq,
    /// `|>`
    PipeGt,
    Caret,
    CaretEq,
    Tilde,
    Bang,
    BangEq,
    Question,
    Eq,
    EqEq,
    /// `=>`
    FatArrow,
    Lt,
    LtEq,
    /// `<<`
    Shl,
    ShlEq,
    Gt,
    GtEq,
    /// `>>`
    Shr,
    ShrEq,
    Comma,
    Semicolon,
    Colon,
    /// `::`
    ColonColon,
    /// `:=`
    ColonEq,
    Dot,
    /// `..`
    DotDot,
    /// `...`
    Ellipsis,
    At,

    KwAs,
    KwAlignof,
    KwAsm,
    KwBreak,
    KwContinue,
    KwContext,
    KwDefer,
    KwDistinct,
    KwElse,
    KwEnum,
    KwFor,
    KwForeign,
    KwFallthrough,
    KwIf,
    KwIn,
    KwImport,
    KwMut,
    KwMatch,
    KwMap,
    KwNew,
    KwOwn,
    KwOr,
    KwOffsetof,
    KwReturn,
    KwStruct,
    KwSizeof,
    KwTypeof,
    KwUsing,
    KwUnion,
    KwUndef,
    KwWhere,
    KwWhen,
}

impl TokenKind {
    /// The spelling of tokens whose text is fixed.
    pub fn lexeme(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            Plus => "+",
            PlusEq => "+=",
            Minus => "-",
            MinusEq => "-=",
            Arrow => "->",
            Star => "*",
            StarEq => "*=",
            Slash => "/",
            SlashEq => "/=",
            Percent => "%",
            PercentEq => "%=",
            Amp => "&",
            AmpAmp => "&&",
            AmpEq => "&=",
            Pipe => "|",
            PipePipe => "||",
            PipeEq => "|=",
            PipeGt => "|>",
            Caret => "^",
            CaretEq => "^=",
            Tilde => "~",
            Bang => "!",
            BangEq => "!=",
            Question => "?",
            Eq => "=",
            EqEq => "==",
            FatArrow => "=>",
            Lt => "<",
            LtEq => "<=",
            Shl => "<<",
            ShlEq => "<<=",
            Gt => ">",
            GtEq => ">=",
            Shr => ">>",
            ShrEq => ">>=",
            Comma => ",",
            Semicolon => ";",
            Colon => ":",
            ColonColon => "::",
            ColonEq => ":=",
            Dot => ".",
            DotDot => "..",
            Ellipsis => "...",
            At => "@",
            KwAs => "as",
            KwAlignof => "alignof",
            KwAsm => "asm",
            KwBreak => "break",
            KwContinue => "continue",
            KwContext => "context",
            KwDefer => "defer",
            KwDistinct => "distinct",
            KwElse => "else",
            KwEnum => "enum",
            KwFor => "for",
            KwForeign => "foreign",
            KwFallthrough => "fallthrough",
            KwIf => "if",
            KwIn => "in",
            KwImport => "import",
            KwMut => "mut",
            KwMatch => "match",
            KwMap => "map",
            KwNew => "new",
            KwOwn => "own",
            KwOr => "or",
            KwOffsetof => "offsetof",
            KwReturn => "return",
            KwStruct => "struct",
            KwSizeof => "sizeof",
            KwTypeof => "typeof",
            KwUsing => "using",
            KwUnion => "union",
            KwUndef => "undef",
            KwWhere => "where",
            KwWhen => "when",
            _ => return None,
        })
    }

    /// Byte length of fixed-width tokens; `None` means re-scan the source.
    pub fn fixed_len(self) -> Option<u32> {
        match self {
            TokenKind::Eof => Some(0),
            TokenKind::Bad | TokenKind::Newline => Some(1),
            _ => self.lexeme().map(|s| s.len() as u32),
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn show(self) -> &'static str {
        match self.lexeme() {
            Some(s) => s,
            None => match self {
                TokenKind::Eof => "end of file",
                TokenKind::Bad => "invalid token",
                TokenKind::Newline => "newline",
                TokenKind::Comment | TokenKind::DocComment | TokenKind::MultilineComment => {
                    "comment"
                }
                TokenKind::Int => "integer literal",
                TokenKind::Float => "float literal",
                TokenKind::Char => "character literal",
                TokenKind::Str | TokenKind::MultilineStr => "string literal",
                TokenKind::Ident => "identifier",
                _ => "token",
            },
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwAs
                | TokenKind::KwAlignof
                | TokenKind::KwAsm
                | TokenKind::KwBreak
                | TokenKind::KwContinue
                | TokenKind::KwContext
                | TokenKind::KwDefer
                | TokenKind::KwDistinct
                | TokenKind::KwElse
                | TokenKind::KwEnum
                | TokenKind::KwFor
                | TokenKind::KwForeign
                | TokenKind::KwFallthrough
                | TokenKind::KwIf
                | TokenKind::KwIn
                | TokenKind::KwImport
                | TokenKind::KwMut
                | TokenKind::KwMatch
                | TokenKind::KwMap
                | TokenKind::KwNew
                | TokenKind::KwOwn
                | TokenKind::KwOr
                | TokenKind::KwOffsetof
                | TokenKind::KwReturn
                | TokenKind::KwStruct
                | TokenKind::KwSizeof
                | TokenKind::KwTypeof
                | TokenKind::KwUsing
                | TokenKind::KwUnion
                | TokenKind::KwUndef
                | TokenKind::KwWhere
                | TokenKind::KwWhen
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::DocComment | TokenKind::MultilineComment
        )
    }
}
