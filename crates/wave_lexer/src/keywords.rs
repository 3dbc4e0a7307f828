use phf::phf_map;
use wave_syntax::TokenKind;

/// Keyword table. Identifiers of length ≤ 11 ("fallthrough" is the longest
/// entry) are looked up here after scanning.
pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "as" => TokenKind::KwAs,
    "alignof" => TokenKind::KwAlignof,
    "asm" => TokenKind::KwAsm,
    "break" => TokenKind::KwBreak,
    "continue" => TokenKind::KwContinue,
    "context" => TokenKind::KwContext,
    "defer" => TokenKind::KwDefer,
    "distinct" => TokenKind::KwDistinct,
    "else" => TokenKind::KwElse,
    "enum" => TokenKind::KwEnum,
    "for" => TokenKind::KwFor,
    "foreign" => TokenKind::KwForeign,
    "fallthrough" => TokenKind::KwFallthrough,
    "if" => TokenKind::KwIf,
    "in" => TokenKind::KwIn,
    "import" => TokenKind::KwImport,
    "mut" => TokenKind::KwMut,
    "match" => TokenKind::KwMatch,
    "map" => TokenKind::KwMap,
    "new" => TokenKind::KwNew,
    "own" => TokenKind::KwOwn,
    "or" => TokenKind::KwOr,
    "offsetof" => TokenKind::KwOffsetof,
    "return" => TokenKind::KwReturn,
    "struct" => TokenKind::KwStruct,
    "sizeof" => TokenKind::KwSizeof,
    "typeof" => TokenKind::KwTypeof,
    "using" => TokenKind::KwUsing,
    "union" => TokenKind::KwUnion,
    "undef" => TokenKind::KwUndef,
    "where" => TokenKind::KwWhere,
    "when" => TokenKind::KwWhen,
};
