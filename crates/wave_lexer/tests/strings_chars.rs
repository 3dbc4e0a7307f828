use wave_lexer::lex;
use wave_syntax::{FileId, TokenKind};

#[test]
fn ordinary_string() {
    let lexed = lex(FileId(0), "s :: \"hello\"");
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::Ident, TokenKind::ColonColon, TokenKind::Str, TokenKind::Eof]
    );
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn string_with_escaped_quote() {
    let lexed = lex(FileId(0), r#""a\"b""#);
    assert_eq!(lexed.kinds, vec![TokenKind::Str, TokenKind::Eof]);
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn unterminated_string_consumes_the_newline() {
    let lexed = lex(FileId(0), "\"abc\nnext");
    // The newline belongs to the broken string; no Newline token follows.
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::Str, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("unterminated string"));
}

#[test]
fn unterminated_string_at_eof() {
    let lexed = lex(FileId(0), "\"abc");
    assert_eq!(lexed.kinds, vec![TokenKind::Str, TokenKind::Eof]);
    assert_eq!(lexed.diagnostics.len(), 1);
}

#[test]
fn multiline_string_spans_newlines() {
    let lexed = lex(FileId(0), "\"\"\"a\nb\"\"\" x");
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::MultilineStr, TokenKind::Ident, TokenKind::Eof]
    );
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn unterminated_multiline_string() {
    let lexed = lex(FileId(0), "\"\"\"abc\ndef");
    assert_eq!(lexed.kinds, vec![TokenKind::MultilineStr, TokenKind::Eof]);
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("unterminated string"));
}

#[test]
fn char_literal_forms() {
    for src in ["'a'", "'\\n'", "'\\x41'", "'\\x4'", "'\\0'", "'\\''"] {
        let lexed = lex(FileId(0), src);
        assert_eq!(lexed.kinds, vec![TokenKind::Char, TokenKind::Eof], "{src}");
        assert!(lexed.diagnostics.is_empty(), "{src}: {:?}", lexed.diagnostics);
    }
}

#[test]
fn utf8_char_payload() {
    let lexed = lex(FileId(0), "'é'");
    assert_eq!(lexed.kinds, vec![TokenKind::Char, TokenKind::Eof]);
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn invalid_escape_is_diagnosed() {
    let lexed = lex(FileId(0), "'\\q'");
    assert_eq!(lexed.kinds, vec![TokenKind::Char, TokenKind::Eof]);
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("invalid escape"));
}

#[test]
fn unterminated_char_resumes_at_end_of_line() {
    let lexed = lex(FileId(0), "'c d\nnext");
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::Char, TokenKind::Newline, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("unterminated character"));
}
