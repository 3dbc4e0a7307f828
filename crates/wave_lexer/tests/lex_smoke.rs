use wave_lexer::lex;
use wave_syntax::{FileId, TokenKind};

#[test]
fn empty_source_is_just_eof() {
    let lexed = lex(FileId(0), "");
    assert_eq!(lexed.kinds, vec![TokenKind::Eof]);
    assert_eq!(lexed.starts, vec![0]);
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn stream_ends_with_eof_at_source_length() {
    let src = "main :: () {\n}";
    let lexed = lex(FileId(0), src);
    assert_eq!(lexed.kinds.last(), Some(&TokenKind::Eof));
    assert_eq!(lexed.starts.last().copied(), Some(src.len() as u32));
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn declaration_line_tokens() {
    let lexed = lex(FileId(0), "main :: () {\n}");
    assert_eq!(
        lexed.kinds,
        vec![
            TokenKind::Ident,
            TokenKind::ColonColon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Newline,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
    assert_eq!(lexed.starts, vec![0, 5, 8, 9, 11, 12, 13, 14]);
}

#[test]
fn starts_are_monotone() {
    let src = "foo := 1 + 2 * bar\nbaz :: \"text\"";
    let lexed = lex(FileId(0), src);
    for pair in lexed.starts.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn unknown_byte_is_one_bad_token() {
    let lexed = lex(FileId(0), "a $ b");
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::Ident, TokenKind::Bad, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert!(lexed.diagnostics[0].message.contains("unknown character"));
}

#[test]
fn crlf_is_one_newline_token_anchored_at_the_newline_byte() {
    let lexed = lex(FileId(0), "a\r\nb");
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::Ident, TokenKind::Newline, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(lexed.starts, vec![0, 2, 3, 4]);
}

#[test]
fn comments_are_tokens_not_skipped() {
    let lexed = lex(FileId(0), "// line\n/// doc\n/* a /* nested */ b */x");
    assert_eq!(
        lexed.kinds,
        vec![
            TokenKind::Comment,
            TokenKind::Newline,
            TokenKind::DocComment,
            TokenKind::Newline,
            TokenKind::MultilineComment,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn keywords_and_identifiers() {
    let lexed = lex(FileId(0), "struct enum foreign structx fallthrough");
    assert_eq!(
        lexed.kinds,
        vec![
            TokenKind::KwStruct,
            TokenKind::KwEnum,
            TokenKind::KwForeign,
            TokenKind::Ident,
            TokenKind::KwFallthrough,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn longest_operator_match_wins() {
    let lexed = lex(FileId(0), ">>= >> > |> || | ... .. . :: := :");
    assert_eq!(
        lexed.kinds,
        vec![
            TokenKind::ShrEq,
            TokenKind::Shr,
            TokenKind::Gt,
            TokenKind::PipeGt,
            TokenKind::PipePipe,
            TokenKind::Pipe,
            TokenKind::Ellipsis,
            TokenKind::DotDot,
            TokenKind::Dot,
            TokenKind::ColonColon,
            TokenKind::ColonEq,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn non_ascii_identifiers() {
    let lexed = lex(FileId(0), "héllo :: wörld");
    assert_eq!(
        lexed.kinds,
        vec![TokenKind::Ident, TokenKind::ColonColon, TokenKind::Ident, TokenKind::Eof]
    );
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn token_spans_reconstruct_the_source() {
    let src = "foo :: (a: int) => a + 0x1f // tail";
    let lexed = lex(FileId(0), src);
    assert!(lexed.diagnostics.is_empty());
    for i in 0..lexed.len() - 1 {
        let span = lexed.token_span(i, src);
        assert!(span.start <= span.end);
        assert!(
            span.end <= lexed.start(i + 1),
            "token {i} overlaps its successor: {span:?}"
        );
    }
}
