use wave_syntax::{Diagnostic, FileId, SourceMap, Span, render_diagnostic, render_diagnostics};

#[test]
fn exact_single_line_output() {
    let mut files = SourceMap::new();
    let id = files.add_file("a.wv", "x = 1");
    let diag = Diagnostic::error(Span::new(id, 0, 1), "bad x", "here");
    let out = render_diagnostic(&files, &diag);
    let expected = "\u{1b}[31ma.wv:1:1: error: bad x\u{1b}[0m\n 1 | x = 1\n   | ^ here\n";
    assert_eq!(out, expected);
}

#[test]
fn header_is_one_based_and_underline_trails_into_label() {
    let mut files = SourceMap::new();
    let id = files.add_file("demo.wave", "foo :: bar\n");
    let diag = Diagnostic::error(Span::new(id, 7, 10), "undefined name", "not found");
    let out = render_diagnostic(&files, &diag);
    assert!(out.contains("demo.wave:1:8: error: undefined name"), "{out}");
    assert!(out.contains(" 1 | foo :: bar"), "{out}");
    assert!(out.contains("^^^ not found"), "{out}");
}

#[test]
fn multi_line_span_underlines_every_covered_line() {
    let mut files = SourceMap::new();
    let id = files.add_file("m.wv", "aa\nbbbb\ncc\n");
    let diag = Diagnostic::error(Span::new(id, 1, 9), "spans lines", "whole thing");
    let out = render_diagnostic(&files, &diag);
    assert!(out.contains(" 1 | aa\n"), "{out}");
    // First line: from the span start to the end of the line, plus label.
    assert!(out.contains("^ whole thing\n"), "{out}");
    // Intermediate line fully underlined.
    assert!(out.contains(" 2 | bbbb\n"), "{out}");
    assert!(out.contains("^^^^\n"), "{out}");
    // Last line underlined up to the span end.
    assert!(out.contains(" 3 | cc\n"), "{out}");
}

#[test]
fn hint_gets_its_own_styled_line() {
    let mut files = SourceMap::new();
    let id = files.add_file("h.wv", "oops\n");
    let diag =
        Diagnostic::error(Span::new(id, 0, 4), "broken", "here").with_hint("try something else");
    let out = render_diagnostic(&files, &diag);
    assert!(out.contains("Hint: try something else"), "{out}");
    assert!(out.contains("\u{1b}[4;37m"), "{out}");
}

#[test]
fn warnings_render_in_magenta() {
    let mut files = SourceMap::new();
    let id = files.add_file("w.wv", "meh\n");
    let diag = Diagnostic::warning(Span::new(id, 0, 3), "questionable", "this");
    let out = render_diagnostic(&files, &diag);
    assert!(out.contains("\u{1b}[35m"), "{out}");
    assert!(out.contains("warning: questionable"), "{out}");
}

#[test]
fn span_is_clamped_to_the_content() {
    let mut files = SourceMap::new();
    let id = files.add_file("c.wv", "ab\n");
    let diag = Diagnostic::error(Span::new(id, 100, 200), "past the end", "eof");
    let out = render_diagnostic(&files, &diag);
    assert!(out.contains("c.wv:2:1: error: past the end"), "{out}");
}

#[test]
fn multiple_diagnostics_concatenate() {
    let mut files = SourceMap::new();
    let id = files.add_file("d.wv", "one two\n");
    let diags = vec![
        Diagnostic::error(Span::new(id, 0, 3), "first", "a"),
        Diagnostic::warning(Span::new(id, 4, 7), "second", "b"),
    ];
    let out = render_diagnostics(&files, &diags);
    assert!(out.contains("first"));
    assert!(out.contains("second"));
}

#[test]
#[should_panic]
fn unresolvable_file_id_is_an_internal_bug() {
    let files = SourceMap::new();
    let diag = Diagnostic::error(Span::new(FileId(3), 0, 1), "m", "l");
    let _ = render_diagnostic(&files, &diag);
}
