use wave_ast::{Data, NodeKind};
use wave_parser::parse;
use wave_syntax::FileId;

#[test]
fn simple_import() {
    let ast = parse(FileId(0), "import foo\n");
    assert!(ast.diagnostics.is_empty(), "{:?}", ast.diagnostics);
    let decl = ast.decls[0];
    assert_eq!(ast.nodes.kind(decl), NodeKind::Import);
    assert_eq!(ast.node_text(decl), "foo");
    let Data::Binary { lhs, rhs } = ast.nodes.data(decl) else {
        panic!();
    };
    assert!(lhs.is_none());
    assert!(rhs.is_none());
}

#[test]
fn simple_import_with_alias() {
    let ast = parse(FileId(0), "import foo as f\n");
    let decl = ast.decls[0];
    assert_eq!(ast.nodes.kind(decl), NodeKind::Import);
    let Data::Binary { lhs: alias, rhs } = ast.nodes.data(decl) else {
        panic!();
    };
    assert_eq!(ast.node_text(alias), "f");
    assert!(rhs.is_none());
}

#[test]
fn complex_import_with_alias() {
    let ast = parse(FileId(0), "import foo { baz, fizzbuzz } as bar");
    assert!(ast.diagnostics.is_empty(), "{:?}", ast.diagnostics);
    let decl = ast.decls[0];
    assert_eq!(ast.nodes.kind(decl), NodeKind::ImportComplex);
    assert_eq!(ast.node_text(decl), "foo");

    let Data::Binary { lhs: alias, rhs: symbols } = ast.nodes.data(decl) else {
        panic!();
    };
    assert_eq!(ast.nodes.kind(alias), NodeKind::Ident);
    assert_eq!(ast.node_text(alias), "bar");

    assert_eq!(ast.nodes.kind(symbols), NodeKind::Range);
    let Data::Range(range) = ast.nodes.data(symbols) else {
        panic!();
    };
    let names: Vec<_> = range.iter().map(|id| ast.node_text(id)).collect();
    assert_eq!(names, vec!["baz", "fizzbuzz"]);
    for id in range.iter() {
        assert_eq!(ast.nodes.kind(id), NodeKind::Ident);
    }
}

#[test]
fn import_all_symbols() {
    let ast = parse(FileId(0), "import foo { ... }\n");
    assert!(ast.diagnostics.is_empty(), "{:?}", ast.diagnostics);
    let decl = ast.decls[0];
    assert_eq!(ast.nodes.kind(decl), NodeKind::ImportComplex);
    let Data::Binary { rhs: symbols, .. } = ast.nodes.data(decl) else {
        panic!();
    };
    assert_eq!(ast.nodes.kind(symbols), NodeKind::AllSymbols);
}

#[test]
fn foreign_import() {
    let ast = parse(FileId(0), "foreign import libc { malloc } as c\n");
    assert!(ast.diagnostics.is_empty(), "{:?}", ast.diagnostics);
    let decl = ast.decls[0];
    assert_eq!(ast.nodes.kind(decl), NodeKind::ForeignImportComplex);
    assert_eq!(ast.node_text(decl), "libc");
    let Data::Binary { lhs: alias, rhs: symbols } = ast.nodes.data(decl) else {
        panic!();
    };
    assert_eq!(ast.node_text(alias), "c");
    let Data::Range(range) = ast.nodes.data(symbols) else {
        panic!();
    };
    assert_eq!(range.len(), 1);
}

#[test]
fn plain_foreign_import() {
    let ast = parse(FileId(0), "foreign import libc\n");
    assert_eq!(ast.nodes.kind(ast.decls[0]), NodeKind::ForeignImport);
}

#[test]
fn foreign_block_declarations() {
    let ast = parse(FileId(0), "foreign {\n  a :: 1\n  b := 2\n}\n");
    assert!(ast.diagnostics.is_empty(), "{:?}", ast.diagnostics);
    let decl = ast.decls[0];
    assert_eq!(ast.nodes.kind(decl), NodeKind::ForeignBlock);
    let Data::Block(range) = ast.nodes.data(decl) else {
        panic!();
    };
    let kinds: Vec<_> = range.iter().map(|id| ast.nodes.kind(id)).collect();
    assert_eq!(kinds, vec![NodeKind::Const, NodeKind::Var]);
}

#[test]
fn import_symbols_must_be_identifiers() {
    let ast = parse(FileId(0), "import foo { baz, 2 }\n");
    assert_eq!(ast.decls.len(), 1);
    assert!(
        ast.diagnostics
            .iter()
            .any(|d| d.message.contains("identifier or '...'"))
    );
    // The valid symbol survives.
    let Data::Binary { rhs: symbols, .. } = ast.nodes.data(ast.decls[0]) else {
        panic!();
    };
    let Data::Range(range) = ast.nodes.data(symbols) else {
        panic!();
    };
    assert_eq!(range.len(), 1);
}
