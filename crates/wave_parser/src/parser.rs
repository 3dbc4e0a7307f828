//! Parser.
//!
//! Hand-written top-down parser over the lexed token stream. Declarations
//! and list bodies are built through a scratch stack so that sibling ranges
//! land contiguously in the node array; expressions use Pratt parsing (see
//! `expr.rs`). Syntax errors become diagnostics and the top-level loop
//! resynchronises to the next likely declaration.
use wave_ast::{Data, Node, NodeId, NodeKind, NodeList, NodeRange};
use wave_lexer::{LexedSrc, lex};
use wave_syntax::{Diagnostic, DiagnosticKind, FileId, Span, TokenKind};

/// Parse result. Owns the source copy, the token stream, the node arrays,
/// the top-level declaration indices, and every diagnostic; dropping it
/// releases all of them together.
pub struct Ast {
    pub file: FileId,
    pub src: String,
    pub lexed: LexedSrc,
    pub nodes: NodeList,
    pub decls: Vec<NodeId>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Ast {
    pub fn token_span(&self, token: u32) -> Span {
        self.lexed.token_span(token as usize, &self.src)
    }

    pub fn token_text(&self, token: u32) -> &str {
        self.lexed.token_text(token as usize, &self.src)
    }

    /// Source text of a node's anchor token.
    pub fn node_text(&self, id: NodeId) -> &str {
        self.token_text(self.nodes.token(id))
    }
}

/// Parse a whole file. Never aborts; syntax errors are accumulated in the
/// returned diagnostics.
pub fn parse(file: FileId, src: &str) -> Ast {
    Parser::new(file, src).parse()
}

/// wave parser.
pub struct Parser<'a> {
    pub(crate) file: FileId,
    pub(crate) src: &'a str,
    pub(crate) lexed: LexedSrc,
    pub(crate) tok: usize,
    pub(crate) nodes: NodeList,
    pub(crate) scratch: Vec<Node>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(file: FileId, src: &'a str) -> Self {
        let lexed = lex(file, src);
        let nodes = NodeList::with_capacity(lexed.len() / 3 + 1);
        let mut parser = Self {
            file,
            src,
            lexed,
            tok: 0,
            nodes,
            scratch: Vec::new(),
            diagnostics: Vec::new(),
        };
        parser.skip_comment_tokens();
        parser
    }

    /// Parse the full input and return the tree plus diagnostics.
    pub fn parse(mut self) -> Ast {
        let mut decls = Vec::new();
        loop {
            self.skip_newlines();
            if self.at(TokenKind::Eof) {
                break;
            }
            let mut decl = self.parse_decl();
            while decl.is_none() && !self.at(TokenKind::Eof) {
                self.next_decl();
                if self.at(TokenKind::Eof) {
                    break;
                }
                decl = self.parse_decl();
            }
            if decl.is_some() {
                decls.push(decl);
            }
        }

        let mut diagnostics = std::mem::take(&mut self.lexed.diagnostics);
        diagnostics.append(&mut self.diagnostics);
        // Lexical and syntactic problems interleave in source order.
        diagnostics.sort_by_key(|d| d.span.start);

        Ast {
            file: self.file,
            src: self.src.to_owned(),
            lexed: self.lexed,
            nodes: self.nodes,
            decls,
            diagnostics,
        }
    }

    fn parse_decl(&mut self) -> NodeId {
        match self.parse_decl_node() {
            Some(node) => self.nodes.add(node),
            None => NodeId::NONE,
        }
    }

    /// One declaration as a provisional node; the caller decides whether it
    /// goes straight into the node array or onto the scratch stack.
    fn parse_decl_node(&mut self) -> Option<Node> {
        match self.peek() {
            TokenKind::Ident => self.parse_init_node(),
            TokenKind::KwImport => self.parse_import_node(false),
            TokenKind::KwForeign => self.parse_foreign_node(),
            TokenKind::At => self.unsupported_decl("@"),
            TokenKind::KwWhen => self.unsupported_decl("when"),
            TokenKind::KwUsing => self.unsupported_decl("using"),
            TokenKind::Bad => {
                // Already diagnosed by the lexer.
                self.advance();
                None
            }
            found => {
                self.diagnostics.push(
                    Diagnostic::error_kind(
                        DiagnosticKind::InvalidDeclaration { found: found.show() },
                        self.cur_span(),
                    )
                    .with_hint(
                        "declarations look like 'name :: value', 'name := value', \
                         or 'import path'",
                    ),
                );
                None
            }
        }
    }

    fn unsupported_decl(&mut self, keyword: &'static str) -> Option<Node> {
        self.error(DiagnosticKind::UnsupportedDecl { keyword });
        // Consume the introducing token so recovery always makes progress.
        self.advance();
        None
    }

    /// Named initialiser, after the leading identifier has been seen:
    /// `name :: expr`, `name := expr`, `name : ty : expr`, `name : ty = expr`.
    pub(crate) fn parse_init_node(&mut self) -> Option<Node> {
        let name_tok = self.cur_tok();
        self.advance();
        self.nodes.add(Node::new(NodeKind::Ident, name_tok, Data::Nil));
        match self.peek() {
            TokenKind::ColonColon => {
                self.advance();
                let expr = self.parse_expr();
                Some(Node::new(
                    NodeKind::Const,
                    name_tok,
                    Data::Variable { ty: NodeId::NONE, expr },
                ))
            }
            TokenKind::ColonEq => {
                self.advance();
                let expr = self.parse_expr();
                Some(Node::new(
                    NodeKind::Var,
                    name_tok,
                    Data::Variable { ty: NodeId::NONE, expr },
                ))
            }
            TokenKind::Colon => {
                self.advance();
                let ty = self.parse_type();
                match self.peek() {
                    TokenKind::Colon => {
                        self.advance();
                        let expr = self.parse_expr();
                        Some(Node::new(NodeKind::Const, name_tok, Data::Variable { ty, expr }))
                    }
                    TokenKind::Eq => {
                        self.advance();
                        let expr = self.parse_expr();
                        Some(Node::new(NodeKind::Var, name_tok, Data::Variable { ty, expr }))
                    }
                    found => {
                        self.error(DiagnosticKind::ExpectedOneOf {
                            expected: "':' or '='",
                            found: found.show(),
                        });
                        None
                    }
                }
            }
            found => {
                self.error(DiagnosticKind::ExpectedToken {
                    expected: ":",
                    found: found.show(),
                });
                None
            }
        }
    }

    /// `import NAME [{ syms | ... }] [as NAME]`, plus the foreign variant.
    fn parse_import_node(&mut self, foreign: bool) -> Option<Node> {
        self.advance(); // import
        let name_tok = self.expect(TokenKind::Ident)?;

        let mut symbols = NodeId::NONE;
        let mut complex = false;
        if self.at(TokenKind::LBrace) {
            let lbrace_tok = self.cur_tok();
            self.advance();
            complex = true;
            self.skip_newlines();
            if self.at(TokenKind::Ellipsis) {
                let tok = self.cur_tok();
                self.advance();
                symbols = self.nodes.add(Node::new(NodeKind::AllSymbols, tok, Data::Nil));
                self.skip_newlines();
                let _ = self.expect(TokenKind::RBrace);
            } else {
                let range_node = self.nodes.reserve_node();
                let mark = self.scratch.len();
                loop {
                    self.skip_newlines();
                    if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                        break;
                    }
                    if self.at(TokenKind::Ident) {
                        let tok = self.cur_tok();
                        self.advance();
                        self.scratch.push(Node::new(NodeKind::Ident, tok, Data::Nil));
                    } else {
                        self.error(DiagnosticKind::InvalidImportSymbol {
                            found: self.peek().show(),
                        });
                        self.advance();
                        continue;
                    }
                    self.skip_newlines();
                    self.eat(TokenKind::Comma);
                }
                let _ = self.expect(TokenKind::RBrace);
                let range = self.materialize(mark);
                self.nodes
                    .set_node(range_node, Node::new(NodeKind::Range, lbrace_tok, Data::Range(range)));
                symbols = range_node;
            }
        }

        let mut alias = NodeId::NONE;
        if self.eat(TokenKind::KwAs) {
            if let Some(tok) = self.expect(TokenKind::Ident) {
                alias = self.nodes.add(Node::new(NodeKind::Ident, tok, Data::Nil));
            }
        }

        let kind = match (foreign, complex) {
            (false, false) => NodeKind::Import,
            (false, true) => NodeKind::ImportComplex,
            (true, false) => NodeKind::ForeignImport,
            (true, true) => NodeKind::ForeignImportComplex,
        };
        Some(Node::new(kind, name_tok, Data::Binary { lhs: alias, rhs: symbols }))
    }

    /// `foreign import …` or `foreign { decls }`.
    fn parse_foreign_node(&mut self) -> Option<Node> {
        let foreign_tok = self.cur_tok();
        self.advance(); // foreign
        if self.at(TokenKind::KwImport) {
            return self.parse_import_node(true);
        }
        if !self.at(TokenKind::LBrace) {
            self.error(DiagnosticKind::ExpectedOneOf {
                expected: "'import' or '{'",
                found: self.peek().show(),
            });
            return None;
        }
        self.advance(); // {
        let mark = self.scratch.len();
        loop {
            self.skip_newlines();
            if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                break;
            }
            match self.parse_decl_node() {
                Some(node) => self.scratch.push(node),
                None => self.sync_stmt(),
            }
        }
        let _ = self.expect(TokenKind::RBrace);
        let range = self.materialize(mark);
        Some(Node::new(NodeKind::ForeignBlock, foreign_tok, Data::Block(range)))
    }

    /// `{ stmts }`. Statements go through the scratch stack so the block's
    /// range is contiguous.
    pub(crate) fn parse_block(&mut self) -> NodeId {
        let brace_tok = self.cur_tok();
        let block = self.nodes.reserve_node();
        self.advance(); // {
        let mark = self.scratch.len();
        loop {
            self.skip_newlines();
            if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                break;
            }
            match self.parse_stmt() {
                Some(stmt) => self.scratch.push(stmt),
                None => self.sync_stmt(),
            }
        }
        let _ = self.expect(TokenKind::RBrace);
        let range = self.materialize(mark);
        self.nodes
            .set_node(block, Node::new(NodeKind::Block, brace_tok, Data::Block(range)));
        block
    }

    /// A statement is a named initialiser or an expression.
    fn parse_stmt(&mut self) -> Option<Node> {
        if self.at(TokenKind::Ident)
            && matches!(
                self.peek_ahead(1),
                TokenKind::Colon | TokenKind::ColonColon | TokenKind::ColonEq
            )
        {
            return self.parse_init_node();
        }
        let anchor = self.cur_tok();
        let expr = self.parse_expr();
        if expr.is_none() {
            return None;
        }
        Some(Node::new(NodeKind::ExprStmt, anchor, Data::Unary { expr }))
    }

    /// `& [mut|own] T`, `[ expr ] T`, or any expression denoting a type.
    pub(crate) fn parse_type(&mut self) -> NodeId {
        match self.peek() {
            TokenKind::Amp => {
                let tok = self.cur_tok();
                self.advance();
                let kind = if self.eat(TokenKind::KwMut) {
                    NodeKind::RefMutType
                } else if self.eat(TokenKind::KwOwn) {
                    NodeKind::RefOwnType
                } else {
                    NodeKind::RefType
                };
                let node = self.nodes.reserve_node();
                let inner = self.parse_type();
                self.nodes.set_node(node, Node::new(kind, tok, Data::Unary { expr: inner }));
                node
            }
            TokenKind::LBracket => {
                let tok = self.cur_tok();
                let node = self.nodes.reserve_node();
                self.advance();
                // `[]T` leaves the length invalid via the `]` early exit.
                let len = self.parse_expr();
                let _ = self.expect(TokenKind::RBracket);
                let inner = self.parse_type();
                self.nodes.set_node(
                    node,
                    Node::new(NodeKind::ArrayType, tok, Data::Binary { lhs: len, rhs: inner }),
                );
                node
            }
            _ => self.parse_expr(),
        }
    }

    /// Synchronise to the next token that can begin a declaration.
    fn next_decl(&mut self) {
        loop {
            match self.peek() {
                TokenKind::Eof
                | TokenKind::KwForeign
                | TokenKind::KwImport
                | TokenKind::KwWhen
                | TokenKind::KwUsing
                | TokenKind::At => return,
                TokenKind::Ident
                    if matches!(
                        self.peek_ahead(1),
                        TokenKind::Colon | TokenKind::ColonColon | TokenKind::ColonEq
                    ) =>
                {
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    pub(crate) fn sync_stmt(&mut self) {
        while !matches!(
            self.peek(),
            TokenKind::Newline | TokenKind::RBrace | TokenKind::Eof
        ) {
            self.advance();
        }
    }

    /// Move the scratch entries above `mark` into the node array, in order,
    /// and return their range.
    pub(crate) fn materialize(&mut self, mark: usize) -> NodeRange {
        if self.scratch.len() == mark {
            return NodeRange::EMPTY;
        }
        let start = self.nodes.len() as u32;
        for node in self.scratch.drain(mark..) {
            self.nodes.add(node);
        }
        let end = self.nodes.len() as u32 - 1;
        NodeRange::new(start, end)
    }

    pub(crate) fn cur_tok(&self) -> u32 {
        self.tok as u32
    }

    pub(crate) fn peek(&self) -> TokenKind {
        self.lexed.kind(self.tok)
    }

    /// The n-th non-comment token after the cursor.
    pub(crate) fn peek_ahead(&self, n: usize) -> TokenKind {
        let mut i = self.tok;
        let mut remaining = n;
        loop {
            i += 1;
            let kind = self.lexed.kind(i);
            if kind.is_comment() {
                continue;
            }
            remaining -= 1;
            if remaining == 0 {
                return kind;
            }
        }
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    pub(crate) fn advance(&mut self) {
        self.tok += 1;
        self.skip_comment_tokens();
    }

    fn skip_comment_tokens(&mut self) {
        // Comments are trivia to the parser; the cursor never rests on one.
        while self.peek().is_comment() {
            self.tok += 1;
        }
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.at(TokenKind::Newline) {
            self.advance();
        }
    }

    pub(crate) fn cur_span(&self) -> Span {
        self.lexed.token_span(self.tok, self.src)
    }

    pub(crate) fn token_span(&self, token: u32) -> Span {
        self.lexed.token_span(token as usize, self.src)
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<u32> {
        if self.at(kind) {
            let tok = self.cur_tok();
            self.advance();
            return Some(tok);
        }
        self.error(DiagnosticKind::ExpectedToken {
            expected: kind.show(),
            found: self.peek().show(),
        });
        None
    }

    pub(crate) fn error(&mut self, kind: DiagnosticKind) {
        self.diagnostics
            .push(Diagnostic::error_kind(kind, self.cur_span()));
    }
}
