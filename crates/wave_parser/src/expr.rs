//! Expression parsing.
//!
//! Pratt precedence climbing over the binary operator levels, a prefix
//! table for unary operators, and the speculative `(`: a function literal
//! is attempted first and rolled back in favour of a parenthesised
//! expression when the parameter list cannot validate.
use crate::parser::Parser;
use wave_ast::{Data, FuncProtoMany, FuncProtoOne, Node, NodeId, NodeKind};
use wave_syntax::{Diagnostic, DiagnosticKind, TokenKind};

const PREC_PIPE: u8 = 1;
const PREC_OR: u8 = 2;
const PREC_LOGICAL_OR: u8 = 3;
const PREC_LOGICAL_AND: u8 = 4;
const PREC_COMPARISON: u8 = 5;
const PREC_TERM: u8 = 6;
const PREC_FACTOR: u8 = 7;
const PREC_AS: u8 = 8;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> NodeId {
        self.parse_expr_prec(PREC_PIPE)
    }

    /// Binary operators are left-associative: the right operand parses one
    /// level tighter than the operator itself.
    fn parse_expr_prec(&mut self, min_prec: u8) -> NodeId {
        let mut lhs = self.parse_lhs();
        if lhs.is_none() {
            return NodeId::NONE;
        }
        loop {
            let Some((prec, kind)) = infix_op(self.peek()) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            let op_tok = self.cur_tok();
            self.advance();
            let rhs = self.parse_expr_prec(prec + 1);
            lhs = self
                .nodes
                .add(Node::new(kind, op_tok, Data::Binary { lhs, rhs }));
        }
        lhs
    }

    /// Unary prefixes chain by recursion; postfix `.` binds tighter.
    fn parse_lhs(&mut self) -> NodeId {
        if let Some(kind) = unary_op(self.peek()) {
            let tok = self.cur_tok();
            self.advance();
            let kind = if kind == NodeKind::Ref && self.eat(TokenKind::KwMut) {
                NodeKind::MutRef
            } else {
                kind
            };
            let node = self.nodes.reserve_node();
            let expr = self.parse_lhs();
            self.nodes
                .set_node(node, Node::new(kind, tok, Data::Unary { expr }));
            return node;
        }

        let mut expr = self.parse_primary();
        if expr.is_none() {
            return NodeId::NONE;
        }
        while self.at(TokenKind::Dot) {
            let tok = self.cur_tok();
            self.advance();
            let member = match self.expect(TokenKind::Ident) {
                Some(t) => self.nodes.add(Node::new(NodeKind::Ident, t, Data::Nil)),
                None => NodeId::NONE,
            };
            expr = self.nodes.add(Node::new(
                NodeKind::FieldExpr,
                tok,
                Data::Binary { lhs: expr, rhs: member },
            ));
        }
        expr
    }

    fn parse_primary(&mut self) -> NodeId {
        match self.peek() {
            TokenKind::Ident => self.literal(NodeKind::Ident),
            TokenKind::Int => self.literal(NodeKind::IntLit),
            TokenKind::Float => self.literal(NodeKind::FloatLit),
            TokenKind::Char => self.literal(NodeKind::CharLit),
            TokenKind::Str | TokenKind::MultilineStr => self.literal(NodeKind::StrLit),
            TokenKind::LParen => {
                let func = self.parse_function();
                if func.is_some() {
                    return func;
                }
                // Parentheses are grouping only; no node of their own.
                self.advance();
                let expr = self.parse_expr();
                let _ = self.expect(TokenKind::RParen);
                expr
            }
            TokenKind::KwStruct => self.parse_struct_literal(),
            TokenKind::KwEnum => self.parse_enum_literal(),
            // Early exit for the `[expr] T` rule: an immediate `]` means
            // "no length expression" and is not an error here.
            TokenKind::RBracket => NodeId::NONE,
            found => {
                self.error(DiagnosticKind::ExpectedExpression { found: found.show() });
                NodeId::NONE
            }
        }
    }

    fn literal(&mut self, kind: NodeKind) -> NodeId {
        let tok = self.cur_tok();
        self.advance();
        self.nodes.add(Node::new(kind, tok, Data::Nil))
    }

    /// `(params) [-> ty] ["cc"] ( => expr | { block } )`.
    ///
    /// Speculative: the caller is sitting on a `(` that may instead open a
    /// parenthesised expression. The function and prototype nodes are
    /// reserved up front; if the parameter list cannot validate, they are
    /// the only appended nodes, so popping them and rewinding the cursor
    /// restores the pre-speculation state exactly.
    fn parse_function(&mut self) -> NodeId {
        let lparen_tok = self.cur_tok();
        let saved_tok = self.tok;
        let saved_diags = self.diagnostics.len();
        let func = self.nodes.reserve_node();
        let proto = self.nodes.reserve_node();
        self.advance(); // (

        let mark = self.scratch.len();
        if self.parse_params().is_none() {
            self.scratch.truncate(mark);
            self.diagnostics.truncate(saved_diags);
            self.nodes.pop_node(proto);
            self.nodes.pop_node(func);
            self.tok = saved_tok;
            return NodeId::NONE;
        }
        let _ = self.expect(TokenKind::RParen);
        let params = self.materialize(mark);

        let return_ty = if self.eat(TokenKind::Arrow) {
            self.parse_type()
        } else {
            NodeId::NONE
        };
        let cc = if self.at(TokenKind::Str) {
            self.literal(NodeKind::StrLit)
        } else {
            NodeId::NONE
        };
        let body = if self.eat(TokenKind::FatArrow) {
            self.parse_expr()
        } else if self.at(TokenKind::LBrace) {
            self.parse_block()
        } else {
            self.error(DiagnosticKind::ExpectedFunctionBody {
                found: self.peek().show(),
            });
            NodeId::NONE
        };

        let (proto_kind, extra) = match params.len() {
            0 => (
                NodeKind::FuncProtoOne,
                self.nodes
                    .push_proto_one(FuncProtoOne { param: NodeId::NONE, cc }),
            ),
            1 => (
                NodeKind::FuncProtoOne,
                self.nodes
                    .push_proto_one(FuncProtoOne { param: NodeId(params.start), cc }),
            ),
            _ => (
                NodeKind::FuncProto,
                self.nodes.push_proto_many(FuncProtoMany { params, cc }),
            ),
        };
        self.nodes.set_node(
            proto,
            Node::new(proto_kind, lparen_tok, Data::FuncProto { extra, return_ty }),
        );
        self.nodes.set_node(
            func,
            Node::new(NodeKind::Func, lparen_tok, Data::Func { proto, body }),
        );
        func
    }

    /// Parameter list, cursor just past the `(`. Returns `None` only while
    /// nothing has been appended yet — the speculation window.
    fn parse_params(&mut self) -> Option<()> {
        self.skip_newlines();
        if self.at(TokenKind::RParen) {
            return Some(());
        }
        if !(self.at(TokenKind::Ident) && self.peek_ahead(1) == TokenKind::Colon) {
            return None;
        }

        let mut prev_vararg = false;
        loop {
            self.skip_newlines();
            if self.at(TokenKind::RParen) || self.at(TokenKind::Eof) {
                break;
            }
            let Some(name_tok) = self.expect(TokenKind::Ident) else {
                self.sync_param();
                if self.eat(TokenKind::Comma) {
                    continue;
                }
                break;
            };
            if prev_vararg {
                self.diagnostics.push(Diagnostic::error_kind(
                    DiagnosticKind::ParamAfterVararg,
                    self.token_span(name_tok),
                ));
            }
            let _ = self.expect(TokenKind::Colon);
            let vararg = self.eat(TokenKind::Ellipsis);
            let ty = if matches!(
                self.peek(),
                TokenKind::Comma | TokenKind::RParen | TokenKind::Eq
            ) {
                self.error(DiagnosticKind::ParamMissingType);
                NodeId::NONE
            } else {
                self.parse_type()
            };
            let default = if self.eat(TokenKind::Eq) {
                self.parse_expr()
            } else {
                NodeId::NONE
            };
            let kind = if vararg {
                NodeKind::Varparam
            } else {
                NodeKind::Param
            };
            self.scratch
                .push(Node::new(kind, name_tok, Data::Param { ty, default }));
            prev_vararg = vararg;
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Some(())
    }

    fn sync_param(&mut self) {
        while !matches!(
            self.peek(),
            TokenKind::Comma | TokenKind::RParen | TokenKind::Newline | TokenKind::Eof
        ) {
            self.advance();
        }
    }

    /// `struct { fields }`. Fields are comma-separated; a bare newline
    /// between fields is diagnosed but the next field still parses.
    fn parse_struct_literal(&mut self) -> NodeId {
        let struct_tok = self.cur_tok();
        self.advance(); // struct
        if self.expect(TokenKind::LBrace).is_none() {
            return NodeId::NONE;
        }
        let node = self.nodes.reserve_node();
        let mark = self.scratch.len();
        let mut needs_sep = false;
        loop {
            self.skip_newlines();
            if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                break;
            }
            if needs_sep {
                self.error(DiagnosticKind::MissingFieldSeparator);
            }
            match self.parse_field() {
                Some(field) => self.scratch.push(field),
                None => self.sync_field(),
            }
            needs_sep = !self.eat(TokenKind::Comma);
        }
        let _ = self.expect(TokenKind::RBrace);
        let range = self.materialize(mark);
        let kind = if range.len() <= 2 {
            NodeKind::StructTwo
        } else {
            NodeKind::Struct
        };
        self.nodes
            .set_node(node, Node::new(kind, struct_tok, Data::Aggregate(range)));
        node
    }

    /// `name : ty`, `name : ty = default`, or `name := default`.
    fn parse_field(&mut self) -> Option<Node> {
        let name_tok = self.expect(TokenKind::Ident)?;
        match self.peek() {
            TokenKind::ColonEq => {
                self.advance();
                let default = self.parse_expr();
                Some(Node::new(
                    NodeKind::Field,
                    name_tok,
                    Data::Binary { lhs: NodeId::NONE, rhs: default },
                ))
            }
            TokenKind::Colon => {
                self.advance();
                let ty = self.parse_type();
                let default = if self.eat(TokenKind::Eq) {
                    self.parse_expr()
                } else {
                    NodeId::NONE
                };
                Some(Node::new(
                    NodeKind::Field,
                    name_tok,
                    Data::Binary { lhs: ty, rhs: default },
                ))
            }
            found => {
                self.error(DiagnosticKind::ExpectedOneOf {
                    expected: "':' or ':='",
                    found: found.show(),
                });
                None
            }
        }
    }

    fn sync_field(&mut self) {
        while !matches!(
            self.peek(),
            TokenKind::Comma | TokenKind::RBrace | TokenKind::Newline | TokenKind::Eof
        ) {
            self.advance();
        }
    }

    /// `enum [name] { variants }`; variants separate on comma or newline.
    fn parse_enum_literal(&mut self) -> NodeId {
        let mut anchor = self.cur_tok();
        self.advance(); // enum
        if self.at(TokenKind::Ident) {
            anchor = self.cur_tok();
            self.advance();
        }
        if self.expect(TokenKind::LBrace).is_none() {
            return NodeId::NONE;
        }
        let node = self.nodes.reserve_node();
        let mark = self.scratch.len();
        loop {
            self.skip_newlines();
            if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                break;
            }
            match self.parse_variant() {
                Some(variant) => self.scratch.push(variant),
                None => self.sync_field(),
            }
            self.eat(TokenKind::Comma);
        }
        let _ = self.expect(TokenKind::RBrace);
        let range = self.materialize(mark);
        let kind = if range.len() <= 2 {
            NodeKind::EnumTwo
        } else {
            NodeKind::Enum
        };
        self.nodes
            .set_node(node, Node::new(kind, anchor, Data::Aggregate(range)));
        node
    }

    /// `name`, `name = expr`, or `name(positional_or_named_fields)`.
    fn parse_variant(&mut self) -> Option<Node> {
        let name_tok = self.expect(TokenKind::Ident)?;
        if self.at(TokenKind::LParen) {
            self.advance();
            if self.eat(TokenKind::RParen) {
                // `name()` is diagnosed and demoted to a simple variant.
                self.diagnostics.push(Diagnostic::error_kind(
                    DiagnosticKind::EmptyVariant,
                    self.token_span(name_tok),
                ));
                return Some(Node::new(
                    NodeKind::VariantSimple,
                    name_tok,
                    Data::Unary { expr: NodeId::NONE },
                ));
            }
            let mark = self.scratch.len();
            loop {
                self.skip_newlines();
                if self.at(TokenKind::RParen) || self.at(TokenKind::Eof) {
                    break;
                }
                if self.at(TokenKind::Ident) && self.peek_ahead(1) == TokenKind::Colon {
                    let field_tok = self.cur_tok();
                    self.advance(); // name
                    self.advance(); // :
                    let ty = self.parse_type();
                    self.scratch.push(Node::new(
                        NodeKind::Field,
                        field_tok,
                        Data::Binary { lhs: ty, rhs: NodeId::NONE },
                    ));
                } else {
                    let field_tok = self.cur_tok();
                    let ty = self.parse_type();
                    if ty.is_none() {
                        self.sync_param();
                        if self.eat(TokenKind::Comma) {
                            continue;
                        }
                        break;
                    }
                    self.scratch.push(Node::new(
                        NodeKind::Field,
                        field_tok,
                        Data::Binary { lhs: ty, rhs: NodeId::NONE },
                    ));
                }
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            let _ = self.expect(TokenKind::RParen);
            let range = self.materialize(mark);
            let kind = if range.len() <= 2 {
                NodeKind::VariantTwo
            } else {
                NodeKind::Variant
            };
            return Some(Node::new(kind, name_tok, Data::Aggregate(range)));
        }

        let value = if self.eat(TokenKind::Eq) {
            self.parse_expr()
        } else {
            NodeId::NONE
        };
        Some(Node::new(
            NodeKind::VariantSimple,
            name_tok,
            Data::Unary { expr: value },
        ))
    }
}

fn infix_op(kind: TokenKind) -> Option<(u8, NodeKind)> {
    Some(match kind {
        TokenKind::PipeGt => (PREC_PIPE, NodeKind::PipeExpr),
        TokenKind::KwOr => (PREC_OR, NodeKind::OrExpr),
        TokenKind::PipePipe => (PREC_LOGICAL_OR, NodeKind::LogicalOrExpr),
        TokenKind::AmpAmp => (PREC_LOGICAL_AND, NodeKind::LogicalAndExpr),
        TokenKind::EqEq => (PREC_COMPARISON, NodeKind::EqExpr),
        TokenKind::BangEq => (PREC_COMPARISON, NodeKind::NeExpr),
        TokenKind::Lt => (PREC_COMPARISON, NodeKind::LtExpr),
        TokenKind::Gt => (PREC_COMPARISON, NodeKind::GtExpr),
        TokenKind::LtEq => (PREC_COMPARISON, NodeKind::LeExpr),
        TokenKind::GtEq => (PREC_COMPARISON, NodeKind::GeExpr),
        TokenKind::Plus => (PREC_TERM, NodeKind::AddExpr),
        TokenKind::Minus => (PREC_TERM, NodeKind::SubExpr),
        TokenKind::Caret => (PREC_TERM, NodeKind::BitXorExpr),
        TokenKind::Pipe => (PREC_TERM, NodeKind::BitOrExpr),
        TokenKind::Star => (PREC_FACTOR, NodeKind::MulExpr),
        TokenKind::Slash => (PREC_FACTOR, NodeKind::DivExpr),
        TokenKind::Percent => (PREC_FACTOR, NodeKind::ModExpr),
        TokenKind::Amp => (PREC_FACTOR, NodeKind::BitAndExpr),
        TokenKind::Shl => (PREC_FACTOR, NodeKind::ShlExpr),
        TokenKind::Shr => (PREC_FACTOR, NodeKind::ShrExpr),
        TokenKind::KwAs => (PREC_AS, NodeKind::AsExpr),
        _ => return None,
    })
}

fn unary_op(kind: TokenKind) -> Option<NodeKind> {
    Some(match kind {
        TokenKind::Plus => NodeKind::UnaryPlus,
        TokenKind::Minus => NodeKind::UnaryMinus,
        TokenKind::Star => NodeKind::Deref,
        TokenKind::Bang => NodeKind::UnaryNot,
        TokenKind::Tilde => NodeKind::BitNot,
        TokenKind::Amp => NodeKind::Ref,
        _ => return None,
    })
}
