//! S-expression printer.
//!
//! Example consumer of the tree: stringifies each top-level declaration as
//! one S-expression. Invalid children print as `_` so the output stays
//! well-formed for partially recovered trees.
use crate::parser::Ast;
use wave_ast::{Data, NodeId, NodeKind, NodeRange};

pub fn print_sexpr(ast: &Ast) -> String {
    let mut printer = Printer {
        ast,
        out: String::new(),
    };
    for (i, &decl) in ast.decls.iter().enumerate() {
        if i > 0 {
            printer.out.push('\n');
        }
        printer.node(decl);
    }
    printer.out
}

struct Printer<'a> {
    ast: &'a Ast,
    out: String,
}

impl<'a> Printer<'a> {
    fn node(&mut self, id: NodeId) {
        if id.is_none() {
            self.out.push('_');
            return;
        }
        let kind = self.ast.nodes.kind(id);
        let data = self.ast.nodes.data(id);
        match kind {
            NodeKind::Root => {}

            NodeKind::Ident
            | NodeKind::IntLit
            | NodeKind::FloatLit
            | NodeKind::CharLit
            | NodeKind::StrLit => self.token(id),

            NodeKind::Const => self.init("def", id, data),
            NodeKind::Var => self.init("var", id, data),

            NodeKind::Import
            | NodeKind::ImportComplex
            | NodeKind::ForeignImport
            | NodeKind::ForeignImportComplex => {
                let Data::Binary { lhs: alias, rhs: symbols } = data else {
                    return;
                };
                let head = match kind {
                    NodeKind::ForeignImport | NodeKind::ForeignImportComplex => "foreign-import",
                    _ => "import",
                };
                self.open(head);
                self.out.push(' ');
                self.token(id);
                if symbols.is_some() {
                    self.out.push(' ');
                    self.node(symbols);
                }
                if alias.is_some() {
                    self.out.push_str(" (as ");
                    self.node(alias);
                    self.out.push(')');
                }
                self.out.push(')');
            }
            NodeKind::ForeignBlock => {
                let Data::Block(range) = data else { return };
                self.seq("foreign", range);
            }
            NodeKind::Range => {
                let Data::Range(range) = data else { return };
                self.seq("range", range);
            }
            NodeKind::AllSymbols => self.out.push_str("..."),

            NodeKind::RefType => self.unary("&", data),
            NodeKind::RefMutType => self.unary("&mut", data),
            NodeKind::RefOwnType => self.unary("&own", data),
            NodeKind::ArrayType => self.binary("array", data),

            NodeKind::PipeExpr => self.binary("|>", data),
            NodeKind::OrExpr => self.binary("or", data),
            NodeKind::LogicalOrExpr => self.binary("||", data),
            NodeKind::LogicalAndExpr => self.binary("&&", data),
            NodeKind::EqExpr => self.binary("==", data),
            NodeKind::NeExpr => self.binary("!=", data),
            NodeKind::LtExpr => self.binary("<", data),
            NodeKind::GtExpr => self.binary(">", data),
            NodeKind::LeExpr => self.binary("<=", data),
            NodeKind::GeExpr => self.binary(">=", data),
            NodeKind::AddExpr => self.binary("+", data),
            NodeKind::SubExpr => self.binary("-", data),
            NodeKind::BitXorExpr => self.binary("^", data),
            NodeKind::BitOrExpr => self.binary("|", data),
            NodeKind::MulExpr => self.binary("*", data),
            NodeKind::DivExpr => self.binary("/", data),
            NodeKind::ModExpr => self.binary("%", data),
            NodeKind::BitAndExpr => self.binary("&", data),
            NodeKind::ShlExpr => self.binary("<<", data),
            NodeKind::ShrExpr => self.binary(">>", data),
            NodeKind::AsExpr => self.binary("as", data),
            NodeKind::FieldExpr => self.binary(".", data),

            NodeKind::UnaryPlus => self.unary("+", data),
            NodeKind::UnaryMinus => self.unary("-", data),
            NodeKind::Deref => self.unary("*", data),
            NodeKind::UnaryNot => self.unary("!", data),
            NodeKind::BitNot => self.unary("~", data),
            NodeKind::Ref => self.unary("&", data),
            NodeKind::MutRef => self.unary("&mut", data),

            NodeKind::StructTwo | NodeKind::Struct => {
                let Data::Aggregate(range) = data else { return };
                self.seq("struct", range);
            }
            NodeKind::Field => {
                let Data::Binary { lhs: ty, rhs: default } = data else {
                    return;
                };
                self.open("field");
                self.out.push(' ');
                self.token(id);
                if ty.is_some() {
                    self.out.push(' ');
                    self.node(ty);
                } else if default.is_some() {
                    self.out.push_str(" _");
                }
                if default.is_some() {
                    self.out.push(' ');
                    self.node(default);
                }
                self.out.push(')');
            }
            NodeKind::EnumTwo | NodeKind::Enum => {
                let Data::Aggregate(range) = data else { return };
                self.seq("enum", range);
            }
            NodeKind::VariantSimple => {
                let Data::Unary { expr } = data else { return };
                self.open("variant");
                self.out.push(' ');
                self.token(id);
                if expr.is_some() {
                    self.out.push(' ');
                    self.node(expr);
                }
                self.out.push(')');
            }
            NodeKind::VariantTwo | NodeKind::Variant => {
                let Data::Aggregate(range) = data else { return };
                self.open("variant");
                self.out.push(' ');
                self.token(id);
                for child in range.iter() {
                    self.out.push(' ');
                    self.node(child);
                }
                self.out.push(')');
            }

            NodeKind::Func => {
                let Data::Func { proto, body } = data else { return };
                self.open("fn");
                self.out.push(' ');
                self.node(proto);
                self.out.push(' ');
                self.node(body);
                self.out.push(')');
            }
            NodeKind::FuncProtoOne => {
                let Data::FuncProto { extra, return_ty } = data else {
                    return;
                };
                let proto = self.ast.nodes.proto_one(extra);
                self.open("proto");
                if proto.param.is_some() {
                    self.out.push(' ');
                    self.node(proto.param);
                }
                self.proto_tail(return_ty, proto.cc);
            }
            NodeKind::FuncProto => {
                let Data::FuncProto { extra, return_ty } = data else {
                    return;
                };
                let proto = self.ast.nodes.proto_many(extra);
                self.open("proto");
                for param in proto.params.iter() {
                    self.out.push(' ');
                    self.node(param);
                }
                self.proto_tail(return_ty, proto.cc);
            }
            NodeKind::Param => self.param("param", id, data),
            NodeKind::Varparam => self.param("vararg", id, data),

            NodeKind::Block => {
                let Data::Block(range) = data else { return };
                self.seq("block", range);
            }
            NodeKind::ExprStmt => {
                let Data::Unary { expr } = data else { return };
                self.node(expr);
            }
        }
    }

    fn token(&mut self, id: NodeId) {
        let text = self.ast.node_text(id);
        self.out.push_str(text);
    }

    fn open(&mut self, head: &str) {
        self.out.push('(');
        self.out.push_str(head);
    }

    fn init(&mut self, head: &str, id: NodeId, data: Data) {
        let Data::Variable { ty, expr } = data else { return };
        self.open(head);
        self.out.push(' ');
        self.token(id);
        if ty.is_some() {
            self.out.push(' ');
            self.node(ty);
        }
        self.out.push(' ');
        self.node(expr);
        self.out.push(')');
    }

    fn binary(&mut self, op: &str, data: Data) {
        let Data::Binary { lhs, rhs } = data else { return };
        self.open(op);
        self.out.push(' ');
        self.node(lhs);
        self.out.push(' ');
        self.node(rhs);
        self.out.push(')');
    }

    fn unary(&mut self, op: &str, data: Data) {
        let Data::Unary { expr } = data else { return };
        self.open(op);
        self.out.push(' ');
        self.node(expr);
        self.out.push(')');
    }

    fn param(&mut self, head: &str, id: NodeId, data: Data) {
        let Data::Param { ty, default } = data else { return };
        self.open(head);
        self.out.push(' ');
        self.token(id);
        self.out.push(' ');
        self.node(ty);
        if default.is_some() {
            self.out.push(' ');
            self.node(default);
        }
        self.out.push(')');
    }

    fn proto_tail(&mut self, return_ty: NodeId, cc: NodeId) {
        if return_ty.is_some() {
            self.out.push(' ');
            self.node(return_ty);
        }
        if cc.is_some() {
            self.out.push(' ');
            self.node(cc);
        }
        self.out.push(')');
    }

    fn seq(&mut self, head: &str, range: NodeRange) {
        self.open(head);
        for child in range.iter() {
            self.out.push(' ');
            self.node(child);
        }
        self.out.push(')');
    }
}
