//! wave_parser: parser crate.
//!
//! Turns a token stream into the SoA syntax tree, recovering from syntax
//! errors at declaration granularity. Entry points: [`parse`] and [`Ast`].
mod expr;
mod parser;
mod printer;

pub use parser::{Ast, Parser, parse};
pub use printer::print_sexpr;
