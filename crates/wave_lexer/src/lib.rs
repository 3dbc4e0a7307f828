//! wave_lexer: lexer crate.
//!
//! Tokenizes source text into a structure-of-arrays stream and collects
//! diagnostics. Entry points: [`lex`] and [`LexedSrc`].
mod keywords;
mod lexer;

pub use lexer::{LexedSrc, Lexer, lex, token_len};
