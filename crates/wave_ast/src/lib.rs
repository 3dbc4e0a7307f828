//! wave_ast: the syntax tree model.
//!
//! Nodes live in parallel arrays indexed by [`NodeId`]; oversized payloads
//! go to a byte-granular extra buffer. Entry points: [`NodeList`], [`Node`].
mod node;
mod tree;

pub use node::{Data, Node, NodeId, NodeKind, NodeRange};
pub use tree::{ExtraId, FuncProtoMany, FuncProtoOne, NodeList};
