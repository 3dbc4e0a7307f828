//! SoA node storage and the extra-buffer protocol.
use crate::{Data, Node, NodeId, NodeKind, NodeRange};

/// Byte offset into the extra buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtraId(pub u32);

/// Extra-buffer payload of a `FuncProtoOne` node: at most one parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuncProtoOne {
    pub param: NodeId,
    pub cc: NodeId,
}

/// Extra-buffer payload of a `FuncProto` node: two or more parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuncProtoMany {
    pub params: NodeRange,
    pub cc: NodeId,
}

/// The node arrays. Parallel per-field vectors plus the extra byte arena.
///
/// Construction is append-only apart from two exceptions: `reserve_node` /
/// `set_node` stabilise a parent's index before its children exist, and
/// `pop_node` rolls back a speculative parse — legal only on the current
/// tail of the array.
pub struct NodeList {
    kinds: Vec<NodeKind>,
    tokens: Vec<u32>,
    data: Vec<Data>,
    extra: Vec<u8>,
}

impl NodeList {
    /// Creates the list with the mandatory root node at index 0.
    pub fn with_capacity(cap: usize) -> Self {
        let mut list = Self {
            kinds: Vec::with_capacity(cap.max(1)),
            tokens: Vec::with_capacity(cap.max(1)),
            data: Vec::with_capacity(cap.max(1)),
            extra: Vec::new(),
        };
        list.add(Node::new(NodeKind::Root, 0, Data::Nil));
        list
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.kinds.len() as u32);
        self.kinds.push(node.kind);
        self.tokens.push(node.token);
        self.data.push(node.data);
        id
    }

    /// Append a placeholder to stabilise an index; patch it with `set_node`
    /// once the children are known.
    pub fn reserve_node(&mut self) -> NodeId {
        self.add(Node::new(NodeKind::Root, 0, Data::Nil))
    }

    pub fn set_node(&mut self, id: NodeId, node: Node) {
        let i = id.index();
        self.kinds[i] = node.kind;
        self.tokens[i] = node.token;
        self.data[i] = node.data;
    }

    /// Roll back a reserved node. Only the tail of the array may be popped.
    pub fn pop_node(&mut self, id: NodeId) {
        assert_eq!(
            id.index(),
            self.kinds.len() - 1,
            "pop_node must only touch the tail of the node array",
        );
        self.kinds.pop();
        self.tokens.pop();
        self.data.pop();
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.kinds[id.index()]
    }

    pub fn token(&self, id: NodeId) -> u32 {
        self.tokens[id.index()]
    }

    pub fn data(&self, id: NodeId) -> Data {
        self.data[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Node {
        Node::new(self.kind(id), self.token(id), self.data(id))
    }

    pub fn push_proto_one(&mut self, proto: FuncProtoOne) -> ExtraId {
        self.push_words(&[proto.param.0, proto.cc.0])
    }

    pub fn proto_one(&self, at: ExtraId) -> FuncProtoOne {
        FuncProtoOne {
            param: NodeId(self.word(at, 0)),
            cc: NodeId(self.word(at, 1)),
        }
    }

    pub fn push_proto_many(&mut self, proto: FuncProtoMany) -> ExtraId {
        self.push_words(&[proto.params.start, proto.params.end, proto.cc.0])
    }

    pub fn proto_many(&self, at: ExtraId) -> FuncProtoMany {
        FuncProtoMany {
            params: NodeRange::new(self.word(at, 0), self.word(at, 1)),
            cc: NodeId(self.word(at, 2)),
        }
    }

    fn push_words(&mut self, words: &[u32]) -> ExtraId {
        let at = ExtraId(self.extra.len() as u32);
        for w in words {
            self.extra.extend_from_slice(&w.to_le_bytes());
        }
        at
    }

    fn word(&self, at: ExtraId, index: usize) -> u32 {
        let offset = at.0 as usize + index * 4;
        let bytes = [
            self.extra[offset],
            self.extra[offset + 1],
            self.extra[offset + 2],
            self.extra[offset + 3],
        ];
        u32::from_le_bytes(bytes)
    }
}
