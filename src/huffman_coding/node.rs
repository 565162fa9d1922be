//! Tree nodes and the order used to pick which two nodes merge next.

use std::cmp::Ordering;

/// What hangs below a node: either two owned subtrees or nothing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf,
}

/// A huffman tree node. Leaves carry one symbol, internal nodes carry the
/// symbols of both children (left first) and the sum of their weights.
#[derive(Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub syms: String,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(syms: &str, weight: u64) -> Node {
        Node {
            weight,
            syms: syms.to_string(),
            node_data: NodeData::Leaf,
        }
    }

    /// Join two nodes under a new parent. `left` is the one that sorted first.
    /// Returns None if the combined weight does not fit.
    pub fn merge(left: Node, right: Node) -> Option<Node> {
        let weight = left.weight.checked_add(right.weight)?;
        let mut syms = String::with_capacity(left.syms.len() + right.syms.len());
        syms.push_str(&left.syms);
        syms.push_str(&right.syms);
        Some(Node {
            weight,
            syms,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf)
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, _) => Some(left.as_ref()),
            NodeData::Leaf => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(_, right) => Some(right.as_ref()),
            NodeData::Leaf => None,
        }
    }

    /// A node covering exactly one character. Merged nodes (and multi-character
    /// group leaves) cover more.
    fn is_single(&self) -> bool {
        let mut chars = self.syms.chars();
        chars.next().is_some() && chars.next().is_none()
    }
}

impl Ord for Node {
    /// Sort by increasing weight, then single symbols ahead of groups, then by symbols.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| other.is_single().cmp(&self.is_single()))
            .then_with(|| self.syms.cmp(&other.syms))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality has to agree with the ordering above, so children are not compared.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}
