//! Builds the huffman tree from a frequency table.
//!
//! Every symbol in the table becomes a leaf. The leaves go into a min-heap ordered by
//! the node ordering (weight, then single symbols before groups, then alphabetical), and
//! the two lowest nodes are repeatedly joined until a single root is left. The first
//! node pulled off the heap always becomes the left child.
//!
//! Because the ordering is total, the same table always produces the same tree, no
//! matter what order the table was read in.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::node::Node;
use crate::error::HuffmanError;

/// Symbol to frequency, as read from a frequency table.
pub type FreqMap = FxHashMap<String, u64>;

/// Build a huffman tree from the frequency table and return its root.
/// A table with one symbol gives a lone leaf. An empty table is an error.
pub fn build_tree(freqs: &FreqMap) -> Result<Node, HuffmanError> {
    // Turn the table into leaves on the heap
    let mut heap: BinaryHeap<Reverse<Node>> = freqs
        .iter()
        .map(|(sym, &weight)| Reverse(Node::leaf(sym, weight)))
        .collect();
    debug!("Building huffman tree from {} leaves", heap.len());

    // ...then pare it down to one single node with child nodes. The root is
    // whatever is left when the second pop comes up empty.
    loop {
        let Some(Reverse(left)) = heap.pop() else {
            return Err(HuffmanError::InvalidInput(
                "frequency table is empty, no tree to build".to_string(),
            ));
        };
        let Some(Reverse(right)) = heap.pop() else {
            return Ok(left);
        };
        trace!(
            "Merging {:?} ({}) with {:?} ({})",
            left.syms,
            left.weight,
            right.syms,
            right.weight
        );
        let parent = Node::merge(left, right).ok_or_else(|| {
            HuffmanError::InvalidInput("combined frequencies overflow".to_string())
        })?;
        heap.push(Reverse(parent));
    }
}

/// List the tree in preorder, one line per node. Leaves show their symbol and weight,
/// internal nodes only their weight.
pub fn preorder(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    preorder_walk(root, &mut lines);
    lines
}

fn preorder_walk(node: &Node, lines: &mut Vec<String>) {
    if node.is_leaf() {
        lines.push(format!("{}: {}", node.syms, node.weight));
    } else {
        lines.push(format!("Internal Node (Freq: {})", node.weight));
    }
    if let (Some(left), Some(right)) = (node.left(), node.right()) {
        preorder_walk(left, lines);
        preorder_walk(right, lines);
    }
}
