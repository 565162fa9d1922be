//! The huffman module is the coding engine: it builds the tree, derives the codes and
//! turns text into bit-strings and back.
//!
//! Codes are kept as text ('0' and '1' characters), not packed into bytes.
//!
//! The steps, in the order they are used:
//! - node: tree nodes and the order used when choosing the next two nodes to merge.
//! - tree: build the tree from a frequency table, and list it in preorder.
//! - codes: walk the tree to produce one code per symbol.
//! - encode: clear text to bit-string using the codes.
//! - decode: bit-string to text by walking the tree.
//!
//! Once built the tree is never changed, so one tree can serve any number of encode and
//! decode calls, from several threads if the caller likes.
//!

pub mod codes;
pub mod decode;
pub mod encode;
pub mod node;
pub mod tree;
