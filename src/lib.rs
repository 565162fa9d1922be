//! Huffman coding of text, kept as readable '0'/'1' strings.
//!
//! Builds a prefix-free code from a table of symbol frequencies, then encodes clear
//! text with it and decodes bit-strings back to text.
//!
//! The tree is deterministic. Ties in frequency are broken by putting single symbols
//! ahead of merged groups and then by alphabetical order, so a given table always
//! produces the same codes.
//!
//! Basic usage from the command line:
//!
//! `$> huffcode -f FreqTable.txt -t ClearText.txt -e Encoded.txt`
//!
//! This prints the tree, the code table, the encoded clear text and the decoded
//! form of every line of the encoded file.
//!
//! From code:
//!
//! ```
//! use huffcode::huffman_coding::{codes::generate_codes, decode::decode, encode::encode, tree::{build_tree, FreqMap}};
//!
//! let mut freqs = FreqMap::default();
//! freqs.insert("A".to_string(), 3);
//! freqs.insert("B".to_string(), 1);
//! freqs.insert("C".to_string(), 1);
//!
//! let root = build_tree(&freqs)?;
//! let codes = generate_codes(&root);
//! let bits = encode("abca", &codes);
//! assert_eq!(decode(&bits, &root), "ABCA");
//! # Ok::<(), huffcode::error::HuffmanError>(())
//! ```
//!
pub mod error;
pub mod huffman_coding;
pub mod pipeline;
pub mod tools;
