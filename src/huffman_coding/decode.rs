use log::{debug, warn};

use super::node::{Node, NodeData};
use crate::error::HuffmanError;

/// Decode a bit-string by walking the tree from the root. Bad characters are skipped
/// with a warning, and a code cut short at the end of the input is quietly dropped.
pub fn decode(bits: &str, root: &Node) -> String {
    let (text, skipped) = decode_with_diagnostics(bits, root);
    for anomaly in &skipped {
        warn!("{}", anomaly);
    }
    debug!("Decoded text: {}", text);
    text
}

/// Decode a bit-string, handing back the skipped characters instead of logging them.
pub fn decode_with_diagnostics(bits: &str, root: &Node) -> (String, Vec<HuffmanError>) {
    let mut text = String::new();
    let mut skipped = Vec::new();
    let mut current = root;

    for bit in bits.chars() {
        // A lone-leaf tree has no branches to follow, so no bit can move us.
        let next = match (bit, &current.node_data) {
            ('0', NodeData::Kids(left, _)) => left.as_ref(),
            ('1', NodeData::Kids(_, right)) => right.as_ref(),
            _ => {
                skipped.push(HuffmanError::MalformedBit(bit));
                continue;
            }
        };
        if next.is_leaf() {
            text.push_str(&next.syms);
            current = root;
        } else {
            current = next;
        }
    }
    // Anything left in `current` here is a truncated code and is dropped.
    (text, skipped)
}
