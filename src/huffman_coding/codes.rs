use std::collections::BTreeMap;

use super::node::{Node, NodeData};

/// Symbol to code string ('0' and '1' characters). Kept sorted so reports list
/// the codes in a stable order.
pub type CodeMap = BTreeMap<String, String>;

/// Walk the tree and record the path to every leaf as its code. Left is '0', right is '1'.
/// A tree that is a lone leaf gives that leaf the empty code.
pub fn generate_codes(root: &Node) -> CodeMap {
    let mut codes = CodeMap::new();
    let mut prefix = String::new();
    walk(root, &mut prefix, &mut codes);
    codes
}

/// Recursively walk the tree, growing and shrinking the shared prefix on the way.
fn walk(node: &Node, prefix: &mut String, codes: &mut CodeMap) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            prefix.push('0');
            walk(left, prefix, codes);
            prefix.pop();
            prefix.push('1');
            walk(right, prefix, codes);
            prefix.pop();
        }
        NodeData::Leaf => {
            codes.insert(node.syms.clone(), prefix.clone());
        }
    }
}

#[cfg(test)]
mod test {
    use super::generate_codes;
    use crate::huffman_coding::tree::{build_tree, FreqMap};

    fn table(entries: &[(&str, u64)]) -> FreqMap {
        entries.iter().map(|&(s, f)| (s.to_string(), f)).collect()
    }

    #[test]
    fn small_tree_test() {
        let root = build_tree(&table(&[("A", 1), ("B", 1), ("C", 2)])).unwrap();
        let codes = generate_codes(&root);
        assert_eq!(codes.len(), 3);
        assert_eq!(codes["C"], "0");
        assert_eq!(codes["A"], "10");
        assert_eq!(codes["B"], "11");
    }

    #[test]
    fn single_leaf_test() {
        let root = build_tree(&table(&[("A", 5)])).unwrap();
        let codes = generate_codes(&root);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes["A"], "");
    }

    #[test]
    fn prefix_free_test() {
        let freqs = table(&[
            ("A", 19),
            ("B", 16),
            ("C", 17),
            ("D", 11),
            ("E", 42),
            ("F", 12),
            ("G", 14),
            ("H", 17),
            ("I", 16),
            ("J", 5),
            ("K", 10),
            ("L", 20),
            ("M", 19),
        ]);
        let codes = generate_codes(&build_tree(&freqs).unwrap());
        assert_eq!(codes.len(), freqs.len());
        for (a, code_a) in &codes {
            assert!(!code_a.is_empty());
            assert!(code_a.chars().all(|c| c == '0' || c == '1'));
            for (b, code_b) in &codes {
                if a != b {
                    assert!(!code_b.starts_with(code_a.as_str()), "{} prefixes {}", a, b);
                }
            }
        }
    }

    #[test]
    fn deterministic_test() {
        // Lots of ties on purpose
        let entries = [("A", 3), ("B", 3), ("C", 3), ("D", 3), ("E", 6), ("F", 1)];
        let first = generate_codes(&build_tree(&table(&entries)).unwrap());
        let mut reversed = entries;
        reversed.reverse();
        for _ in 0..5 {
            let again = generate_codes(&build_tree(&table(&reversed)).unwrap());
            assert_eq!(first, again);
        }
    }

    #[test]
    fn same_tree_same_codes_test() {
        let root = build_tree(&table(&[("X", 4), ("Y", 2), ("Z", 1)])).unwrap();
        assert_eq!(generate_codes(&root), generate_codes(&root));
    }
}
