use log::{debug, warn};

use super::codes::CodeMap;
use crate::error::HuffmanError;

/// Upper-case the text so it matches the symbols of the frequency table.
pub fn canonicalize(text: &str) -> String {
    text.to_uppercase()
}

/// Encode clear text into a bit-string. Characters with no code are dropped with a warning.
pub fn encode(text: &str, codes: &CodeMap) -> String {
    let (bits, skipped) = encode_with_diagnostics(text, codes);
    for anomaly in &skipped {
        warn!("{}", anomaly);
    }
    debug!("Encoded text: {}", bits);
    bits
}

/// Encode clear text, handing back the characters that had no code instead of logging them.
pub fn encode_with_diagnostics(text: &str, codes: &CodeMap) -> (String, Vec<HuffmanError>) {
    let text = canonicalize(text);
    let mut bits = String::with_capacity(text.len() * 4);
    let mut skipped = Vec::new();
    // Scratch space to look up each char as a &str without allocating
    let mut buf = [0_u8; 4];

    for c in text.chars() {
        let key: &str = c.encode_utf8(&mut buf);
        match codes.get(key) {
            Some(code) => bits.push_str(code),
            None => skipped.push(HuffmanError::UnknownSymbol(c)),
        }
    }
    (bits, skipped)
}

#[cfg(test)]
mod test {
    use super::{encode, encode_with_diagnostics};
    use crate::error::HuffmanError;
    use crate::huffman_coding::codes::CodeMap;

    fn codes() -> CodeMap {
        [("C", "0"), ("A", "10"), ("B", "11")]
            .iter()
            .map(|&(s, c)| (s.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn encode_test() {
        assert_eq!(encode("ABCA", &codes()), "1011010");
        assert_eq!(encode("", &codes()), "");
    }

    #[test]
    fn case_fold_test() {
        assert_eq!(encode("abc", &codes()), encode("ABC", &codes()));
    }

    #[test]
    fn unknown_symbol_test() {
        let (bits, skipped) = encode_with_diagnostics("A?c d", &codes());
        assert_eq!(bits, "100");
        assert_eq!(skipped.len(), 3);
        assert!(matches!(skipped[0], HuffmanError::UnknownSymbol('?')));
        assert!(matches!(skipped[1], HuffmanError::UnknownSymbol(' ')));
        assert!(matches!(skipped[2], HuffmanError::UnknownSymbol('D')));
    }

    #[test]
    fn empty_code_test() {
        let mut single = CodeMap::new();
        single.insert("A".to_string(), String::new());
        assert_eq!(encode("AAA", &single), "");
    }
}
