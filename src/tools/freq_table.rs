use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::HuffmanError;
use crate::huffman_coding::tree::FreqMap;

/// Separator between the symbol and its frequency on each line.
const SEPARATOR: &str = " - ";

/// Open and parse a frequency table file.
pub fn read_freq_table(path: &Path) -> Result<FreqMap, HuffmanError> {
    info!("Reading frequency table from {}", path.display());
    let fin = File::open(path)?;
    parse_freq_table(BufReader::new(fin))
}

/// Parse lines of the form `<symbol> - <frequency>`.
///
/// Blank lines are skipped. Any other line that does not fit the format, names a symbol a
/// second time or gives a frequency that is not a positive integer fails the whole table.
/// Symbols are kept exactly as written (no case folding).
pub fn parse_freq_table<R: BufRead>(reader: R) -> Result<FreqMap, HuffmanError> {
    let mut freqs = FreqMap::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        // Report lines counting from 1, the way an editor does
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let bad = |reason: &str| HuffmanError::BadFreqLine {
            line: line_no,
            reason: reason.to_string(),
        };

        let (sym, count) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| bad("expected `<symbol> - <frequency>`"))?;
        if sym.is_empty() {
            return Err(bad("missing symbol"));
        }
        let weight: u64 = count
            .trim()
            .parse()
            .map_err(|_| bad(&format!("frequency {:?} is not a number", count.trim())))?;
        if weight == 0 {
            return Err(bad("frequency must be positive"));
        }
        if freqs.insert(sym.to_string(), weight).is_some() {
            return Err(bad(&format!("symbol {:?} listed twice", sym)));
        }
    }

    debug!("Frequency table has {} symbols", freqs.len());
    Ok(freqs)
}

#[cfg(test)]
mod test {
    use super::parse_freq_table;
    use crate::error::HuffmanError;

    #[test]
    fn parse_test() {
        let input = "A - 19\nB - 16\r\nC - 17\n";
        let freqs = parse_freq_table(input.as_bytes()).unwrap();
        assert_eq!(freqs.len(), 3);
        assert_eq!(freqs["A"], 19);
        assert_eq!(freqs["B"], 16);
        assert_eq!(freqs["C"], 17);
    }

    #[test]
    fn blank_lines_test() {
        let freqs = parse_freq_table("\nA - 1\n   \nB - 2\n\n".as_bytes()).unwrap();
        assert_eq!(freqs.len(), 2);
    }

    #[test]
    fn group_symbol_test() {
        let freqs = parse_freq_table("TH - 40\n  - 3\n".as_bytes()).unwrap();
        assert_eq!(freqs["TH"], 40);
        // A space is a perfectly good symbol
        assert_eq!(freqs[" "], 3);
    }

    #[test]
    fn missing_separator_test() {
        let result = parse_freq_table("A - 1\nB 2\n".as_bytes());
        assert!(matches!(result, Err(HuffmanError::BadFreqLine { line: 2, .. })));
    }

    #[test]
    fn bad_number_test() {
        let result = parse_freq_table("A - one\n".as_bytes());
        assert!(matches!(result, Err(HuffmanError::BadFreqLine { line: 1, .. })));
        let result = parse_freq_table("A - -3\n".as_bytes());
        assert!(matches!(result, Err(HuffmanError::BadFreqLine { line: 1, .. })));
    }

    #[test]
    fn zero_frequency_test() {
        let result = parse_freq_table("A - 0\n".as_bytes());
        assert!(matches!(result, Err(HuffmanError::BadFreqLine { line: 1, .. })));
    }

    #[test]
    fn duplicate_symbol_test() {
        let result = parse_freq_table("A - 1\nB - 1\nA - 4\n".as_bytes());
        assert!(matches!(result, Err(HuffmanError::BadFreqLine { line: 3, .. })));
    }

    #[test]
    fn missing_symbol_test() {
        let result = parse_freq_table(" - 4\n".as_bytes());
        assert!(matches!(result, Err(HuffmanError::BadFreqLine { line: 1, .. })));
    }

    #[test]
    fn empty_input_test() {
        let freqs = parse_freq_table("".as_bytes()).unwrap();
        assert!(freqs.is_empty());
    }
}
