//! Error type shared by the huffman coding engine and its file tools.
//!
//! Only some of these are fatal. `InvalidInput`, `BadFreqLine` and `Io` stop the
//! operation that raised them and travel back to the caller with `?`.
//! `UnknownSymbol` and `MalformedBit` are recovered on the spot by the encoder and
//! decoder: the offending character is dropped, a warning is logged, and work continues.
//!
//! A bit-string that ends part way down the tree is not an error at all. The partial
//! path is discarded quietly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Nothing to build a tree from (or weights that cannot be summed)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Character in the clear text that has no code
    #[error("character not in frequency table, skipping: {0:?}")]
    UnknownSymbol(char),

    /// Character in an encoded line that is not a usable bit
    #[error("unexpected character in encoded text, skipping: {0:?}")]
    MalformedBit(char),

    /// A frequency table line we could not use
    #[error("frequency table line {line}: {reason}")]
    BadFreqLine { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    /// True for the per-symbol / per-bit anomalies that never abort a batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HuffmanError::UnknownSymbol(_) | HuffmanError::MalformedBit(_)
        )
    }
}
