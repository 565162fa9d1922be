//! Readers and writers for the plain text files around the coder: the clear text to
//! encode, the encoded lines to decode, and the encoded output.
//!
//! NOTE: These read whole files into memory. Inputs are expected to be small.
//!

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::info;

/// Open and read the clear text file.
pub fn read_clear_text(path: &Path) -> io::Result<String> {
    info!("Reading clear text from {}", path.display());
    join_clear_text(BufReader::new(File::open(path)?))
}

/// Join the lines of the clear text with '\n'. There is no trailing newline, even if
/// the input ended with one.
pub fn join_clear_text<R: BufRead>(reader: R) -> io::Result<String> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// Open and read the encoded file.
pub fn read_encoded_lines(path: &Path) -> io::Result<Vec<String>> {
    info!("Reading encoded text from {}", path.display());
    encoded_lines(BufReader::new(File::open(path)?))
}

/// One bit-string per line. Each line is its own message and is decoded on its own.
pub fn encoded_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Write the encoded bit-string to a file, followed by a newline.
pub fn write_output(path: &Path, bits: &str) -> io::Result<()> {
    info!("Writing encoded text to {}", path.display());
    let mut f_out = File::create(path)?;
    write_bits(&mut f_out, bits)
}

/// Write a bit-string followed by a newline to any writer.
pub fn write_bits<W: Write>(out: &mut W, bits: &str) -> io::Result<()> {
    out.write_all(bits.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
