//! Runs the tool end to end: frequency table in, report out.
//!
//! The steps follow the order a user reads them in the report:
//! - read the frequency table and build the tree,
//! - generate the codes,
//! - print the tree (preorder) and the code table,
//! - read, print and encode the clear text,
//! - decode each line of the encoded file on its own.
//!

use std::io::{self, Write};

use log::info;

use crate::error::HuffmanError;
use crate::huffman_coding::{
    codes::{generate_codes, CodeMap},
    decode::decode,
    encode::encode,
    node::Node,
    tree::{build_tree, preorder},
};
use crate::tools::cli::{HuffOpts, Mode};
use crate::tools::freq_table::read_freq_table;
use crate::tools::text_io::{read_clear_text, read_encoded_lines, write_output};

/// Run everything the options ask for, printing the report to stdout.
pub fn run(opts: &HuffOpts) -> Result<(), HuffmanError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let freqs = read_freq_table(&opts.freq_file)?;
    let root = build_tree(&freqs)?;
    let codes = generate_codes(&root);
    info!("Built codes for {} symbols", codes.len());

    if opts.show_tree {
        write_tree(&mut out, &root)?;
    }
    write_codes(&mut out, &codes)?;

    if opts.op_mode != Mode::Decode {
        let clear_text = read_clear_text(&opts.text_file)?;
        writeln!(out, "\nClear Text Read from File:\n{}", clear_text)?;
        let bits = encode(&clear_text, &codes);
        writeln!(out, "\nEncoded Text: {}", bits)?;
        if let Some(path) = &opts.output {
            write_output(path, &bits)?;
        }
    }

    if opts.op_mode != Mode::Encode {
        let lines = read_encoded_lines(&opts.encoded_file)?;
        writeln!(out)?;
        for line in decode_lines(&lines, &root) {
            writeln!(out, "Decoded Text: {}", line)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Decode every encoded line against the same tree. Each line starts again at the root.
pub fn decode_lines<S: AsRef<str>>(lines: &[S], root: &Node) -> Vec<String> {
    lines.iter().map(|line| decode(line.as_ref(), root)).collect()
}

/// Print the tree in preorder under a heading.
pub fn write_tree<W: Write>(out: &mut W, root: &Node) -> io::Result<()> {
    writeln!(out, "Huffman Tree in Preorder:")?;
    for line in preorder(root) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the code table as `<symbol> = <code>`, in symbol order.
pub fn write_codes<W: Write>(out: &mut W, codes: &CodeMap) -> io::Result<()> {
    writeln!(out, "\nHuffman Codes:")?;
    for (sym, code) in codes {
        writeln!(out, "{} = {}", sym, code)?;
    }
    Ok(())
}
