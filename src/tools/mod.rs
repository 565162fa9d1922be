//! The tools module holds the helpers around the coding engine.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_table: Read a `<symbol> - <frequency>` table into a frequency map.
//! - text_io: Read clear text and encoded lines, write encoded output.
//!
pub mod cli;
pub mod freq_table;
pub mod text_io;
