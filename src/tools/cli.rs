use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Verbosity {
    /// Map the numeric -v level onto a verbosity. Anything past 5 is still Trace.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode, Decode, or both
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Encode,
    Decode,
    Both,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Frequency table, one `<symbol> - <frequency>` per line
    pub freq_file: PathBuf,
    /// Clear text to encode
    pub text_file: PathBuf,
    /// Encoded text to decode, one bit-string per line
    pub encoded_file: PathBuf,
    /// Optional file to also receive the encoded bit-string
    pub output: Option<PathBuf>,
    /// Encode/Decode/Both
    pub op_mode: Mode,
    /// Print the tree in preorder before the codes
    pub show_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            freq_file: PathBuf::from("FreqTable.txt"),
            text_file: PathBuf::from("ClearText.txt"),
            encoded_file: PathBuf::from("Encoded.txt"),
            output: None,
            op_mode: Mode::Both,
            show_tree: true,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Build a huffman code from a frequency table, then encode and decode text with it",
    long_about = None
)]
pub struct Args {
    /// Frequency table file, one `<symbol> - <frequency>` per line
    #[clap(short = 'f', long = "freq", default_value = "FreqTable.txt")]
    freq: String,

    /// Clear text file to encode
    #[clap(short = 't', long = "text", default_value = "ClearText.txt")]
    text: String,

    /// Encoded file to decode, one bit-string per line
    #[clap(short = 'e', long = "encoded", default_value = "Encoded.txt")]
    encoded: String,

    /// Also write the encoded bit-string to this file
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Only encode the clear text
    #[clap(long = "encode-only", name = "encode_only", conflicts_with = "decode_only")]
    encode_only: bool,

    /// Only decode the encoded file
    #[clap(long = "decode-only", name = "decode_only")]
    decode_only: bool,

    /// Don't print the tree
    #[clap(long = "no-tree")]
    no_tree: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let op_mode = match (args.encode_only, args.decode_only) {
            (true, _) => Mode::Encode,
            (_, true) => Mode::Decode,
            _ => Mode::Both,
        };
        HuffOpts {
            freq_file: PathBuf::from(args.freq),
            text_file: PathBuf::from(args.text),
            encoded_file: PathBuf::from(args.encoded),
            output: args.output.map(PathBuf::from),
            op_mode,
            show_tree: !args.no_tree,
            verbose: Verbosity::from_level(args.v),
        }
    }
}

/// Parse the command line, set the log level and report what we are going to do.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Frequency table: {}", opts.freq_file.display());
    if opts.op_mode != Mode::Decode {
        info!("Clear text: {}", opts.text_file.display());
    }
    if opts.op_mode != Mode::Encode {
        info!("Encoded text: {}", opts.encoded_file.display());
    }
    if let Some(out) = &opts.output {
        info!("Sending encoded output to {}", out.display());
    }
    info!("---- Initialization End ----\n");
    opts
}
