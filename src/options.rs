use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::ValueHint;
use regex::Regex;

#[derive(Parser, Debug)]
#[clap(
    author = clap::crate_authors!(),
    version = clap::crate_version!(),
    about = clap::crate_description!(),
)]
pub struct Options {
    /// Input file to read the words from, one word per line. [default: stdin]
    #[clap(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file to write the completions (and dump) to. [default: stdout]
    #[clap(short, long = "out", value_name = "file", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Prefix to complete. Can be given multiple times, completions are written in the same order.
    #[clap(short, long = "prefix", value_name = "prefix")]
    pub prefixes: Vec<String>,

    /// Trim leading and trailing whitespace from each line.
    /// [default: false]
    #[clap(short, long)]
    pub trim_input: bool,

    /// Only use lines matching the given regex pattern, other lines are dropped.
    /// For example, -a'^[a-z]+$' keeps only plain lowercase words.
    /// [default: use all lines]
    #[clap(short, long, value_name = "regex")]
    pub accept: Option<Regex>,

    /// Skip words that cannot be inserted (empty words, duplicates, or words that are a prefix of
    /// another word) with a warning, instead of failing.
    /// [default: false]
    #[clap(short = 'k', long)]
    pub skip_invalid: bool,

    /// Write the structure of the trie before the completions. [default: false]
    #[clap(short, long)]
    pub dump: bool,

    /// Order the words of each completion either by their position in the input, or alphabetically.
    #[clap(short, long, default_value = "index", value_name = "i[ndex]|a[lpha]")]
    pub sort: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Index,
    Alphabetical,
}

impl FromStr for SortOrder {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i" | "index" => Ok(SortOrder::Index),
            "a" | "alpha" => Ok(SortOrder::Alphabetical),
            _ => Err("sort order must be either 'index' or 'alpha'"),
        }
    }
}

#[test]
fn sort_order() {
    assert_eq!("i".parse::<SortOrder>(), Ok(SortOrder::Index));
    assert_eq!("alpha".parse::<SortOrder>(), Ok(SortOrder::Alphabetical));
    assert!("count".parse::<SortOrder>().is_err());
}

#[test]
fn parse_options() {
    let options = Options::parse_from(["rt", "words.txt", "-p", "be", "--prefix", "st", "-tkd", "-sa", "-a", "^[a-z]+$"]);
    assert_eq!(options.input, Some(PathBuf::from("words.txt")));
    assert_eq!(options.prefixes, ["be", "st"]);
    assert!(options.trim_input && options.skip_invalid && options.dump);
    assert_eq!(options.sort, SortOrder::Alphabetical);
    assert!(options.accept.unwrap().is_match("bear"));
    assert_eq!(options.output, None);
}
