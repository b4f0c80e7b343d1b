use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use log::{debug, warn};
use range_trie::{Builder, Trie};

use crate::options::{Options, SortOrder};

mod options;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::parse();
    debug!("{options:#?}");

    // Read the word list, which must outlive the trie.
    let words = read_words(&options)?;
    let trie = build_trie(&words, options.skip_invalid)?;

    // Write dump and completions to output.
    let mut output: Box<dyn io::Write> = if let Some(file) = &options.output {
        let file = File::create(file).with_context(|| format!("cannot create output file '{}'", file.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(io::stdout().lock())
    };

    if options.dump {
        write!(output, "{trie}")?;
    }
    for prefix in &options.prefixes {
        write_completions(&mut output, &trie, prefix, options.sort)?;
    }
    output.flush()?;

    Ok(())
}

fn read_words(options: &Options) -> anyhow::Result<Vec<String>> {
    let input: Box<dyn io::BufRead> = if let Some(file) = &options.input {
        let file = File::open(file).with_context(|| format!("cannot open input file '{}'", file.display()))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(io::stdin().lock())
    };

    let mut words = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("cannot read input line {}", i + 1))?;
        let mut word = line.as_str();

        // Optionally trim leading and trailing whitespace.
        if options.trim_input {
            word = word.trim();
        }

        // Optionally drop lines not matching the accept pattern.
        if let Some(accept) = &options.accept {
            if !accept.is_match(word) {
                debug!("input line {}: dropping '{word}', does not match '{accept}'", i + 1);
                continue;
            }
        }

        words.push(word.to_owned());
    }
    Ok(words)
}

fn build_trie(words: &[String], skip_invalid: bool) -> anyhow::Result<Trie<'_, String>> {
    let mut builder = Builder::new(words);
    for (index, word) in words.iter().enumerate() {
        if let Err(error) = builder.insert(index) {
            if !skip_invalid {
                return Err(error).with_context(|| format!("cannot insert '{word}' into the trie"));
            }
            warn!("skipping '{word}': {error}");
        }
    }
    Ok(builder.finish())
}

fn write_completions(
    output: &mut impl io::Write,
    trie: &Trie<'_, String>,
    prefix: &str,
    sort: SortOrder,
) -> io::Result<()> {
    let Some(mut leaves) = trie.completions(prefix) else {
        return writeln!(output, "'{prefix}': (none)");
    };
    match sort {
        SortOrder::Index => leaves.sort_by_key(|&leaf| trie.word_index(leaf)),
        SortOrder::Alphabetical => leaves.sort_by_key(|&leaf| trie.word(leaf)),
    }
    let words: Vec<&str> = leaves.into_iter().filter_map(|leaf| trie.word(leaf)).collect();
    writeln!(output, "'{prefix}': {}", words.join(" "))
}
