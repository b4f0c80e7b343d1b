//! Every word of every input word list completes to its own leaf.

use range_trie::Builder;
use regex::Regex;
use walkdir::WalkDir;

#[test]
fn all_input_word_lists() {
    let lowercase_word = Regex::new("^[a-z]+$").unwrap();
    let inputs = format!("{}/tests/inputs", env!("CARGO_MANIFEST_DIR"));

    let mut word_lists = 0;
    for entry in WalkDir::new(inputs) {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }
        word_lists += 1;

        let content = std::fs::read_to_string(entry.path()).unwrap();
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| lowercase_word.is_match(line))
            .collect();

        let mut builder = Builder::new(&words);
        let accepted: Vec<&str> = (0..words.len())
            .filter(|&index| builder.insert(index).is_ok())
            .map(|index| words[index])
            .collect();
        let trie = builder.finish();
        assert!(!accepted.is_empty(), "{}", entry.path().display());

        for word in &accepted {
            let leaves = trie.completions(word).unwrap();
            assert!(
                leaves.iter().any(|&leaf| trie.word(leaf) == Some(*word)),
                "'{word}' of {} does not complete to itself\n{trie}",
                entry.path().display()
            );
            for &leaf in &leaves {
                assert!(trie.word(leaf).unwrap().starts_with(word));
            }
        }

        let all = trie.completions("").unwrap();
        assert_eq!(all.len(), accepted.len());
    }
    assert!(word_lists >= 3);
}
