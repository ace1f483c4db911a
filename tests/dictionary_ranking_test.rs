use std::io::Write;

use tempfile::NamedTempFile;
use wordmatch::dictionary::Dictionary;
use wordmatch::parallel::{ParallelRankConfig, ParallelRanker};
use wordmatch::rank::{RankEngine, Ranker, ScoredWord};

fn write_dictionary(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn test_rank_loaded_dictionary() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_dictionary(&["apple", "", "apply", "ample", "maple", "apple", "  "]);
    let dictionary = Dictionary::load_from_file(file.path())?;
    assert_eq!(dictionary.len(), 7);
    assert_eq!(dictionary.non_blank_count(), 5);

    let results = Ranker::default().rank("appel", dictionary.words(), 4)?;
    let pairs: Vec<_> = results.iter().map(ScoredWord::as_pair).collect();
    // Equal distances keep file order, duplicates included.
    assert_eq!(
        pairs,
        vec![("apple", 2), ("apply", 2), ("apple", 2), ("ample", 3)]
    );
    let indices: Vec<_> = results.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 2, 5, 3]);

    Ok(())
}

#[test]
fn test_sequential_and_parallel_agree_on_loaded_dictionary()
-> Result<(), Box<dyn std::error::Error>> {
    let words: Vec<String> = (0..3_000).map(|i| format!("word{}", i % 997)).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let file = write_dictionary(&refs);
    let dictionary = Dictionary::load_from_file(file.path())?;

    let parallel = ParallelRanker::new(
        ParallelRankConfig::default()
            .with_threads(3)
            .with_min_chunk_size(100),
    )?;

    for query in ["word1", "word99", "drow", ""] {
        let expected = Ranker::default().rank(query, dictionary.words(), 15)?;
        let actual = parallel.rank(query, dictionary.words(), 15)?;
        assert_eq!(actual, expected);
    }

    Ok(())
}
