//! Word and bigram frequencies over the notes of a cleaned table.
//!
//! Notes are lowercased and stripped of ASCII punctuation, then split into
//! tokens of two or more characters with English stop words removed. Rows
//! without a note contribute nothing.

use std::collections::HashMap;

use serde::Serialize;

use crate::cleaning::types::CleanTable;

/// English stop words ignored when counting.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "eg", "either", "else", "elsewhere", "enough", "etc", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "for", "former",
    "formerly", "from", "further", "had", "has", "have", "having", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hers", "herself", "him", "himself", "his", "how",
    "however", "ie", "if", "im", "in", "indeed", "into", "is", "it", "its", "itself", "just",
    "latter", "least", "less", "ltd", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "much", "must", "my", "myself", "namely", "neither", "never",
    "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "please", "rather", "re", "same", "seem", "seemed", "seeming", "seems", "several", "she",
    "should", "since", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore", "therein",
    "thereupon", "these", "they", "this", "those", "though", "through", "throughout", "thru",
    "thus", "to", "together", "too", "toward", "towards", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// A term and how many times it appears across all notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Lowercases `note` and removes ASCII punctuation. Nothing is inserted in its place.
pub fn preprocess_note(note: &str) -> String {
    note.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Countable tokens of a note, in order: preprocessed, at least two characters, no stop words.
pub fn note_tokens(note: &str) -> Vec<String> {
    preprocess_note(note)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// The `n` most frequent words across all notes.
pub fn top_words(table: &CleanTable, n: usize) -> Vec<TermCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for note in table.rows().iter().filter_map(|r| r.notes.as_deref()) {
        for token in note_tokens(note) {
            *counts.entry(token).or_default() += 1;
        }
    }

    rank(counts, n)
}

/// The `n` most frequent adjacent word pairs. Pairs never span two notes.
pub fn top_bigrams(table: &CleanTable, n: usize) -> Vec<TermCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for note in table.rows().iter().filter_map(|r| r.notes.as_deref()) {
        let tokens = note_tokens(note);
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1;
        }
    }

    rank(counts, n)
}

/// Sorts by count descending, then term ascending, and keeps the first `n`.
fn rank(counts: HashMap<String, usize>, n: usize) -> Vec<TermCount> {
    let mut ranked: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    ranked.truncate(n);
    ranked
}
