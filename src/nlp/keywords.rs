// Keyword and phrase extraction: lemma frequencies for the keyword list,
// adjacent bigrams over the filtered token sequence for the phrase list.
use anyhow::Result;
use std::collections::HashMap;

use super::lexicon::Lexicon;
use super::normalize::{filter_tokens, tokenize};

const MAX_KEYWORDS: usize = 10;
const MAX_PHRASES: usize = 5;

/// Extract the top keywords and key phrases from `text` as a formatted
/// numbered report. Keywords are lemmatized and ranked by frequency with
/// first-seen order breaking ties; phrases are the first bigrams of adjacent
/// non-stopword tokens, in order of appearance.
pub fn extract_keywords(lexicon: &Lexicon, text: &str) -> Result<String> {
    let words = filter_tokens(lexicon, &tokenize(text));
    let lemmas: Vec<String> = words.iter().map(|w| lexicon.lemmatize(w)).collect();

    // (count, first-seen index) so ties rank by first appearance.
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, lemma) in lemmas.iter().enumerate() {
        let entry = counts.entry(lemma.as_str()).or_insert((0, i));
        entry.0 += 1;
    }
    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(lemma, (count, first))| (lemma, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let mut result = String::from("Top Keywords:\n");
    for (i, (lemma, count, _)) in ranked.iter().take(MAX_KEYWORDS).enumerate() {
        result.push_str(&format!("{}. {} (frequency: {})\n", i + 1, lemma, count));
    }

    // Bigrams over the filtered (non-lemmatized) sequence.
    let bigrams: Vec<String> = words
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect();
    if !bigrams.is_empty() {
        result.push_str("\nKey Phrases:\n");
        for (i, phrase) in bigrams.iter().take(MAX_PHRASES).enumerate() {
            result.push_str(&format!("{}. {}\n", i + 1, phrase));
        }
    }

    Ok(result)
}
