// Extractive summarization: sentences are scored by the document-wide
// frequency of their words and the top third is emitted in original order.
use anyhow::Result;

use super::frequency::build_frequency;
use super::lexicon::Lexicon;
use super::normalize::{filter_tokens, split_sentences, tokenize};

/// Summarize `text` by selecting `max(1, n / 3)` of its `n` sentences.
/// Documents with three or fewer sentences (including empty input) are
/// returned unchanged.
pub fn summarize(lexicon: &Lexicon, text: &str) -> Result<String> {
    let sentences = split_sentences(text);
    if sentences.len() <= 3 {
        return Ok(text.to_string());
    }

    let token_lists: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| filter_tokens(lexicon, &tokenize(s)))
        .collect();
    let freq = build_frequency(&token_lists);

    // Stopwords are absent from the table, so they contribute zero here.
    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(idx, sentence)| {
            let score = tokenize(sentence)
                .iter()
                .filter_map(|word| freq.get(word))
                .sum();
            (idx, score)
        })
        .collect();

    // Deterministic k-selection: score descending, original index ascending.
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let k = (sentences.len() / 3).max(1);
    let mut selected: Vec<usize> = scored.into_iter().take(k).map(|(idx, _)| idx).collect();
    selected.sort_unstable();

    let summary: Vec<&str> = selected.iter().map(|&idx| sentences[idx].as_str()).collect();
    Ok(summary.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::load().unwrap()
    }

    #[test]
    fn test_short_text_returned_unchanged() {
        let text = "One sentence. Two sentences. Three sentences.";
        assert_eq!(summarize(&lexicon(), text).unwrap(), text);
    }

    #[test]
    fn test_empty_text_returned_unchanged() {
        assert_eq!(summarize(&lexicon(), "").unwrap(), "");
    }

    #[test]
    fn test_four_sentences_yield_one() {
        let text = "The cat sat on the mat. The dog barked loudly today. \
                    Cats and dogs can live together peacefully if raised carefully. \
                    Training takes patience from the owner.";
        let summary = summarize(&lexicon(), text).unwrap();
        let summary_sentences = split_sentences(&summary);
        assert_eq!(summary_sentences.len(), 1);
        // The selected sentence must be a verbatim original.
        let originals = split_sentences(text);
        assert!(originals.contains(&summary_sentences[0]));
    }

    #[test]
    fn test_summary_preserves_original_order() {
        // Nine sentences; repeated content words force known winners.
        let text = "Rust compilers optimize code aggressively. Blue is a color. \
                    Green is a color too. Rust compilers emit fast code. \
                    Yellow exists. Purple exists. Rust compilers check borrows. \
                    Orange exists. Pink exists.";
        let lex = lexicon();
        let summary = summarize(&lex, text).unwrap();
        let picked = split_sentences(&summary);
        assert_eq!(picked.len(), 3);
        // Selected sentences must appear in the same relative order as in
        // the source document.
        let originals = split_sentences(text);
        let positions: Vec<usize> = picked
            .iter()
            .map(|s| originals.iter().position(|o| o == s).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_selection_count_matches_formula() {
        let sentences: Vec<String> = (0..12)
            .map(|i| format!("Sentence number {i} talks about topic {i}."))
            .collect();
        let text = sentences.join(" ");
        let summary = summarize(&lexicon(), &text).unwrap();
        assert_eq!(split_sentences(&summary).len(), 4); // floor(12 / 3)
    }
}
