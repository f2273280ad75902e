// Sentence and word tokenization shared by the summarizer and keyword
// extractor. Pure functions of (text, lexicon); no side effects.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::lexicon::Lexicon;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9]+").unwrap());

// Periods after these do not end a sentence.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "fig", "inc", "ltd",
        "co", "dept", "est", "approx",
    ]
    .iter()
    .copied()
    .collect()
});

/// Split text into sentences, keeping terminal punctuation. A run of `.!?`
/// ends a sentence unless the period follows an abbreviation or a single
/// initial, sits inside a decimal number, or is followed by a lowercase
/// continuation. Trailing text without terminal punctuation becomes the last
/// sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i].1;
        if c == '.' || c == '!' || c == '?' {
            let mut j = i;
            while j + 1 < chars.len() && matches!(chars[j + 1].1, '.' | '!' | '?') {
                j += 1;
            }
            // Only a lone period needs disambiguation; `!`, `?`, and runs
            // like `...` always terminate.
            if c == '.' && j == i && !is_sentence_boundary(&chars, i) {
                i += 1;
                continue;
            }
            let end = chars[j].0 + chars[j].1.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
            i = j + 1;
        } else {
            i += 1;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn is_sentence_boundary(chars: &[(usize, char)], i: usize) -> bool {
    // Decimal number: digit on both sides.
    let prev = (i > 0).then(|| chars[i - 1].1);
    let next = chars.get(i + 1).map(|&(_, c)| c);
    if let (Some(p), Some(n)) = (prev, next) {
        if p.is_ascii_digit() && n.is_ascii_digit() {
            return false;
        }
    }
    // Word immediately before the period.
    let mut k = i;
    let mut reversed = String::new();
    while k > 0 && chars[k - 1].1.is_alphabetic() {
        reversed.push(chars[k - 1].1);
        k -= 1;
    }
    let word: String = reversed.chars().rev().collect::<String>().to_lowercase();
    if word.chars().count() == 1 {
        // Initials ("J. Smith") and the inner dots of "e.g." / "i.e.".
        return false;
    }
    if ABBREVIATIONS.contains(word.as_str()) {
        return false;
    }
    // The next non-space character must open a new sentence.
    let mut k = i + 1;
    while k < chars.len() && chars[k].1.is_whitespace() {
        k += 1;
    }
    match chars.get(k) {
        None => true,
        Some(&(_, c)) => !c.is_lowercase(),
    }
}

/// Lowercased, purely alphanumeric tokens. Punctuation-bearing fragments
/// never survive, matching the frequency-count invariant.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Drop stopwords from an already-tokenized sequence.
pub fn filter_tokens(lexicon: &Lexicon, tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !lexicon.is_stopword(t))
        .cloned()
        .collect()
}

/// Full normalization: ordered sentences plus the filtered token sequence.
pub fn normalize(lexicon: &Lexicon, text: &str) -> (Vec<String>, Vec<String>) {
    let sentences = split_sentences(text);
    let tokens = filter_tokens(lexicon, &tokenize(text));
    (sentences, tokens)
}
