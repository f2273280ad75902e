// Shared lexical resources: stopword set, lemma dictionary, sentiment lexicon.
// Loaded once at startup and passed by reference into every processing call.
// All fields are immutable after load, so a &Lexicon can be shared freely
// across threads.
use anyhow::{ensure, Result};
use std::collections::{HashMap, HashSet};

/// Polarity/subjectivity weights for a single lexicon word.
#[derive(Debug, Clone, Copy)]
pub struct WordSentiment {
    /// Valence in [-1, 1].
    pub polarity: f64,
    /// How opinion-based the word is, in [0, 1].
    pub subjectivity: f64,
}

// (word, polarity, subjectivity)
static SENTIMENT_WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.9, 0.9),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("love", 0.5, 0.6),
    ("happy", 0.8, 1.0),
    ("joy", 0.8, 0.95),
    ("pleased", 0.7, 0.9),
    ("delighted", 1.0, 1.0),
    ("satisfied", 0.7, 0.85),
    ("perfect", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("brilliant", 0.9, 0.9),
    ("outstanding", 1.0, 1.0),
    ("superb", 1.0, 1.0),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 0.9, 0.95),
    ("terrific", 0.9, 0.9),
    ("fabulous", 0.9, 0.9),
    ("exceptional", 0.9, 0.85),
    ("impressive", 0.8, 0.85),
    ("remarkable", 0.75, 0.75),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.25, 0.5),
    ("advantage", 0.5, 0.4),
    ("benefit", 0.5, 0.4),
    ("success", 0.75, 0.6),
    ("successful", 0.75, 0.6),
    ("win", 0.8, 0.6),
    ("winner", 0.8, 0.6),
    ("accomplished", 0.7, 0.6),
    ("achievement", 0.7, 0.5),
    ("triumph", 0.8, 0.6),
    ("enjoy", 0.5, 0.5),
    ("pleasant", 0.7, 0.75),
    ("comfortable", 0.55, 0.65),
    ("excited", 0.6, 0.8),
    ("exciting", 0.7, 0.8),
    ("thrilled", 0.9, 0.9),
    ("approve", 0.5, 0.5),
    ("like", 0.2, 0.3),
    ("favorite", 0.6, 0.8),
    ("prefer", 0.4, 0.6),
    // negative
    ("bad", -0.7, 0.65),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.6, 0.6),
    ("worst", -1.0, 0.3),
    ("worse", -0.5, 0.5),
    ("hate", -0.8, 0.9),
    ("angry", -0.7, 0.85),
    ("sad", -0.6, 0.9),
    ("upset", -0.6, 0.85),
    ("disappointed", -0.65, 0.8),
    ("dissatisfied", -0.65, 0.8),
    ("unhappy", -0.7, 0.9),
    ("fail", -0.6, 0.5),
    ("failure", -0.6, 0.5),
    ("failed", -0.6, 0.5),
    ("problem", -0.4, 0.3),
    ("issue", -0.3, 0.3),
    ("wrong", -0.5, 0.5),
    ("error", -0.4, 0.3),
    ("difficult", -0.5, 0.5),
    ("hard", -0.3, 0.4),
    ("struggle", -0.5, 0.5),
    ("broken", -0.5, 0.4),
    ("pain", -0.6, 0.7),
    ("painful", -0.7, 0.8),
    ("hurt", -0.6, 0.7),
    ("damage", -0.5, 0.4),
    ("disaster", -0.9, 0.8),
    ("negative", -0.25, 0.5),
    ("loss", -0.4, 0.4),
    ("lose", -0.4, 0.4),
    ("lost", -0.4, 0.4),
    ("defeat", -0.5, 0.5),
    ("reject", -0.5, 0.5),
    ("rejected", -0.5, 0.5),
    ("dislike", -0.5, 0.6),
    ("unpleasant", -0.7, 0.8),
    ("uncomfortable", -0.55, 0.65),
    ("disappointing", -0.65, 0.85),
    ("frustrated", -0.6, 0.8),
    ("frustrating", -0.6, 0.8),
];

static INTENSIFIERS: &[&str] = &[
    "very", "extremely", "absolutely", "really", "incredibly", "highly", "totally",
];

static NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none",
];

// Irregular inflections the suffix rules cannot recover.
static IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("women", "woman"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("people", "person"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("halves", "half"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("ran", "run"),
    ("ate", "eat"),
    ("spoke", "speak"),
    ("wrote", "write"),
    ("took", "take"),
    ("gave", "give"),
    ("went", "go"),
];

/// Immutable lexical resources shared by all processing calls.
pub struct Lexicon {
    stopwords: HashSet<String>,
    lemmas: HashMap<&'static str, &'static str>,
    sentiment: HashMap<&'static str, WordSentiment>,
    intensifiers: HashSet<&'static str>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    /// Load all lexical resources. Fails (fatally, for the caller) if any
    /// resource comes back empty; the core cannot produce correct results
    /// without them.
    pub fn load() -> Result<Self> {
        let stopwords: HashSet<String> = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        ensure!(!stopwords.is_empty(), "stopword list is empty");

        let lemmas: HashMap<&'static str, &'static str> =
            IRREGULAR_LEMMAS.iter().copied().collect();
        ensure!(!lemmas.is_empty(), "lemma dictionary is empty");

        let sentiment: HashMap<&'static str, WordSentiment> = SENTIMENT_WORDS
            .iter()
            .map(|&(word, polarity, subjectivity)| {
                (word, WordSentiment { polarity, subjectivity })
            })
            .collect();
        ensure!(!sentiment.is_empty(), "sentiment lexicon is empty");

        Ok(Self {
            stopwords,
            lemmas,
            sentiment,
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        })
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn sentiment_score(&self, word: &str) -> Option<WordSentiment> {
        self.sentiment.get(word).copied()
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Map a lowercased token to its dictionary base form: irregular lookup
    /// first, then conservative plural stripping. Unknown shapes pass through
    /// unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(&base) = self.lemmas.get(word) {
            return base.to_string();
        }
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }
        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix("es") {
                if stem.ends_with("ch")
                    || stem.ends_with("sh")
                    || stem.ends_with('s')
                    || stem.ends_with('x')
                    || stem.ends_with('z')
                {
                    return stem.to_string();
                }
            }
        }
        if word.len() > 3 && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
        {
            if let Some(stem) = word.strip_suffix('s') {
                return stem.to_string();
            }
        }
        word.to_string()
    }
}
