// Lexicon-based sentiment scoring. Each matched word contributes a
// (polarity, subjectivity) pair; intensifiers and negations adjust the
// polarity of the word that follows them. The document score is the mean
// over matched words.
use anyhow::Result;
use serde::Serialize;

use super::lexicon::Lexicon;
use super::normalize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Boundaries are exclusive: polarity of exactly ±0.1 is Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            SentimentLabel::Positive
        } else if polarity < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentResult {
    /// Valence in [-1, 1].
    pub polarity: f64,
    /// Opinion content in [0, 1].
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

/// Score the whole text. Text with no lexicon matches (including empty
/// input) yields polarity 0.0, subjectivity 0.0, Neutral — a defined
/// result, never a failure.
pub fn score_text(lexicon: &Lexicon, text: &str) -> SentimentResult {
    let words = tokenize(text);
    let mut polarities: Vec<f64> = Vec::new();
    let mut subjectivities: Vec<f64> = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let Some(entry) = lexicon.sentiment_score(word) else {
            continue;
        };
        let mut polarity = entry.polarity;
        let mut subjectivity = entry.subjectivity;

        if i > 0 && lexicon.is_intensifier(&words[i - 1]) {
            polarity *= 1.5;
            subjectivity = (subjectivity * 1.2).min(1.0);
        }
        // Negation within the two preceding words flips and dampens.
        let negated = (i > 0 && lexicon.is_negation(&words[i - 1]))
            || (i > 1 && lexicon.is_negation(&words[i - 2]));
        if negated {
            polarity *= -0.5;
        }

        polarities.push(polarity);
        subjectivities.push(subjectivity);
    }

    if polarities.is_empty() {
        return SentimentResult {
            polarity: 0.0,
            subjectivity: 0.0,
            label: SentimentLabel::Neutral,
        };
    }

    let polarity =
        (polarities.iter().sum::<f64>() / polarities.len() as f64).clamp(-1.0, 1.0);
    let subjectivity =
        (subjectivities.iter().sum::<f64>() / subjectivities.len() as f64).clamp(0.0, 1.0);

    SentimentResult {
        polarity,
        subjectivity,
        label: SentimentLabel::from_polarity(polarity),
    }
}

/// Format the full sentiment report.
pub fn analyze_sentiment(lexicon: &Lexicon, text: &str) -> Result<String> {
    let score = score_text(lexicon, text);

    let mut report = format!("Sentiment: {}\n", score.label.as_str());
    report.push_str(&format!("Polarity Score: {:.3} (-1 to 1)\n", score.polarity));
    report.push_str(&format!(
        "Subjectivity Score: {:.3} (0 to 1)\n",
        score.subjectivity
    ));
    if score.subjectivity > 0.5 {
        report.push_str("The text is quite subjective and opinionated.");
    } else {
        report.push_str("The text is relatively objective and factual.");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::load().unwrap()
    }

    #[test]
    fn test_positive_text() {
        let result = score_text(
            &lexicon(),
            "I love this! It's absolutely wonderful and amazing.",
        );
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.polarity > 0.1);
    }

    #[test]
    fn test_negative_text() {
        let result = score_text(&lexicon(), "This is terrible and awful. I hate it!");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.polarity < -0.1);
    }

    #[test]
    fn test_neutral_text() {
        let result = score_text(&lexicon(), "The sky is blue. The grass is green.");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_well_defined() {
        let result = score_text(&lexicon(), "");
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.subjectivity, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let result = score_text(&lexicon(), "This is not good at all.");
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_label_boundaries_are_exclusive() {
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.11), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_report_format() {
        let report = analyze_sentiment(&lexicon(), "").unwrap();
        assert_eq!(
            report,
            "Sentiment: Neutral\n\
             Polarity Score: 0.000 (-1 to 1)\n\
             Subjectivity Score: 0.000 (0 to 1)\n\
             The text is relatively objective and factual."
        );
    }

    #[test]
    fn test_subjective_remark() {
        let report =
            analyze_sentiment(&lexicon(), "This movie is absolutely wonderful.").unwrap();
        assert!(report.contains("quite subjective and opinionated"));
    }
}
