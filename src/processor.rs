// Dispatcher: routes a (text, processing type) pair to the matching NLP
// component and wraps the outcome in a tagged result. The legacy plain-string
// channel is preserved by `process_raw`.
use std::collections::HashMap;
use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::nlp::{keywords, sentiment, summarize, translate, Lexicon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingType {
    Summarize,
    Analyze,
    Extract,
    Translate,
}

impl ProcessingType {
    /// Parse a wire-format type string. Unknown strings are not an error;
    /// callers turn `None` into the unknown-type response.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "summarize" => Some(ProcessingType::Summarize),
            "analyze" => Some(ProcessingType::Analyze),
            "extract" => Some(ProcessingType::Extract),
            "translate" => Some(ProcessingType::Translate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessingType::Summarize => "summarize",
            ProcessingType::Analyze => "analyze",
            ProcessingType::Extract => "extract",
            ProcessingType::Translate => "translate",
        }
    }

    /// Human-readable operation name used in soft-fail messages.
    fn operation(self) -> &'static str {
        match self {
            ProcessingType::Summarize => "summarization",
            ProcessingType::Analyze => "sentiment analysis",
            ProcessingType::Extract => "keyword extraction",
            ProcessingType::Translate => "translation",
        }
    }
}

/// A component fault, tagged with the operation it came from. `Display`
/// renders the legacy `"Error in <operation>: <message>"` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessError {
    pub processing_type: ProcessingType,
    pub message: String,
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error in {}: {}",
            self.processing_type.operation(),
            self.message
        )
    }
}

impl std::error::Error for ProcessError {}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    pub result: String,
    #[serde(rename = "type")]
    pub processing_type: ProcessingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Stateless dispatcher holding the shared lexical resources. One instance
/// serves any number of calls; `&Processor` is safe to share across threads.
pub struct Processor {
    lexicon: Lexicon,
}

impl Processor {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Single-step dispatch to the component for `processing_type`.
    pub fn process(
        &self,
        text: &str,
        processing_type: ProcessingType,
    ) -> Result<ProcessingResult, ProcessError> {
        let outcome = match processing_type {
            ProcessingType::Summarize => summarize::summarize(&self.lexicon, text),
            ProcessingType::Analyze => sentiment::analyze_sentiment(&self.lexicon, text),
            ProcessingType::Extract => keywords::extract_keywords(&self.lexicon, text),
            ProcessingType::Translate => translate::translate_text(text),
        };
        match outcome {
            Ok(result) => Ok(ProcessingResult {
                result,
                processing_type,
                metadata: None,
            }),
            Err(e) => Err(ProcessError {
                processing_type,
                message: e.to_string(),
            }),
        }
    }

    /// Backward-compatible string channel: results, soft-fail messages, and
    /// the unknown-type response all share the same return type.
    pub fn process_raw(&self, text: &str, type_str: &str) -> String {
        match ProcessingType::parse(type_str) {
            Some(processing_type) => match self.process(text, processing_type) {
                Ok(result) => result.result,
                Err(e) => e.to_string(),
            },
            None => format!("Unknown processing type: {type_str}"),
        }
    }
}

/// ISO-8601 timestamp for persistence records.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// What a persistence sink stores per processed request. Field names match
/// the original service's documents; building the record is the core's job,
/// writing it somewhere is the caller's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingRecord {
    pub user_id: String,
    pub original_text: String,
    pub processed_text: String,
    #[serde(rename = "type")]
    pub processing_type: String,
    pub timestamp: String,
}

impl ProcessingRecord {
    pub fn new(user_id: &str, original_text: &str, processing_type: &str, result: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            original_text: original_text.to_string(),
            processed_text: result.to_string(),
            processing_type: processing_type.to_string(),
            timestamp: current_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> Processor {
        Processor::new(Lexicon::load().unwrap())
    }

    #[test]
    fn test_unknown_type_is_first_class() {
        let p = processor();
        assert_eq!(
            p.process_raw("some text", "bogus"),
            "Unknown processing type: bogus"
        );
    }

    #[test]
    fn test_dispatch_summarize() {
        let p = processor();
        let short = "Just one sentence here.";
        assert_eq!(p.process_raw(short, "summarize"), short);
    }

    #[test]
    fn test_dispatch_analyze() {
        let p = processor();
        let result = p.process(
            "I love this! It's absolutely wonderful and amazing.",
            ProcessingType::Analyze,
        );
        let result = result.unwrap();
        assert!(result.result.starts_with("Sentiment: Positive\n"));
        assert_eq!(result.processing_type, ProcessingType::Analyze);
    }

    #[test]
    fn test_dispatch_extract() {
        let p = processor();
        let result = p.process_raw("docker docker nginx", "extract");
        assert!(result.starts_with("Top Keywords:\n"));
    }

    #[test]
    fn test_dispatch_translate() {
        let p = processor();
        let result = p.process_raw("The weather is pleasant today.", "translate");
        assert!(result.starts_with("Detected Language: "));
        assert!(result.contains("Translation Options:\n"));
    }

    #[test]
    fn test_processing_type_round_trip() {
        for s in ["summarize", "analyze", "extract", "translate"] {
            assert_eq!(ProcessingType::parse(s).unwrap().as_str(), s);
        }
        assert!(ProcessingType::parse("Summarize").is_none());
        assert!(ProcessingType::parse("").is_none());
    }

    #[test]
    fn test_process_error_rendering() {
        let err = ProcessError {
            processing_type: ProcessingType::Summarize,
            message: "tokenizer failed".to_string(),
        };
        assert_eq!(err.to_string(), "Error in summarization: tokenizer failed");
    }

    #[test]
    fn test_current_timestamp_is_rfc3339() {
        let ts = current_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_record_serializes_with_original_field_names() {
        let record = ProcessingRecord::new("user-1", "input", "summarize", "output");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["originalText"], "input");
        assert_eq!(json["processedText"], "output");
        assert_eq!(json["type"], "summarize");
        assert!(json["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_result_json_shape() {
        let p = processor();
        let mut result = p.process("One sentence.", ProcessingType::Summarize).unwrap();
        result.metadata = Some(HashMap::from([(
            "processing_time".to_string(),
            "1ms".to_string(),
        )]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "summarize");
        assert_eq!(json["result"], "One sentence.");
        assert_eq!(json["metadata"]["processing_time"], "1ms");
    }
}
