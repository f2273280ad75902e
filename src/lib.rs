//! Lightweight text analytics: extractive summarization, lexicon-based
//! sentiment, keyword/phrase extraction, and a mock translation stub.
//!
//! Lexical resources are loaded once via [`Lexicon::load`] and injected into
//! a [`Processor`], which dispatches each `(text, type)` request to the
//! matching component and returns a formatted string result.
pub mod nlp;
pub mod processor;

pub use nlp::Lexicon;
pub use processor::{
    current_timestamp, ProcessError, ProcessingRecord, ProcessingResult, ProcessingType, Processor,
};
