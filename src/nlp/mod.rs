// NLP modules for textops
pub mod frequency;
pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;
pub mod summarize;
pub mod translate;

pub use keywords::extract_keywords;
pub use lexicon::Lexicon;
pub use sentiment::analyze_sentiment;
pub use summarize::summarize;
pub use translate::translate_text;
