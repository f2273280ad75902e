// Mock translation: real language detection, hard-coded sample output.
// The table is an ordered slice, not a map, so output order is fixed.
use anyhow::Result;

/// Fixed (language, sample sentence) pairs. The samples are demonstrations,
/// not translations of the input.
pub const MOCK_TRANSLATIONS: &[(&str, &str)] = &[
    ("Spanish", "Este es un texto traducido al español."),
    ("French", "Ceci est un texte traduit en français."),
    ("German", "Dies ist ein ins Deutsche übersetzter Text."),
    ("Italian", "Questo è un testo tradotto in italiano."),
    ("Portuguese", "Este é um texto traduzido para português."),
];

const DISCLAIMER: &str = "Note: This is a demonstration. For real translations, \
use a translation API like Google Translate or DeepL.";

/// Best-effort language name for the input, or "Unknown" when detection
/// fails (empty or too-short text).
pub fn detect_language(text: &str) -> &'static str {
    whatlang::detect(text)
        .map(|info| info.lang().eng_name())
        .unwrap_or("Unknown")
}

/// Report the detected language followed by the fixed mock-translation table.
pub fn translate_text(text: &str) -> Result<String> {
    let mut result = format!("Detected Language: {}\n\n", detect_language(text));
    result.push_str("Translation Options:\n");
    for (language, sample) in MOCK_TRANSLATIONS {
        result.push_str(&format!("{language}: {sample}\n"));
    }
    result.push('\n');
    result.push_str(DISCLAIMER);
    Ok(result)
}
