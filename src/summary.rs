// Summarizer: shortens an article description to its lead sentence.

/// Minimum length (in characters, period excluded) for the first sentence to
/// stand on its own as the summary.
const MIN_SENTENCE_CHARS: usize = 10;

/// Character budget for the fallback summary.
const FALLBACK_CHARS: usize = 100;

/// Shorten `text` to its first sentence, or to a fixed character budget when
/// the first sentence is too short to be meaningful.
///
/// Sentences are split on every '.', so abbreviations end the first sentence
/// early. The fallback always appends "..." even when nothing was cut.
pub fn summarize_text(text: &str) -> String {
    let first = text.split('.').next().unwrap_or_default();
    if first.chars().count() > MIN_SENTENCE_CHARS {
        format!("{first}.")
    } else {
        let head: String = text.chars().take(FALLBACK_CHARS).collect();
        format!("{head}...")
    }
}
