//! Labeled-line field extraction over unstructured text.

use crate::types::PartialRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// Labels anchor at line starts so that e.g. "Subtitle: X" does not populate
// the title. The composer label tolerates a colon, pipe, dash, or no
// separator at all, with optional spacing inside "Music Composer".
static TITLE: Lazy<Regex> = Lazy::new(|| line_pattern(r"Title:\s*"));
static DIRECTOR: Lazy<Regex> = Lazy::new(|| line_pattern(r"Director:\s*"));
static PRODUCER: Lazy<Regex> = Lazy::new(|| line_pattern(r"Producer:\s*"));
static COMPOSER: Lazy<Regex> = Lazy::new(|| line_pattern(r"Music\s*Composer\s*[:|-]?\s*"));

fn line_pattern(label: &str) -> Regex {
    let pattern = format!(r"(?im)^\s*{label}([^\n]+)");
    Regex::new(&pattern).expect("field label pattern is valid")
}

/// Scans `text` for the four labeled lines. Each search is independent,
/// order-insensitive, and case-insensitive; the first occurrence of a label
/// wins and the remainder of its line is captured, trimmed. A label that
/// never occurs leaves its field unset. This function cannot fail.
pub fn extract_fields(text: &str) -> PartialRecord {
    PartialRecord {
        title: capture(&TITLE, text),
        director: capture(&DIRECTOR, text),
        producer: capture(&PRODUCER, text),
        music_composer: capture(&COMPOSER, text),
    }
}

fn capture(label: &Regex, text: &str) -> Option<String> {
    label
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_four_fields_verbatim_trimmed() {
        let text = "Title:  Inception \nDirector: Nolan\nProducer: Thomas\nMusic Composer: Zimmer";
        let fields = extract_fields(text);

        assert_eq!(fields.title.as_deref(), Some("Inception"));
        assert_eq!(fields.director.as_deref(), Some("Nolan"));
        assert_eq!(fields.producer.as_deref(), Some("Thomas"));
        assert_eq!(fields.music_composer.as_deref(), Some("Zimmer"));
    }

    #[test]
    fn labels_match_case_insensitively() {
        let text = "TITLE: Dune\ndirector: Villeneuve";
        let fields = extract_fields(text);

        assert_eq!(fields.title.as_deref(), Some("Dune"));
        assert_eq!(fields.director.as_deref(), Some("Villeneuve"));
    }

    #[test]
    fn label_order_in_text_does_not_matter() {
        let text = "Music Composer: Zimmer\nProducer: Thomas\nTitle: Inception";
        let fields = extract_fields(text);

        assert_eq!(fields.title.as_deref(), Some("Inception"));
        assert_eq!(fields.producer.as_deref(), Some("Thomas"));
        assert_eq!(fields.music_composer.as_deref(), Some("Zimmer"));
    }

    #[test]
    fn missing_label_leaves_field_unset() {
        let fields = extract_fields("Title: Inception\nDirector: Nolan");
        assert_eq!(fields.producer, None);
        assert_eq!(fields.music_composer, None);
    }

    #[test]
    fn composer_label_tolerates_pipe_dash_or_no_separator() {
        for text in [
            "Music Composer: Zimmer",
            "Music Composer | Zimmer",
            "Music Composer - Zimmer",
            "Music Composer Zimmer",
            "MusicComposer: Zimmer",
        ] {
            let fields = extract_fields(text);
            assert_eq!(fields.music_composer.as_deref(), Some("Zimmer"), "input: {text}");
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "Title: First\nTitle: Second";
        assert_eq!(extract_fields(text).title.as_deref(), Some("First"));
    }

    #[test]
    fn labels_are_line_anchored() {
        let fields = extract_fields("Subtitle: Not a movie title");
        assert_eq!(fields.title, None);
    }

    #[test]
    fn indented_labels_still_match() {
        let fields = extract_fields("   Title: Arrival");
        assert_eq!(fields.title.as_deref(), Some("Arrival"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Title: Inception\nMusic Composer - Zimmer";
        assert_eq!(extract_fields(text), extract_fields(text));
    }

    #[test]
    fn arbitrary_text_never_fails() {
        let fields = extract_fields("no labels anywhere \u{1f600}\n\n\t");
        assert_eq!(fields, PartialRecord::default());
    }
}
