use pallet_tag_traits::TextMetrics;
use pallet_tag_types::TextStyle;

/// Splits `text` into lines no wider than `max_width` millimeters.
///
/// Explicit newlines always break. Words are packed greedily; a single word
/// wider than the limit is broken between characters. Empty input yields a
/// single empty line so callers can always count at least one line.
pub fn split_text_to_size(
    text: &str,
    max_width: f32,
    style: TextStyle,
    metrics: &dyn TextMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, max_width, style, metrics, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    max_width: f32,
    style: TextStyle,
    metrics: &dyn TextMetrics,
    lines: &mut Vec<String>,
) {
    let mut current = String::new();
    let mut started = false;

    for word in paragraph.split(' ') {
        if !started {
            started = true;
            current = fit_word(word, max_width, style, metrics, lines);
            continue;
        }

        let candidate = format!("{current} {word}");
        if metrics.text_width(&candidate, style) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = fit_word(word, max_width, style, metrics, lines);
        }
    }

    lines.push(current);
}

/// Pushes full-width chunks of an over-long word and returns the remainder.
fn fit_word(
    word: &str,
    max_width: f32,
    style: TextStyle,
    metrics: &dyn TextMetrics,
    lines: &mut Vec<String>,
) -> String {
    if metrics.text_width(word, style) <= max_width {
        return word.to_string();
    }

    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if chunk.chars().count() > 1 && metrics.text_width(&chunk, style) > max_width {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}
