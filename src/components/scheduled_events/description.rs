use crate::components::ctftime::EventRecord;

/// Build the scheduled event description for a CTFtime record.
///
/// Restricted events get a leading `Restriction:` paragraph. Weights keep
/// their decimal part (`25.0`).
pub fn compose_description(record: &EventRecord) -> String {
    let mut paragraphs = Vec::with_capacity(6);

    if !record.is_open() {
        paragraphs.push(format!("Restriction: {}", record.restrictions));
    }
    paragraphs.push(format!("CTFtime URL: {}", record.ctftime_url));
    paragraphs.push(format!("Format: {}", record.format));
    paragraphs.push(format!("Weight: {:?}", record.weight));
    paragraphs.push(format!("Prizes: {}", record.prizes));
    paragraphs.push(record.description.clone());

    paragraphs.join("\n\n")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`
pub fn clamp(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut clamped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    clamped.push('…');
    clamped
}
