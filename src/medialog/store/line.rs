use crate::model::{Entry, MediaType, Rating, Year};

pub const DELIMITER: char = '|';
const FIELD_COUNT: usize = 5;

/// Parses one stored line (`type|name|year|genre|rating`).
///
/// Surrounding whitespace is stripped from the line, not from the fields.
/// Returns `None` for blank lines and for lines that do not have exactly five fields.
pub fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }

    Some(Entry {
        media_type: MediaType::from_text(parts[0]),
        name: parts[1].to_string(),
        year: Year::from_text(parts[2]),
        genre: parts[3].to_string(),
        rating: Rating::from_text(parts[4]),
    })
}

/// Formats an entry as one stored line, without the trailing newline.
pub fn format_line(entry: &Entry) -> String {
    [
        entry.media_type.as_str().to_string(),
        entry.name.clone(),
        entry.year.to_string(),
        entry.genre.clone(),
        entry.rating.to_string(),
    ]
    .join(&DELIMITER.to_string())
}
