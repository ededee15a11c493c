use colored::Colorize;
use medialog::api::{CmdMessage, MessageLevel, Summary};
use medialog::model::Entry;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH_MAX: usize = 40;
const GENRE_WIDTH_MAX: usize = 20;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One summary line per entry, as shown for search results.
pub(super) fn print_entries<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

/// Aligned table of entries, used by `list entries`.
pub(super) fn print_entry_table<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let index_width = entries.len().to_string().len();
    let name_width = column_width(entries.iter().map(|e| e.name.as_str()), NAME_WIDTH_MAX);
    let genre_width = column_width(entries.iter().map(|e| e.genre.as_str()), GENRE_WIDTH_MAX);

    for (i, entry) in entries.iter().enumerate() {
        let idx = format!("{:>width$}. ", i + 1, width = index_width);
        let name = pad_to_width(&truncate_to_width(&entry.name, name_width), name_width);
        let genre = pad_to_width(&truncate_to_width(&entry.genre, genre_width), genre_width);
        let line = format!(
            "{}{}  {:<4}  {:<7}  {}  {:>2}",
            idx, name, entry.year, entry.media_type, genre, entry.rating
        );
        writeln!(out, "{}", truncate_to_width(&line, LINE_WIDTH))?;
    }
    Ok(())
}

pub(super) fn print_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", "Overall Statistics:".bold())?;
    writeln!(out, "Count: {}", summary.count)?;
    writeln!(out, "Average Rating: {:.2}", summary.average)?;
    writeln!(
        out,
        "Highest Rated: {} ({})",
        summary.highest.name, summary.highest.rating
    )?;
    writeln!(
        out,
        "Lowest Rated: {} ({})",
        summary.lowest.name, summary.lowest.rating
    )?;
    Ok(())
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, max: usize) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0).min(max)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialog::model::MediaType;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語のタイトル", 7), "日本語…");
    }

    #[test]
    fn pads_wide_characters_correctly() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn entries_render_as_summary_lines() {
        let entries = vec![Entry::new(MediaType::Movie, "Up", 2009, "Animation", 8)];
        let text = render(|out| print_entries(out, &entries));
        assert_eq!(text, "Up (2009) - Movie | Genre: Animation | Rating: 8\n");
    }

    #[test]
    fn table_aligns_columns() {
        let entries = vec![
            Entry::new(MediaType::Movie, "Up", 2009, "Animation", 8),
            Entry::new(MediaType::TvShow, "The Wire", 2002, "Crime", 10),
        ];
        let text = render(|out| print_entry_table(out, &entries));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. Up        2009  Movie"));
        assert!(lines[1].starts_with("2. The Wire  2002  TV Show"));
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn summary_shows_two_decimals() {
        let summary = Summary {
            count: 4,
            average: 19.0 / 3.0,
            highest: Entry::new(MediaType::Movie, "Nine", 2009, "Animation", 9),
            lowest: Entry::new(MediaType::Movie, "Three", 1999, "Comedy", 3),
        };
        let text = render(|out| print_summary(out, &summary));
        assert!(text.contains("Count: 4\n"));
        assert!(text.contains("Average Rating: 6.33\n"));
        assert!(text.contains("Highest Rated: Nine (9)\n"));
        assert!(text.contains("Lowest Rated: Three (3)\n"));
    }

    #[test]
    fn messages_render_plain_without_color() {
        let messages = vec![CmdMessage::success("Rating updated.")];
        let text = render(|out| print_messages(out, &messages));
        assert_eq!(text, "Rating updated.\n");
    }
}
