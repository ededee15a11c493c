use crate::error::{MediaLogError, Result};
use std::fmt;
use std::str::FromStr;

/// Text label for each media type, as written to the data file.
const TV_SHOW: &str = "TV Show";
const MOVIE: &str = "Movie";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    TvShow,
    Movie,
    /// Anything else found in a hand-edited data file.
    Other(String),
}

impl MediaType {
    /// Maps the add-entry menu choice (1 or 2) onto a type.
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(MediaType::TvShow),
            2 => Ok(MediaType::Movie),
            other => Err(MediaLogError::invalid_input(format!(
                "Unknown media type choice: {}",
                other
            ))),
        }
    }

    pub fn from_text(text: &str) -> Self {
        match text {
            TV_SHOW => MediaType::TvShow,
            MOVIE => MediaType::Movie,
            other => MediaType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaType::TvShow => TV_SHOW,
            MediaType::Movie => MOVIE,
            MediaType::Other(text) => text,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A numeric field that is typed when its text is canonical and kept verbatim
/// otherwise.
///
/// Values typed in at the prompt are always `Parsed`. Values read from the data
/// file are `Parsed` only when formatting the number gives back the exact same
/// text, so `save(load(file))` never rewrites a hand-edited value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Parsed(T),
    Raw(String),
}

impl<T> Field<T>
where
    T: FromStr + ToString,
{
    pub fn from_text(text: &str) -> Self {
        match text.parse::<T>() {
            Ok(value) if value.to_string() == text => Field::Parsed(value),
            _ => Field::Raw(text.to_string()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Parsed(value) => value.fmt(f),
            Field::Raw(text) => f.pad(text),
        }
    }
}

pub type Year = Field<i32>;
pub type Rating = Field<u32>;

impl Field<u32> {
    /// The rating as a number, if its text is made only of decimal digits.
    ///
    /// A raw value like `07` still counts; `x`, `-1` or an empty string do not.
    /// Digit strings of any length are accepted.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Field::Parsed(value) => Some(f64::from(*value)),
            Field::Raw(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                text.parse().ok()
            }
            Field::Raw(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub media_type: MediaType,
    pub name: String,
    pub year: Year,
    pub genre: String,
    pub rating: Rating,
}

impl Entry {
    pub fn new(
        media_type: MediaType,
        name: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        rating: u32,
    ) -> Self {
        Self {
            media_type,
            name: name.into(),
            year: Field::Parsed(year),
            genre: genre.into(),
            rating: Field::Parsed(rating),
        }
    }

    /// Natural key used for duplicate detection: name ignoring case, year exactly.
    pub fn same_title(&self, name: &str, year: &Year) -> bool {
        self.name.to_lowercase() == name.to_lowercase() && &self.year == year
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} | Genre: {} | Rating: {}",
            self.name, self.year, self.media_type, self.genre, self.rating
        )
    }
}

/// Validated user input for a new entry, before it reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub media_type: MediaType,
    pub name: String,
    pub year: i32,
    pub genre: String,
    pub rating: u32,
}

impl EntryDraft {
    /// Builds a draft, trimming the free-text fields.
    pub fn new(media_type: MediaType, name: &str, year: i32, genre: &str, rating: u32) -> Self {
        Self {
            media_type,
            name: name.trim().to_string(),
            year,
            genre: genre.trim().to_string(),
            rating,
        }
    }

    pub fn into_entry(self) -> Entry {
        Entry::new(self.media_type, self.name, self.year, self.genre, self.rating)
    }
}
