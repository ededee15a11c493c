use super::render::{print_entries, print_entry_table, print_messages, print_summary};
use medialog::api::{CmdMessage, CmdResult, DuplicateAction, MediaLogApi, Statistics};
use medialog::commands::SearchField;
use medialog::error::{MediaLogError, Result};
use medialog::model::{EntryDraft, MediaType};
use medialog::store::EntryStore;
use medialog::validate::{
    validate_choice, validate_integer, MEDIA_TYPE_CHOICES, RATING_RULE, YEAR_RULE,
};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::debug;

const MENU: &str = "Menu: add entry, search entry, list entries, view stats, exit";

/// `Break` means standard input ran out in the middle of a command.
type Step = ControlFlow<()>;

/// The interactive menu loop.
///
/// Reads commands from `input` until `exit` (or end of input), then saves the
/// catalog. Mistyped values are re-asked in place; only storage and terminal
/// failures end the session early.
pub struct Session<S: EntryStore, R: BufRead, W: Write> {
    api: MediaLogApi<S>,
    input: R,
    output: W,
}

impl<S: EntryStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: MediaLogApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs until exit and hands back the API so callers can inspect what was saved.
    pub fn run(mut self) -> Result<MediaLogApi<S>> {
        loop {
            self.say("")?;
            self.say(MENU)?;
            let Some(choice) = self.read_line("Enter choice: ")? else {
                break;
            };

            let step = match choice.trim().to_lowercase().as_str() {
                "add entry" => self.add_entry()?,
                "search entry" => self.search_entry()?,
                "list entries" => self.list_entries()?,
                "view stats" => self.view_stats()?,
                "exit" => break,
                _ => {
                    let invalid = CmdMessage::error("Invalid option. Please try again.");
                    self.show(&CmdResult::default().with_message(invalid))?;
                    Step::Continue(())
                }
            };
            if step.is_break() {
                break;
            }
        }

        let result = self.api.save()?;
        self.show(&result)?;
        Ok(self.api)
    }

    fn add_entry(&mut self) -> Result<Step> {
        loop {
            let Some(draft) = self.prompt_draft()? else {
                return Ok(Step::Break(()));
            };
            let rating = draft.rating;

            let result = self.api.add_entry(draft)?;
            self.show(&result)?;
            let Some(index) = result.duplicate_of else {
                return Ok(Step::Continue(()));
            };

            self.say("Choose action:")?;
            let Some(answer) = self.read_line("'update rating', 'add another', or 'cancel': ")?
            else {
                return Ok(Step::Break(()));
            };

            match DuplicateAction::parse(&answer) {
                DuplicateAction::UpdateRating => {
                    let result = self.api.update_rating(index, rating)?;
                    self.show(&result)?;
                    return Ok(Step::Continue(()));
                }
                DuplicateAction::AddAnother => {
                    debug!("discarding duplicate input, starting a new entry");
                }
                DuplicateAction::Cancel => return Ok(Step::Continue(())),
            }
        }
    }

    fn prompt_draft(&mut self) -> Result<Option<EntryDraft>> {
        self.say("Choose type:")?;
        self.say("1. TV Show")?;
        self.say("2. Movie")?;
        let Some(media_type) = self.prompt_valid("Enter 1 or 2: ", |raw| {
            validate_choice(raw, MEDIA_TYPE_CHOICES).and_then(MediaType::from_choice)
        })?
        else {
            return Ok(None);
        };

        let Some(name) = self.read_line("Enter name: ")? else {
            return Ok(None);
        };
        let Some(year) = self.prompt_valid("Enter year: ", |raw| {
            validate_integer(raw, &YEAR_RULE).map(|v| v as i32)
        })?
        else {
            return Ok(None);
        };
        let Some(genre) = self.read_line("Enter genre: ")? else {
            return Ok(None);
        };
        let Some(rating) = self.prompt_valid("Enter rating (0-10): ", |raw| {
            validate_integer(raw, &RATING_RULE).map(|v| v as u32)
        })?
        else {
            return Ok(None);
        };

        Ok(Some(EntryDraft::new(media_type, &name, year, &genre, rating)))
    }

    fn search_entry(&mut self) -> Result<Step> {
        let Some(field) = self.read_line("Search by: 'name', 'genre', or 'rating': ")? else {
            return Ok(Step::Break(()));
        };

        let query = match field.parse::<SearchField>() {
            Ok(SearchField::Rating) => self
                .prompt_valid("Enter rating to search (0-10): ", |raw| {
                    validate_integer(raw, &RATING_RULE)
                })?
                .map(|v| v.to_string()),
            Ok(other) => self.read_line(&format!("Enter {} to search: ", other))?,
            Err(()) => Some(String::new()),
        };
        let Some(query) = query else {
            return Ok(Step::Break(()));
        };

        let result = self.api.search_entries(&field, &query)?;
        print_entries(&mut self.output, &result.listed_entries)
            .map_err(MediaLogError::Terminal)?;
        self.show(&result)?;
        Ok(Step::Continue(()))
    }

    fn list_entries(&mut self) -> Result<Step> {
        let result = self.api.list_entries()?;
        print_entry_table(&mut self.output, &result.listed_entries)
            .map_err(MediaLogError::Terminal)?;
        self.show(&result)?;
        Ok(Step::Continue(()))
    }

    fn view_stats(&mut self) -> Result<Step> {
        let result = self.api.statistics()?;
        if let Some(Statistics::Summary(summary)) = &result.statistics {
            print_summary(&mut self.output, summary).map_err(MediaLogError::Terminal)?;
        }
        self.show(&result)?;
        Ok(Step::Continue(()))
    }

    /// Asks until `parse` accepts the answer, printing each rejection verbatim.
    fn prompt_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(raw) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(MediaLogError::InvalidInput(msg)) => self.say(&msg)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).map_err(MediaLogError::Terminal)?;
        self.output.flush().map_err(MediaLogError::Terminal)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(MediaLogError::Terminal)?;
        if read == 0 {
            writeln!(self.output).map_err(MediaLogError::Terminal)?;
            debug!("end of input");
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(MediaLogError::Terminal)
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        print_messages(&mut self.output, &result.messages).map_err(MediaLogError::Terminal)
    }
}
