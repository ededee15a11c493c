use super::line::{format_line, parse_line};
use super::EntryStore;
use crate::error::{MediaLogError, Result};
use crate::model::Entry;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Flat-file storage: the whole collection lives in one pipe-delimited text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(MediaLogError::Storage)?;
            }
        }
        Ok(())
    }
}

impl EntryStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file does not exist yet");
                return Ok(None);
            }
            Err(e) => return Err(MediaLogError::Storage(e)),
        };

        let mut entries = Vec::new();
        let mut dropped = 0usize;
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(MediaLogError::Storage)?;
            match parse_line(&line) {
                Some(entry) => entries.push(entry),
                None if line.trim().is_empty() => {}
                None => {
                    dropped += 1;
                    debug!(line = number + 1, "skipping malformed record");
                }
            }
        }

        info!(
            path = %self.path.display(),
            loaded = entries.len(),
            dropped,
            "loaded entries"
        );
        Ok(Some(entries))
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = File::create(&self.path).map_err(MediaLogError::Storage)?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", format_line(entry)).map_err(MediaLogError::Storage)?;
        }
        writer.flush().map_err(MediaLogError::Storage)?;

        info!(path = %self.path.display(), saved = entries.len(), "saved entries");
        Ok(())
    }
}
