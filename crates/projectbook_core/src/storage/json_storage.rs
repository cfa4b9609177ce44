//! File-backed load/save of the project book.
//!
//! # Invariants
//! - Reads and writes always cover the whole document.
//! - Saves go through a sibling temp file and a rename, so readers never
//!   observe a half-written file.

use super::json_book::JsonProjectBook;
use super::StorageResult;
use crate::model::book::Model;
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// JSON file storage for one project book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBookStorage {
    path: PathBuf,
}

impl JsonBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the book from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    ///
    /// # Side effects
    /// - Emits `book_load` logging events with duration and status.
    pub fn read_book(&self) -> StorageResult<Option<Model>> {
        let started_at = Instant::now();
        info!("event=book_load module=storage status=start");

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=book_load module=storage status=ok found=false duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=book_load module=storage status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match parse_book(&raw) {
            Ok(model) => {
                info!(
                    "event=book_load module=storage status=ok found=true projects={} clients={} issues={} duration_ms={}",
                    model.projects().len(),
                    model.clients().len(),
                    model.issues().len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(model))
            }
            Err(err) => {
                error!(
                    "event=book_load module=storage status=error duration_ms={} error_code=invalid_data error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Writes the whole book to disk, creating parent directories.
    ///
    /// # Side effects
    /// - Emits `book_save` logging events with duration and status.
    pub fn save_book(&self, model: &Model) -> StorageResult<()> {
        let started_at = Instant::now();
        info!("event=book_save module=storage status=start");

        match write_book(&self.path, model) {
            Ok(()) => {
                info!(
                    "event=book_save module=storage status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=book_save module=storage status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn parse_book(raw: &str) -> StorageResult<Model> {
    let document: JsonProjectBook = serde_json::from_str(raw)?;
    Ok(document.to_model()?)
}

fn write_book(path: &Path, model: &Model) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let document = JsonProjectBook::from_model(model);
    let serialized = serde_json::to_string_pretty(&document)?;

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);
    fs::write(&temp_path, serialized)?;
    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }
    Ok(())
}
