//! JSON-file-backed roster persistence.
//!
//! The store keeps two documents in a data directory: `students.json` (the
//! full roster) and `uploads.json` (one history entry per import). Missing
//! documents read as empty collections, never as errors. Identity and upload
//! timestamps are assigned here — parsers hand over plain
//! [`StudentRecord`]s and never see storage concerns.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use roster_core::StudentRecord;

use crate::error::{Result, StoreError};

const STUDENTS_FILE: &str = "students.json";
const UPLOADS_FILE: &str = "uploads.json";

/// A persisted student with storage-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStudent {
    /// `{unix_millis}-{index}` composite assigned at insert.
    pub id: String,
    pub name: String,
    pub course_name: String,
    pub date: String,
    /// RFC 3339 UTC timestamp of the insert.
    pub uploaded_at: String,
}

/// One import recorded in the upload history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterUpload {
    pub id: String,
    pub file_name: String,
    pub uploaded_at: String,
    pub student_count: usize,
}

/// Roster persistence rooted at a data directory.
///
/// # Examples
///
/// ```no_run
/// use roster_core::StudentRecord;
/// use roster_store::RosterStore;
///
/// let store = RosterStore::open("roster-data").unwrap();
/// let records = vec![StudentRecord::new("Jane Doe", "Widgets 101", "2024-05-06")];
/// let inserted = store.add_students(&records).unwrap();
/// store.record_upload("roster.txt", inserted.len()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RosterStore {
    dir: PathBuf,
}

impl RosterStore {
    /// Opens a store rooted at `dir`, creating the directory when missing.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if dir.exists() && !dir.is_dir() {
            return Err(StoreError::InvalidStore(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns every stored student in insertion order.
    pub fn students(&self) -> Result<Vec<StoredStudent>> {
        self.read_collection(STUDENTS_FILE)
    }

    /// Returns the upload history in insertion order.
    pub fn uploads(&self) -> Result<Vec<RosterUpload>> {
        self.read_collection(UPLOADS_FILE)
    }

    /// Appends records to the roster, assigning ids and timestamps.
    ///
    /// Returns the inserted rows. Records are never deduplicated against
    /// earlier uploads.
    pub fn add_students(&self, records: &[StudentRecord]) -> Result<Vec<StoredStudent>> {
        let mut students = self.students()?;

        let now = Utc::now();
        let batch = now.timestamp_millis();
        let uploaded_at = now.to_rfc3339();
        let inserted: Vec<StoredStudent> = records
            .iter()
            .enumerate()
            .map(|(index, record)| StoredStudent {
                id: format!("{batch}-{index}"),
                name: record.name.clone(),
                course_name: record.course_name.clone(),
                date: record.date.clone(),
                uploaded_at: uploaded_at.clone(),
            })
            .collect();

        students.extend(inserted.iter().cloned());
        self.write_collection(STUDENTS_FILE, &students)?;
        Ok(inserted)
    }

    /// Appends one entry to the upload history.
    pub fn record_upload(&self, file_name: &str, student_count: usize) -> Result<RosterUpload> {
        let mut uploads = self.uploads()?;

        let now = Utc::now();
        let upload = RosterUpload {
            id: now.timestamp_millis().to_string(),
            file_name: file_name.to_string(),
            uploaded_at: now.to_rfc3339(),
            student_count,
        };
        uploads.push(upload.clone());
        self.write_collection(UPLOADS_FILE, &uploads)?;
        Ok(upload)
    }

    /// Removes both store documents.
    pub fn clear(&self) -> Result<()> {
        for file in [STUDENTS_FILE, UPLOADS_FILE] {
            let path = self.dir.join(file);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(self.dir.join(file), json)?;
        Ok(())
    }
}
