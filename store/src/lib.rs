//! JSON-file roster persistence, upload history, statistics, and CSV export.
//!
//! This crate is the durable side of roster intake. Parsers produce plain
//! [`StudentRecord`]s; the store assigns each a `{unix_millis}-{index}`
//! identity and an upload timestamp, appends to `students.json`, and keeps a
//! parallel `uploads.json` history of every import.
//!
//! # Quick start
//!
//! ```no_run
//! use roster_core::StudentRecord;
//! use roster_store::{RosterStore, stats::StatsReport};
//!
//! let store = RosterStore::open("roster-data").unwrap();
//! let inserted = store
//!     .add_students(&[StudentRecord::new("Jane Doe", "Widgets 101", "2024-05-06")])
//!     .unwrap();
//! store.record_upload("roster.txt", inserted.len()).unwrap();
//!
//! let report = StatsReport::collect(&store.students().unwrap());
//! println!("{} students total", report.totals.total_students);
//! ```
//!
//! [`StudentRecord`]: roster_core::StudentRecord

mod error;
mod store;

pub mod export;
pub mod stats;

pub use error::{Result, StoreError};
pub use store::{RosterStore, RosterUpload, StoredStudent};
