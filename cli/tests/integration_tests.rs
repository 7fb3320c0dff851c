use std::fs;
use std::path::PathBuf;

use roster_parser::parse_roster_text;
use roster_store::{export, RosterStore};

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("roster_cli_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const ROSTER_TEXT: &str = "\
Intro to Widgets  3/4/2024
First Name\tLast Name
Jane\tDoe
John\tSmith
";

// ---------------------------------------------------------------------------
// Parse → store → export flow
// ---------------------------------------------------------------------------

#[test]
fn import_flow_persists_parsed_records() {
    let dir = TempDir::new("import_flow");
    let store = RosterStore::open(dir.join("store")).expect("store should open");

    let result = parse_roster_text(ROSTER_TEXT);
    assert_eq!(result.records.len(), 2);

    let inserted = store
        .add_students(&result.records)
        .expect("insert should succeed");
    store
        .record_upload("roster.txt", inserted.len())
        .expect("upload history should record");

    let students = store.students().expect("students should load");
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].name, "Jane Doe");
    assert_eq!(students[0].course_name, "Intro to Widgets");
    assert_eq!(students[0].date, "2024-03-04");
    assert!(!students[0].id.is_empty());

    let uploads = store.uploads().expect("uploads should load");
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].student_count, 2);
}

#[test]
fn export_flow_writes_roster_csv() {
    let dir = TempDir::new("export_flow");
    let store = RosterStore::open(dir.join("store")).expect("store should open");
    store
        .add_students(&parse_roster_text(ROSTER_TEXT).records)
        .expect("insert should succeed");

    let csv_path = dir.join("roster.csv");
    let file = fs::File::create(&csv_path).expect("csv file should create");
    export::export_csv(&store.students().expect("students should load"), file)
        .expect("export should succeed");

    let csv = fs::read_to_string(&csv_path).expect("csv should read back");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Student Name,Course Name,Date,Uploaded At");
    assert!(lines[1].starts_with("Jane Doe,Intro to Widgets,2024-03-04,"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn unparseable_text_imports_zero_students() {
    let dir = TempDir::new("empty_import");
    let store = RosterStore::open(dir.join("store")).expect("store should open");

    let result = parse_roster_text("just a note\nnothing tabular here");
    assert!(result.records.is_empty());

    let inserted = store
        .add_students(&result.records)
        .expect("empty insert should succeed");
    store
        .record_upload("note.txt", inserted.len())
        .expect("upload history should record");

    assert!(store.students().expect("students should load").is_empty());
    assert_eq!(store.uploads().expect("uploads should load")[0].student_count, 0);
}
