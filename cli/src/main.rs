use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

use roster_core::StudentRecord;
use roster_parser::ingest::{DocumentKind, IngestError};
use roster_parser::output::{self, OutputFormat};
use roster_parser::{parse_roster_text, spreadsheet};
use roster_store::stats::StatsReport;
use roster_store::{RosterStore, StoredStudent, export};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "roster-import")]
#[command(about = "Student roster extraction from converted documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse roster text and print the extracted records.
    Parse(ParseArgs),
    /// Import roster files into the local store.
    Import(ImportArgs),
    /// List stored students.
    List(ListArgs),
    /// Show roster statistics.
    Stats(StatsArgs),
    /// Export the stored roster as CSV.
    Export(ExportArgs),
    /// Clear all stored roster data.
    Clear(ClearArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Path to a text file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ImportArgs {
    /// Roster files to import (.txt, .csv, .tsv).
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Store directory.
    #[arg(long, default_value = "roster-data")]
    store: PathBuf,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Store directory.
    #[arg(long, default_value = "roster-data")]
    store: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct StatsArgs {
    /// Store directory.
    #[arg(long, default_value = "roster-data")]
    store: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Store directory.
    #[arg(long, default_value = "roster-data")]
    store: PathBuf,
    /// Output CSV path.
    #[arg(long)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct ClearArgs {
    /// Store directory.
    #[arg(long, default_value = "roster-data")]
    store: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Import(args) => run_import(args),
        Command::List(args) => run_list(args),
        Command::Stats(args) => run_stats(args),
        Command::Export(args) => run_export(args),
        Command::Clear(args) => run_clear(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            buffer
        }
    };

    let result = parse_roster_text(&text);
    println!("{}", output::format_result(&result, args.format.into())?);
    Ok(())
}

fn run_import(args: ImportArgs) -> Result<(), String> {
    let store = open_store(&args.store)?;

    // Parse every file up front; store insertion below stays sequential.
    let parsed: Vec<(PathBuf, Result<Vec<StudentRecord>, String>)> = args
        .files
        .par_iter()
        .map(|path| (path.clone(), extract_records(path)))
        .collect();

    let mut failures = 0;
    for (path, outcome) in parsed {
        match outcome {
            Ok(records) => {
                let inserted = store
                    .add_students(&records)
                    .map_err(|e| e.to_string())?;
                let file_name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("upload");
                store
                    .record_upload(file_name, inserted.len())
                    .map_err(|e| e.to_string())?;
                println!("{}: imported {} student(s)", path.display(), inserted.len());
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", path.display());
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} file(s) failed to import"));
    }
    Ok(())
}

/// Routes one file to the matching extraction path by its extension.
fn extract_records(path: &Path) -> Result<Vec<StudentRecord>, String> {
    let kind = DocumentKind::from_path(path).map_err(|e| e.to_string())?;
    match kind {
        DocumentKind::PlainText => {
            let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
            Ok(parse_roster_text(&text).records)
        }
        DocumentKind::DelimitedRows => {
            let file = fs::File::open(path).map_err(|e| e.to_string())?;
            let default_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
            let is_tab = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
            let records = if is_tab {
                spreadsheet::records_from_tsv(file, &default_date)
            } else {
                spreadsheet::records_from_csv(file, &default_date)
            };
            records.map_err(|e| e.to_string())
        }
        // Binary decoding belongs to external converter collaborators.
        DocumentKind::Spreadsheet | DocumentKind::Word | DocumentKind::Pdf => {
            Err(IngestError::ConverterUnavailable(kind.label()).to_string())
        }
    }
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let store = open_store(&args.store)?;
    let students = store.students().map_err(|e| e.to_string())?;

    match args.format {
        CliOutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&students)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        ),
        CliOutputFormat::Yaml => print!(
            "{}",
            serde_yaml::to_string(&students)
                .map_err(|e| format!("YAML serialization failed: {e}"))?
        ),
        CliOutputFormat::Table => print!("{}", students_table(&students)),
    }
    Ok(())
}

fn students_table(students: &[StoredStudent]) -> String {
    if students.is_empty() {
        return "no students stored\n".to_string();
    }

    let name_width = students
        .iter()
        .map(|student| student.name.len())
        .chain(["Name".len()])
        .max()
        .unwrap_or(4);
    let course_width = students
        .iter()
        .map(|student| student.course_name.len())
        .chain(["Course".len()])
        .max()
        .unwrap_or(6);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<course_width$}  Date\n",
        "Name", "Course"
    ));
    for student in students {
        out.push_str(&format!(
            "{:<name_width$}  {:<course_width$}  {}\n",
            student.name, student.course_name, student.date
        ));
    }
    out.push_str(&format!("\n{} student(s)\n", students.len()));
    out
}

fn run_stats(args: StatsArgs) -> Result<(), String> {
    let store = open_store(&args.store)?;
    let students = store.students().map_err(|e| e.to_string())?;
    let report = StatsReport::collect(&students);

    match args.format {
        CliOutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        ),
        CliOutputFormat::Yaml => print!(
            "{}",
            serde_yaml::to_string(&report)
                .map_err(|e| format!("YAML serialization failed: {e}"))?
        ),
        CliOutputFormat::Table => {
            println!("Students: {}", report.totals.total_students);
            println!("Courses:  {}", report.totals.unique_courses);
            println!("Dates:    {}", report.totals.unique_dates);
            println!("Avg per course: {:.1}", report.totals.avg_students_per_course);
            if !report.courses.is_empty() {
                println!("\nBy course:");
                for (course, count) in &report.courses {
                    println!("  {course}: {count}");
                }
            }
            if !report.dates.is_empty() {
                println!("\nBy date:");
                for (date, count) in &report.dates {
                    println!("  {date}: {count}");
                }
            }
        }
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), String> {
    let store = open_store(&args.store)?;
    let students = store.students().map_err(|e| e.to_string())?;
    if students.is_empty() {
        return Err("no data to export".to_string());
    }

    let file = fs::File::create(&args.output)
        .map_err(|e| format!("failed to create {}: {e}", args.output.display()))?;
    export::export_csv(&students, file).map_err(|e| e.to_string())?;
    println!(
        "exported {} student(s) to {}",
        students.len(),
        args.output.display()
    );
    Ok(())
}

fn run_clear(args: ClearArgs) -> Result<(), String> {
    let store = open_store(&args.store)?;
    store.clear().map_err(|e| e.to_string())?;
    println!("store cleared");
    Ok(())
}

fn open_store(dir: &Path) -> Result<RosterStore, String> {
    RosterStore::open(dir).map_err(|e| e.to_string())
}
