//! CSV export of the stored roster.

use std::io::Write;

use crate::error::Result;
use crate::store::StoredStudent;

/// Column headers of the exported roster table.
pub const EXPORT_HEADERS: [&str; 4] = ["Student Name", "Course Name", "Date", "Uploaded At"];

/// Writes the roster as CSV in insertion order.
///
/// The upload timestamp is exported as its date portion only.
///
/// # Examples
///
/// ```
/// use roster_store::export::export_csv;
///
/// let mut out = Vec::new();
/// export_csv(&[], &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Student Name,Course Name,Date,Uploaded At\n"
/// );
/// ```
pub fn export_csv<W: Write>(students: &[StoredStudent], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;
    for student in students {
        let uploaded_date = student
            .uploaded_at
            .split('T')
            .next()
            .unwrap_or(&student.uploaded_at);
        csv_writer.write_record([
            student.name.as_str(),
            student.course_name.as_str(),
            student.date.as_str(),
            uploaded_date,
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
