//! Roster statistics for the analytics surface.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::store::StoredStudent;

/// Bucket label used for students with no course or date value.
const UNKNOWN_BUCKET: &str = "Unknown";

/// Headline roster totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterStats {
    pub total_students: usize,
    pub unique_courses: usize,
    pub unique_dates: usize,
    pub avg_students_per_course: f64,
}

impl RosterStats {
    /// Computes totals over the stored roster.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_store::stats::RosterStats;
    ///
    /// let stats = RosterStats::collect(&[]);
    /// assert_eq!(stats.total_students, 0);
    /// assert_eq!(stats.avg_students_per_course, 0.0);
    /// ```
    pub fn collect(students: &[StoredStudent]) -> Self {
        let total_students = students.len();
        let unique_courses = students
            .iter()
            .map(|student| student.course_name.as_str())
            .collect::<HashSet<_>>()
            .len();
        let unique_dates = students
            .iter()
            .map(|student| student.date.as_str())
            .collect::<HashSet<_>>()
            .len();
        let avg_students_per_course = if unique_courses > 0 {
            total_students as f64 / unique_courses as f64
        } else {
            0.0
        };

        Self {
            total_students,
            unique_courses,
            unique_dates,
            avg_students_per_course,
        }
    }
}

/// Full statistics report: totals plus per-course and per-date counts.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub totals: RosterStats,
    /// Student count per course, most-populated first.
    pub courses: Vec<(String, usize)>,
    /// Student count per session date, ascending by date.
    pub dates: Vec<(String, usize)>,
}

impl StatsReport {
    /// Builds the full report over the stored roster.
    pub fn collect(students: &[StoredStudent]) -> Self {
        Self {
            totals: RosterStats::collect(students),
            courses: course_breakdown(students),
            dates: date_breakdown(students),
        }
    }
}

/// Student counts per course, descending; course name breaks ties.
pub fn course_breakdown(students: &[StoredStudent]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for student in students {
        let course = if student.course_name.is_empty() {
            UNKNOWN_BUCKET.to_string()
        } else {
            student.course_name.clone()
        };
        *counts.entry(course).or_default() += 1;
    }

    let mut rows: Vec<(String, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Student counts per session date, ascending by date string.
pub fn date_breakdown(students: &[StoredStudent]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for student in students {
        let date = if student.date.is_empty() {
            UNKNOWN_BUCKET.to_string()
        } else {
            student.date.clone()
        };
        *counts.entry(date).or_default() += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, course: &str, date: &str) -> StoredStudent {
        StoredStudent {
            id: "0-0".to_string(),
            name: name.to_string(),
            course_name: course.to_string(),
            date: date.to_string(),
            uploaded_at: "2024-05-06T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_totals_over_mixed_roster() {
        let roster = [
            student("Jane Doe", "Widgets 101", "2024-05-06"),
            student("John Smith", "Widgets 101", "2024-05-06"),
            student("Ana Cruz", "Safety Training", "2024-01-05"),
            student("Sam Lee", "Safety Training", "2024-02-05"),
        ];
        let stats = RosterStats::collect(&roster);
        assert_eq!(stats.total_students, 4);
        assert_eq!(stats.unique_courses, 2);
        assert_eq!(stats.unique_dates, 3);
        assert_eq!(stats.avg_students_per_course, 2.0);
    }

    #[test]
    fn test_course_breakdown_sorts_by_count_then_name() {
        let roster = [
            student("A", "Beta", "2024-01-01"),
            student("B", "Alpha", "2024-01-01"),
            student("C", "Beta", "2024-01-01"),
            student("D", "", "2024-01-01"),
        ];
        let breakdown = course_breakdown(&roster);
        assert_eq!(
            breakdown,
            vec![
                ("Beta".to_string(), 2),
                ("Alpha".to_string(), 1),
                ("Unknown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_date_breakdown_is_ascending() {
        let roster = [
            student("A", "X", "2024-06-01"),
            student("B", "X", "2024-01-05"),
            student("C", "X", "2024-06-01"),
        ];
        let breakdown = date_breakdown(&roster);
        assert_eq!(
            breakdown,
            vec![("2024-01-05".to_string(), 1), ("2024-06-01".to_string(), 2)]
        );
    }
}
