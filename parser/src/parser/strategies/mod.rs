//! Pluggable extraction strategies for the table layouts roster text
//! arrives in.

pub(crate) mod delimited;
pub(crate) mod vertical;

use roster_core::{StudentRecord, TableLayout};

/// Records produced by one strategy attempt, plus what it skipped.
pub(crate) struct StrategyOutcome {
    pub(crate) records: Vec<StudentRecord>,
    pub(crate) layout: TableLayout,
    pub(crate) skipped_rows: usize,
}

/// A table-layout extraction strategy.
///
/// Implementations are independent and side-effect-free pure functions over
/// the normalized line array. `None` means the layout's header could not be
/// resolved at all; an outcome with zero records means the header matched
/// but no row survived validation. The orchestrator attempts strategies in
/// fixed priority order and stops at the first outcome with records.
pub(crate) trait RosterStrategy {
    fn name(&self) -> &'static str;
    fn extract(
        &self,
        lines: &[String],
        course_name: &str,
        date: &str,
    ) -> Option<StrategyOutcome>;
}
