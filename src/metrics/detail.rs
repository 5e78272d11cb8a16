//! Day-detail projection for the side panel.

use crate::calendar::CalendarDate;

/// Read-only detail payload for a single day, as shown next to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayDetail {
    pub planned_count: u32,
    pub actual_count: u32,
    pub summary: Option<String>,
    pub suggestions: Vec<String>,
}

impl DayDetail {
    /// Completed-vs-planned delta; negative when the day fell short.
    pub fn difference(&self) -> i64 {
        self.actual_count as i64 - self.planned_count as i64
    }
}

/// External per-date lookup, injected into the core. The caller resolves
/// the data (file, database, remote sync) before the core ever sees it,
/// so everything here stays synchronous.
pub trait MetricsSource {
    /// Completion percentage for a day. `None` means "no data", rendered
    /// as an undecorated cell.
    fn score_for(&self, date: CalendarDate) -> Option<u8>;

    fn detail_for(&self, date: CalendarDate) -> Option<DayDetail>;
}

/// What the detail panel should show for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DayProjection {
    /// Nothing selected.
    NoSelection,
    /// A day is selected but the source has nothing recorded for it.
    NoData(CalendarDate),
    Detail(CalendarDate, DayDetail),
}

/// Project the selected date through the metrics source.
pub fn project(selected: Option<CalendarDate>, source: &dyn MetricsSource) -> DayProjection {
    match selected {
        None => DayProjection::NoSelection,
        Some(date) => match source.detail_for(date) {
            Some(detail) => DayProjection::Detail(date, detail),
            None => DayProjection::NoData(date),
        },
    }
}
