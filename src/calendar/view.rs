//! Navigation and selection state for one calendar session.

use super::date::{CalendarDate, YearMonth};
use super::grid::MonthGrid;

/// The view state is the pair (reference month, selected date). `today`
/// is snapshotted once at construction and never changes within a
/// session; a new day means a new session.
///
/// Every transition that touches the reference month throws the grid away
/// and rebuilds all 42 cells. The rebuild is constant-size, and there is
/// never stale partial state to reason about.
#[derive(Debug, Clone)]
pub struct CalendarViewState {
    reference_month: YearMonth,
    today: CalendarDate,
    selected: Option<CalendarDate>,
    grid: MonthGrid,
}

impl CalendarViewState {
    /// Start a session anchored on `today`: the visible month is today's
    /// month and today starts out selected.
    pub fn new(today: CalendarDate) -> Self {
        let reference_month = today.year_month();
        Self {
            reference_month,
            today,
            selected: Some(today),
            grid: MonthGrid::build(reference_month),
        }
    }

    pub fn reference_month(&self) -> YearMonth {
        self.reference_month
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn is_today(&self, date: CalendarDate) -> bool {
        date == self.today
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    pub fn go_to_previous_month(&mut self) {
        self.go_to_month(self.reference_month.previous());
    }

    pub fn go_to_next_month(&mut self) {
        self.go_to_month(self.reference_month.next());
    }

    pub fn go_to_today(&mut self) {
        self.go_to_month(self.today.year_month());
    }

    /// Jump straight to a month. Selection is left alone; navigation and
    /// selection are independent.
    pub fn go_to_month(&mut self, month: YearMonth) {
        self.reference_month = month;
        self.grid = MonthGrid::build(month);
    }

    /// Select an in-month day of the current grid. Selecting a padding
    /// day from an adjacent month is a silent no-op, matching the
    /// "clicks on disabled cells are ignored" UX.
    pub fn select_date(&mut self, date: CalendarDate) {
        if self.grid.contains_in_month(date) {
            self.selected = Some(date);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
