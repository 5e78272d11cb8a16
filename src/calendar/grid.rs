//! The 42-cell month grid.
//!
//! Every build produces exactly 6 rows of 7 Sunday-first columns: leading
//! days from the previous month, days 1..=N of the reference month, then
//! trailing days of the next month. The height is fixed at 6 rows no
//! matter how many weeks the month spans, so the layout never jumps when
//! navigating between short and long months.

use super::date::{CalendarDate, YearMonth};

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// One grid slot. Cells are rebuilt wholesale on every navigation and
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for padding cells borrowed from the adjacent months.
    pub in_month: bool,
}

/// An ordered, row-major sequence of exactly [`GRID_CELLS`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for a reference month.
    pub fn build(month: YearMonth) -> Self {
        let start = month.start_of_month();
        let lead = start.weekday() as usize;
        let days = month.days_in_month();

        let mut cells = Vec::with_capacity(GRID_CELLS);

        // Leading days from the previous month, ascending. Empty range
        // when the month starts on a Sunday.
        let prev = month.previous();
        let prev_days = prev.days_in_month();
        for day in (prev_days - lead as u32 + 1)..=prev_days {
            cells.push(DayCell {
                date: CalendarDate::new(prev.year(), prev.month(), day)
                    .expect("previous month is valid by construction"),
                in_month: false,
            });
        }

        // The reference month itself.
        for day in 1..=days {
            cells.push(DayCell {
                date: CalendarDate::new(month.year(), month.month(), day)
                    .expect("reference month is valid by construction"),
                in_month: true,
            });
        }

        // Trailing days from the next month until the grid is full.
        let next = month.next();
        let remaining = GRID_CELLS - cells.len();
        for day in 1..=remaining as u32 {
            cells.push(DayCell {
                date: CalendarDate::new(next.year(), next.month(), day)
                    .expect("next month is valid by construction"),
                in_month: false,
            });
        }

        debug_assert_eq!(cells.len(), GRID_CELLS);
        Self { month, cells }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The 6 weekly rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks_exact(GRID_COLUMNS)
    }

    /// Whether `date` appears in this grid as an in-month cell.
    /// Padding cells from the adjacent months don't count.
    pub fn contains_in_month(&self, date: CalendarDate) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.in_month && cell.date == date)
    }

    /// Row-major index of `date`, if it is anywhere in the grid.
    pub fn position_of(&self, date: CalendarDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.date == date)
    }
}
