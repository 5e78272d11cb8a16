//! Month grid invariants — shape, contiguity, boundary rollover.

use pretty_assertions::assert_eq;

use tempo_dashboard::calendar::{CalendarDate, MonthGrid, YearMonth, GRID_CELLS, GRID_COLUMNS};

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

#[test]
fn test_grid_is_always_42_cells() {
    for year in [1999, 2000, 2023, 2024, 2025] {
        for month in 1..=12 {
            let grid = MonthGrid::build(ym(year, month));
            assert_eq!(grid.cells().len(), GRID_CELLS, "{year}-{month}");
        }
    }
}

#[test]
fn test_grid_dates_are_contiguous() {
    for year in [2023, 2024] {
        for month in 1..=12 {
            let grid = MonthGrid::build(ym(year, month));
            let cells = grid.cells();
            for i in 0..cells.len() - 1 {
                assert_eq!(
                    cells[i + 1].date,
                    cells[i].date.add_days(1),
                    "gap at index {i} in {year}-{month}"
                );
            }
        }
    }
}

#[test]
fn test_in_month_cells_are_exactly_the_month() {
    for year in [2023, 2024] {
        for month in 1..=12 {
            let month = ym(year, month);
            let grid = MonthGrid::build(month);
            let in_month: Vec<_> = grid.cells().iter().filter(|c| c.in_month).collect();

            assert_eq!(in_month.len() as u32, month.days_in_month());
            for (i, cell) in in_month.iter().enumerate() {
                assert_eq!(cell.date.day(), i as u32 + 1);
                assert_eq!(cell.date.year_month(), month);
            }
        }
    }
}

#[test]
fn test_padding_cells_come_from_adjacent_months() {
    let month = ym(2024, 6);
    let grid = MonthGrid::build(month);
    for cell in grid.cells().iter().filter(|c| !c.in_month) {
        let adjacent = cell.date.year_month();
        assert!(
            adjacent == month.previous() || adjacent == month.next(),
            "padding cell {} is not from an adjacent month",
            cell.date
        );
    }
}

#[test]
fn test_year_boundary_rollover() {
    // December 2024 starts on a Sunday, so the 11 trailing cells are
    // all January 2025.
    let grid = MonthGrid::build(ym(2024, 12));
    let trailing: Vec<_> = grid.cells().iter().skip(31).collect();
    assert_eq!(trailing.len(), 11);
    for (i, cell) in trailing.iter().enumerate() {
        assert!(!cell.in_month);
        assert_eq!(cell.date, date(2025, 1, i as u32 + 1));
    }

    // January 2024 leads from December 2023.
    let grid = MonthGrid::build(ym(2024, 1));
    let leading: Vec<_> = grid
        .cells()
        .iter()
        .take_while(|c| !c.in_month)
        .collect();
    assert!(!leading.is_empty());
    for cell in leading {
        assert_eq!(cell.date.year_month(), ym(2023, 12));
    }
}

#[test]
fn test_october_2023_starts_on_sunday() {
    // October 2023 starts on a Sunday: no leading cells, 31 in-month
    // cells, then November 1–11 as trailing padding.
    let grid = MonthGrid::build(ym(2023, 10));
    let cells = grid.cells();

    assert_eq!(cells[0].date, date(2023, 10, 1));
    assert!(cells[0].in_month);

    let in_month = cells.iter().filter(|c| c.in_month).count();
    assert_eq!(in_month, 31);

    let trailing: Vec<_> = cells.iter().skip(31).collect();
    assert_eq!(trailing.len(), 11);
    assert_eq!(trailing[0].date, date(2023, 11, 1));
    assert_eq!(trailing[10].date, date(2023, 11, 11));
    assert!(trailing.iter().all(|c| !c.in_month));
}

#[test]
fn test_short_month_still_fills_six_rows() {
    // February 2015: 28 days starting on a Sunday — the month itself
    // fits in 4 rows, the grid still carries 6.
    let grid = MonthGrid::build(ym(2015, 2));
    let cells = grid.cells();

    assert_eq!(cells.len(), GRID_CELLS);
    assert_eq!(cells[0].date, date(2015, 2, 1));
    assert_eq!(cells[27].date, date(2015, 2, 28));
    assert_eq!(cells[28].date, date(2015, 3, 1));
    assert_eq!(cells[41].date, date(2015, 3, 14));
}

#[test]
fn test_long_month_with_late_start() {
    // March 2025 starts on a Saturday: 6 leading cells and all six rows
    // genuinely used.
    let grid = MonthGrid::build(ym(2025, 3));
    let cells = grid.cells();

    let leading: Vec<_> = cells.iter().take_while(|c| !c.in_month).collect();
    assert_eq!(leading.len(), 6);
    assert_eq!(leading[0].date, date(2025, 2, 23));
    assert_eq!(cells[6].date, date(2025, 3, 1));
    // Row 6 starts inside March (index 35 = March 30).
    assert_eq!(cells[35].date, date(2025, 3, 30));
    assert!(cells[35].in_month);
}

#[test]
fn test_rows_are_seven_wide() {
    let grid = MonthGrid::build(ym(2024, 7));
    let rows: Vec<_> = grid.rows().collect();
    assert_eq!(rows.len(), 6);
    for row in rows {
        assert_eq!(row.len(), GRID_COLUMNS);
    }
}

#[test]
fn test_contains_in_month() {
    let grid = MonthGrid::build(ym(2023, 10));
    assert!(grid.contains_in_month(date(2023, 10, 1)));
    assert!(grid.contains_in_month(date(2023, 10, 31)));
    // November 5 is visible in the grid, but as padding.
    assert!(!grid.contains_in_month(date(2023, 11, 5)));
    // Not in the grid at all.
    assert!(!grid.contains_in_month(date(2023, 12, 25)));
}

#[test]
fn test_position_of() {
    let grid = MonthGrid::build(ym(2023, 10));
    assert_eq!(grid.position_of(date(2023, 10, 1)), Some(0));
    assert_eq!(grid.position_of(date(2023, 11, 11)), Some(41));
    assert_eq!(grid.position_of(date(2023, 12, 25)), None);
}
