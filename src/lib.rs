//! Tempo Dashboard — terminal month-view dashboard for personal
//! time-tracking data.
//!
//! The `calendar` module is the pure core: date arithmetic, the fixed
//! 42-cell month grid, and the navigation/selection state machine.
//! `metrics` holds the score-tier mapping and the injected per-day data
//! source; `app`, `event`, and `theme` are the TUI shell around them.

pub mod app;
pub mod calendar;
pub mod event;
pub mod metrics;
pub mod theme;
