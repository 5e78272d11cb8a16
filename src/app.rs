//! Main application state, event handling, and rendering.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::calendar::{
    CalendarDate, CalendarViewState, DayCell, YearMonth, GRID_COLUMNS, GRID_ROWS,
};
use crate::event::Event;
use crate::metrics::{project, DayProjection, MetricsSource, MetricsStore, ScoreTier};
use crate::theme::Theme;

const WEEKDAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Return value from event handling.
#[derive(Debug, PartialEq)]
pub enum Action {
    Continue,
    Quit,
    ReloadMetrics,
}

/// Input mode for modal states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Core application state.
pub struct App {
    // Calendar session
    pub view: CalendarViewState,

    // Metrics data
    pub store: MetricsStore,
    pub data_file: Option<PathBuf>,

    // UI state
    pub mode: InputMode,
    pub theme: Theme,

    // Status
    pub watcher_active: bool,
    pub no_watch: bool,
    pub last_reload: Option<Instant>,
    pub error_message: Option<(String, Instant)>,
    pub clock: String,

    // Layout areas for mouse hit-testing
    pub grid_area: Rect,
    pub detail_area: Rect,
    cell_areas: Vec<(Rect, CalendarDate, bool)>,
}

impl App {
    pub fn new(
        data_file: Option<PathBuf>,
        no_watch: bool,
        start_month: Option<YearMonth>,
    ) -> color_eyre::Result<Self> {
        let now = chrono::Local::now();
        let today = CalendarDate::new(now.year(), now.month(), now.day())?;

        let mut view = CalendarViewState::new(today);
        if let Some(month) = start_month {
            view.go_to_month(month);
        }

        Ok(Self {
            view,
            store: MetricsStore::new(),
            data_file,
            mode: InputMode::Normal,
            theme: Theme::slate(),
            watcher_active: !no_watch,
            no_watch,
            last_reload: None,
            error_message: None,
            clock: chrono::Local::now().format("%H:%M:%S").to_string(),
            grid_area: Rect::default(),
            detail_area: Rect::default(),
            cell_areas: Vec::new(),
        })
    }

    /// Load (or reload) the metrics file. Failures surface in the error
    /// bar; the grid keeps rendering with whatever data it last had.
    pub fn load_metrics(&mut self) {
        let Some(path) = &self.data_file else {
            return;
        };
        match MetricsStore::load(path) {
            Ok(store) => {
                tracing::debug!(days = store.len(), "metrics loaded");
                self.store = store;
                self.last_reload = Some(Instant::now());
            }
            Err(e) => {
                self.error_message = Some((e.to_string(), Instant::now()));
            }
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        // Initial load
        self.load_metrics();

        // Start event handler
        let mut events = crate::event::EventHandler::new(self.data_file.clone(), !self.no_watch);

        loop {
            // RENDER
            terminal.draw(|frame| self.render(frame))?;

            // WAIT FOR EVENT
            let Some(event) = events.next().await else {
                break;
            };

            // UPDATE
            match self.handle_event(event) {
                Action::Quit => break,
                Action::ReloadMetrics => self.load_metrics(),
                Action::Continue => {}
            }
        }

        Ok(())
    }

    /// Handle a single event.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Tick => {
                self.clock = chrono::Local::now().format("%H:%M:%S").to_string();
                // Auto-dismiss errors after 10 seconds
                if let Some((_, when)) = &self.error_message {
                    if when.elapsed().as_secs() >= 10 {
                        self.error_message = None;
                    }
                }
                Action::Continue
            }
            Event::MetricsChanged => {
                self.watcher_active = true;
                Action::ReloadMetrics
            }
            Event::Resize(_, _) => Action::Continue,
        }
    }

    /// Handle key events.
    fn handle_key_event(&mut self, key: KeyEvent) -> Action {
        // Global keys
        match key.code {
            KeyCode::Char('q') if self.mode == InputMode::Normal => return Action::Quit,
            KeyCode::Char('?') => {
                self.mode = if self.mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
                return Action::Continue;
            }
            KeyCode::Esc => {
                match self.mode {
                    InputMode::Help => self.mode = InputMode::Normal,
                    InputMode::Normal => self.view.clear_selection(),
                }
                return Action::Continue;
            }
            _ => {}
        }

        // Help mode: any key dismisses
        if self.mode == InputMode::Help {
            self.mode = InputMode::Normal;
            return Action::Continue;
        }

        // Normal mode keys
        match key.code {
            KeyCode::Char('p') | KeyCode::PageUp => self.view.go_to_previous_month(),
            KeyCode::Char('n') | KeyCode::PageDown => self.view.go_to_next_month(),
            KeyCode::Char('t') => self.view.go_to_today(),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-(GRID_COLUMNS as i64)),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(GRID_COLUMNS as i64),
            KeyCode::Char('r') => return Action::ReloadMetrics,
            KeyCode::Char('c') => self.theme = self.theme.next(),
            _ => {}
        }

        Action::Continue
    }

    /// Handle mouse events.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                let point = (mouse.column, mouse.row).into();
                if let Some((_, date, in_month)) = self
                    .cell_areas
                    .iter()
                    .find(|(rect, _, _)| rect.contains(point))
                {
                    // select_date already ignores padding days; the flag
                    // just avoids a useless call.
                    if *in_month {
                        self.view.select_date(*date);
                    }
                }
            }
            MouseEventKind::ScrollDown => {
                if self.grid_area.contains((mouse.column, mouse.row).into()) {
                    self.view.go_to_next_month();
                }
            }
            MouseEventKind::ScrollUp => {
                if self.grid_area.contains((mouse.column, mouse.row).into()) {
                    self.view.go_to_previous_month();
                }
            }
            _ => {}
        }
        Action::Continue
    }

    /// Move the selection by `offset` days, routed through the selection
    /// guard so a step landing outside the visible month is a no-op.
    /// With nothing selected, a movement key selects today if visible,
    /// otherwise the first of the month.
    fn move_selection(&mut self, offset: i64) {
        match self.view.selected_date() {
            Some(selected) => self.view.select_date(selected.add_days(offset)),
            None => {
                let month = self.view.reference_month();
                let today = self.view.today();
                if today.year_month() == month {
                    self.view.select_date(today);
                } else {
                    self.view.select_date(month.start_of_month());
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Graceful degradation for tiny terminals
        if area.width < 40 || area.height < 10 {
            let msg = Paragraph::new("Terminal too small. Resize to at least 80x24.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.tier_bad));
            frame.render_widget(msg, area);
            return;
        }

        let has_error = self.error_message.is_some();
        let constraints = if has_error {
            vec![
                Constraint::Length(1), // title bar
                Constraint::Length(1), // error bar
                Constraint::Fill(1),   // main content
                Constraint::Length(1), // status bar
            ]
        } else {
            vec![
                Constraint::Length(1), // title bar
                Constraint::Fill(1),   // main content
                Constraint::Length(1), // status bar
            ]
        };

        let areas: Vec<Rect> = Layout::vertical(constraints).split(area).to_vec();

        let (title_area, main_area, status_area) = if has_error {
            (areas[0], areas[2], areas[3])
        } else {
            (areas[0], areas[1], areas[2])
        };

        self.render_title_bar(frame, title_area);
        if has_error {
            self.render_error_bar(frame, areas[1]);
        }
        self.render_status_bar(frame, status_area);

        // Main content: grid, with the detail panel beside it when the
        // terminal is wide enough.
        if area.width < 80 {
            self.grid_area = main_area;
            self.detail_area = Rect::default();
            self.render_grid(frame, main_area);
        } else {
            let [grid_area, detail_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(40)]).areas(main_area);
            self.grid_area = grid_area;
            self.detail_area = detail_area;
            self.render_grid(frame, grid_area);
            self.render_detail_panel(frame, detail_area);
        }

        // Overlays
        if self.mode == InputMode::Help {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let watcher_indicator = if self.no_watch || self.data_file.is_none() {
            Span::styled("○ STATIC", Style::default().fg(self.theme.text_secondary))
        } else if self.watcher_active {
            Span::styled("● WATCHING", Style::default().fg(self.theme.tier_good))
        } else {
            Span::styled("● WATCHER ERROR", Style::default().fg(self.theme.tier_bad))
        };

        let padding = area
            .width
            .saturating_sub(18 + self.clock.len() as u16 + 14) as usize;

        let title = Line::from(vec![
            Span::styled(
                " ◷ Tempo Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::raw(&self.clock),
            Span::raw("  "),
            watcher_indicator,
            Span::raw(" "),
        ]);

        frame.render_widget(
            Paragraph::new(title).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn render_error_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some((ref msg, _)) = self.error_message {
            let line = Line::from(Span::styled(
                format!(" ⚠ {msg}"),
                Style::default()
                    .fg(self.theme.bar_bg)
                    .bg(self.theme.tier_warning),
            ));
            frame.render_widget(
                Paragraph::new(line).style(Style::default().bg(self.theme.tier_warning)),
                area,
            );
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let theme_name = self.theme.name;

        let shortcuts = Line::from(vec![
            Span::styled(" p/n", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Month  "),
            Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Today  "),
            Span::styled("←↓↑→", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Select  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Clear  "),
            Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Reload  "),
            Span::styled("c", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Theme  "),
            Span::styled("?", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Help  "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" Quit  │ {theme_name}")),
        ]);

        frame.render_widget(
            Paragraph::new(shortcuts).style(
                Style::default()
                    .bg(self.theme.bar_bg)
                    .fg(self.theme.text_on_bar),
            ),
            area,
        );
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let month = self.view.reference_month();

        let block = Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {month} "))
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

        // Weekday labels, Sunday-first like the grid itself.
        let header_cols: [Rect; GRID_COLUMNS] =
            Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .areas(header_area);
        for (label, col) in WEEKDAY_LABELS.iter().zip(header_cols) {
            frame.render_widget(
                Paragraph::new(*label)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.text_secondary)),
                col,
            );
        }

        // 6 rows of 7 day cells; remember each cell's rect for mouse
        // hit-testing.
        self.cell_areas.clear();
        let row_areas: [Rect; GRID_ROWS] =
            Layout::vertical([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS]).areas(body_area);

        let grid = self.view.grid().clone();
        for (week, row_area) in grid.rows().zip(row_areas) {
            let col_areas: [Rect; GRID_COLUMNS] =
                Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .areas(row_area);
            for (cell, col_area) in week.iter().zip(col_areas) {
                self.cell_areas.push((col_area, cell.date, cell.in_month));
                self.render_day_cell(frame, col_area, cell);
            }
        }
    }

    fn render_day_cell(&self, frame: &mut Frame, area: Rect, cell: &DayCell) {
        let theme = self.theme;
        let selected = self.view.selected_date() == Some(cell.date);
        let is_today = self.view.is_today(cell.date);

        let day_style = if selected {
            Style::default()
                .fg(theme.accent_soft)
                .add_modifier(Modifier::BOLD)
        } else if !cell.in_month {
            Style::default().fg(theme.text_faint)
        } else if is_today {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_primary)
        };

        let mut header = vec![Span::styled(format!("{:>2}", cell.date.day()), day_style)];
        if is_today && area.width >= 9 {
            header.push(Span::styled(
                " Today",
                Style::default().fg(theme.accent_soft),
            ));
        }

        let mut lines = vec![Line::from(header)];

        // Productivity bar for in-month days with a recorded score.
        if cell.in_month && area.height >= 2 {
            if let Some(score) = self.store.score_for(cell.date) {
                lines.push(score_bar(
                    score,
                    area.width.saturating_sub(6) as usize,
                    &theme,
                ));
            }
        }

        let mut cell_style = Style::default();
        if selected {
            cell_style = cell_style.bg(theme.surface);
        }
        frame.render_widget(Paragraph::new(lines).style(cell_style), area);
    }

    fn render_detail_panel(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let block = Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .title(" Day Detail ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match project(self.view.selected_date(), &self.store) {
            DayProjection::NoSelection => {
                let msg = Paragraph::new("Select a day to view details")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.text_secondary));
                frame.render_widget(msg, inner);
            }
            DayProjection::NoData(date) => {
                let lines = vec![
                    Line::from(Span::styled(
                        date.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::raw(""),
                    Line::styled(
                        "No data recorded for this day",
                        Style::default().fg(theme.text_secondary),
                    ),
                ];
                frame.render_widget(Paragraph::new(lines), inner);
            }
            DayProjection::Detail(date, detail) => {
                let mut lines: Vec<Line> = Vec::new();

                lines.push(Line::from(Span::styled(
                    date.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::raw(""));

                if let Some(score) = self.store.score_for(date) {
                    let tier = ScoreTier::for_score(score as i64);
                    lines.push(Line::from(vec![
                        Span::styled("Completion ", Style::default().fg(theme.text_secondary)),
                        Span::styled(
                            format!("{score}% ({})", tier.label()),
                            Style::default()
                                .fg(theme.tier_color(tier))
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]));
                    lines.push(score_bar(
                        score,
                        inner.width.saturating_sub(6) as usize,
                        &theme,
                    ));
                    lines.push(Line::raw(""));
                }

                lines.push(Line::styled(
                    "━━ AI REFLECTION SUMMARY",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                match &detail.summary {
                    Some(summary) => {
                        for chunk in wrap_text(summary, inner.width.saturating_sub(1) as usize) {
                            lines.push(Line::styled(
                                chunk,
                                Style::default().fg(theme.text_primary),
                            ));
                        }
                    }
                    None => lines.push(Line::styled(
                        "No summary",
                        Style::default().fg(theme.text_faint),
                    )),
                }
                lines.push(Line::raw(""));

                lines.push(Line::styled(
                    "━━ PLANNED VS ACTUAL",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::from(vec![
                    Span::styled(
                        "Planned tasks    ",
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(
                        detail.planned_count.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(
                        "Actual completed ",
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(
                        detail.actual_count.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
                let diff = detail.difference();
                let diff_color = if diff < 0 {
                    theme.tier_bad
                } else {
                    theme.tier_good
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        "Difference       ",
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(
                        format!("{diff:+}"),
                        Style::default().fg(diff_color).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::raw(""));

                if !detail.suggestions.is_empty() {
                    lines.push(Line::styled(
                        "━━ SUGGESTIONS",
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ));
                    for suggestion in &detail.suggestions {
                        let mut first = true;
                        for chunk in wrap_text(suggestion, inner.width.saturating_sub(3) as usize)
                        {
                            let prefix = if first { "✓ " } else { "  " };
                            first = false;
                            lines.push(Line::from(vec![
                                Span::styled(prefix, Style::default().fg(theme.tier_good)),
                                Span::styled(chunk, Style::default().fg(theme.text_primary)),
                            ]));
                        }
                    }
                }

                frame.render_widget(Paragraph::new(lines), inner);
            }
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 18, area);
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw("  p / PgUp   Previous month"),
            Line::raw("  n / PgDn   Next month"),
            Line::raw("  t          Jump to today"),
            Line::raw("  ←→ / h l   Move selection by a day"),
            Line::raw("  ↑↓ / k j   Move selection by a week"),
            Line::raw("  Esc        Clear selection"),
            Line::raw("  Click      Select a day (this month only)"),
            Line::raw("  Scroll     Previous/next month"),
            Line::raw("  r          Reload metrics file"),
            Line::raw("  c          Cycle theme"),
            Line::raw("  ?          Toggle this help"),
            Line::raw("  q          Quit"),
            Line::raw(""),
            Line::styled(
                "Press any key to close",
                Style::default().fg(self.theme.text_secondary),
            ),
        ];

        let help = Paragraph::new(help_text).block(
            Block::bordered()
                .title(" Help ")
                .border_style(Style::default().fg(self.theme.accent))
                .style(Style::default().bg(self.theme.surface)),
        );

        frame.render_widget(help, popup_area);
    }
}

// ─────────────────────────────────────────────────────────
// Standalone helper functions
// ─────────────────────────────────────────────────────────

fn score_bar(score: u8, width: usize, theme: &Theme) -> Line<'static> {
    let width = width.max(4);
    let filled = ((score as usize * width) + 50) / 100;
    let empty = width.saturating_sub(filled);
    let color = theme.tier_color(ScoreTier::for_score(score as i64));

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(theme.border)),
        Span::styled(
            format!(" {score:>3}%"),
            Style::default().fg(theme.text_secondary),
        ),
    ])
}

/// Greedy word wrap; long words are left intact and overflow the width.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
