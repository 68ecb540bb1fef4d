//! Ratatui-based interactive form.
//!
//! Four editable fields (weight, speed, grade, duration). Enter in any field,
//! or F5, runs the calculation; on success the fields are rewritten with the
//! values actually used. The result panel, the kcal/grade chart and the static
//! explanation are redrawn after every run.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::pipeline::{RunOutput, run_estimate_text};
use crate::cli::FormArgs;
use crate::domain::{Field, Locale};
use crate::error::AppError;
use crate::normalize::ValidationErrors;
use crate::plot::ascii::grade_curve;
use crate::report::text::strings;
use crate::report::{format_errors, format_number, result_lines};

mod plotters_chart;

use plotters_chart::GradeChart;

/// Longest text accepted in one field.
const MAX_FIELD_LEN: usize = 12;

/// Start the TUI. `notice` is shown in the footer until the first calculation.
pub fn run(args: FormArgs, locale: Locale, notice: Option<String>) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(&args, locale);
    if let Some(notice) = notice {
        app.status = notice;
    }
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Outcome of the last calculation.
#[derive(Debug, Clone)]
enum Outcome {
    Estimate(RunOutput),
    Invalid(ValidationErrors),
}

struct App {
    locale: Locale,
    /// Text buffers in `Field::ALL` order.
    fields: [String; 4],
    selected_field: usize,
    outcome: Option<Outcome>,
    status: String,
}

impl App {
    fn new(args: &FormArgs, locale: Locale) -> Self {
        Self {
            locale,
            fields: [
                args.weight.clone(),
                args.speed.clone(),
                args.grade.clone(),
                args.duration.clone(),
            ],
            selected_field: 0,
            outcome: None,
            status: String::new(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Up | KeyCode::BackTab => {
                self.selected_field = (self.selected_field + Field::ALL.len() - 1) % Field::ALL.len();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected_field = (self.selected_field + 1) % Field::ALL.len();
            }
            KeyCode::Enter | KeyCode::F(5) => self.calculate(),
            KeyCode::Backspace => {
                self.fields[self.selected_field].pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                let buf = &mut self.fields[self.selected_field];
                if buf.chars().count() < MAX_FIELD_LEN {
                    buf.push(c);
                }
            }
            _ => {}
        }
        false
    }

    fn calculate(&mut self) {
        self.status.clear();
        let [w, s, g, d] = &self.fields;
        match run_estimate_text(w, s, g, d) {
            Ok(run) => {
                for (i, field) in Field::ALL.iter().enumerate() {
                    self.fields[i] = run.shown.text(*field);
                }
                self.outcome = Some(Outcome::Estimate(run));
            }
            Err(errors) => {
                self.outcome = Some(Outcome::Invalid(errors));
            }
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("walkcal", Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::raw(strings(self.locale).title),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(13)])
            .split(columns[1]);

        self.draw_form(frame, left[0]);
        self.draw_outcome(frame, left[1]);
        self.draw_chart(frame, right[0]);
        self.draw_explanation(frame, right[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let s = strings(self.locale);
        let items: Vec<ListItem> = Field::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let cursor = if i == self.selected_field { "_" } else { "" };
                ListItem::new(format!(
                    "{:<10} {:>12}{cursor} {}",
                    s.field_label(*field),
                    self.fields[i],
                    field.unit()
                ))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title(s.calculate_hint).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_outcome(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let s = strings(self.locale);
        let block = Block::default().title(s.result_heading).borders(Borders::ALL);

        let text = match &self.outcome {
            None => Text::from(Span::styled("-", Style::default().fg(Color::Gray))),
            Some(Outcome::Invalid(errors)) => Text::from(
                format_errors(errors, self.locale)
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red))))
                    .collect::<Vec<_>>(),
            ),
            Some(Outcome::Estimate(run)) => {
                let lines: Vec<Line> = result_lines(&run.result, self.locale)
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let style = if i == 0 {
                            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default()
                        };
                        Line::from(vec![Span::raw(format!("{label}: ")), Span::styled(value, style)])
                    })
                    .collect();
                Text::from(lines)
            }
        };

        let p = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("kcal/min × grade").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(Outcome::Estimate(run)) = &self.outcome else {
            return;
        };

        let (curve, marker, x_bounds, y_bounds) = chart_series(run);
        let widget = GradeChart {
            curve: &curve,
            marker: Some(marker),
            x_bounds,
            y_bounds,
            x_label: "grade (%)",
            y_label: "kcal/min",
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_explanation(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let s = strings(self.locale);
        let lines: Vec<Line> = s.explanation.iter().map(|l| Line::from(*l)).collect();
        let p = Paragraph::new(Text::from(lines))
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title(s.explanation_heading).borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓/Tab field  Enter/F5 calculate  Backspace delete  Esc quit";
        let mut spans = vec![Span::styled(help, Style::default().fg(Color::Gray))];
        if !self.status.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(&self.status, Style::default().fg(Color::Yellow)));
        }
        if let Some(Outcome::Estimate(run)) = &self.outcome {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!(
                    "{} {}",
                    format_number(run.shown.grade_percent, 1, self.locale),
                    Field::Grade.unit()
                ),
                Style::default().fg(Color::Yellow),
            ));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Curve, current point and bounds for the chart.
fn chart_series(run: &RunOutput) -> (Vec<(f64, f64)>, (f64, f64), [f64; 2], [f64; 2]) {
    let range = Field::Grade.range();
    let curve = grade_curve(&run.inputs, range.min, range.max, 61);
    let marker = (run.inputs.grade_percent(), run.result.kcal_per_min);

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);

    (curve, marker, [range.min, range.max], [y_min - pad, y_max + pad])
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.1}")
}
