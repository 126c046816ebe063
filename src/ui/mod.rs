//! User interface rendering.
//!
//! The entire frame is redrawn from [`App`] state on every tick: header,
//! sidebar navigation, the active view's filter controls, the chart built
//! from the current selections, and the status and key map bars.

mod charts;
mod colormap;
mod geo;
mod theme;

use crate::app::App;
use crate::view::{Dropdown, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub use theme::ThemeColors;

/// Dashboard header text.
const TITLE: &str = "FUNOlympic Games 2023 Dashboard";

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], &colors);
    draw_content(f, app, chunks[1], &colors);
    draw_status(f, app, chunks[2], &colors);
    draw_keymap(f, chunks[3], &colors);
}

fn draw_header(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(colors.heading)
                .bg(colors.status_bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_content(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(20)])
        .split(area);

    draw_sidebar(f, app, columns[0], colors);

    let control_height = app.controls.dropdowns.len() as u16 + 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(control_height), Constraint::Min(5)])
        .split(columns[1]);

    draw_controls(f, app, rows[0], colors);
    charts::draw_chart(f, rows[1], &app.chart(), app.palette, colors);
}

/// Sidebar navigation: one entry per view, active entry highlighted.
fn draw_sidebar(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let items: Vec<ListItem<'_>> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let text = format!(" {} {}", i + 1, view.name());
            let style = if *view == app.view() {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Views ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}

/// The active view's dropdowns, one line each, focused one highlighted.
fn draw_controls(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines: Vec<Line<'_>> = app
        .controls
        .dropdowns
        .iter()
        .enumerate()
        .map(|(i, dropdown)| dropdown_line(dropdown, i == app.focus, colors))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}

fn dropdown_line<'a>(dropdown: &'a Dropdown, focused: bool, colors: &ThemeColors) -> Line<'a> {
    let value_style = if focused {
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.value)
    };

    let position = if dropdown.options.is_empty() {
        "(0/0)".to_string()
    } else {
        format!("({}/{})", dropdown.selected + 1, dropdown.options.len())
    };

    Line::from(vec![
        Span::styled(
            format!(" {:7}", dropdown.label),
            Style::default().fg(colors.label),
        ),
        Span::styled("◂ ", Style::default().fg(colors.border)),
        Span::styled(format!(" {} ", dropdown.value()), value_style),
        Span::styled(" ▸  ", Style::default().fg(colors.border)),
        Span::styled(position, Style::default().fg(colors.muted)),
    ])
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(app.status.as_str())
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let hints = " q quit │ 1-4/Tab view │ h/l dropdown │ j/k option │ c palette │ T theme │ ? help";
    let paragraph =
        Paragraph::new(hints).style(Style::default().fg(colors.muted).bg(colors.bg));
    f.render_widget(paragraph, area);
}
