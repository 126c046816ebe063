//! Chart rendering - turns declarative chart specs into terminal widgets.

use super::colormap::rainbow_color;
use super::geo::country_centroid;
use super::ThemeColors;
use crate::app::ColorPalette;
use crate::chart::{BarSpec, ChartSpec, HistogramSpec, MapSpec, PieSpec};
use crate::data::Gender;
use crate::util::format_count;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the chart for the active view.
pub(super) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    spec: &ChartSpec,
    palette: ColorPalette,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" {} ", spec.title()))
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if spec.is_empty() {
        draw_empty(f, inner, colors);
        return;
    }

    match spec {
        ChartSpec::Pie(spec) => draw_pie(f, inner, spec, colors),
        ChartSpec::Bar(spec) => draw_bars(f, inner, spec, colors),
        ChartSpec::Histogram(spec) => draw_histogram(f, inner, spec, colors),
        ChartSpec::Map(spec) => draw_map(f, inner, spec, palette, colors),
    }
}

/// Empty filter result: an empty chart, not an error.
fn draw_empty(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("No data for the current selection")
        .style(Style::default().fg(colors.muted))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Pie chart as labelled proportion rows with rainbow slice colors.
fn draw_pie(f: &mut Frame<'_>, area: Rect, spec: &PieSpec, colors: &ThemeColors) {
    let label_width = spec
        .slices
        .iter()
        .map(|s| s.label.width())
        .max()
        .unwrap_or(0);
    // Columns: swatch, label, percentage, bar, value.
    let bar_space = (area.width as usize)
        .saturating_sub(label_width + 24)
        .max(4);

    let denominator = spec.slices.len().saturating_sub(1).max(1) as f64;
    let mut lines: Vec<Line<'_>> = Vec::with_capacity(spec.slices.len() + 2);

    for (i, slice) in spec.slices.iter().enumerate() {
        let color = rainbow_color(i as f64 / denominator);
        let filled = (slice.fraction * bar_space as f64).round() as usize;

        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(
                format!("{:width$}  ", slice.label, width = label_width),
                Style::default().fg(colors.text),
            ),
            Span::styled(
                format!("{:5.1}%  ", slice.fraction * 100.0),
                Style::default().fg(colors.value),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                format!(" {}", format_count(slice.value)),
                Style::default().fg(colors.muted),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total viewership: ", Style::default().fg(colors.label)),
        Span::styled(
            format_count(spec.total),
            Style::default().fg(colors.value),
        ),
    ]));

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(colors.bg)),
        area,
    );
}

/// Bar chart of per-country viewership.
fn draw_bars(f: &mut Frame<'_>, area: Rect, spec: &BarSpec, colors: &ThemeColors) {
    let count = spec.bars.len().max(1) as u16;
    let bar_width = (area.width / count)
        .saturating_sub(1)
        .clamp(3, 12);

    let bars: Vec<Bar<'_>> = spec
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.value)
                .label(Line::from(truncate(&bar.label, bar_width as usize)))
                .text_value(format_count(bar.value))
                .style(Style::default().fg(colors.value))
                .value_style(
                    Style::default()
                        .fg(colors.cursor_fg)
                        .bg(colors.value),
                )
        })
        .collect();

    let max = spec.bars.iter().map(|b| b.value).max().unwrap_or(1);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .max(max)
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(Style::default().fg(colors.label))
        .style(Style::default().bg(colors.bg));

    f.render_widget(chart, area);
}

/// Histogram as gender-colored bars grouped by country.
fn draw_histogram(f: &mut Frame<'_>, area: Rect, spec: &HistogramSpec, colors: &ThemeColors) {
    let max = spec
        .groups
        .iter()
        .flat_map(|g| g.bars.iter().map(|&(_, v)| v))
        .max()
        .unwrap_or(1);

    let bar_count: usize = spec.groups.iter().map(|g| g.bars.len()).sum();
    let bar_width = (area.width as usize / bar_count.max(1))
        .saturating_sub(1)
        .clamp(3, 10) as u16;

    let mut chart = BarChart::default()
        .max(max)
        .bar_width(bar_width)
        .bar_gap(1)
        .group_gap(3)
        .label_style(Style::default().fg(colors.label))
        .style(Style::default().bg(colors.bg));

    for group in &spec.groups {
        let bars: Vec<Bar<'_>> = group
            .bars
            .iter()
            .map(|&(gender, value)| {
                let color = match gender {
                    Gender::Male => colors.male,
                    Gender::Female => colors.female,
                };
                Bar::default()
                    .value(value)
                    .label(Line::from(truncate(gender.name(), bar_width as usize)))
                    .text_value(format_count(value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(colors.cursor_fg).bg(color))
            })
            .collect();

        chart = chart.data(
            BarGroup::default()
                .label(Line::styled(
                    group.country.clone(),
                    Style::default().fg(colors.text),
                ))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

/// Choropleth: world-map canvas with the selected country's marker
/// color-encoded by visit intensity, plus a one-line legend.
fn draw_map(
    f: &mut Frame<'_>,
    area: Rect,
    spec: &MapSpec,
    palette: ColorPalette,
    colors: &ThemeColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let canvas = Canvas::default()
        .background_color(colors.bg)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: colors.muted,
                resolution: MapResolution::High,
            });
            for region in &spec.regions {
                if let Some((lon, lat)) = country_centroid(&region.location) {
                    let style = Style::default()
                        .fg(palette.color(region.intensity))
                        .add_modifier(Modifier::BOLD);
                    ctx.print(lon, lat, Line::from(Span::styled("◉", style)));
                }
            }
        });
    f.render_widget(canvas, chunks[0]);

    let legend: Vec<Span<'_>> = spec
        .regions
        .iter()
        .flat_map(|region| {
            vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(palette.color(region.intensity)),
                ),
                Span::styled(
                    format!("{}: ", region.location),
                    Style::default().fg(colors.text),
                ),
                Span::styled(
                    format!("{} visits", format_count(region.visits)),
                    Style::default().fg(colors.value),
                ),
                Span::styled(
                    format!("  ({:.0}% of peak)", region.intensity * 100.0),
                    Style::default().fg(colors.muted),
                ),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(legend))
            .style(Style::default().bg(colors.bg))
            .alignment(Alignment::Center),
        chunks[1],
    );
}

/// Truncate a label to fit a bar column.
fn truncate(label: &str, width: usize) -> String {
    if label.width() <= width {
        label.to_string()
    } else {
        label.chars().take(width.saturating_sub(1)).collect::<String>() + "…"
    }
}
