//! Declarative chart descriptions.
//!
//! This module contains the chart spec types and the four builders that
//! produce them. A spec describes a chart's kind, data subset, and visual
//! encoding without committing to a rendered form; the `ui` layer owns the
//! rendering. Builders never mutate the dataset, and an out-of-domain
//! selection yields an empty spec rather than an error.

mod builders;

pub use builders::{bars_by_country, histogram_by_country_gender, pie_by_sport, visits_choropleth};

use crate::data::Gender;

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Slice label (a sport).
    pub label: String,
    /// Summed viewership for this slice.
    pub value: u64,
    /// Share of the chart total, in `0.0..=1.0`.
    pub fraction: f64,
}

/// Pie chart: viewership proportions across sports for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    /// Chart title.
    pub title: String,
    /// Slices in ascending label order.
    pub slices: Vec<PieSlice>,
    /// Total viewership across all slices.
    pub total: u64,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarValue {
    /// Bar label (a country).
    pub label: String,
    /// Summed viewership.
    pub value: u64,
}

/// Bar chart: viewership by country for one (sport, gender) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSpec {
    /// Chart title.
    pub title: String,
    /// X axis binding.
    pub x_label: String,
    /// Y axis binding.
    pub y_label: String,
    /// Bars in ascending label order.
    pub bars: Vec<BarValue>,
}

/// Bars for one country in a histogram, one per gender with matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramGroup {
    /// Group label (a country).
    pub country: String,
    /// Summed viewership, one entry per gender with matching rows.
    pub bars: Vec<(Gender, u64)>,
}

/// Histogram: viewership summed by (country, gender) for one sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramSpec {
    /// Chart title.
    pub title: String,
    /// Country groups in ascending label order.
    pub groups: Vec<HistogramGroup>,
}

/// One color-encoded region of a choropleth map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    /// Region label (a country).
    pub location: String,
    /// Summed site visits, the color value.
    pub visits: u64,
    /// Visits normalized against the dataset-wide per-country maximum,
    /// in `0.0..=1.0`.
    pub intensity: f64,
}

/// Choropleth map: site visits for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSpec {
    /// Chart title.
    pub title: String,
    /// Regions to color; empty for an out-of-domain selection.
    pub regions: Vec<MapRegion>,
}

/// A chart description for any of the four views.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Pie chart spec.
    Pie(PieSpec),
    /// Bar chart spec.
    Bar(BarSpec),
    /// Histogram spec.
    Histogram(HistogramSpec),
    /// Choropleth map spec.
    Map(MapSpec),
}

impl ChartSpec {
    /// The chart title.
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(spec) => &spec.title,
            ChartSpec::Bar(spec) => &spec.title,
            ChartSpec::Histogram(spec) => &spec.title,
            ChartSpec::Map(spec) => &spec.title,
        }
    }

    /// True if the spec carries no data (empty filter result).
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(spec) => spec.slices.is_empty(),
            ChartSpec::Bar(spec) => spec.bars.is_empty(),
            ChartSpec::Histogram(spec) => spec.groups.is_empty(),
            ChartSpec::Map(spec) => spec.regions.is_empty(),
        }
    }
}
