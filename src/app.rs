//! Application state and logic.

use crate::chart::{self, ChartSpec};
use crate::data::Dataset;
use crate::view::{ControlLayout, View};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Color palette for the map view's intensity encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Viridis,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }
}

/// Application state.
///
/// The dataset is loaded once before construction and never mutated; all
/// remaining state is the current value of the UI controls.
#[derive(Debug)]
pub struct App {
    /// Loaded dataset.
    pub dataset: Dataset,
    /// Control layout for the active view.
    pub controls: ControlLayout,
    /// Index of the focused dropdown.
    pub focus: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Color palette for the map view.
    pub palette: ColorPalette,
}

impl App {
    /// Create a new application instance over a loaded dataset.
    ///
    /// Starts on the pie-chart view, the initial-load default.
    pub fn new(dataset: Dataset) -> Self {
        let controls = ControlLayout::initial(&dataset);
        Self {
            dataset,
            controls,
            focus: 0,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            palette: ColorPalette::default(),
        }
    }

    /// The active view.
    pub fn view(&self) -> View {
        self.controls.view
    }

    /// Switch to a view, rebuilding its controls with default selections.
    pub fn select_view(&mut self, view: View) {
        if self.controls.view == view {
            return;
        }
        self.controls = ControlLayout::for_view(view, &self.dataset);
        self.focus = 0;
        self.status = format!("View: {}", view.name());
        tracing::info!(view = view.name(), "View selected");
    }

    /// Switch to the next view in sidebar order.
    pub fn next_view(&mut self) {
        self.select_view(self.controls.view.next());
    }

    /// Switch to the previous view in sidebar order.
    pub fn prev_view(&mut self) {
        self.select_view(self.controls.view.prev());
    }

    /// Move focus to the next dropdown.
    pub fn focus_next(&mut self) {
        let count = self.controls.dropdowns.len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Move focus to the previous dropdown.
    pub fn focus_prev(&mut self) {
        let count = self.controls.dropdowns.len();
        if count > 0 {
            self.focus = self.focus.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Select the next option of the focused dropdown.
    pub fn option_next(&mut self) {
        if let Some(dropdown) = self.controls.dropdowns.get_mut(self.focus) {
            dropdown.select_next();
            self.status = format!("{}: {}", dropdown.label, dropdown.value());
        }
    }

    /// Select the previous option of the focused dropdown.
    pub fn option_prev(&mut self) {
        if let Some(dropdown) = self.controls.dropdowns.get_mut(self.focus) {
            dropdown.select_prev();
            self.status = format!("{}: {}", dropdown.label, dropdown.value());
        }
    }

    /// Build the chart spec for the active view and current selections.
    pub fn chart(&self) -> ChartSpec {
        let value = |i: usize| {
            self.controls
                .dropdowns
                .get(i)
                .map(|d| d.value())
                .unwrap_or("")
        };

        match self.controls.view {
            View::Pie => ChartSpec::Pie(chart::pie_by_sport(&self.dataset, value(0))),
            View::Bar => {
                ChartSpec::Bar(chart::bars_by_country(&self.dataset, value(0), value(1)))
            },
            View::Histogram => ChartSpec::Histogram(chart::histogram_by_country_gender(
                &self.dataset,
                value(0),
            )),
            View::Map => ChartSpec::Map(chart::visits_choropleth(&self.dataset, value(0))),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle to the next map color palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Show the key map in the status line.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, 1-4/Tab=view, h/l=dropdown, j/k=option, T=theme, c=palette".to_string();
    }
}
