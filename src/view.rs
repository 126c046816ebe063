//! Views and the control layout router.
//!
//! A view is one of the four selectable dashboard pages. The router maps
//! the most recently activated navigation entry to the control layout for
//! that view: its dropdowns, pre-populated from the dataset domains with a
//! fixed default selection, and an empty chart placeholder the render step
//! fills in. Pure functions of the navigation state and dataset.

use crate::data::Dataset;

/// Conventional default selections, used when present in the domain.
const DEFAULT_COUNTRY: &str = "United States";
const DEFAULT_SPORT: &str = "Athletics";
const DEFAULT_GENDER: &str = "Male";

/// One of the four dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Viewership proportions across sports for one country.
    #[default]
    Pie,
    /// Viewership by country for one (sport, gender) pair.
    Bar,
    /// Viewership by (country, gender) for one sport.
    Histogram,
    /// Site visits on a world map for one country.
    Map,
}

impl View {
    /// All views, in sidebar order.
    pub const ALL: [View; 4] = [View::Pie, View::Bar, View::Histogram, View::Map];

    /// Get the next view in the cycle.
    pub fn next(self) -> Self {
        match self {
            View::Pie => View::Bar,
            View::Bar => View::Histogram,
            View::Histogram => View::Map,
            View::Map => View::Pie,
        }
    }

    /// Get the previous view in the cycle.
    pub fn prev(self) -> Self {
        match self {
            View::Pie => View::Map,
            View::Bar => View::Pie,
            View::Histogram => View::Bar,
            View::Map => View::Histogram,
        }
    }

    /// Get the sidebar label.
    pub fn name(self) -> &'static str {
        match self {
            View::Pie => "Pie Chart",
            View::Bar => "Bar Chart",
            View::Histogram => "Histogram",
            View::Map => "Map",
        }
    }
}

/// A dropdown filter: its option domain and current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    /// Control label.
    pub label: &'static str,
    /// Selectable values, derived from the dataset domain.
    pub options: Vec<String>,
    /// Index of the current selection.
    pub selected: usize,
}

impl Dropdown {
    /// Create a dropdown, selecting `default` when it is in the domain and
    /// the first available value otherwise.
    pub fn new(label: &'static str, options: Vec<String>, default: &str) -> Self {
        let selected = options.iter().position(|o| o == default).unwrap_or(0);
        Self {
            label,
            options,
            selected,
        }
    }

    /// The currently selected value, empty when the domain is empty.
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Select the next option, wrapping around.
    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Select the previous option, wrapping around.
    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}

/// The control layout for one view: its dropdowns plus the chart
/// placeholder to be filled by a subsequent render step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLayout {
    /// The view this layout belongs to.
    pub view: View,
    /// Dropdown filters, in display order.
    pub dropdowns: Vec<Dropdown>,
}

impl ControlLayout {
    /// Router: the control layout for the most recently activated view.
    pub fn for_view(view: View, dataset: &Dataset) -> Self {
        let country = || Dropdown::new("Country", dataset.countries().to_vec(), DEFAULT_COUNTRY);
        let sport = || Dropdown::new("Sport", dataset.sports().to_vec(), DEFAULT_SPORT);
        let gender = || {
            let options = dataset.genders().iter().map(|g| g.to_string()).collect();
            Dropdown::new("Gender", options, DEFAULT_GENDER)
        };

        let dropdowns = match view {
            View::Pie => vec![country()],
            View::Bar => vec![sport(), gender()],
            View::Histogram => vec![sport()],
            View::Map => vec![country()],
        };

        Self { view, dropdowns }
    }

    /// Router entry point for initial load, before any navigation: the
    /// pie-chart layout.
    pub fn initial(dataset: &Dataset) -> Self {
        Self::for_view(View::default(), dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Gender, ViewershipRecord};
    use std::path::PathBuf;

    fn record(country: &str, sport: &str, gender: Gender) -> ViewershipRecord {
        ViewershipRecord {
            country: country.to_string(),
            sport: sport.to_string(),
            gender,
            viewership: 1,
            visits: 1,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(
            PathBuf::from("test.csv"),
            vec![
                record("Kenya", "Swimming", Gender::Female),
                record("United States", "Athletics", Gender::Male),
                record("Brazil", "Judo", Gender::Female),
            ],
        )
    }

    #[test]
    fn initial_layout_is_the_pie_view() {
        let layout = ControlLayout::initial(&sample());
        assert_eq!(layout.view, View::Pie);
        assert_eq!(layout.dropdowns.len(), 1);
        assert_eq!(layout.dropdowns[0].label, "Country");
    }

    #[test]
    fn dropdown_options_come_from_the_dataset_domains() {
        let dataset = sample();

        let pie = ControlLayout::for_view(View::Pie, &dataset);
        assert_eq!(pie.dropdowns[0].options, dataset.countries());

        let bar = ControlLayout::for_view(View::Bar, &dataset);
        assert_eq!(bar.dropdowns.len(), 2);
        assert_eq!(bar.dropdowns[0].options, dataset.sports());
        assert_eq!(bar.dropdowns[1].options, ["Female", "Male"]);

        let histogram = ControlLayout::for_view(View::Histogram, &dataset);
        assert_eq!(histogram.dropdowns.len(), 1);
        assert_eq!(histogram.dropdowns[0].label, "Sport");

        let map = ControlLayout::for_view(View::Map, &dataset);
        assert_eq!(map.dropdowns[0].options, dataset.countries());
    }

    #[test]
    fn defaults_are_used_when_present() {
        let layout = ControlLayout::for_view(View::Pie, &sample());
        assert_eq!(layout.dropdowns[0].value(), "United States");

        let bar = ControlLayout::for_view(View::Bar, &sample());
        assert_eq!(bar.dropdowns[0].value(), "Athletics");
        assert_eq!(bar.dropdowns[1].value(), "Male");
    }

    #[test]
    fn defaults_fall_back_to_the_first_value() {
        let dataset = Dataset::new(
            PathBuf::from("test.csv"),
            vec![record("Kenya", "Judo", Gender::Female)],
        );

        let pie = ControlLayout::for_view(View::Pie, &dataset);
        assert_eq!(pie.dropdowns[0].value(), "Kenya");

        let bar = ControlLayout::for_view(View::Bar, &dataset);
        assert_eq!(bar.dropdowns[0].value(), "Judo");
        assert_eq!(bar.dropdowns[1].value(), "Female");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut dropdown = Dropdown::new("Country", vec!["A".into(), "B".into()], "A");
        dropdown.select_next();
        assert_eq!(dropdown.value(), "B");
        dropdown.select_next();
        assert_eq!(dropdown.value(), "A");
        dropdown.select_prev();
        assert_eq!(dropdown.value(), "B");
    }

    #[test]
    fn empty_domain_yields_an_empty_value() {
        let mut dropdown = Dropdown::new("Country", Vec::new(), "United States");
        assert_eq!(dropdown.value(), "");
        dropdown.select_next();
        dropdown.select_prev();
        assert_eq!(dropdown.value(), "");
    }
}
