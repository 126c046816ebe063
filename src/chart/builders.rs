//! The four chart builders.
//!
//! Each builder is a pure function of the dataset and the current dropdown
//! selection(s). Group keys are emitted in ascending order so that charts
//! are deterministic across runs.

use super::{
    BarSpec, BarValue, HistogramGroup, HistogramSpec, MapRegion, MapSpec, PieSlice, PieSpec,
};
use crate::data::{Dataset, Gender};
use std::collections::BTreeMap;

/// Viewership proportions across sports for the selected country.
pub fn pie_by_sport(dataset: &Dataset, country: &str) -> PieSpec {
    let mut by_sport: BTreeMap<&str, u64> = BTreeMap::new();
    for record in dataset.records() {
        if record.country == country {
            *by_sport.entry(record.sport.as_str()).or_default() += record.viewership;
        }
    }

    let total: u64 = by_sport.values().sum();
    let slices = by_sport
        .into_iter()
        .map(|(label, value)| PieSlice {
            label: label.to_string(),
            value,
            fraction: if total > 0 {
                value as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect();

    PieSpec {
        title: format!("Distribution of Viewership by Sport in {}", country),
        slices,
        total,
    }
}

/// Viewership summed per country for the selected sport and gender.
pub fn bars_by_country(dataset: &Dataset, sport: &str, gender: &str) -> BarSpec {
    let mut by_country: BTreeMap<&str, u64> = BTreeMap::new();
    if let Some(gender) = Gender::parse(gender) {
        for record in dataset.records() {
            if record.sport == sport && record.gender == gender {
                *by_country.entry(record.country.as_str()).or_default() += record.viewership;
            }
        }
    }

    BarSpec {
        title: format!("Viewership for {} by {}", sport, gender),
        x_label: "Countries".to_string(),
        y_label: "Viewership".to_string(),
        bars: by_country
            .into_iter()
            .map(|(label, value)| BarValue {
                label: label.to_string(),
                value,
            })
            .collect(),
    }
}

/// Viewership summed per (country, gender) for the selected sport.
///
/// Produces one bar per combination with matching rows, grouped by country.
pub fn histogram_by_country_gender(dataset: &Dataset, sport: &str) -> HistogramSpec {
    let mut by_key: BTreeMap<(&str, Gender), u64> = BTreeMap::new();
    for record in dataset.records() {
        if record.sport == sport {
            *by_key
                .entry((record.country.as_str(), record.gender))
                .or_default() += record.viewership;
        }
    }

    let mut groups: Vec<HistogramGroup> = Vec::new();
    for ((country, gender), value) in by_key {
        match groups.last_mut() {
            Some(group) if group.country == country => group.bars.push((gender, value)),
            _ => groups.push(HistogramGroup {
                country: country.to_string(),
                bars: vec![(gender, value)],
            }),
        }
    }

    HistogramSpec {
        title: format!("Total Viewership by Country and Gender for {}", sport),
        groups,
    }
}

/// Site visits for the selected country, color-scaled against the
/// dataset-wide per-country maximum.
pub fn visits_choropleth(dataset: &Dataset, country: &str) -> MapSpec {
    let mut by_country: BTreeMap<&str, u64> = BTreeMap::new();
    for record in dataset.records() {
        *by_country.entry(record.country.as_str()).or_default() += record.visits;
    }

    let max_visits = by_country.values().copied().max().unwrap_or(0);
    let regions = by_country
        .get(country)
        .map(|&visits| MapRegion {
            location: country.to_string(),
            visits,
            intensity: if max_visits > 0 {
                visits as f64 / max_visits as f64
            } else {
                0.0
            },
        })
        .into_iter()
        .collect();

    MapSpec {
        title: format!("Distribution of Site Visits in {}", country),
        regions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ViewershipRecord;
    use std::path::PathBuf;

    fn record(
        country: &str,
        sport: &str,
        gender: Gender,
        viewership: u64,
        visits: u64,
    ) -> ViewershipRecord {
        ViewershipRecord {
            country: country.to_string(),
            sport: sport.to_string(),
            gender,
            viewership,
            visits,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(
            PathBuf::from("test.csv"),
            vec![
                record("United States", "Athletics", Gender::Male, 120, 40),
                record("United States", "Athletics", Gender::Female, 80, 30),
                record("United States", "Swimming", Gender::Male, 60, 20),
                record("Kenya", "Athletics", Gender::Male, 90, 15),
                record("Kenya", "Athletics", Gender::Male, 10, 5),
                record("Brazil", "Swimming", Gender::Female, 70, 25),
            ],
        )
    }

    #[test]
    fn pie_sums_to_country_total() {
        let dataset = sample();
        for country in dataset.countries() {
            let spec = pie_by_sport(&dataset, country);
            let expected: u64 = dataset
                .records()
                .iter()
                .filter(|r| &r.country == country)
                .map(|r| r.viewership)
                .sum();

            assert!(!spec.slices.is_empty());
            assert_eq!(spec.total, expected);
            assert_eq!(spec.slices.iter().map(|s| s.value).sum::<u64>(), expected);

            let fraction_sum: f64 = spec.slices.iter().map(|s| s.fraction).sum();
            assert!((fraction_sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn pie_title_names_the_country() {
        let spec = pie_by_sport(&sample(), "Kenya");
        assert_eq!(spec.title, "Distribution of Viewership by Sport in Kenya");
    }

    #[test]
    fn pie_aggregates_duplicate_sports() {
        let spec = pie_by_sport(&sample(), "Kenya");
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].label, "Athletics");
        assert_eq!(spec.slices[0].value, 100);
    }

    #[test]
    fn bars_equal_per_country_sums() {
        let dataset = sample();
        let spec = bars_by_country(&dataset, "Athletics", "Male");

        assert_eq!(spec.title, "Viewership for Athletics by Male");
        assert_eq!(
            spec.bars,
            vec![
                BarValue {
                    label: "Kenya".to_string(),
                    value: 100,
                },
                BarValue {
                    label: "United States".to_string(),
                    value: 120,
                },
            ]
        );
    }

    #[test]
    fn bars_exclude_other_genders() {
        let spec = bars_by_country(&sample(), "Swimming", "Female");
        assert_eq!(spec.bars.len(), 1);
        assert_eq!(spec.bars[0].label, "Brazil");
        assert_eq!(spec.bars[0].value, 70);
    }

    #[test]
    fn histogram_has_one_bar_per_matching_combination() {
        let dataset = sample();
        let spec = histogram_by_country_gender(&dataset, "Athletics");

        assert_eq!(
            spec.title,
            "Total Viewership by Country and Gender for Athletics"
        );
        assert_eq!(spec.groups.len(), 2);

        let kenya = &spec.groups[0];
        assert_eq!(kenya.country, "Kenya");
        assert_eq!(kenya.bars, vec![(Gender::Male, 100)]);

        let us = &spec.groups[1];
        assert_eq!(us.country, "United States");
        assert_eq!(us.bars, vec![(Gender::Male, 120), (Gender::Female, 80)]);
    }

    #[test]
    fn map_color_value_is_the_country_visit_sum() {
        let dataset = sample();
        for country in dataset.countries() {
            let spec = visits_choropleth(&dataset, country);
            let expected: u64 = dataset
                .records()
                .iter()
                .filter(|r| &r.country == country)
                .map(|r| r.visits)
                .sum();

            assert_eq!(spec.regions.len(), 1);
            assert_eq!(spec.regions[0].visits, expected);
        }
    }

    #[test]
    fn map_intensity_is_normalized_against_the_maximum() {
        let dataset = sample();
        // United States has the largest visit sum (90 of 90).
        let us = visits_choropleth(&dataset, "United States");
        assert!((us.regions[0].intensity - 1.0).abs() < 1e-9);

        let kenya = visits_choropleth(&dataset, "Kenya");
        assert!((kenya.regions[0].intensity - 20.0 / 90.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_domain_selection_yields_empty_specs() {
        let dataset = sample();

        assert!(pie_by_sport(&dataset, "Atlantis").slices.is_empty());
        assert!(bars_by_country(&dataset, "Quidditch", "Male").bars.is_empty());
        assert!(bars_by_country(&dataset, "Athletics", "Other").bars.is_empty());
        assert!(histogram_by_country_gender(&dataset, "Quidditch")
            .groups
            .is_empty());
        assert!(visits_choropleth(&dataset, "Atlantis").regions.is_empty());
    }

    #[test]
    fn empty_selection_string_yields_empty_specs() {
        let dataset = sample();
        assert!(pie_by_sport(&dataset, "").slices.is_empty());
        assert!(bars_by_country(&dataset, "", "").bars.is_empty());
        assert!(histogram_by_country_gender(&dataset, "").groups.is_empty());
        assert!(visits_choropleth(&dataset, "").regions.is_empty());
    }
}
