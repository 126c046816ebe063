//! End-to-end dashboard flow: fixture CSV -> load -> router -> builders.

use podium::app::App;
use podium::chart::{self, ChartSpec};
use podium::data::DataReader;
use podium::view::{ControlLayout, View};
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = "\
Countries,Sports,Gender,Viewership,Visits
United States,Athletics,Male,120000,4500
United States,Athletics,Female,90000,3800
United States,Swimming,Male,70000,2600
Kenya,Athletics,Male,56000,1200
Kenya,Athletics,Female,41000,900
Brazil,Swimming,Female,64000,2100
Brazil,Judo,Male,30000,800
";

fn load_fixture() -> (NamedTempFile, podium::data::Dataset) {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");
    let dataset = DataReader::read_file(file.path()).expect("load fixture");
    (file, dataset)
}

#[test]
fn initial_load_shows_the_pie_layout_with_country_options() {
    let (_file, dataset) = load_fixture();
    let layout = ControlLayout::initial(&dataset);

    assert_eq!(layout.view, View::Pie);
    assert_eq!(layout.dropdowns.len(), 1);
    assert_eq!(layout.dropdowns[0].options, dataset.countries());
    assert_eq!(layout.dropdowns[0].value(), "United States");
}

#[test]
fn every_country_yields_a_consistent_pie() {
    let (_file, dataset) = load_fixture();

    for country in dataset.countries() {
        let spec = chart::pie_by_sport(&dataset, country);
        let expected: u64 = dataset
            .records()
            .iter()
            .filter(|r| &r.country == country)
            .map(|r| r.viewership)
            .sum();

        assert!(!spec.slices.is_empty(), "no slices for {}", country);
        assert_eq!(spec.total, expected);
        assert_eq!(spec.slices.iter().map(|s| s.value).sum::<u64>(), expected);
    }
}

#[test]
fn every_sport_gender_pair_yields_matching_bars() {
    let (_file, dataset) = load_fixture();

    for sport in dataset.sports() {
        for gender in dataset.genders() {
            let spec = chart::bars_by_country(&dataset, sport, gender.name());
            for bar in &spec.bars {
                let expected: u64 = dataset
                    .records()
                    .iter()
                    .filter(|r| &r.sport == sport && r.gender == *gender && r.country == bar.label)
                    .map(|r| r.viewership)
                    .sum();
                assert_eq!(bar.value, expected, "{} / {} / {}", sport, gender, bar.label);
            }
        }
    }
}

#[test]
fn histogram_covers_every_matching_combination() {
    let (_file, dataset) = load_fixture();

    for sport in dataset.sports() {
        let spec = chart::histogram_by_country_gender(&dataset, sport);
        let expected = dataset
            .records()
            .iter()
            .filter(|r| &r.sport == sport)
            .map(|r| (r.country.as_str(), r.gender))
            .collect::<std::collections::BTreeSet<_>>()
            .len();

        let bars: usize = spec.groups.iter().map(|g| g.bars.len()).sum();
        assert_eq!(bars, expected, "combinations for {}", sport);
    }
}

#[test]
fn map_color_values_equal_country_visit_sums() {
    let (_file, dataset) = load_fixture();

    for country in dataset.countries() {
        let spec = chart::visits_choropleth(&dataset, country);
        let expected: u64 = dataset
            .records()
            .iter()
            .filter(|r| &r.country == country)
            .map(|r| r.visits)
            .sum();

        assert_eq!(spec.regions.len(), 1);
        assert_eq!(spec.regions[0].visits, expected);
        assert_eq!(spec.regions[0].location, *country);
    }
}

#[test]
fn absent_selection_yields_an_empty_chart_from_every_builder() {
    let (_file, dataset) = load_fixture();

    assert!(chart::pie_by_sport(&dataset, "Wakanda").slices.is_empty());
    assert!(chart::bars_by_country(&dataset, "Curling", "Male")
        .bars
        .is_empty());
    assert!(chart::histogram_by_country_gender(&dataset, "Curling")
        .groups
        .is_empty());
    assert!(chart::visits_choropleth(&dataset, "Wakanda")
        .regions
        .is_empty());
}

#[test]
fn app_walks_all_four_views_over_a_real_file() {
    let (_file, dataset) = load_fixture();
    let mut app = App::new(dataset);

    assert!(matches!(app.chart(), ChartSpec::Pie(spec) if !spec.slices.is_empty()));

    app.select_view(View::Bar);
    assert!(matches!(app.chart(), ChartSpec::Bar(spec) if !spec.bars.is_empty()));

    app.select_view(View::Histogram);
    assert!(matches!(app.chart(), ChartSpec::Histogram(spec) if !spec.groups.is_empty()));

    app.select_view(View::Map);
    assert!(matches!(app.chart(), ChartSpec::Map(spec) if !spec.regions.is_empty()));
}
