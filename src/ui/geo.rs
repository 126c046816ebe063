//! Country centroid lookup for the map view.
//!
//! The map canvas places a marker at the selected country's approximate
//! centroid. Countries outside this table still render their visit count in
//! the legend; only the marker is skipped.

/// Approximate (longitude, latitude) centroids, keyed by the country-name
/// spellings used in the dataset.
const CENTROIDS: &[(&str, (f64, f64))] = &[
    ("Argentina", (-64.0, -34.0)),
    ("Australia", (134.0, -25.0)),
    ("Austria", (14.1, 47.6)),
    ("Belgium", (4.6, 50.6)),
    ("Brazil", (-53.0, -10.8)),
    ("Canada", (-98.3, 61.4)),
    ("China", (103.8, 36.6)),
    ("Colombia", (-73.1, 3.9)),
    ("Cuba", (-79.0, 21.5)),
    ("Czech Republic", (15.3, 49.7)),
    ("Denmark", (10.0, 56.0)),
    ("Egypt", (29.9, 26.5)),
    ("Ethiopia", (39.6, 8.6)),
    ("France", (2.5, 46.6)),
    ("Germany", (10.4, 51.1)),
    ("Great Britain", (-2.9, 54.1)),
    ("Greece", (22.9, 39.0)),
    ("Hungary", (19.4, 47.2)),
    ("India", (79.6, 22.9)),
    ("Indonesia", (117.3, -2.2)),
    ("Ireland", (-8.1, 53.2)),
    ("Italy", (12.1, 42.8)),
    ("Jamaica", (-77.3, 18.1)),
    ("Japan", (138.0, 36.5)),
    ("Kenya", (37.8, 0.6)),
    ("Mexico", (-102.5, 23.9)),
    ("Morocco", (-6.3, 31.9)),
    ("Netherlands", (5.3, 52.1)),
    ("New Zealand", (171.5, -41.8)),
    ("Nigeria", (8.1, 9.6)),
    ("Norway", (15.3, 68.8)),
    ("Poland", (19.4, 52.1)),
    ("Portugal", (-8.5, 39.6)),
    ("Russia", (96.7, 61.5)),
    ("South Africa", (25.1, -29.0)),
    ("South Korea", (127.8, 36.4)),
    ("Spain", (-3.6, 40.2)),
    ("Sweden", (16.7, 62.8)),
    ("Switzerland", (8.2, 46.8)),
    ("Turkey", (35.2, 39.1)),
    ("Ukraine", (31.4, 49.0)),
    ("United Kingdom", (-2.9, 54.1)),
    ("United States", (-98.6, 39.8)),
];

/// Look up a country's approximate centroid as (longitude, latitude).
pub(super) fn country_centroid(name: &str) -> Option<(f64, f64)> {
    CENTROIDS
        .iter()
        .find(|(country, _)| *country == name)
        .map(|&(_, coords)| coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries_resolve() {
        let (lon, lat) = country_centroid("United States").unwrap();
        assert!(lon < 0.0 && lat > 0.0);
        assert!(country_centroid("Kenya").is_some());
    }

    #[test]
    fn unknown_countries_are_none() {
        assert!(country_centroid("Atlantis").is_none());
    }

    #[test]
    fn centroids_are_within_map_bounds() {
        for (_, (lon, lat)) in CENTROIDS {
            assert!((-180.0..=180.0).contains(lon));
            assert!((-90.0..=90.0).contains(lat));
        }
    }
}
