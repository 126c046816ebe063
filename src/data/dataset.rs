//! The loaded dataset.

use super::{Gender, ViewershipRecord};
use std::path::PathBuf;

/// An immutable viewership table plus its derived column domains.
///
/// The domains back the dropdown options, so they contain exactly the
/// distinct values present in the data, in first-appearance order. Nothing
/// mutates a `Dataset` after construction; it is shared by reference with
/// the view router and chart builders.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path to the source file.
    pub file_path: PathBuf,
    records: Vec<ViewershipRecord>,
    countries: Vec<String>,
    sports: Vec<String>,
    genders: Vec<Gender>,
}

impl Dataset {
    /// Build a dataset from loaded records, deriving the column domains.
    pub fn new(file_path: PathBuf, records: Vec<ViewershipRecord>) -> Self {
        let mut countries: Vec<String> = Vec::new();
        let mut sports: Vec<String> = Vec::new();
        let mut genders: Vec<Gender> = Vec::new();

        for record in &records {
            if !countries.contains(&record.country) {
                countries.push(record.country.clone());
            }
            if !sports.contains(&record.sport) {
                sports.push(record.sport.clone());
            }
            if !genders.contains(&record.gender) {
                genders.push(record.gender);
            }
        }

        Self {
            file_path,
            records,
            countries,
            sports,
            genders,
        }
    }

    /// All rows, in file order.
    pub fn records(&self) -> &[ViewershipRecord] {
        &self.records
    }

    /// Distinct countries, in first-appearance order.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Distinct sports, in first-appearance order.
    pub fn sports(&self) -> &[String] {
        &self.sports
    }

    /// Distinct genders, in first-appearance order.
    pub fn genders(&self) -> &[Gender] {
        &self.genders
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
