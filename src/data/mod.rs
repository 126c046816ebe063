//! Data reading and representation.
//!
//! This module handles reading the viewership CSV and representing it as an
//! immutable in-memory table with pre-derived dropdown domains.

mod dataset;
mod reader;
mod record;

pub use dataset::Dataset;
pub use reader::DataReader;
pub use record::{Gender, ViewershipRecord};
