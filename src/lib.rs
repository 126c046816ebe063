//! Podium - a terminal-based Olympics viewership dashboard.
//!
//! Podium loads a static CSV of Olympics viewership statistics once at
//! startup and presents four chart views - pie, bar, histogram, map -
//! selectable from a sidebar, with dropdown filters driving recomputation
//! of each chart.
//!
//! The crate is split along a strict seam: the [`chart`] builders are pure
//! functions from the immutable [`data::Dataset`] and the current dropdown
//! selections to a declarative chart spec, and the [`ui`] layer is the only
//! place those specs become terminal widgets.
//!
//! # Example
//!
//! ```ignore
//! use podium::chart;
//! use podium::data::DataReader;
//! use std::path::Path;
//!
//! let dataset = DataReader::read_file(Path::new("viewership.csv"))?;
//! let pie = chart::pie_by_sport(&dataset, "United States");
//! println!("{}: {} slices", pie.title, pie.slices.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod ui;
pub mod util;
pub mod view;

pub use error::{PodiumError, Result};
