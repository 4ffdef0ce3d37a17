//! Multiply Widget - how far groups spread when each one reproduces.
//!
//! The widget asks how many groups there will be after ten years if you
//! start with a number of groups that each double every few months. It
//! shows the answer as a sentence and as a year-by-year bar chart.
//!
//! # Features
//!
//! - Exponential growth projection over ten years
//! - Localized result formatting (English, Spanish)
//! - Interactive pickers with a live bar chart
//! - Gruvbox color themes
//! - Plain-text output for scripts
//!
//! # Example
//!
//! ```
//! use multiply_widget::growth::compute;
//! use multiply_widget::i18n::TranslationTable;
//! use multiply_widget::presenter::format;
//!
//! let series = compute(1, 3, 10);
//! let table = TranslationTable::new("en");
//! assert_eq!(format(series.last().unwrap(), &table), "1,099,511.63 million");
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
pub mod config;
pub mod error;
pub mod growth;
pub mod i18n;
pub mod presenter;
pub mod ui;

pub use error::{Result, WidgetError};
