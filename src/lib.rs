//! Ingestion of tab-separated chart data, and the two demo windows that show
//! it: a box-and-whisker chart and a time-series scatter plot.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
